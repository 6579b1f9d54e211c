//! Location history listing.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::Uri;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use geotrack_app::ports::LocationRepository;
use geotrack_domain::error::{TrackerError, ValidationError};
use geotrack_domain::location::LocationReport;

use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for the list endpoint.
#[derive(Deserialize)]
pub struct ListQuery {
    /// Restrict to one device. Blank means all devices.
    pub imei: Option<String>,
    /// Maximum number of reports. Defaults to 100.
    pub limit: Option<String>,
}

impl ListQuery {
    fn limit(&self) -> Result<Option<usize>, ApiError> {
        match self.limit.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse().map(Some).map_err(|_| {
                ApiError::from(TrackerError::from(ValidationError::InvalidLimit {
                    received: raw.to_owned(),
                }))
            }),
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Envelope<Vec<LocationReport>>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/tracker/locations?imei=&limit=`
///
/// A query string that does not deserialize (a repeated key, say) is
/// answered with the JSON error envelope echoing the raw query.
pub async fn list<R>(
    State(state): State<AppState<R>>,
    uri: Uri,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<ListResponse, ApiError>
where
    R: LocationRepository + Send + Sync + 'static,
{
    let Query(params) = query.map_err(|rejection| {
        tracing::debug!(%rejection, "rejected query string");
        ApiError::invalid_parameters(uri.query().unwrap_or_default())
    })?;
    let limit = params.limit()?;
    let reports = state
        .query_service
        .list_locations(params.imei.as_deref(), limit)
        .await
        .map_err(|err| ApiError::from(err).on_failure("Error fetching locations"))?;

    Ok(ListResponse::Ok(Json(Envelope::list(reports))))
}
