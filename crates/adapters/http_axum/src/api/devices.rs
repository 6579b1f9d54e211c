//! Per-device lookups keyed by IMEI.

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::Uri;
use axum::response::{IntoResponse, Response};

use geotrack_app::ports::LocationRepository;
use geotrack_domain::location::LocationReport;
use geotrack_domain::stats::DeviceStats;

use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the latest-location endpoint.
pub enum LatestResponse {
    Ok(Json<Envelope<LocationReport>>),
}

impl IntoResponse for LatestResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the stats endpoint.
pub enum StatsResponse {
    Ok(Json<Envelope<DeviceStats>>),
}

impl IntoResponse for StatsResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Unwrap the `{imei}` segment, answering undecodable segments (invalid
/// UTF-8 once percent-decoded) with the JSON error envelope.
fn device_imei(uri: &Uri, imei: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    imei.map(|Path(imei)| imei).map_err(|rejection| {
        tracing::debug!(%rejection, "rejected path");
        ApiError::invalid_parameters(uri.path())
    })
}

/// `GET /api/tracker/latest/{imei}`
pub async fn latest<R>(
    State(state): State<AppState<R>>,
    uri: Uri,
    imei: Result<Path<String>, PathRejection>,
) -> Result<LatestResponse, ApiError>
where
    R: LocationRepository + Send + Sync + 'static,
{
    let imei = device_imei(&uri, imei)?;
    let report = state
        .query_service
        .latest_location(&imei)
        .await
        .map_err(|err| ApiError::from(err).on_failure("Error fetching latest location"))?;

    Ok(LatestResponse::Ok(Json(Envelope::data(report))))
}

/// `GET /api/tracker/stats/{imei}`
pub async fn stats<R>(
    State(state): State<AppState<R>>,
    uri: Uri,
    imei: Result<Path<String>, PathRejection>,
) -> Result<StatsResponse, ApiError>
where
    R: LocationRepository + Send + Sync + 'static,
{
    let imei = device_imei(&uri, imei)?;
    let stats = state
        .query_service
        .device_stats(&imei)
        .await
        .map_err(|err| ApiError::from(err).on_failure("Error fetching device stats"))?;

    Ok(StatsResponse::Ok(Json(Envelope::data(stats))))
}
