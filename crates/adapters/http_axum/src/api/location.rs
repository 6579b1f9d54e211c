//! Ingestion endpoint for tracker devices.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Response};

use geotrack_app::ports::LocationRepository;
use geotrack_domain::location::LocationReport;

use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the ingestion endpoint.
pub enum CreateResponse {
    Ok(Json<Envelope<LocationReport>>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/tracker/location`
///
/// The body is taken as raw bytes whatever its content type; decoding is
/// left to the ingestion service.
pub async fn create<R>(
    State(state): State<AppState<R>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<CreateResponse, ApiError>
where
    R: LocationRepository + Send + Sync + 'static,
{
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());

    let report = state
        .ingest_service
        .ingest(content_type, &body)
        .await
        .map_err(|err| ApiError::from(err).on_failure("Error processing location data"))?;

    Ok(CreateResponse::Ok(Json(Envelope::with_message(
        "Location data received successfully",
        report,
    ))))
}
