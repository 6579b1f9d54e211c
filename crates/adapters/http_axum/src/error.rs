//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use geotrack_domain::error::{TrackerError, ValidationError};

use crate::envelope::ErrorEnvelope;

const DEFAULT_FAILURE_MESSAGE: &str = "Internal server error";

/// Maps [`TrackerError`] to an HTTP response with appropriate status code.
///
/// Storage failures keep their underlying message in the `error` field.
pub struct ApiError {
    inner: TrackerError,
    failure_message: &'static str,
}

impl ApiError {
    /// 400 for a query string or path that axum could not extract.
    #[must_use]
    pub fn invalid_parameters(received: impl Into<String>) -> Self {
        Self::from(TrackerError::from(ValidationError::InvalidParameters {
            received: received.into(),
        }))
    }

    /// Replace the `message` shown when the request fails unexpectedly (500).
    #[must_use]
    pub fn on_failure(mut self, message: &'static str) -> Self {
        self.failure_message = message;
        self
    }
}

impl From<TrackerError> for ApiError {
    fn from(inner: TrackerError) -> Self {
        Self {
            inner,
            failure_message: DEFAULT_FAILURE_MESSAGE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.inner {
            TrackerError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                ErrorEnvelope::new(err.to_string()).received(err.received()),
            ),
            TrackerError::NotFound(err) => {
                (StatusCode::NOT_FOUND, ErrorEnvelope::new(err.to_string()))
            }
            TrackerError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorEnvelope::new(self.failure_message).error(self.inner.to_string()),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
