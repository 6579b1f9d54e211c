//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`TrackerError`] via `From`.

use std::error::Error;

/// Top-level error returned by application services.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// The request carried data that breaks a domain invariant.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A lookup found nothing.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed.
    #[error("storage error: {0}")]
    Storage(Box<dyn Error + Send + Sync>),
}

/// Rejected input. Every variant keeps the offending input so it can be
/// echoed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Body was declared as JSON but could not be parsed.
    #[error("Malformed JSON body")]
    MalformedJson { received: String },

    /// Fewer than four `&`-separated fields.
    #[error("Invalid data format. Expected: IMEI&longitude&height&latitude")]
    TooFewFields { received: String, count: usize },

    /// The IMEI field was blank.
    #[error("Missing IMEI")]
    EmptyImei { received: String },

    /// A coordinate field did not parse as a finite number.
    #[error("Invalid coordinates")]
    InvalidCoordinate {
        field: &'static str,
        received: String,
    },

    /// The `limit` query parameter was not a non-negative integer.
    #[error("Invalid limit")]
    InvalidLimit { received: String },

    /// The query string or a path segment could not be decoded.
    #[error("Invalid request parameters")]
    InvalidParameters { received: String },
}

impl ValidationError {
    /// The raw input that was rejected.
    #[must_use]
    pub fn received(&self) -> &str {
        match self {
            Self::MalformedJson { received }
            | Self::TooFewFields { received, .. }
            | Self::EmptyImei { received }
            | Self::InvalidCoordinate { received, .. }
            | Self::InvalidLimit { received }
            | Self::InvalidParameters { received } => received,
        }
    }
}

/// Nothing stored matches the lookup key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("No {entity} found for {key}")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub key: String,
}
