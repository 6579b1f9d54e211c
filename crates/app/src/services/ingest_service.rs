//! Ingest service — turns a posted body into a stored location report.

use geotrack_domain::error::TrackerError;
use geotrack_domain::fix::Fix;
use geotrack_domain::location::LocationReport;
use geotrack_domain::payload::Payload;
use geotrack_domain::time::now;

use crate::ports::LocationRepository;

/// Application service for the ingestion path.
pub struct IngestService<R> {
    repo: R,
}

impl<R: LocationRepository> IngestService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Decode, parse, validate and store one report.
    ///
    /// The report is stamped with the server time at which parsing finished.
    /// Nothing is stored when validation fails, and store failures are not
    /// retried.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Validation`] for a malformed body, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, body), fields(body_len = body.len()))]
    pub async fn ingest(
        &self,
        content_type: Option<&str>,
        body: &[u8],
    ) -> Result<LocationReport, TrackerError> {
        let payload = Payload::decode(content_type, body)?;
        let raw = payload.into_delimited();
        tracing::debug!(raw = %raw.trim(), "received location payload");

        let fix = raw.parse::<Fix>().inspect_err(|err| {
            tracing::warn!(%err, received = err.received(), "rejected location payload");
        })?;
        let report = LocationReport::from_fix(fix, now());

        let stored = self.repo.record(report).await?;
        tracing::info!(
            id = %stored.id,
            imei = %stored.imei,
            longitude = stored.longitude,
            latitude = stored.latitude,
            height = stored.height,
            "location stored"
        );
        Ok(stored)
    }
}
