//! Query service — read-only accessors over stored location reports.

use geotrack_domain::error::{NotFoundError, TrackerError};
use geotrack_domain::location::LocationReport;
use geotrack_domain::stats::DeviceStats;

use crate::ports::LocationRepository;

/// Number of reports returned by [`QueryService::list_locations`] when the
/// caller gives no limit.
pub const DEFAULT_LIMIT: usize = 100;

/// Application service for location queries.
pub struct QueryService<R> {
    repo: R,
}

impl<R: LocationRepository> QueryService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Newest-first reports, optionally for one device.
    ///
    /// A blank `imei` means no filter. `limit` defaults to [`DEFAULT_LIMIT`];
    /// there is no cursor to page past it.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_locations(
        &self,
        imei: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<LocationReport>, TrackerError> {
        let imei = imei.map(str::trim).filter(|imei| !imei.is_empty());
        self.repo
            .find_recent(imei, limit.unwrap_or(DEFAULT_LIMIT))
            .await
    }

    /// Most recent report for a device. Surrounding whitespace in `imei` is
    /// ignored, as it is on ingestion.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::NotFound`] when the device has no reports,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn latest_location(&self, imei: &str) -> Result<LocationReport, TrackerError> {
        let imei = imei.trim();
        self.repo.find_latest(imei).await?.ok_or_else(|| {
            NotFoundError {
                entity: "location data",
                key: format!("device {imei}"),
            }
            .into()
        })
    }

    /// Count and boundary reports for a device. Unknown devices get zeroed
    /// stats, not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn device_stats(&self, imei: &str) -> Result<DeviceStats, TrackerError> {
        self.repo.stats(imei.trim()).await
    }
}
