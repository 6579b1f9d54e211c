//! Storage port — append-only persistence for location reports.

use std::future::Future;

use geotrack_domain::error::TrackerError;
use geotrack_domain::location::LocationReport;
use geotrack_domain::stats::DeviceStats;

/// Repository for persisting and querying [`LocationReport`]s.
///
/// Reports are only ever appended; there is no update or delete.
pub trait LocationRepository {
    /// Append a report.
    fn record(
        &self,
        report: LocationReport,
    ) -> impl Future<Output = Result<LocationReport, TrackerError>> + Send;

    /// Newest-first reports, optionally restricted to one IMEI, at most `limit`.
    ///
    /// Reports sharing a timestamp are returned most recently inserted first.
    fn find_recent(
        &self,
        imei: Option<&str>,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<LocationReport>, TrackerError>> + Send;

    /// The report with the greatest timestamp for `imei`.
    fn find_latest(
        &self,
        imei: &str,
    ) -> impl Future<Output = Result<Option<LocationReport>, TrackerError>> + Send;

    /// Count plus newest and oldest report for `imei`.
    ///
    /// Implementations should read all three from one consistent snapshot.
    fn stats(&self, imei: &str) -> impl Future<Output = Result<DeviceStats, TrackerError>> + Send;
}
