//! In-memory [`LocationRepository`] shared by the service tests.

use std::future::Future;
use std::sync::{Arc, Mutex};

use geotrack_domain::error::TrackerError;
use geotrack_domain::location::LocationReport;
use geotrack_domain::stats::DeviceStats;

use crate::ports::LocationRepository;

#[derive(Clone, Default)]
pub(crate) struct InMemoryLocationRepo {
    rows: Arc<Mutex<Vec<LocationReport>>>,
    fail: bool,
}

impl InMemoryLocationRepo {
    /// A repository whose every call fails like an unreachable database.
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), TrackerError> {
        if self.fail {
            return Err(TrackerError::Storage(Box::new(std::io::Error::other(
                "database is unavailable",
            ))));
        }
        Ok(())
    }

    /// Newest first; later inserts win ties.
    fn sorted(&self, imei: Option<&str>) -> Vec<LocationReport> {
        let rows = self.rows.lock().unwrap();
        let mut matching: Vec<LocationReport> = rows
            .iter()
            .rev()
            .filter(|r| imei.is_none_or(|imei| r.imei == imei))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        matching
    }
}

impl LocationRepository for InMemoryLocationRepo {
    fn record(
        &self,
        report: LocationReport,
    ) -> impl Future<Output = Result<LocationReport, TrackerError>> + Send {
        let result = self.check().map(|()| {
            self.rows.lock().unwrap().push(report.clone());
            report
        });
        async { result }
    }

    fn find_recent(
        &self,
        imei: Option<&str>,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<LocationReport>, TrackerError>> + Send {
        let result = self.check().map(|()| {
            let mut rows = self.sorted(imei);
            rows.truncate(limit);
            rows
        });
        async { result }
    }

    fn find_latest(
        &self,
        imei: &str,
    ) -> impl Future<Output = Result<Option<LocationReport>, TrackerError>> + Send {
        let result = self
            .check()
            .map(|()| self.sorted(Some(imei)).into_iter().next());
        async { result }
    }

    fn stats(&self, imei: &str) -> impl Future<Output = Result<DeviceStats, TrackerError>> + Send {
        let result = self.check().map(|()| {
            let rows = self.sorted(Some(imei));
            DeviceStats::new(
                imei,
                rows.len() as u64,
                rows.first().cloned(),
                rows.last().cloned(),
            )
        });
        async { result }
    }
}
