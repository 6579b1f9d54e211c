//! Per-device aggregate over stored location reports.

use serde::{Deserialize, Serialize};

use crate::location::LocationReport;
use crate::time::Timestamp;

/// Summary of everything stored for one IMEI.
///
/// An unknown device yields zero reports and `None` everywhere else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceStats {
    pub imei: String,
    pub total_locations: u64,
    pub latest_location: Option<LocationReport>,
    pub oldest_location: Option<LocationReport>,
    pub first_record_time: Option<Timestamp>,
    pub last_record_time: Option<Timestamp>,
}

impl DeviceStats {
    /// Assemble stats from the count and the two boundary reports.
    #[must_use]
    pub fn new(
        imei: impl Into<String>,
        total_locations: u64,
        latest_location: Option<LocationReport>,
        oldest_location: Option<LocationReport>,
    ) -> Self {
        Self {
            imei: imei.into(),
            total_locations,
            first_record_time: oldest_location.as_ref().map(|r| r.timestamp),
            last_record_time: latest_location.as_ref().map(|r| r.timestamp),
            latest_location,
            oldest_location,
        }
    }

    /// Stats for a device with no stored reports.
    #[must_use]
    pub fn empty(imei: impl Into<String>) -> Self {
        Self::new(imei, 0, None, None)
    }
}
