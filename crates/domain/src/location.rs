//! Location report — one validated position fix of a tracker.

use chrono::SubsecRound;
use serde::{Deserialize, Serialize};

use crate::fix::Fix;
use crate::id::LocationId;
use crate::time::{STORED_SUBSEC_DIGITS, Timestamp};

/// A stored observation of a device position.
///
/// Reports are append-only: once built they are never updated or deleted.
/// The only way to build one is from a parsed [`Fix`], which already holds a
/// non-blank IMEI and finite coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationReport {
    pub id: LocationId,
    pub imei: String,
    pub longitude: f64,
    pub height: f64,
    pub latitude: f64,
    pub timestamp: Timestamp,
}

impl LocationReport {
    /// Stamp a parsed [`Fix`] with the time it was received and a fresh id.
    ///
    /// The timestamp is truncated to the precision the store keeps, so the
    /// report handed back after ingestion matches every later read.
    #[must_use]
    pub fn from_fix(fix: Fix, timestamp: Timestamp) -> Self {
        Self {
            id: LocationId::new(),
            imei: fix.imei,
            longitude: fix.longitude,
            height: fix.height,
            latitude: fix.latitude,
            timestamp: timestamp.trunc_subsecs(STORED_SUBSEC_DIGITS),
        }
    }
}
