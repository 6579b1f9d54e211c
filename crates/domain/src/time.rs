//! Time and timestamp helpers.

use chrono::{DateTime, SecondsFormat, Utc};

/// UTC timestamp attached to every location report.
pub type Timestamp = DateTime<Utc>;

/// Fractional-second digits kept by [`to_sortable`].
pub const STORED_SUBSEC_DIGITS: u16 = 6;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Render a timestamp as fixed-width RFC 3339 (`2024-05-01T10:00:00.000000Z`).
///
/// Every value has the same length, so lexical order on the text equals
/// chronological order.
#[must_use]
pub fn to_sortable(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn should_return_current_utc_time() {
        let before = Utc::now();
        let ts = now();
        let after = Utc::now();
        assert!(ts >= before);
        assert!(ts <= after);
    }

    #[test]
    fn should_render_fixed_width_text() {
        let whole = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let fractional = whole + chrono::Duration::milliseconds(250);
        assert_eq!(to_sortable(whole), "2024-05-01T10:00:00.000000Z");
        assert_eq!(to_sortable(fractional), "2024-05-01T10:00:00.250000Z");
        assert!(to_sortable(whole) < to_sortable(fractional));
    }
}
