//! Delimited fix — the `imei&longitude&height&latitude` text trackers post.

use std::str::FromStr;

use crate::error::ValidationError;

/// Separator between fields of the delimited format.
pub const SEPARATOR: char = '&';

/// Minimum number of fields; anything after the fourth is ignored.
pub const MIN_FIELDS: usize = 4;

/// One position fix parsed from the delimited format, before it is stamped
/// and turned into a [`LocationReport`](crate::location::LocationReport).
#[derive(Debug, Clone, PartialEq)]
pub struct Fix {
    pub imei: String,
    pub longitude: f64,
    pub height: f64,
    pub latitude: f64,
}

impl FromStr for Fix {
    type Err = ValidationError;

    /// Parse a delimited string.
    ///
    /// Surrounding whitespace is trimmed from the whole input and from each
    /// field. Longitude, height and latitude must all be finite numbers; no
    /// range check is applied.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let received = raw.trim();
        let fields: Vec<&str> = received.split(SEPARATOR).map(str::trim).collect();

        if fields.len() < MIN_FIELDS {
            return Err(ValidationError::TooFewFields {
                received: received.to_owned(),
                count: fields.len(),
            });
        }

        let imei = fields[0];
        if imei.is_empty() {
            return Err(ValidationError::EmptyImei {
                received: received.to_owned(),
            });
        }

        Ok(Self {
            imei: imei.to_owned(),
            longitude: coordinate("longitude", fields[1], received)?,
            height: coordinate("height", fields[2], received)?,
            latitude: coordinate("latitude", fields[3], received)?,
        })
    }
}

fn coordinate(field: &'static str, value: &str, received: &str) -> Result<f64, ValidationError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ValidationError::InvalidCoordinate {
            field,
            received: received.to_owned(),
        })
}
