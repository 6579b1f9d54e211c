//! Request payload decoding.
//!
//! Trackers post the delimited format either as raw text (any content type)
//! or wrapped in JSON. [`Payload`] is the tagged result of sniffing the
//! content type; [`Payload::into_delimited`] flattens both shapes to the text
//! that [`Fix`](crate::fix::Fix) parses.

use serde_json::Value;

use crate::error::ValidationError;

const JSON_MEDIA_TYPE: &str = "application/json";

/// Field of a JSON body that holds the delimited string.
pub const DATA_FIELD: &str = "data";

/// A request body, classified by its declared content type.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Raw(String),
}

impl Payload {
    /// Classify a request body.
    ///
    /// A content type containing `application/json` selects JSON decoding;
    /// anything else, including a missing header, keeps the body as text.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedJson`] when the body is declared as
    /// JSON but does not parse.
    pub fn decode(content_type: Option<&str>, body: &[u8]) -> Result<Self, ValidationError> {
        let is_json = content_type
            .is_some_and(|ct| ct.to_ascii_lowercase().contains(JSON_MEDIA_TYPE));

        if is_json {
            serde_json::from_slice(body)
                .map(Self::Json)
                .map_err(|_| ValidationError::MalformedJson {
                    received: String::from_utf8_lossy(body).trim().to_owned(),
                })
        } else {
            Ok(Self::Raw(String::from_utf8_lossy(body).into_owned()))
        }
    }

    /// Extract the delimited string.
    ///
    /// For JSON, a non-null `data` field wins; otherwise the whole value is
    /// used. JSON strings yield their content, other values their JSON text.
    #[must_use]
    pub fn into_delimited(self) -> String {
        match self {
            Self::Raw(text) => text,
            Self::Json(value) => {
                let selected = match value {
                    Value::Object(mut map) => match map.remove(DATA_FIELD) {
                        Some(data) if !data.is_null() => data,
                        removed => {
                            if let Some(data) = removed {
                                map.insert(DATA_FIELD.to_owned(), data);
                            }
                            Value::Object(map)
                        }
                    },
                    other => other,
                };
                match selected {
                    Value::String(text) => text,
                    other => other.to_string(),
                }
            }
        }
    }
}
