//! # Error envelopes and the client error type
//!
//! The HBNB API does not agree with itself on how to report a failure. Some
//! endpoints answer `{"message": "..."}`, some nest a second envelope under
//! `message`, some put an `error` key inside an object `message`. The front end
//! has to show exactly one human-readable line regardless.
//!
//! [`ErrorEnvelope::parse`] classifies a JSON body into one of four shapes, in
//! fixed precedence, and [`ErrorEnvelope::display_message`] renders it:
//!
//! | Variant | Matches | Displays |
//! |---------|---------|----------|
//! | [`Nested`](ErrorEnvelope::Nested) | `message.message` is an object with `status == "error"` | its `details`, else its `message` |
//! | [`Plain`](ErrorEnvelope::Plain) | `message` is a string | the string |
//! | [`Object`](ErrorEnvelope::Object) | `message` is any other object or an array | its `message`, else its `error`, else the value as JSON |
//! | [`Unrecognized`](ErrorEnvelope::Unrecognized) | anything else | [`FALLBACK_MESSAGE`] |
//!
//! Empty strings are treated as absent. A `Nested` envelope with neither
//! field displays the fallback.
//!
//! [`ApiError`] is what every [`crate::HbnbClient`] call returns on failure.

use serde_json::{Map, Value};
use thiserror::Error;

/// Shown when an error body carries nothing usable.
pub const FALLBACK_MESSAGE: &str = "An unexpected error occurred";

/// A normalized API error body.
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorEnvelope {
    Nested {
        details: Option<String>,
        message: Option<String>,
    },
    Plain(String),
    Object {
        message: Option<String>,
        error: Option<String>,
        raw: String,
    },
    Unrecognized,
}

impl ErrorEnvelope {
    /// Classify an arbitrary JSON error body.
    pub fn parse(body: &Value) -> Self {
        let Some(outer) = body.get("message") else {
            return Self::Unrecognized;
        };

        match outer {
            Value::Object(fields) => {
                if let Some(inner) = fields.get("message").and_then(Value::as_object) {
                    if inner.get("status").and_then(Value::as_str) == Some("error") {
                        return Self::Nested {
                            details: non_empty(inner, "details"),
                            message: non_empty(inner, "message"),
                        };
                    }
                }
                Self::Object {
                    message: non_empty(fields, "message"),
                    error: non_empty(fields, "error"),
                    raw: outer.to_string(),
                }
            }
            Value::String(text) => Self::Plain(text.clone()),
            Value::Array(_) => Self::Object {
                message: None,
                error: None,
                raw: outer.to_string(),
            },
            _ => Self::Unrecognized,
        }
    }

    /// Classify raw response bytes; anything that is not JSON is unrecognized.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(body) => Self::parse(&body),
            Err(_) => Self::Unrecognized,
        }
    }

    /// The single line to show the user.
    pub fn display_message(&self) -> String {
        match self {
            Self::Nested { details, message } => details
                .as_ref()
                .or(message.as_ref())
                .cloned()
                .unwrap_or_else(|| FALLBACK_MESSAGE.to_string()),
            Self::Plain(text) => text.clone(),
            Self::Object {
                message,
                error,
                raw,
            } => message
                .as_ref()
                .or(error.as_ref())
                .cloned()
                .unwrap_or_else(|| raw.clone()),
            Self::Unrecognized => FALLBACK_MESSAGE.to_string(),
        }
    }
}

fn non_empty(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Client-side validation failures, shown verbatim.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select a valid rating between 1 and 5")]
    Rating,
    #[error("Please enter your review text")]
    EmptyText,
    #[error("Review text must be 1000 characters or less")]
    TextTooLong,
}

/// Errors returned by [`crate::HbnbClient`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Input rejected before any request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A success response was missing data the client needs.
    #[error("{0}")]
    MissingData(String),
}

impl ApiError {
    /// Build from a failed response's status and raw body.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        Self::Api {
            status,
            message: ErrorEnvelope::from_bytes(body).display_message(),
        }
    }

    /// HTTP status, when the API answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401))
    }
}

/// A `Result` type that uses `ApiError` as the error type.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_prefers_details() {
        let body = json!({
            "message": {
                "message": {
                    "status": "error",
                    "details": "Email already registered",
                    "message": "Validation failed"
                }
            }
        });
        let envelope = ErrorEnvelope::parse(&body);
        assert!(matches!(envelope, ErrorEnvelope::Nested { .. }));
        assert_eq!(envelope.display_message(), "Email already registered");
    }

    #[test]
    fn test_nested_falls_back_to_message() {
        let body = json!({
            "message": { "message": { "status": "error", "message": "Validation failed" } }
        });
        assert_eq!(
            ErrorEnvelope::parse(&body).display_message(),
            "Validation failed"
        );

        let empty = json!({
            "message": { "message": { "status": "error", "details": "" } }
        });
        assert_eq!(
            ErrorEnvelope::parse(&empty).display_message(),
            FALLBACK_MESSAGE
        );
    }

    #[test]
    fn test_plain_string() {
        let body = json!({ "message": "Invalid credentials" });
        assert_eq!(
            ErrorEnvelope::parse(&body),
            ErrorEnvelope::Plain("Invalid credentials".to_string())
        );
        assert_eq!(
            ErrorEnvelope::parse(&body).display_message(),
            "Invalid credentials"
        );
    }

    #[test]
    fn test_object_message_then_error_then_json() {
        let with_message = json!({ "message": { "message": "Place not found", "error": "x" } });
        assert_eq!(
            ErrorEnvelope::parse(&with_message).display_message(),
            "Place not found"
        );

        let with_error = json!({ "message": { "error": "Token has expired" } });
        assert_eq!(
            ErrorEnvelope::parse(&with_error).display_message(),
            "Token has expired"
        );

        let bare = json!({ "message": { "rating": ["must be between 1 and 5"] } });
        assert_eq!(
            ErrorEnvelope::parse(&bare).display_message(),
            r#"{"rating":["must be between 1 and 5"]}"#
        );
    }

    #[test]
    fn test_array_message_is_shown_as_json() {
        let body = json!({ "message": ["Email already registered"] });
        let envelope = ErrorEnvelope::parse(&body);
        assert!(matches!(envelope, ErrorEnvelope::Object { .. }));
        assert_eq!(envelope.display_message(), r#"["Email already registered"]"#);
    }

    #[test]
    fn test_nested_without_error_status_is_object() {
        // Inner envelope without the error marker is not a nested error.
        let body = json!({ "message": { "message": { "status": "ok" }, "error": "Denied" } });
        assert_eq!(ErrorEnvelope::parse(&body).display_message(), "Denied");
    }

    #[test]
    fn test_unrecognized() {
        for body in [
            json!({}),
            json!({ "error": "Invalid email or password" }),
            json!({ "message": 42 }),
            json!({ "message": null }),
            json!({ "message": true }),
            json!(["message"]),
        ] {
            assert_eq!(ErrorEnvelope::parse(&body), ErrorEnvelope::Unrecognized);
            assert_eq!(
                ErrorEnvelope::parse(&body).display_message(),
                FALLBACK_MESSAGE
            );
        }
    }

    #[test]
    fn test_from_bytes_non_json() {
        assert_eq!(
            ErrorEnvelope::from_bytes(b"<html>502 Bad Gateway</html>"),
            ErrorEnvelope::Unrecognized
        );
    }

    #[test]
    fn test_api_error_from_response() {
        let err = ApiError::from_response(401, br#"{"message": "Missing Authorization Header"}"#);
        assert_eq!(err.status(), Some(401));
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "Missing Authorization Header");
    }

    #[test]
    fn test_validation_error_display() {
        let err: ApiError = ValidationError::TextTooLong.into();
        assert_eq!(err.to_string(), "Review text must be 1000 characters or less");
        assert_eq!(err.status(), None);
    }
}
