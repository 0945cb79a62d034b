//! Response envelope for Gerstlix API endpoints.
//!
//! Every endpoint answers with the same outer JSON shape: a `success` flag
//! and an endpoint-specific `data` payload. The client deserializes the
//! envelope and hands it back untouched.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

/// Envelope wrapping every Gerstlix API response.
///
/// The API reports call outcomes in-band: transport problems surface as
/// [`GerstlixError`](crate::GerstlixError), while `success` is whatever the
/// API itself said about the call. The client never interprets the flag, so
/// callers receive the envelope verbatim and decide what a `success: false`
/// answer means for them.
///
/// The payload defaults to [`serde_json::Value`] because the response schema
/// differs per endpoint and is not pinned by this crate.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ApiResponse<T = Value> {
    /// Whether the API reports the call as successful.
    pub success: bool,
    /// Endpoint-specific payload.
    pub data: T,
}

impl<T: fmt::Debug> fmt::Display for ApiResponse<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "success={}, data={:?}", self.success, self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_envelope() {
        let json = r#"{"success": true, "data": {"id": 1, "name": "Phoenix"}}"#;

        let response: ApiResponse = serde_json::from_str(json).unwrap();

        assert!(response.success);
        assert_eq!(response.data, json!({"id": 1, "name": "Phoenix"}));
    }

    #[test]
    fn test_deserialize_failed_envelope() {
        let json = r#"{"success": false, "data": null}"#;

        let response: ApiResponse = serde_json::from_str(json).unwrap();

        assert!(!response.success);
        assert_eq!(response.data, Value::Null);
    }

    #[test]
    fn test_display() {
        let response = ApiResponse {
            success: true,
            data: json!([1, 2]),
        };

        let display = format!("{}", response);
        assert!(display.contains("success=true"));
        assert!(display.contains("data="));
    }
}
