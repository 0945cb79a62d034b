//! Error types for the Gerstlix API client.
//!
//! Every failure a client call can produce funnels into [`GerstlixError`].
//! Client-side precondition failures use the [`GerstlixError::Validation`]
//! variant and are returned before any request goes out, so callers can tell
//! bad input apart from a failing service by matching on the variant.

use serde_json::{Value, json};
use thiserror::Error;

/// Errors returned by [`Gerstlix`](crate::Gerstlix) methods.
#[derive(Debug, Error)]
pub enum GerstlixError {
    /// The API answered with a non-success HTTP status.
    #[error("API Error: {status} {status_text}")]
    Api {
        /// Numeric HTTP status code.
        status: u16,
        /// Canonical reason phrase for the status, empty when the code has
        /// none.
        status_text: String,
    },

    /// The request went out but no response ever came back.
    #[error("No response from server")]
    NoResponse,

    /// A client-side check rejected the input before any request was made.
    #[error("{0}")]
    Validation(String),

    /// Any other failure reported by the underlying HTTP client, passed
    /// through unchanged.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl GerstlixError {
    /// Returns `true` when the error comes from client-side validation
    /// rather than from the service or the transport.
    pub fn is_validation(&self) -> bool {
        matches!(self, GerstlixError::Validation(_))
    }

    /// Short class name for the error, usable as a log field.
    pub fn name(&self) -> &'static str {
        match self {
            GerstlixError::Validation(_) => "ValidationError",
            _ => "GerstlixError",
        }
    }

    /// Serializes the error into a plain JSON object with `name` and
    /// `message` fields, ready for structured logging or transport.
    pub fn to_json(&self) -> Value {
        json!({
            "name": self.name(),
            "message": self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_contains_status_and_text() {
        let error = GerstlixError::Api {
            status: 404,
            status_text: "Not Found".to_owned(),
        };

        assert_eq!(error.to_string(), "API Error: 404 Not Found");
    }

    #[test]
    fn test_no_response_message_is_fixed() {
        assert_eq!(
            GerstlixError::NoResponse.to_string(),
            "No response from server"
        );
    }

    #[test]
    fn test_validation_message_is_verbatim() {
        let error = GerstlixError::Validation("Token is required".to_owned());

        assert_eq!(error.to_string(), "Token is required");
        assert!(error.is_validation());
    }

    #[test]
    fn test_only_validation_counts_as_validation() {
        let api = GerstlixError::Api {
            status: 500,
            status_text: "Internal Server Error".to_owned(),
        };

        assert!(!GerstlixError::NoResponse.is_validation());
        assert!(!api.is_validation());
    }

    #[test]
    fn test_name_distinguishes_the_two_levels() {
        let validation = GerstlixError::Validation("bad input".to_owned());
        let api = GerstlixError::Api {
            status: 500,
            status_text: "Internal Server Error".to_owned(),
        };

        assert_eq!(validation.name(), "ValidationError");
        assert_eq!(api.name(), "GerstlixError");
        assert_eq!(GerstlixError::NoResponse.name(), "GerstlixError");
    }

    #[test]
    fn test_to_json_carries_name_and_message() {
        let error = GerstlixError::Validation("Server 99 is not in the approved list".to_owned());

        let json = error.to_json();

        assert_eq!(json["name"], "ValidationError");
        assert_eq!(json["message"], "Server 99 is not in the approved list");
    }
}
