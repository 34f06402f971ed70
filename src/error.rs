//! API Errors
//!
//! The two failure classes the UI distinguishes: the call did not get through
//! (bridge/network/status/decode), or the backend answered with a failure.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unknown operation `{0}`")]
    UnknownOperation(String),

    #[error("bridge call `{operation}` failed: {message}")]
    Bridge {
        operation: &'static str,
        message: String,
    },

    #[error("API Error: {status} ({operation})")]
    Status { operation: String, status: u16 },

    #[error("network error: {0}")]
    Network(#[from] gloo_net::Error),

    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    /// Failure reported by the backend itself rather than the transport
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Rejected(_))
    }
}

/// Turn a `{"success": false, "error": ...}` reply into an error.
///
/// Any other value (including non-objects and `null`) is accepted.
pub fn check_status(value: &Value) -> Result<(), ApiError> {
    match value.get("success").and_then(Value::as_bool) {
        Some(false) => {
            let message = value
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("Unknown error");
            Err(ApiError::Rejected(message.to_string()))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_check_status() {
        assert!(check_status(&json!({ "success": true })).is_ok());
        assert!(check_status(&json!(null)).is_ok());
        assert!(check_status(&json!(true)).is_ok());

        let err = check_status(&json!({ "success": false, "error": "Cache directory not found" })).unwrap_err();
        assert!(err.is_rejection());
        assert_eq!(err.to_string(), "Cache directory not found");

        let err = check_status(&json!({ "success": false })).unwrap_err();
        assert_eq!(err.to_string(), "Unknown error");
    }

    #[test]
    fn test_status_message() {
        let err = ApiError::Status { operation: "get_stats".to_string(), status: 500 };
        assert_eq!(err.to_string(), "API Error: 500 (get_stats)");
        assert!(!err.is_rejection());
    }
}
