//! Normalized outcome of one HTTP call.
//!
//! Every request made by the dashboard ends in a [`RequestResult`]: either a
//! parsed JSON payload or a human-readable error. On the wire (and for
//! anything that wants to hand the result to page scripts) it keeps the
//! familiar `{ "success": true, "data": ... }` /
//! `{ "success": false, "error": "...", "status": 404 }` object shape.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "WireResult", try_from = "WireResult")]
pub enum RequestResult {
    Success {
        data: Value,
    },
    Failure {
        error: String,
        status: Option<u16>,
    },
}

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("{message}")]
    Failed {
        message: String,
        status: Option<u16>,
    },
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl RequestResult {
    pub fn success(data: Value) -> Self {
        Self::Success { data }
    }

    pub fn failure(error: impl Into<String>, status: Option<u16>) -> Self {
        Self::Failure {
            error: error.into(),
            status,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn data(&self) -> Option<&Value> {
        match self {
            Self::Success { data } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error, .. } => Some(error),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { status, .. } => *status,
        }
    }

    pub fn into_result(self) -> Result<Value, RequestError> {
        match self {
            Self::Success { data } => Ok(data),
            Self::Failure { error, status } => Err(RequestError::Failed {
                message: error,
                status,
            }),
        }
    }

    /// Decode the payload of a successful result into a typed response body.
    pub fn parse<T: DeserializeOwned>(self) -> Result<T, RequestError> {
        let data = self.into_result()?;
        Ok(serde_json::from_value(data)?)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct WireResult {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
}

impl From<RequestResult> for WireResult {
    fn from(result: RequestResult) -> Self {
        match result {
            RequestResult::Success { data } => WireResult {
                success: true,
                data: Some(data),
                error: None,
                status: None,
            },
            RequestResult::Failure { error, status } => WireResult {
                success: false,
                data: None,
                error: Some(error),
                status,
            },
        }
    }
}

impl TryFrom<WireResult> for RequestResult {
    type Error = String;

    fn try_from(wire: WireResult) -> Result<Self, Self::Error> {
        match (wire.success, wire.data, wire.error) {
            (true, Some(data), None) => Ok(RequestResult::Success { data }),
            (false, None, Some(error)) => Ok(RequestResult::Failure {
                error,
                status: wire.status,
            }),
            (true, _, _) => Err("successful result must carry data and no error".to_string()),
            (false, _, _) => Err("failed result must carry an error and no data".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Health {
        status: String,
    }

    #[test]
    fn test_success_wire_shape() {
        let result = RequestResult::success(json!({"status": "healthy"}));
        let wire = serde_json::to_value(&result).unwrap();
        assert_eq!(wire, json!({"success": true, "data": {"status": "healthy"}}));
    }

    #[test]
    fn test_failure_wire_shape_omits_missing_status() {
        let result = RequestResult::failure("boom", None);
        let wire = serde_json::to_value(&result).unwrap();
        assert_eq!(wire, json!({"success": false, "error": "boom"}));

        let result = RequestResult::failure("missing", Some(404));
        let wire = serde_json::to_value(&result).unwrap();
        assert_eq!(wire, json!({"success": false, "error": "missing", "status": 404}));
    }

    #[test]
    fn test_mixed_shape_rejected() {
        let parsed: Result<RequestResult, _> =
            serde_json::from_value(json!({"success": true, "data": 1, "error": "x"}));
        assert!(parsed.is_err());

        let parsed: Result<RequestResult, _> = serde_json::from_value(json!({"success": false}));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_accessors() {
        let ok = RequestResult::success(json!([1, 2]));
        assert!(ok.is_success());
        assert_eq!(ok.data(), Some(&json!([1, 2])));
        assert_eq!(ok.error(), None);

        let failed = RequestResult::failure("nope", Some(500));
        assert!(!failed.is_success());
        assert_eq!(failed.data(), None);
        assert_eq!(failed.error(), Some("nope"));
        assert_eq!(failed.status(), Some(500));
    }

    #[test]
    fn test_parse_typed_body() {
        let result = RequestResult::success(json!({"status": "healthy", "extra": true}));
        let health: Health = result.parse().unwrap();
        assert_eq!(health.status, "healthy");
    }

    #[test]
    fn test_parse_failure_keeps_message() {
        let result = RequestResult::failure("GitHub token inválido", Some(401));
        match result.parse::<Health>() {
            Err(RequestError::Failed { message, status }) => {
                assert_eq!(message, "GitHub token inválido");
                assert_eq!(status, Some(401));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_parse_wrong_shape_is_decode_error() {
        let result = RequestResult::success(json!({"error": "Invalid JSON response"}));
        assert!(matches!(result.parse::<Health>(), Err(RequestError::Decode(_))));
    }
}
