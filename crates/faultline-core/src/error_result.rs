use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

/// Fixed message returned for every internal error
///
/// The underlying fault message is only logged.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal error";

/// Machine-readable error code vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
pub enum ErrorCode {
    /// Malformed caller input
    #[serde(rename = "BAD")]
    #[strum(serialize = "BAD")]
    BadInput,
    /// Business-rule violation reported by the domain
    #[serde(rename = "USER-EX")]
    #[strum(serialize = "USER-EX")]
    UserError,
    /// Anything the server could not classify
    #[serde(rename = "EX")]
    #[strum(serialize = "EX")]
    Internal,
}

/// Error body returned to API clients
///
/// Serialized as `{"code": "...", "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub code: ErrorCode,
    pub message: String,
}

impl ErrorResult {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// The generic body for faults that must not leak details
    pub fn internal() -> Self {
        Self::new(ErrorCode::Internal, INTERNAL_ERROR_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_wire_codes() {
        let body = ErrorResult::new(ErrorCode::UserError, "user error");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "code": "USER-EX", "message": "user error" }));

        let json = serde_json::to_value(ErrorResult::internal()).unwrap();
        assert_eq!(json, serde_json::json!({ "code": "EX", "message": "internal error" }));
    }

    #[test]
    fn code_display_matches_wire_form() {
        assert_eq!(ErrorCode::BadInput.to_string(), "BAD");
        assert_eq!(ErrorCode::UserError.as_ref(), "USER-EX");
        assert_eq!(ErrorCode::Internal.as_ref(), "EX");
    }

    #[test]
    fn deserializes_client_view() {
        let body: ErrorResult = serde_json::from_str(r#"{"code":"BAD","message":"bad id"}"#).unwrap();
        assert_eq!(body, ErrorResult::new(ErrorCode::BadInput, "bad id"));
    }
}
