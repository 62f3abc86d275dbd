//! The uniform result of a gateway call.

use crate::error::Result;
use crate::http::RawResponse;
use serde_json::Value;

/// The result of a gateway call.
///
/// Transport faults never escape the client as errors; they surface here as
/// the [`Response::Error`] variant, which is the only failure signal for an
/// in-flight call.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// The gateway answered. Carries the HTTP status and the response body
    /// parsed as JSON, unmodified and unvalidated.
    Success { status: u16, body: Value },
    /// The call failed before a gateway answer could be decoded.
    Error { message: String },
}

impl Response {
    /// Decode a transport-level response.
    ///
    /// An empty body (204s, some error pages) decodes as JSON null; a
    /// non-UTF-8 or non-JSON body is a fault for the caller's funnel.
    pub(crate) fn from_raw(raw: RawResponse) -> Result<Self> {
        let status = raw.status_code as u16;
        let text = String::from_utf8(raw.body)?;
        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)?
        };
        Ok(Response::Success { status, body })
    }

    /// True for the [`Response::Success`] variant, regardless of HTTP status.
    pub fn is_success(&self) -> bool {
        matches!(self, Response::Success { .. })
    }

    /// HTTP status of a successful call.
    pub fn status(&self) -> Option<u16> {
        match self {
            Response::Success { status, .. } => Some(*status),
            Response::Error { .. } => None,
        }
    }

    /// Parsed body of a successful call.
    pub fn body(&self) -> Option<&Value> {
        match self {
            Response::Success { body, .. } => Some(body),
            Response::Error { .. } => None,
        }
    }

    /// Fault description of a failed call.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Response::Success { .. } => None,
            Response::Error { message } => Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(status_code: u32, body: &str) -> RawResponse {
        RawResponse {
            status_code,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_from_raw_parses_json_body() {
        let response = Response::from_raw(raw(200, r#"{"transaction":{"uid":"x"}}"#)).unwrap();
        assert_eq!(response.status(), Some(200));
        assert_eq!(response.body(), Some(&json!({"transaction": {"uid": "x"}})));
    }

    #[test]
    fn test_from_raw_keeps_remote_status_unmodified() {
        let response = Response::from_raw(raw(422, r#"{"errors":{"amount":["is missing"]}}"#)).unwrap();
        assert!(response.is_success());
        assert_eq!(response.status(), Some(422));
    }

    #[test]
    fn test_from_raw_empty_body_is_null() {
        let response = Response::from_raw(raw(204, "")).unwrap();
        assert_eq!(response.body(), Some(&Value::Null));
    }

    #[test]
    fn test_from_raw_rejects_invalid_json() {
        assert!(Response::from_raw(raw(200, "<html>bad gateway</html>")).is_err());
    }

    #[test]
    fn test_error_variant_accessors() {
        let response = Response::Error {
            message: "connection refused".to_string(),
        };
        assert!(!response.is_success());
        assert_eq!(response.status(), None);
        assert_eq!(response.body(), None);
        assert_eq!(response.error_message(), Some("connection refused"));
    }
}
