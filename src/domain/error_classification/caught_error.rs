use derive_more::From;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Value Object - тело ответа сервера с ошибкой
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, deserialize_with = "string_or_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self { message: Some(message.into()) }
    }

    /// Server-authored message, empty strings count as absent.
    pub fn non_empty_message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }
}

/// Non-string `message` fields are dropped instead of failing the whole body.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// HTTP response attached to a transport error
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: Option<u16>,
    pub body: Option<ErrorBody>,
}

impl ErrorResponse {
    pub fn new(status: u16) -> Self {
        Self { status: Some(status), body: None }
    }

    pub fn with_body(status: u16, body: ErrorBody) -> Self {
        Self { status: Some(status), body: Some(body) }
    }

    pub fn server_message(&self) -> Option<&str> {
        self.body.as_ref().and_then(ErrorBody::non_empty_message)
    }
}

/// Failure of a network request.
///
/// `response == None` means the request never produced a reply
/// (DNS failure, refused connection, timeout, CORS rejection).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportError {
    pub response: Option<ErrorResponse>,
}

impl TransportError {
    pub fn without_response() -> Self {
        Self { response: None }
    }

    pub fn with_response(response: ErrorResponse) -> Self {
        Self { response: Some(response) }
    }

    pub fn status(&self) -> Option<u16> {
        self.response.as_ref().and_then(|r| r.status)
    }
}

/// Error value carrying a human-readable message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericError {
    pub message: String,
}

impl GenericError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Any failure value caught at a call site.
///
/// Only boundary adapters decide which variant a raw value belongs to;
/// a plain object that merely has a `response` field stays `Unknown`.
#[derive(Debug, Clone, PartialEq, From, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "camelCase")]
pub enum CaughtError {
    Transport(TransportError),
    Generic(GenericError),
    Unknown(Value),
}

impl CaughtError {
    pub fn network() -> Self {
        CaughtError::Transport(TransportError::without_response())
    }

    pub fn http(status: u16) -> Self {
        CaughtError::Transport(TransportError::with_response(ErrorResponse::new(status)))
    }

    pub fn http_with_message(status: u16, message: impl Into<String>) -> Self {
        CaughtError::Transport(TransportError::with_response(ErrorResponse::with_body(
            status,
            ErrorBody::with_message(message),
        )))
    }

    pub fn generic(message: impl Into<String>) -> Self {
        CaughtError::Generic(GenericError::new(message))
    }

    pub fn unknown() -> Self {
        CaughtError::Unknown(Value::Null)
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, CaughtError::Transport(_))
    }

    /// Status code of the attached response, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            CaughtError::Transport(transport) => transport.status(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn body_ignores_non_string_message() {
        let body: ErrorBody = serde_json::from_value(json!({ "message": 42 })).unwrap();
        assert_eq!(body.message, None);

        let body: ErrorBody = serde_json::from_value(json!({ "error": "x" })).unwrap();
        assert_eq!(body.message, None);
    }

    #[test]
    fn empty_message_is_absent() {
        let response = ErrorResponse::with_body(400, ErrorBody::with_message(""));
        assert_eq!(response.server_message(), None);
    }

    #[test]
    fn plain_object_with_response_field_stays_unknown() {
        let error = CaughtError::from(json!({ "response": { "status": 500 } }));
        assert!(!error.is_transport());
        assert_eq!(error.status(), None);
    }
}
