use super::caught_error::{CaughtError, TransportError};
use super::category::ErrorCategory;
use super::lookup::MessageLookup;
use super::status_table::{GENERIC_MESSAGE_KEY, NETWORK_MESSAGE_KEY, StatusCodeTable};

/// Domain Service - классификация ошибок для уведомлений
///
/// Both operations are total: every input ends in a value, nothing panics.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorClassifier {
    table: StatusCodeTable,
}

impl ErrorClassifier {
    pub fn new() -> Self {
        Self { table: StatusCodeTable }
    }

    /// Message suitable for a notification body.
    ///
    /// Server-authored messages win over status mapping; generic errors
    /// are shown as-is; anything unrecognized gets `errors.generic`.
    pub fn extract_message<L>(&self, error: &CaughtError, lookup: &L) -> String
    where
        L: MessageLookup + ?Sized,
    {
        match error {
            CaughtError::Transport(transport) => self.transport_message(transport, lookup),
            CaughtError::Generic(generic) if !generic.message.is_empty() => generic.message.clone(),
            _ => lookup.lookup(GENERIC_MESSAGE_KEY),
        }
    }

    fn transport_message<L>(&self, transport: &TransportError, lookup: &L) -> String
    where
        L: MessageLookup + ?Sized,
    {
        let Some(response) = &transport.response else {
            return lookup.lookup(NETWORK_MESSAGE_KEY);
        };

        if let Some(message) = response.server_message() {
            return message.to_string();
        }

        match response.status.and_then(|status| self.table.message_key(status)) {
            Some(key) => lookup.lookup(key),
            None => lookup.lookup(GENERIC_MESSAGE_KEY),
        }
    }

    /// Title category of the failure.
    ///
    /// Range based, unlike the exact table used for messages: 505 is a
    /// `ServerError` here while its message is `errors.generic`.
    pub fn classify_title(&self, error: &CaughtError) -> ErrorCategory {
        let CaughtError::Transport(transport) = error else {
            return ErrorCategory::UnknownError;
        };

        let Some(response) = &transport.response else {
            return ErrorCategory::NetworkError;
        };

        match response.status {
            Some(400..=499) => ErrorCategory::ClientError,
            Some(status) if status >= 500 => ErrorCategory::ServerError,
            _ => ErrorCategory::UnknownError,
        }
    }
}

/// Shorthand for [`ErrorClassifier::extract_message`]
pub fn extract_message<L>(error: &CaughtError, lookup: &L) -> String
where
    L: MessageLookup + ?Sized,
{
    ErrorClassifier::new().extract_message(error, lookup)
}

/// Shorthand for [`ErrorClassifier::classify_title`]
pub fn classify_title(error: &CaughtError) -> ErrorCategory {
    ErrorClassifier::new().classify_title(error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error_classification::caught_error::{ErrorBody, ErrorResponse};
    use crate::domain::error_classification::lookup::KeyEcho;
    use serde_json::json;

    #[test]
    fn server_message_beats_status_mapping() {
        let error = CaughtError::http_with_message(404, "Visit not found");
        assert_eq!(extract_message(&error, &KeyEcho), "Visit not found");
    }

    #[test]
    fn response_without_status_uses_generic_message() {
        let error = CaughtError::Transport(TransportError::with_response(ErrorResponse {
            status: None,
            body: Some(ErrorBody::default()),
        }));
        assert_eq!(extract_message(&error, &KeyEcho), "errors.generic");
        assert_eq!(classify_title(&error), ErrorCategory::UnknownError);
    }

    #[test]
    fn informational_status_is_unknown_category() {
        assert_eq!(classify_title(&CaughtError::http(302)), ErrorCategory::UnknownError);
        assert_eq!(extract_message(&CaughtError::http(302), &KeyEcho), "errors.generic");
    }

    #[test]
    fn empty_generic_message_falls_back() {
        let error = CaughtError::generic("");
        assert_eq!(extract_message(&error, &KeyEcho), "errors.generic");
    }

    #[test]
    fn unknown_values_are_generic() {
        for value in [json!(null), json!("boom"), json!({ "message": "hidden" })] {
            let error = CaughtError::Unknown(value);
            assert_eq!(extract_message(&error, &KeyEcho), "errors.generic");
            assert_eq!(classify_title(&error), ErrorCategory::UnknownError);
        }
    }
}
