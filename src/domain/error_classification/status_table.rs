/// Exact mapping from HTTP status to message key.
///
/// Only these codes get a dedicated message; every other status falls back
/// to `errors.generic`. Sorted by status.
const STATUS_MESSAGE_KEYS: [(u16, &str); 11] = [
    (400, "errors.badRequest"),
    (401, "errors.unauthorized"),
    (403, "errors.forbidden"),
    (404, "errors.notFound"),
    (409, "errors.conflict"),
    (422, "errors.validationFailed"),
    (429, "errors.tooManyRequests"),
    (500, "errors.serverError"),
    (502, "errors.serverError"),
    (503, "errors.serverError"),
    (504, "errors.serverError"),
];

pub const NETWORK_MESSAGE_KEY: &str = "errors.network";
pub const GENERIC_MESSAGE_KEY: &str = "errors.generic";

/// Immutable status code → message key table
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusCodeTable;

impl StatusCodeTable {
    pub fn message_key(&self, status: u16) -> Option<&'static str> {
        STATUS_MESSAGE_KEYS
            .binary_search_by_key(&status, |(code, _)| *code)
            .ok()
            .map(|idx| STATUS_MESSAGE_KEYS[idx].1)
    }

    pub fn contains(&self, status: u16) -> bool {
        self.message_key(status).is_some()
    }

    pub fn entries(&self) -> impl Iterator<Item = (u16, &'static str)> {
        STATUS_MESSAGE_KEYS.iter().copied()
    }
}
