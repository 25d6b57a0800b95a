use crate::domain::{errors::AppResult, logging::LogLevel};
use serde::Deserialize;

/// Runtime settings for error notifications.
///
/// Every field is optional in the JSON form:
///
/// ```json
/// { "toastDurationMs": 8000, "maxVisible": 3, "minLogLevel": "warn" }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotifierConfig {
    /// Auto-dismiss delay; `0` keeps toasts until dismissed
    pub toast_duration_ms: u32,
    pub max_visible: usize,
    pub min_log_level: LogLevel,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 5_000,
            max_visible: 5,
            min_log_level: LogLevel::Info,
        }
    }
}

impl NotifierConfig {
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn auto_dismiss(&self) -> bool {
        self.toast_duration_ms > 0
    }
}
