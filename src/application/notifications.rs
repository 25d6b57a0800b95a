use crate::domain::{
    error_classification::{CaughtError, ErrorCategory, ErrorClassifier, MessageLookup},
    logging::{LogComponent, LogLevel, get_logger},
};
use serde::Serialize;
use strum::AsRefStr;

/// Visual treatment of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    Destructive,
    Warning,
}

impl From<ErrorCategory> for NotificationVariant {
    fn from(category: ErrorCategory) -> Self {
        match category {
            ErrorCategory::NetworkError => NotificationVariant::Warning,
            ErrorCategory::ClientError | ErrorCategory::ServerError | ErrorCategory::UnknownError => {
                NotificationVariant::Destructive
            }
        }
    }
}

/// Everything a toast needs to show one failure
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorNotification {
    pub category: ErrorCategory,
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

/// Use Case - превращает пойманную ошибку в уведомление
pub struct ErrorNotifier<'a, L: ?Sized> {
    classifier: ErrorClassifier,
    lookup: &'a L,
}

impl<'a, L: MessageLookup + ?Sized> ErrorNotifier<'a, L> {
    pub fn new(lookup: &'a L) -> Self {
        Self { classifier: ErrorClassifier::new(), lookup }
    }

    pub fn notify(&self, error: &CaughtError) -> ErrorNotification {
        let category = self.classifier.classify_title(error);
        let notification = ErrorNotification {
            category,
            title: self.lookup.lookup(&category.title_key()),
            description: self.classifier.extract_message(error, self.lookup),
            variant: category.into(),
        };

        let status = error
            .status()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "none".to_string());
        get_logger().log_with_metadata(
            LogLevel::Warn,
            LogComponent::Application("ErrorNotifier"),
            &format!("{} | {}", category, notification.description),
            &format!("status={}", status),
        );

        notification
    }
}
