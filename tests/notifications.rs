use practice_errors_wasm::application::{ErrorNotifier, NotificationVariant, NotifierConfig};
use practice_errors_wasm::domain::error_classification::{CaughtError, ErrorCategory};
use practice_errors_wasm::global_state::ToastQueue;
use practice_errors_wasm::infrastructure::i18n::MessageCatalog;

#[test]
fn conflict_uses_localized_title_and_server_text() {
    let catalog = MessageCatalog::english();
    let notification = ErrorNotifier::new(&catalog)
        .notify(&CaughtError::http_with_message(409, "Patient already exists"));

    assert_eq!(notification.category, ErrorCategory::ClientError);
    assert_eq!(notification.title, "Request failed");
    assert_eq!(notification.description, "Patient already exists");
    assert_eq!(notification.variant, NotificationVariant::Destructive);
}

#[test]
fn unavailable_backend_is_server_error() {
    let catalog = MessageCatalog::english();
    let notification = ErrorNotifier::new(&catalog).notify(&CaughtError::http(503));

    assert_eq!(notification.title, "Server error");
    assert_eq!(
        notification.description,
        "The server encountered an error. Please try again later."
    );
}

#[test]
fn notification_serializes_with_camel_case_keys() {
    let catalog = MessageCatalog::english();
    let notification = ErrorNotifier::new(&catalog).notify(&CaughtError::network());
    let json = serde_json::to_value(&notification).unwrap();

    assert_eq!(json["category"], "networkError");
    assert_eq!(json["variant"], "warning");
    assert_eq!(json["title"], "Connection problem");
}

#[test]
fn queue_respects_configured_limit() {
    let config = NotifierConfig::from_json(r#"{"maxVisible": 2}"#).unwrap();
    let catalog = MessageCatalog::english();
    let notifier = ErrorNotifier::new(&catalog);

    let mut queue = ToastQueue::new();
    for status in [400, 404, 500] {
        queue.push(notifier.notify(&CaughtError::http(status)), config.max_visible);
    }

    assert_eq!(queue.len(), 2);
    assert_eq!(queue.toasts()[0].notification.description, "The requested record could not be found.");
}
