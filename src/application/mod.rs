pub mod config;
pub mod notifications;

pub use config::NotifierConfig;
pub use notifications::{ErrorNotification, ErrorNotifier, NotificationVariant};
