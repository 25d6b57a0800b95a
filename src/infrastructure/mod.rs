pub mod http;
pub mod i18n;
pub mod services;
