use derive_more::Display;

/// Failures of the crate's own plumbing (catalog parsing, configuration).
///
/// Classification itself never fails and does not use this type.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum AppError {
    #[display(fmt = "Catalog Error: {}", _0)]
    CatalogError(String),
    #[display(fmt = "Configuration Error: {}", _0)]
    ConfigurationError(String),
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::ConfigurationError(error.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
