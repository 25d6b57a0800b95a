pub mod error_classification;
pub mod errors;
pub mod logging;
