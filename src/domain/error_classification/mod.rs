pub mod caught_error;
pub mod category;
pub mod classifier;
pub mod lookup;
pub mod status_table;

pub use caught_error::{CaughtError, ErrorBody, ErrorResponse, GenericError, TransportError};
pub use category::ErrorCategory;
pub use classifier::{ErrorClassifier, classify_title, extract_message};
pub use lookup::{KeyEcho, MessageLookup};
pub use status_table::{GENERIC_MESSAGE_KEY, NETWORK_MESSAGE_KEY, StatusCodeTable};
