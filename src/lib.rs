use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger, init_time_provider};
use crate::infrastructure::services::BrowserTimeProvider;

pub mod application;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
pub mod macros;
pub mod presentation;

pub use domain::error_classification::{
    CaughtError, ErrorCategory, ErrorClassifier, MessageLookup, classify_title, extract_message,
};

#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();
    init_time_provider(Box::new(BrowserTimeProvider::new()));

    get_logger().debug(
        LogComponent::Presentation("Initialize"),
        "Error notification module loaded",
    );
}
