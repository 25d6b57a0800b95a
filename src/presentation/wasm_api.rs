use crate::application::{ErrorNotifier, NotifierConfig};
use crate::domain::{
    error_classification::{classify_title, extract_message},
    logging::{LogComponent, init_logger},
};
use crate::global_state::{catalog, claim_toast_mount, install_catalog_overrides, notifier_config};
use crate::infrastructure::services::ConsoleLogger;
use crate::{log_info, log_warn};
use crate::presentation::{
    js_errors::{JsMessageLookup, caught_error_from_js},
    toasts::{ErrorToasts, close_toast, show_error},
};
use gloo::utils::format::JsValueSerdeExt;
use js_sys::{Function, JSON};
use leptos::*;
use wasm_bindgen::prelude::*;

/// Display message for a caught error, resolved through `lookup(key)`
#[wasm_bindgen(js_name = extractErrorMessage)]
pub fn extract_error_message(error: JsValue, lookup: Function) -> String {
    let caught = caught_error_from_js(&error);
    extract_message(&caught, &JsMessageLookup::new(lookup))
}

/// One of `clientError`, `serverError`, `networkError`, `unknownError`
#[wasm_bindgen(js_name = classifyErrorTitle)]
pub fn classify_error_title(error: JsValue) -> String {
    classify_title(&caught_error_from_js(&error)).as_str().to_string()
}

/// `{ category, title, description, variant }` using the installed catalog
#[wasm_bindgen(js_name = describeError)]
pub fn describe_error(error: JsValue) -> JsValue {
    let notification = ErrorNotifier::new(catalog()).notify(&caught_error_from_js(&error));
    JsValue::from_serde(&notification).unwrap_or(JsValue::NULL)
}

/// Show a toast for a caught error, returns the toast id
#[wasm_bindgen(js_name = notifyError)]
pub fn notify_error(error: JsValue) -> u32 {
    show_error(&caught_error_from_js(&error))
}

#[wasm_bindgen(js_name = dismissErrorToast)]
pub fn dismiss_error_toast(id: u32) -> bool {
    close_toast(id)
}

/// Apply configuration, install the console logger and message catalog,
/// then mount the toast stack on `<body>` (once).
///
/// `messages` is an optional JSON object layered over the English catalog.
/// It must be supplied before any error is described or notified; later
/// overrides are rejected with an error.
#[wasm_bindgen(js_name = initNotifications)]
pub fn init_notifications(config: JsValue, messages: Option<String>) -> Result<(), JsValue> {
    let config = parse_config(&config)?;

    init_logger(Box::new(ConsoleLogger::new(config.min_log_level)));

    if let Some(messages) = messages {
        if let Err(e) = install_catalog_overrides(&messages) {
            log_warn!(LogComponent::Presentation("WasmApi"), "Message overrides ignored: {}", e);
            return Err(JsValue::from_str(&e.to_string()));
        }
    }

    log_info!(
        LogComponent::Presentation("WasmApi"),
        "Notifications ready: {} messages, toasts {}ms",
        catalog().len(),
        config.toast_duration_ms
    );

    notifier_config().set(config);
    if claim_toast_mount() {
        mount_to_body(|| view! { <ErrorToasts/> });
    } else {
        log_warn!(LogComponent::Presentation("WasmApi"), "Toast stack already mounted");
    }
    Ok(())
}

fn parse_config(config: &JsValue) -> Result<NotifierConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(NotifierConfig::default());
    }

    let json = JSON::stringify(config)?
        .as_string()
        .ok_or_else(|| JsValue::from_str("Configuration must be a plain object"))?;
    NotifierConfig::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))
}
