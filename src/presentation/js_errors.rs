use crate::domain::error_classification::{
    CaughtError, ErrorBody, ErrorResponse, GenericError, MessageLookup, TransportError,
};
use js_sys::{Function, JSON, Reflect};
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};

/// Brand set by axios-style HTTP clients on their rejection values
const TRANSPORT_BRAND: &str = "isAxiosError";

/// Classify a value caught in JavaScript into a [`CaughtError`].
///
/// Never throws: getters that throw, proxies and cyclic objects all fall
/// through to the weaker interpretation.
pub fn caught_error_from_js(value: &JsValue) -> CaughtError {
    if is_transport_error(value) {
        return CaughtError::Transport(transport_from_js(value));
    }

    if value.is_instance_of::<js_sys::Error>() {
        if let Some(message) = property(value, "message").and_then(|m| m.as_string()) {
            return CaughtError::Generic(GenericError::new(message));
        }
    }

    CaughtError::Unknown(json_snapshot(value))
}

fn is_transport_error(value: &JsValue) -> bool {
    property(value, TRANSPORT_BRAND)
        .and_then(|brand| brand.as_bool())
        .unwrap_or(false)
}

fn transport_from_js(value: &JsValue) -> TransportError {
    let response = property(value, "response").map(|response| ErrorResponse {
        status: property(&response, "status")
            .and_then(|status| status.as_f64())
            .and_then(status_from_f64),
        body: property(&response, "data").map(|data| ErrorBody {
            message: property(&data, "message").and_then(|m| m.as_string()),
        }),
    });

    TransportError { response }
}

fn status_from_f64(status: f64) -> Option<u16> {
    (status.fract() == 0.0 && (0.0..=u16::MAX as f64).contains(&status)).then_some(status as u16)
}

/// Own or inherited property, `None` for missing/null/undefined or a throwing getter
fn property(target: &JsValue, key: &str) -> Option<JsValue> {
    if !target.is_object() && !target.is_function() {
        return None;
    }

    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

/// Best-effort JSON copy for diagnostics
fn json_snapshot(value: &JsValue) -> Value {
    if value.is_undefined() {
        return Value::Null;
    }

    JSON::stringify(value)
        .ok()
        .and_then(|json| JsValue::from(json).as_string())
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or(Value::Null)
}

/// [`MessageLookup`] backed by a JavaScript translation function.
///
/// A throwing function or a non-string result resolves to the key.
pub struct JsMessageLookup {
    function: Function,
}

impl JsMessageLookup {
    pub fn new(function: Function) -> Self {
        Self { function }
    }
}

impl MessageLookup for JsMessageLookup {
    fn lookup(&self, key: &str) -> String {
        self.function
            .call1(&JsValue::NULL, &JsValue::from_str(key))
            .ok()
            .and_then(|text| text.as_string())
            .unwrap_or_else(|| key.to_string())
    }
}
