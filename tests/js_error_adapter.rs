#![cfg(target_arch = "wasm32")]
use js_sys::{Object, Reflect};
use practice_errors_wasm::domain::error_classification::{CaughtError, ErrorCategory, classify_title};
use practice_errors_wasm::presentation::js_errors::caught_error_from_js;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn object(entries: &[(&str, JsValue)]) -> JsValue {
    let obj = Object::new();
    for (key, value) in entries {
        Reflect::set(&obj, &JsValue::from_str(key), value).unwrap();
    }
    obj.into()
}

fn transport(response: Option<JsValue>) -> JsValue {
    let mut entries = vec![("isAxiosError", JsValue::TRUE)];
    if let Some(response) = response {
        entries.push(("response", response));
    }
    object(&entries)
}

#[wasm_bindgen_test]
fn branded_error_with_response() {
    let data = object(&[("message", JsValue::from_str("Patient already exists"))]);
    let response = object(&[("status", JsValue::from_f64(400.0)), ("data", data)]);
    let caught = caught_error_from_js(&transport(Some(response)));

    assert_eq!(caught, CaughtError::http_with_message(400, "Patient already exists"));
}

#[wasm_bindgen_test]
fn branded_error_without_response_is_network() {
    let caught = caught_error_from_js(&transport(None));
    assert_eq!(classify_title(&caught), ErrorCategory::NetworkError);
}

#[wasm_bindgen_test]
fn unbranded_object_with_response_is_unknown() {
    let response = object(&[("status", JsValue::from_f64(500.0))]);
    let caught = caught_error_from_js(&object(&[("response", response)]));

    assert!(matches!(caught, CaughtError::Unknown(_)));
    assert_eq!(classify_title(&caught), ErrorCategory::UnknownError);
}

#[wasm_bindgen_test]
fn js_error_is_generic() {
    let error: JsValue = js_sys::Error::new("Something broke").into();
    assert_eq!(caught_error_from_js(&error), CaughtError::generic("Something broke"));
}

#[wasm_bindgen_test]
fn primitives_are_unknown() {
    for value in [JsValue::NULL, JsValue::UNDEFINED, JsValue::from_str("boom"), JsValue::from_f64(1.0)] {
        assert!(matches!(caught_error_from_js(&value), CaughtError::Unknown(_)));
    }
}

#[wasm_bindgen_test]
fn cyclic_object_does_not_throw() {
    let obj = Object::new();
    Reflect::set(&obj, &JsValue::from_str("self"), &obj).unwrap();
    assert!(matches!(
        caught_error_from_js(&obj.into()),
        CaughtError::Unknown(serde_json::Value::Null)
    ));
}
