#![cfg(target_arch = "wasm32")]
use js_sys::{Function, Object, Reflect};
use practice_errors_wasm::presentation::wasm_api::{
    classify_error_title, describe_error, extract_error_message,
};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn http_error(status: f64) -> JsValue {
    let response = Object::new();
    Reflect::set(&response, &"status".into(), &JsValue::from_f64(status)).unwrap();
    let error = Object::new();
    Reflect::set(&error, &"isAxiosError".into(), &JsValue::TRUE).unwrap();
    Reflect::set(&error, &"response".into(), &response).unwrap();
    error.into()
}

#[wasm_bindgen_test]
fn message_resolves_through_js_lookup() {
    let lookup = Function::new_with_args("key", "return 't:' + key;");
    assert_eq!(extract_error_message(http_error(404.0), lookup), "t:errors.notFound");
}

#[wasm_bindgen_test]
fn throwing_lookup_falls_back_to_key() {
    let lookup = Function::new_with_args("key", "throw new Error('no i18n');");
    assert_eq!(extract_error_message(http_error(429.0), lookup), "errors.tooManyRequests");
}

#[wasm_bindgen_test]
fn title_keys() {
    assert_eq!(classify_error_title(http_error(403.0)), "clientError");
    assert_eq!(classify_error_title(http_error(599.0)), "serverError");
    assert_eq!(classify_error_title(JsValue::NULL), "unknownError");
}

#[wasm_bindgen_test]
fn describe_returns_plain_object() {
    let described = describe_error(http_error(500.0));
    let title = Reflect::get(&described, &"title".into()).unwrap();
    assert_eq!(title.as_string().as_deref(), Some("Server error"));
}
