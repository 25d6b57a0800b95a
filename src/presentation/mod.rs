pub mod js_errors;
pub mod toasts;
pub mod wasm_api;
