//! Browser Bindings
//!
//! Thin wrappers over the web APIs the widget needs, organized by concern.

mod download;
mod focus;
mod storage;

use wasm_bindgen::JsValue;

pub use download::*;
pub use focus::*;
pub use storage::*;

/// Render a thrown JS value as an error message
fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
