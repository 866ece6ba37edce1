//! WASM bindings for jtree-core.
//!
//! Exposes `normalize` and `validate` as `#[wasm_bindgen]` functions callable
//! from JavaScript/TypeScript. Built with `wasm-bindgen-cli`:
//!
//! ```sh
//! cargo build -p jtree-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/jtree_wasm.wasm
//! ```

use wasm_bindgen::prelude::*;

/// Decode a JSON document and return it in jtree's rendering.
///
/// Throws a JS error naming the failure and its byte offset if the text does
/// not decode.
#[wasm_bindgen]
pub fn normalize(json: &str) -> std::result::Result<String, JsValue> {
    jtree_core::decode(json)
        .map(|root| root.render())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Check that a JSON document decodes, throwing a JS error if it does not.
#[wasm_bindgen]
pub fn validate(json: &str) -> std::result::Result<(), JsValue> {
    jtree_core::decode(json)
        .map(|_| ())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
