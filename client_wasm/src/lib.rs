//! Browser client for the flow-field background
//!
//! Owns the canvas, the frame loop, and the accessibility/visibility
//! lifecycle; all particle physics lives in `field_core`.

#![cfg(target_arch = "wasm32")]

mod app;
mod dom;
mod input;
mod lifecycle;

use wasm_bindgen::prelude::*;

/// Module entry point. A failed start is reported to the console and the
/// page simply keeps its static background; it never takes the host down.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = lifecycle::boot() {
        web_sys::console::error_2(
            &JsValue::from_str("flow-field background failed to start:"),
            &err,
        );
    }
}
