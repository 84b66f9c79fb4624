//! WebAssembly FFI bindings for the Crux Core
//!
//! The configurator web page loads this module, feeds form and device link
//! events into the core and performs the device operations it requests.

use lazy_static::lazy_static;
use wasm_bindgen::prelude::wasm_bindgen;

use crux_core::{bridge::Bridge, Core};

use crate::App;

lazy_static! {
    static ref CORE: Bridge<App> = Bridge::new(Core::new());
}

/// Set up logging to the browser console
#[wasm_bindgen(start)]
pub fn init_wasm() {
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        wasm_bindgen::throw_str(&format!("Failed to initialize logger: {e}"));
    }
}

/// Process a serialized Event, returns serialized Effects
#[wasm_bindgen]
pub fn process_event(event_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    if let Err(e) = CORE.update(event_bytes, &mut effects) {
        wasm_bindgen::throw_str(&format!("Failed to process event: {e:?}"));
    }
    effects
}

/// Current view model (draft, document, discovery and messages)
#[wasm_bindgen]
pub fn view() -> Vec<u8> {
    let mut view = Vec::new();
    if let Err(e) = CORE.view(&mut view) {
        wasm_bindgen::throw_str(&format!("Failed to get view model: {e:?}"));
    }
    view
}

/// Resolve a device operation or render request.
///
/// `id` is the effect id handed out with the request, `response_bytes` the
/// serialized `DeviceOutput`.
#[wasm_bindgen]
pub fn handle_response(id: u32, response_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    if let Err(e) = CORE.resolve(
        crux_core::bridge::EffectId(id),
        response_bytes,
        &mut effects,
    ) {
        wasm_bindgen::throw_str(&format!("Failed to handle response: {e:?}"));
    }
    effects
}
