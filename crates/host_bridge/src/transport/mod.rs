//! `postMessage` transport: routes to the `wasm32` browser glue or a native no-op
//! stand-in behind one stable API, mirroring the split `platform_host_web::bridge::interop`
//! keeps between its wasm and non-wasm transports.

use crate::message::BridgeMessage;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

/// Posts `message` to the iframe's content window at `target_origin`.
pub fn post_to_iframe(iframe_id: &str, target_origin: &str, message: &BridgeMessage) -> Result<(), String> {
    imp::post_to_iframe(iframe_id, target_origin, message)
}

/// Posts `message` from an embedded app back to its host (`window.parent`).
pub fn post_to_host(target_origin: &str, message: &BridgeMessage) -> Result<(), String> {
    imp::post_to_host(target_origin, message)
}
