//! Native stand-in: there is no DOM, so every call is a harmless no-op. Exists so the
//! wire format and origin policing stay unit-testable with `cargo test` off-browser.

use crate::message::BridgeMessage;

pub fn post_to_iframe(_iframe_id: &str, _target_origin: &str, _message: &BridgeMessage) -> Result<(), String> {
    Ok(())
}

pub fn post_to_host(_target_origin: &str, _message: &BridgeMessage) -> Result<(), String> {
    Ok(())
}
