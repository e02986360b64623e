//! `wasm32` `postMessage` transport.

use wasm_bindgen::JsCast;

use crate::message::BridgeMessage;

fn to_js(message: &BridgeMessage) -> Result<wasm_bindgen::JsValue, String> {
    serde_wasm_bindgen::to_value(message).map_err(|e| e.to_string())
}

pub fn post_to_iframe(iframe_id: &str, target_origin: &str, message: &BridgeMessage) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no global window".to_string())?;
    let document = window.document().ok_or_else(|| "no document".to_string())?;
    let element = document
        .get_element_by_id(iframe_id)
        .ok_or_else(|| format!("no element with id `{iframe_id}`"))?;
    let iframe: web_sys::HtmlIFrameElement = element
        .dyn_into()
        .map_err(|_| format!("element `{iframe_id}` is not an iframe"))?;
    let content_window = iframe
        .content_window()
        .ok_or_else(|| format!("iframe `{iframe_id}` has no content window"))?;
    let payload = to_js(message)?;
    content_window
        .post_message(&payload, target_origin)
        .map_err(|e| format!("{e:?}"))
}

pub fn post_to_host(target_origin: &str, message: &BridgeMessage) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no global window".to_string())?;
    let parent = window
        .parent()
        .map_err(|e| format!("{e:?}"))?
        .ok_or_else(|| "no parent window".to_string())?;
    let payload = to_js(message)?;
    parent.post_message(&payload, target_origin).map_err(|e| format!("{e:?}"))
}
