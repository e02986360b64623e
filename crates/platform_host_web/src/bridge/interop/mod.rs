//! Shared transport interop for browser bridge domains: routes to the `wasm32`
//! IndexedDB glue or a native no-op stand-in behind one stable async API.

use platform_host::AppStateEnvelope;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub async fn load_app_state_envelope(namespace: &str) -> Result<Option<AppStateEnvelope>, String> {
    imp::load_app_state_envelope(namespace).await
}

pub async fn save_app_state_envelope(envelope: &AppStateEnvelope) -> Result<(), String> {
    imp::save_app_state_envelope(envelope).await
}

pub async fn delete_app_state(namespace: &str) -> Result<(), String> {
    imp::delete_app_state(namespace).await
}

pub async fn list_app_state_namespaces() -> Result<Vec<String>, String> {
    imp::list_app_state_namespaces().await
}

pub async fn kv_get(key: &str) -> Result<Option<String>, String> {
    imp::kv_get(key).await
}

pub async fn kv_set(key: &str, value: &str) -> Result<(), String> {
    imp::kv_set(key, value).await
}

pub async fn kv_remove(key: &str) -> Result<(), String> {
    imp::kv_remove(key).await
}

pub async fn kv_keys() -> Result<Vec<String>, String> {
    imp::kv_keys().await
}
