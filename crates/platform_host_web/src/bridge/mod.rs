//! Browser capability bridge implementations for `platform_host_web` service adapters.
//!
//! Organized by host domain (`app_state`, `kv`) while preserving a stable public API for
//! the `storage` adapters above it.

mod app_state;
mod interop;
mod kv;

use platform_host::AppStateEnvelope;

pub async fn load_app_state_envelope(namespace: &str) -> Result<Option<AppStateEnvelope>, String> {
    app_state::load_app_state_envelope(namespace).await
}

pub async fn save_app_state_envelope(envelope: &AppStateEnvelope) -> Result<(), String> {
    app_state::save_app_state_envelope(envelope).await
}

pub async fn delete_app_state(namespace: &str) -> Result<(), String> {
    app_state::delete_app_state(namespace).await
}

pub async fn list_app_state_namespaces() -> Result<Vec<String>, String> {
    app_state::list_app_state_namespaces().await
}

pub async fn kv_get(key: &str) -> Result<Option<String>, String> {
    kv::kv_get(key).await
}

pub async fn kv_set(key: &str, value: &str) -> Result<(), String> {
    kv::kv_set(key, value).await
}

pub async fn kv_remove(key: &str) -> Result<(), String> {
    kv::kv_remove(key).await
}

pub async fn kv_keys() -> Result<Vec<String>, String> {
    kv::kv_keys().await
}
