//! Native-target stand-ins: IndexedDB is unavailable off-browser, so every call is a
//! harmless no-op/empty read, matching `platform_host`'s noop-provider shape.

use super::*;

pub async fn load_app_state_envelope(_namespace: &str) -> Result<Option<AppStateEnvelope>, String> {
    Ok(None)
}

pub async fn save_app_state_envelope(_envelope: &AppStateEnvelope) -> Result<(), String> {
    Ok(())
}

pub async fn delete_app_state(_namespace: &str) -> Result<(), String> {
    Ok(())
}

pub async fn list_app_state_namespaces() -> Result<Vec<String>, String> {
    Ok(Vec::new())
}

pub async fn kv_get(_key: &str) -> Result<Option<String>, String> {
    Ok(None)
}

pub async fn kv_set(_key: &str, _value: &str) -> Result<(), String> {
    Ok(())
}

pub async fn kv_remove(_key: &str) -> Result<(), String> {
    Ok(())
}

pub async fn kv_keys() -> Result<Vec<String>, String> {
    Ok(Vec::new())
}
