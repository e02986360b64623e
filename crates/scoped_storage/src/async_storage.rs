//! Asynchronous, per-app storage over a single shared object store.

use platform_host::AsyncKvProvider;
use serde_json::Value;

use crate::{async_key, strip_async_prefix};

/// Async key-value surface scoped to a single app, keyed `${appId}:${key}` inside one
/// shared [`AsyncKvProvider`] object store (`spec.md` §6).
pub struct ScopedAsyncStorage<P> {
    app_id: String,
    provider: P,
}

impl<P: AsyncKvProvider> ScopedAsyncStorage<P> {
    /// Scopes `provider` to `app_id`.
    pub fn new(app_id: impl Into<String>, provider: P) -> Self {
        Self {
            app_id: app_id.into(),
            provider,
        }
    }

    /// Reads and JSON-parses the value at `key`. Resolves to `None` if the key is
    /// absent or the stored value is not valid JSON; a backend read error is logged
    /// and treated the same as absent.
    pub async fn get(&self, key: &str) -> Option<Value> {
        let scoped = async_key(&self.app_id, key);
        match self.provider.get(&scoped).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => Some(value),
                Err(err) => {
                    log::warn!("scoped_storage: value at `{key}` for `{}` is not valid JSON: {err}", self.app_id);
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                log::warn!("scoped_storage: read of `{key}` for `{}` failed: {err}", self.app_id);
                None
            }
        }
    }

    /// Serializes `value` to JSON and writes it at `key`. Backend errors are logged
    /// and otherwise suppressed, matching the sync surface's fire-and-forget contract.
    pub async fn set(&self, key: &str, value: &Value) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("scoped_storage: failed to serialize value for `{key}`: {err}");
                return;
            }
        };
        let scoped = async_key(&self.app_id, key);
        if let Err(err) = self.provider.set(&scoped, &raw).await {
            log::warn!("scoped_storage: write to `{key}` for `{}` suppressed: {err}", self.app_id);
        }
    }

    /// Removes a single key from this app's scope.
    pub async fn remove(&self, key: &str) {
        let scoped = async_key(&self.app_id, key);
        if let Err(err) = self.provider.remove(&scoped).await {
            log::warn!("scoped_storage: remove of `{key}` for `{}` failed: {err}", self.app_id);
        }
    }

    /// Removes every key in this app's scope.
    pub async fn clear(&self) {
        for key in self.keys().await {
            self.remove(&key).await;
        }
    }

    /// Every scope-local key name currently stored for this app (prefix stripped).
    pub async fn keys(&self) -> Vec<String> {
        match self.provider.keys().await {
            Ok(raw_keys) => raw_keys
                .into_iter()
                .filter_map(|raw| strip_async_prefix(&self.app_id, &raw).map(str::to_string))
                .collect(),
            Err(err) => {
                log::warn!("scoped_storage: listing keys for `{}` failed: {err}", self.app_id);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::MemoryAsyncKvProvider;
    use serde_json::json;

    use super::*;

    #[test]
    fn set_then_get_round_trips_json() {
        let storage = ScopedAsyncStorage::new("notes", MemoryAsyncKvProvider::default());
        block_on(storage.set("draft", &json!({"text": "hello"})));
        assert_eq!(block_on(storage.get("draft")), Some(json!({"text": "hello"})));
    }

    #[test]
    fn keys_are_scoped_to_the_owning_app() {
        let provider = MemoryAsyncKvProvider::default();
        let notes = ScopedAsyncStorage::new("notes", provider.clone());
        let calendar = ScopedAsyncStorage::new("calendar", provider);
        block_on(notes.set("a", &json!(1)));
        block_on(calendar.set("a", &json!(2)));
        let mut keys = block_on(notes.keys());
        keys.sort();
        assert_eq!(keys, vec!["a".to_string()]);
    }

    #[test]
    fn clear_only_removes_keys_in_scope() {
        let provider = MemoryAsyncKvProvider::default();
        let notes = ScopedAsyncStorage::new("notes", provider.clone());
        let calendar = ScopedAsyncStorage::new("calendar", provider);
        block_on(notes.set("a", &json!(1)));
        block_on(calendar.set("a", &json!(2)));
        block_on(notes.clear());
        assert_eq!(block_on(notes.get("a")), None);
        assert_eq!(block_on(calendar.get("a")), Some(json!(2)));
    }
}
