//! Synchronous, prefix-partitioned storage scoped to one app.

use platform_host::SyncKvProvider;
use serde_json::Value;

use crate::{strip_sync_prefix, sync_key};

/// Sync key-value surface scoped to a single app, keyed `archbase:${appId}:${key}`
/// over a shared [`SyncKvProvider`].
///
/// `get` parses the stored value as JSON and returns `None` on a missing key or a
/// value that fails to parse; `set` is fire-and-forget and swallows quota/backend
/// errors (logged, never surfaced) per `spec.md` §4.8.
pub struct ScopedSyncStorage<P> {
    app_id: String,
    provider: P,
}

impl<P: SyncKvProvider> ScopedSyncStorage<P> {
    /// Scopes `provider` to `app_id`.
    pub fn new(app_id: impl Into<String>, provider: P) -> Self {
        Self {
            app_id: app_id.into(),
            provider,
        }
    }

    /// Reads and JSON-parses the value at `key`. Returns `None` if the key is absent
    /// or its stored value is not valid JSON.
    pub fn get(&self, key: &str) -> Option<Value> {
        let raw = self.provider.get(&sync_key(&self.app_id, key))?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("scoped_storage: value at `{key}` for `{}` is not valid JSON: {err}", self.app_id);
                None
            }
        }
    }

    /// Serializes `value` to JSON and writes it at `key`. Fire-and-forget: any
    /// backend error (e.g. quota exceeded) is logged and otherwise ignored, matching
    /// the spec's "writes are fire-and-forget with quota errors suppressed".
    pub fn set(&self, key: &str, value: &Value) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("scoped_storage: failed to serialize value for `{key}`: {err}");
                return;
            }
        };
        if let Err(err) = self.provider.set(&sync_key(&self.app_id, key), &raw) {
            log::warn!("scoped_storage: write to `{key}` for `{}` suppressed: {err}", self.app_id);
        }
    }

    /// Removes a single key from this app's scope.
    pub fn remove(&self, key: &str) {
        self.provider.remove(&sync_key(&self.app_id, key));
    }

    /// Removes every key in this app's scope, leaving every other app's keys intact.
    pub fn clear(&self) {
        for key in self.keys() {
            self.remove(&key);
        }
    }

    /// Every scope-local key name currently stored for this app (prefix stripped).
    pub fn keys(&self) -> Vec<String> {
        self.provider
            .keys()
            .into_iter()
            .filter_map(|raw| strip_sync_prefix(&self.app_id, &raw).map(str::to_string))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use platform_host::MemorySyncKvProvider;
    use serde_json::json;

    use super::*;

    #[test]
    fn get_returns_none_for_an_absent_key() {
        let storage = ScopedSyncStorage::new("notes", MemorySyncKvProvider::default());
        assert_eq!(storage.get("draft"), None);
    }

    #[test]
    fn set_then_get_round_trips_json() {
        let storage = ScopedSyncStorage::new("notes", MemorySyncKvProvider::default());
        storage.set("draft", &json!({"text": "hello"}));
        assert_eq!(storage.get("draft"), Some(json!({"text": "hello"})));
    }

    #[test]
    fn get_returns_none_for_invalid_json_rather_than_erroring() {
        let provider = MemorySyncKvProvider::default();
        provider.set("archbase:notes:draft", "not json").unwrap();
        let storage = ScopedSyncStorage::new("notes", provider);
        assert_eq!(storage.get("draft"), None);
    }

    #[test]
    fn keys_are_scoped_to_the_owning_app() {
        let provider = MemorySyncKvProvider::default();
        let notes = ScopedSyncStorage::new("notes", provider.clone());
        let calendar = ScopedSyncStorage::new("calendar", provider);
        notes.set("a", &json!(1));
        notes.set("b", &json!(2));
        calendar.set("a", &json!(3));
        let mut notes_keys = notes.keys();
        notes_keys.sort();
        assert_eq!(notes_keys, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn clear_only_removes_keys_in_scope() {
        let provider = MemorySyncKvProvider::default();
        let notes = ScopedSyncStorage::new("notes", provider.clone());
        let calendar = ScopedSyncStorage::new("calendar", provider);
        notes.set("a", &json!(1));
        calendar.set("a", &json!(2));
        notes.clear();
        assert_eq!(notes.get("a"), None);
        assert_eq!(calendar.get("a"), Some(json!(2)));
    }
}
