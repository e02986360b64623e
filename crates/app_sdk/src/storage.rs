//! Per-app, capability-gated storage service (`spec.md` §4.8, §6). Keyed under
//! `archbase:${appId}:${key}` via [`scoped_storage::ScopedSyncStorage`]; every method
//! first calls `checkAndEnforce(appId, Permission::Storage)` and returns the
//! service-appropriate no-op (`null`, an empty list, or `void`) when the permission is
//! not granted.

use std::collections::BTreeSet;
use std::rc::Rc;

use desktop_contract::permission::Permission;
use platform_host::SyncKvProvider;
use scoped_storage::ScopedSyncStorage;
use serde_json::Value;

use crate::gate::Gate;
use crate::stores::SharedStores;

/// Storage sub-service scoped to one app.
pub struct StorageService<Storage> {
    gate: Gate<Storage>,
    scoped: ScopedSyncStorage<Storage>,
}

impl<Storage: SyncKvProvider + Clone> StorageService<Storage> {
    pub(crate) fn new(app_id: String, declared: Rc<BTreeSet<Permission>>, stores: SharedStores<Storage>) -> Self {
        let scoped = ScopedSyncStorage::new(app_id.clone(), stores.storage_provider.clone());
        Self {
            gate: Gate::new(app_id, declared, stores),
            scoped,
        }
    }

    /// Reads and JSON-parses the value at `key`. Returns `None` both when the key is
    /// absent/invalid and when the permission is not granted.
    pub fn get(&self, key: &str) -> Option<Value> {
        if !self.gate.check_and_enforce(Permission::Storage) {
            return None;
        }
        self.scoped.get(key)
    }

    /// Writes `value` at `key`. A quiet no-op (including on denial) — writes are
    /// fire-and-forget regardless of permission state.
    pub fn set(&self, key: &str, value: &Value) {
        if !self.gate.check_and_enforce(Permission::Storage) {
            return;
        }
        self.scoped.set(key, value);
    }

    /// Removes a single key. A no-op if the permission is not granted.
    pub fn remove(&self, key: &str) {
        if !self.gate.check_and_enforce(Permission::Storage) {
            return;
        }
        self.scoped.remove(key);
    }

    /// Removes every key in this app's scope. A no-op if the permission is not
    /// granted.
    pub fn clear(&self) {
        if !self.gate.check_and_enforce(Permission::Storage) {
            return;
        }
        self.scoped.clear();
    }

    /// Every scope-local key name for this app. An empty list if the permission is
    /// not granted.
    pub fn keys(&self) -> Vec<String> {
        if !self.gate.check_and_enforce(Permission::Storage) {
            return Vec::new();
        }
        self.scoped.keys()
    }
}

#[cfg(test)]
mod tests {
    use desktop_contract::permission::PermissionGrant;
    use platform_host::MemorySyncKvProvider;
    use serde_json::json;

    use super::*;

    fn declared() -> Rc<BTreeSet<Permission>> {
        let mut set = BTreeSet::new();
        set.insert(Permission::Storage);
        Rc::new(set)
    }

    #[test]
    fn get_returns_none_when_permission_is_not_granted() {
        let stores = SharedStores::new(MemorySyncKvProvider::default());
        let svc = StorageService::new("notes".to_string(), declared(), stores);
        svc.set("draft", &json!("ignored"));
        assert_eq!(svc.get("draft"), None);
    }

    #[test]
    fn set_then_get_round_trips_once_granted() {
        let stores = SharedStores::new(MemorySyncKvProvider::default());
        stores.permissions.borrow_mut().set_grant("notes", Permission::Storage, PermissionGrant::Granted);
        let svc = StorageService::new("notes".to_string(), declared(), stores);
        svc.set("draft", &json!({"text": "hi"}));
        assert_eq!(svc.get("draft"), Some(json!({"text": "hi"})));
    }

    #[test]
    fn another_apps_storage_service_cannot_see_this_apps_keys() {
        let stores = SharedStores::new(MemorySyncKvProvider::default());
        stores.permissions.borrow_mut().set_grant("notes", Permission::Storage, PermissionGrant::Granted);
        stores.permissions.borrow_mut().set_grant("calendar", Permission::Storage, PermissionGrant::Granted);
        let notes = StorageService::new("notes".to_string(), declared(), stores.clone());
        let calendar = StorageService::new("calendar".to_string(), declared(), stores);
        notes.set("draft", &json!(1));
        assert_eq!(calendar.get("draft"), None);
        assert_eq!(calendar.keys(), Vec::<String>::new());
    }
}
