//! Per-app settings service: passes through to [`SettingsStore`] unchanged
//! (`spec.md` §4.8). The settings document is a single shared namespace, not
//! partitioned per app — every app sees (and may read) the same document.

use platform_host::SyncKvProvider;
use serde_json::Value;

use crate::stores::SharedStores;

/// Settings sub-service. Stateless beyond the shared store handle; construction is
/// not app-scoped because the settings document itself is not partitioned.
pub struct SettingsService<Storage> {
    stores: SharedStores<Storage>,
}

impl<Storage: SyncKvProvider + Clone> SettingsService<Storage> {
    pub(crate) fn new(stores: SharedStores<Storage>) -> Self {
        Self { stores }
    }

    /// Reads the value at a dotted `path`.
    pub fn get(&self, path: &str) -> Option<Value> {
        self.stores.settings.borrow().get(path).cloned()
    }

    /// Writes `value` at a dotted `path`, notifying subscribers of that exact path.
    pub fn set(&self, path: &str, value: Value) {
        self.stores.settings.borrow_mut().set(path, value);
    }

    /// Subscribes to changes on `path`, returning a subscription id for [`SettingsService::off_change`].
    pub fn on_change(&self, path: impl Into<String>, callback: impl Fn(&Value) + Send + Sync + 'static) -> u64 {
        self.stores.settings.borrow_mut().on_change(path, callback)
    }

    /// Unsubscribes a previously-registered change handler.
    pub fn off_change(&self, id: u64) {
        self.stores.settings.borrow_mut().off_change(id);
    }
}

#[cfg(test)]
mod tests {
    use platform_host::MemorySyncKvProvider;
    use serde_json::json;

    use super::*;

    #[test]
    fn set_then_get_round_trips() {
        let stores = SharedStores::new(MemorySyncKvProvider::default());
        let settings = SettingsService::new(stores);
        settings.set("appearance.theme", json!("dark"));
        assert_eq!(settings.get("appearance.theme"), Some(json!("dark")));
    }
}
