//! Settings store: a JSON document addressed by dotted key paths, with per-key change
//! subscriptions.

use std::collections::HashMap;

use serde_json::Value;

/// Splits a dotted path like `"appearance.theme"` into its segments.
fn segments(path: &str) -> Vec<&str> {
    path.split('.').filter(|s| !s.is_empty()).collect()
}

fn get_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in segments(path) {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

fn set_path(root: &mut Value, path: &str, value: Value) {
    let segs = segments(path);
    let Some((last, ancestors)) = segs.split_last() else {
        return;
    };
    let mut current = root;
    for segment in ancestors {
        if !current.is_object() {
            *current = Value::Object(serde_json::Map::new());
        }
        current = current
            .as_object_mut()
            .expect("just normalized to an object")
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(serde_json::Map::new()));
    }
    if !current.is_object() {
        *current = Value::Object(serde_json::Map::new());
    }
    current
        .as_object_mut()
        .expect("just normalized to an object")
        .insert(last.to_string(), value);
}

/// Subscriber id returned by [`SettingsStore::on_change`], used to unsubscribe.
pub type SubscriptionId = u64;

#[derive(Default)]
/// Holds the settings document and per-path change subscribers.
pub struct SettingsStore {
    document: Value,
    next_subscription_id: SubscriptionId,
    subscribers: HashMap<SubscriptionId, (String, Box<dyn Fn(&Value) + Send + Sync>)>,
}

impl std::fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsStore")
            .field("document", &self.document)
            .field("subscriber_count", &self.subscribers.len())
            .finish()
    }
}

impl SettingsStore {
    /// Creates a store with an empty settings document.
    pub fn new() -> Self {
        Self {
            document: Value::Object(serde_json::Map::new()),
            next_subscription_id: 0,
            subscribers: HashMap::new(),
        }
    }

    /// Reads the value at `path`, or `None` if any segment is missing.
    pub fn get(&self, path: &str) -> Option<&Value> {
        get_path(&self.document, path)
    }

    /// Writes `value` at `path`, creating intermediate objects as needed, and notifies
    /// every subscriber registered for exactly this path.
    pub fn set(&mut self, path: &str, value: Value) {
        set_path(&mut self.document, path, value);
        let Some(new_value) = get_path(&self.document, path).cloned() else {
            return;
        };
        for (subscribed_path, callback) in self.subscribers.values() {
            if subscribed_path == path {
                callback(&new_value);
            }
        }
    }

    /// Registers a callback invoked with the new value whenever `path` changes via
    /// [`SettingsStore::set`]. Returns a [`SubscriptionId`] for
    /// [`SettingsStore::off_change`].
    pub fn on_change(&mut self, path: impl Into<String>, callback: impl Fn(&Value) + Send + Sync + 'static) -> SubscriptionId {
        let id = self.next_subscription_id;
        self.next_subscription_id += 1;
        self.subscribers.insert(id, (path.into(), Box::new(callback)));
        id
    }

    /// Removes a subscription registered via [`SettingsStore::on_change`].
    pub fn off_change(&mut self, id: SubscriptionId) {
        self.subscribers.remove(&id);
    }
}
