//! Origin policing: tracks which origin each mounted sandboxed app is allowed to send
//! bridge messages from, and rejects everything else.
//!
//! Per `spec.md` §4.5/§4.6, a sandboxed iframe's declared origin is registered when it
//! mounts; every inbound `postMessage` is checked against that registration before its
//! payload is ever parsed as a [`crate::BridgeMessage`].

use std::collections::HashMap;

/// Maps a mounted app's key (its window id or app id, as a string) to the single
/// origin it is permitted to send bridge messages from.
#[derive(Debug, Clone, Default)]
pub struct OriginRegistry {
    origins: HashMap<String, String>,
}

impl OriginRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            origins: HashMap::new(),
        }
    }

    /// Registers `origin` as the only origin `key` may send messages from.
    ///
    /// A wildcard (`"*"`) origin is accepted (some sandbox configs legitimately need
    /// it, e.g. a `data:` URL app with no stable origin) but logs a warning, since it
    /// disables origin policing for that app entirely.
    pub fn register(&mut self, key: impl Into<String>, origin: impl Into<String>) {
        let key = key.into();
        let origin = origin.into();
        if origin == "*" {
            log::warn!("app `{key}` registered with wildcard bridge origin; origin policing disabled for it");
        }
        self.origins.insert(key, origin);
    }

    /// Removes a registration, e.g. on unmount.
    pub fn unregister(&mut self, key: &str) {
        self.origins.remove(key);
    }

    /// Whether a message claiming to be from `origin` should be accepted for `key`.
    ///
    /// An unregistered key never accepts anything; a `"*"` registration accepts any
    /// origin.
    pub fn accepts(&self, key: &str, origin: &str) -> bool {
        match self.origins.get(key) {
            Some(registered) => registered == "*" || registered == origin,
            None => false,
        }
    }
}
