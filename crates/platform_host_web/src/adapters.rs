//! Host-strategy selection and concrete adapter factories for runtime wiring.
//!
//! `desktop_shell` asks for a [`HostStrategy`] once at boot and gets back adapters that
//! erase `Browser` vs. a `Stub` (native-test/no-op) backend behind the
//! `platform_host` traits.

use platform_host::{
    AppStateEnvelope, AppStateStore, AppStateStoreFuture, AsyncKvProvider, KvFuture,
    NoopAppStateStore, NoopAsyncKvProvider, NoopNotificationService, NoopPrefsStore,
    NoopSyncKvProvider, NotificationFuture, NotificationService, PrefsStore, PrefsStoreFuture,
    SyncKvProvider,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::{WebAppStateStore, WebIndexedKvProvider, WebNotificationService, WebPrefsStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `platform_host_web` adapters.
pub enum HostStrategy {
    /// Browser-backed adapters from `platform_host_web`.
    Browser,
    /// No-op stand-ins used off-browser (native unit tests, non-wasm builds).
    Stub,
}

/// Returns the selected host strategy for the active build: [`HostStrategy::Browser`]
/// on `wasm32`, [`HostStrategy::Stub`] everywhere else.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(target_arch = "wasm32")]
    {
        HostStrategy::Browser
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        HostStrategy::Stub
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::Stub => "stub",
    }
}

/// Adapter enum that erases the concrete app-state backend behind [`AppStateStore`].
#[derive(Debug, Clone, Copy)]
pub enum AppStateStoreAdapter {
    /// Browser-backed IndexedDB app-state persistence.
    Browser(WebAppStateStore),
    /// No-op fallback used off-browser.
    Stub(NoopAppStateStore),
}

impl AppStateStore for AppStateStoreAdapter {
    fn load_app_state_envelope<'a>(
        &'a self,
        namespace: &'a str,
    ) -> AppStateStoreFuture<'a, Result<Option<AppStateEnvelope>, String>> {
        match self {
            Self::Browser(store) => store.load_app_state_envelope(namespace),
            Self::Stub(store) => store.load_app_state_envelope(namespace),
        }
    }

    fn save_app_state_envelope<'a>(
        &'a self,
        envelope: &'a AppStateEnvelope,
    ) -> AppStateStoreFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(store) => store.save_app_state_envelope(envelope),
            Self::Stub(store) => store.save_app_state_envelope(envelope),
        }
    }

    fn delete_app_state<'a>(&'a self, namespace: &'a str) -> AppStateStoreFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(store) => store.delete_app_state(namespace),
            Self::Stub(store) => store.delete_app_state(namespace),
        }
    }

    fn list_app_state_namespaces<'a>(&'a self) -> AppStateStoreFuture<'a, Result<Vec<String>, String>> {
        match self {
            Self::Browser(store) => store.list_app_state_namespaces(),
            Self::Stub(store) => store.list_app_state_namespaces(),
        }
    }
}

/// Adapter enum that erases the concrete async key-value backend behind [`AsyncKvProvider`].
#[derive(Debug, Clone, Copy)]
pub enum AsyncKvProviderAdapter {
    /// Browser-backed IndexedDB key-value store.
    Browser(WebIndexedKvProvider),
    /// No-op fallback used off-browser.
    Stub(NoopAsyncKvProvider),
}

impl AsyncKvProvider for AsyncKvProviderAdapter {
    fn get<'a>(&'a self, key: &'a str) -> KvFuture<'a, Result<Option<String>, String>> {
        match self {
            Self::Browser(store) => store.get(key),
            Self::Stub(store) => store.get(key),
        }
    }

    fn set<'a>(&'a self, key: &'a str, value: &'a str) -> KvFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(store) => store.set(key, value),
            Self::Stub(store) => store.set(key, value),
        }
    }

    fn remove<'a>(&'a self, key: &'a str) -> KvFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(store) => store.remove(key),
            Self::Stub(store) => store.remove(key),
        }
    }

    fn keys<'a>(&'a self) -> KvFuture<'a, Result<Vec<String>, String>> {
        match self {
            Self::Browser(store) => store.keys(),
            Self::Stub(store) => store.keys(),
        }
    }
}

/// Adapter enum that erases the concrete preferences backend behind [`PrefsStore`].
#[derive(Debug, Clone, Copy)]
pub enum PrefsStoreAdapter {
    /// Browser-backed `localStorage` preference storage.
    Browser(WebPrefsStore),
    /// No-op fallback used off-browser.
    Stub(NoopPrefsStore),
}

impl PrefsStoreAdapter {
    /// Loads a browser-local typed preference value (always `None` on the stub strategy).
    pub fn load_typed<T: DeserializeOwned>(self, key: &str) -> Option<T> {
        match self {
            Self::Browser(store) => store.load_typed(key),
            Self::Stub(_) => None,
        }
    }

    /// Saves a browser-local typed preference value (a no-op on the stub strategy).
    pub fn save_typed<T: Serialize>(self, key: &str, value: &T) -> Result<(), String> {
        match self {
            Self::Browser(store) => store.save_typed(key, value),
            Self::Stub(_) => {
                let _ = (key, value);
                Ok(())
            }
        }
    }
}

impl PrefsStore for PrefsStoreAdapter {
    fn load_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        match self {
            Self::Browser(store) => store.load_pref(key),
            Self::Stub(store) => store.load_pref(key),
        }
    }

    fn save_pref<'a>(&'a self, key: &'a str, raw_json: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(store) => store.save_pref(key, raw_json),
            Self::Stub(store) => store.save_pref(key, raw_json),
        }
    }

    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(store) => store.delete_pref(key),
            Self::Stub(store) => store.delete_pref(key),
        }
    }
}

/// Adapter enum that erases the concrete sync key-value backend behind [`SyncKvProvider`].
#[derive(Debug, Clone, Copy)]
pub enum SyncKvProviderAdapter {
    /// Browser-backed `localStorage` key-value store.
    Browser(WebPrefsStore),
    /// No-op fallback used off-browser.
    Stub(NoopSyncKvProvider),
}

impl SyncKvProvider for SyncKvProviderAdapter {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            Self::Browser(store) => store.load_json(key),
            Self::Stub(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        match self {
            Self::Browser(store) => store.save_json(key, value),
            Self::Stub(store) => store.set(key, value),
        }
    }

    fn remove(&self, key: &str) {
        match self {
            Self::Browser(store) => {
                let _ = store.delete_json(key);
            }
            Self::Stub(store) => store.remove(key),
        }
    }

    fn keys(&self) -> Vec<String> {
        match self {
            Self::Browser(store) => store.keys_with_prefix(""),
            Self::Stub(store) => store.keys(),
        }
    }
}

/// Adapter enum that erases the concrete notification backend behind [`NotificationService`].
#[derive(Debug, Clone, Copy)]
pub enum NotificationServiceAdapter {
    /// Browser Notification API-backed delivery.
    Browser(WebNotificationService),
    /// No-op fallback used off-browser.
    Stub(NoopNotificationService),
}

impl NotificationService for NotificationServiceAdapter {
    fn notify<'a>(&'a self, title: &'a str, body: &'a str) -> NotificationFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(service) => service.notify(title, body),
            Self::Stub(service) => service.notify(title, body),
        }
    }
}

/// Builds the app-state adapter for the compile-time selected host strategy.
pub fn app_state_store() -> AppStateStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => AppStateStoreAdapter::Browser(WebAppStateStore),
        HostStrategy::Stub => AppStateStoreAdapter::Stub(NoopAppStateStore),
    }
}

/// Builds the async key-value adapter for the compile-time selected host strategy.
pub fn async_kv_provider() -> AsyncKvProviderAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => AsyncKvProviderAdapter::Browser(WebIndexedKvProvider),
        HostStrategy::Stub => AsyncKvProviderAdapter::Stub(NoopAsyncKvProvider),
    }
}

/// Builds the preferences adapter for the compile-time selected host strategy.
pub fn prefs_store() -> PrefsStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => PrefsStoreAdapter::Browser(WebPrefsStore),
        HostStrategy::Stub => PrefsStoreAdapter::Stub(NoopPrefsStore),
    }
}

/// Builds the sync key-value adapter for the compile-time selected host strategy.
pub fn sync_kv_provider() -> SyncKvProviderAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => SyncKvProviderAdapter::Browser(WebPrefsStore),
        HostStrategy::Stub => SyncKvProviderAdapter::Stub(NoopSyncKvProvider),
    }
}

/// Builds the notification adapter for the compile-time selected host strategy.
pub fn notification_service() -> NotificationServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => NotificationServiceAdapter::Browser(WebNotificationService),
        HostStrategy::Stub => NotificationServiceAdapter::Stub(NoopNotificationService),
    }
}
