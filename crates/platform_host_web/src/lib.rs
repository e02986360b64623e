//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for app-state persistence,
//! per-app key-value storage, preferences, and notifications.
//!
//! Bridge bindings are split by domain under `bridge/`:
//! - `bridge::app_state`
//! - `bridge::kv`
//! - `bridge::interop` (shared wasm/non-wasm transport glue)

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
mod bridge;
pub mod notifications;
pub mod storage;

pub use adapters::{
    app_state_store, async_kv_provider, host_strategy_name, notification_service, prefs_store,
    selected_host_strategy, sync_kv_provider, AppStateStoreAdapter, AsyncKvProviderAdapter,
    HostStrategy, NotificationServiceAdapter, PrefsStoreAdapter, SyncKvProviderAdapter,
};
pub use notifications::WebNotificationService;
pub use storage::indexed_db::WebAppStateStore;
pub use storage::indexed_kv::WebIndexedKvProvider;
pub use storage::local_prefs::WebPrefsStore;
