//! Host-service contracts shared between native tests and browser adapters.
//!
//! This crate is the API-first boundary for platform services the desktop shell needs
//! outside pure reducer logic: durable preference/app-state persistence, user
//! notifications, and clock helpers. Concrete browser adapters live in
//! `platform_host_web`; every trait here also ships an in-memory/no-op implementation
//! so the rest of the workspace stays unit-testable off-browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod kv;
pub mod notifications;
pub mod storage;
pub mod time;

pub use kv::{
    AsyncKvProvider, KvFuture, MemoryAsyncKvProvider, MemorySyncKvProvider, NoopAsyncKvProvider,
    NoopSyncKvProvider, SyncKvProvider,
};
pub use notifications::{NoopNotificationService, NotificationFuture, NotificationService};
pub use storage::app_state::{
    app_state_namespace, build_app_state_envelope, migrate_envelope_payload, AppStateEnvelope,
    AppStateStore, AppStateStoreFuture, MemoryAppStateStore, NoopAppStateStore,
    APP_STATE_ENVELOPE_VERSION, DESKTOP_STATE_NAMESPACE,
};
pub use storage::prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture,
};
pub use time::{next_monotonic_timestamp_ms, unix_time_ms_now};
