//! Capability-scoped SDK façade apps use to reach shell services (`spec.md` §4.8,
//! component I).
//!
//! [`AppSdk`] is built once per running app instance. It stays free of any browser or
//! `leptos` dependency — the same way the teacher keeps `window_manager.rs` pure and
//! pushes reactive/DOM glue into `desktop_runtime` — so the capability-gating
//! behavior (`spec.md` §8, testable property 4) is covered by plain `#[cfg(test)]`
//! unit tests with in-memory stores, with no browser target required.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod collaboration;
mod commands;
mod context_menu;
mod gate;
mod notifications;
mod permissions;
mod sdk;
mod settings;
mod storage;
mod stores;
mod windows;

pub use collaboration::CollaborationService;
pub use commands::CommandsService;
pub use desktop_services::{CommandError, CommandHandler};
pub use context_menu::{open_context_menu, ContextMenuState, SUBMENU_HOVER_DELAY_MS};
pub use notifications::NotificationsService;
pub use permissions::PermissionsService;
pub use sdk::AppSdk;
pub use settings::SettingsService;
pub use storage::StorageService;
pub use stores::SharedStores;
pub use windows::WindowsService;
