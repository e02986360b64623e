//! Boots the workspace-shell crates into one runtime (`SPEC_FULL.md` §2 "wiring").
//!
//! This crate is the top of the dependency graph: it owns the `wasm-bindgen` entry
//! point, logging/panic-hook installation, the tunable config, the async-suspension
//! supervisor, the `data-theme` publisher, and the thin-UI interface contracts listed
//! in `spec.md` §4.9. Everything it wires — `app_registry`, `permissions_store`,
//! `desktop_services`, `window_store`, `app_sdk`, `host_bridge`, `scoped_storage` — is
//! itself browser-agnostic; this crate is the one place that actually requires
//! `wasm32` to run for real, the same way the teacher's `site` crate is the only
//! workspace member with a `wasm-bindgen`-driven `mount()`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Tunable constants and the runtime-provided viewport/taskbar config.
pub mod config;
/// Store wiring and the registry boot sequence.
pub mod context;
/// Logger/panic-hook installation.
pub mod logging;
/// Async suspension-point cancellation supervisor.
pub mod supervisor;
/// Theme publishing to the DOM root.
pub mod theme;
/// Interface contracts for the out-of-scope thin UI surfaces.
pub mod ui_contract;

pub use config::DesktopConfig;
pub use context::DesktopShell;
pub use supervisor::CancelToken;
#[cfg(target_arch = "wasm32")]
pub use supervisor::spawn_supervised;
pub use theme::{Theme, ThemeFacade};
