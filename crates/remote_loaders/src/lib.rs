//! Remote app loading strategies: federated module import, sandboxed iframe, and WASM.
//!
//! See `spec.md` §4.5. Every strategy converges on the same [`MountedApp`] surface so
//! the window chrome that hosts a remote app is strategy-agnostic; a failure at any
//! stage surfaces as [`LoadState::Error`] and never tears down the enclosing window.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod error;
pub mod federated;
mod mount;
pub mod sandbox;
pub mod wasm_loader;

pub use error::LoaderError;
pub use mount::{LoadState, MountedApp};
