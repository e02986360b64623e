//! App manifest storage and the registry boot sequence.
//!
//! See `spec.md` §4.4. `remote_loaders` and `app_sdk` own the concrete remote-loader
//! registration and SDK factory injection steps; this crate only sequences them via
//! [`boot::RegistryBoot::run_external_step`] so the dependency graph stays acyclic,
//! matching how the teacher keeps `desktop_app_contract` free of a `desktop_runtime`
//! dependency despite `desktop_runtime` driving the contract's types.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod boot;
mod manifest_store;

pub use boot::{BootState, BootStep, RegistryBoot};
pub use manifest_store::{ManifestStore, RegistryError};
