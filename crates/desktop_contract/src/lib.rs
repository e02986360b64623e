//! Shared data model for the workspace shell: app manifests, the permission enumeration,
//! and the notification type consumed across the registry, loaders, permissions store,
//! services, and SDK crates.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod manifest;
pub mod notification;
pub mod permission;

pub use manifest::{
    AppId, AppManifest, IsolationConfig, ManifestSource, ManifestValidationError,
    ManifestWindowFlags, RuntimeStrategy, SandboxConfig, WasmConfig, WasmRenderMode,
    WindowDefaults, FALLBACK_WINDOW_HEIGHT, FALLBACK_WINDOW_WIDTH,
};
pub use notification::{Notification, NotificationKind};
pub use permission::{Permission, PermissionGrant};
