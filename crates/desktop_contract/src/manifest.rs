//! App manifest shape and runtime-strategy selection.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::permission::Permission;

/// Default window width applied when a manifest and the caller both omit geometry.
pub const FALLBACK_WINDOW_WIDTH: u32 = 500;
/// Default window height applied when a manifest and the caller both omit geometry.
pub const FALLBACK_WINDOW_HEIGHT: u32 = 400;

/// Module-federation-style handle for a registered app.
pub type AppId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Default/min/max window geometry declared by a manifest.
pub struct WindowDefaults {
    /// Default width in pixels.
    pub width: Option<u32>,
    /// Default height in pixels.
    pub height: Option<u32>,
    /// Minimum width in pixels.
    pub min_width: Option<u32>,
    /// Minimum height in pixels.
    pub min_height: Option<u32>,
    /// Maximum width in pixels.
    pub max_width: Option<u32>,
    /// Maximum height in pixels.
    pub max_height: Option<u32>,
    /// Whether the window may be resized.
    pub resizable: Option<bool>,
    /// Whether the window may be maximized.
    pub maximizable: Option<bool>,
    /// Whether the window may be minimized.
    pub minimizable: Option<bool>,
    /// Whether the window may be closed by the user.
    pub closable: Option<bool>,
}

impl Default for WindowDefaults {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            min_width: None,
            min_height: None,
            max_width: None,
            max_height: None,
            resizable: None,
            maximizable: None,
            minimizable: None,
            closable: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Shadow-DOM CSS isolation hint.
pub struct IsolationConfig {
    /// Whether app content should render inside a shadow root.
    #[serde(default)]
    pub css_shadow: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Sandboxed-iframe loader configuration.
pub struct SandboxConfig {
    /// Iframe document source URL.
    pub url: String,
    /// Declared origin the bridge accepts inbound messages from.
    pub origin: String,
    /// Additional `allow` sandbox tokens requested by the app.
    #[serde(default)]
    pub allow: BTreeSet<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// WASM module surface rendering strategy.
pub enum WasmRenderMode {
    /// Render exclusively to a canvas 2D surface.
    #[serde(rename = "canvas-2d")]
    Canvas2d,
    /// Render exclusively into a DOM container.
    Dom,
    /// Render using both a canvas and a DOM container.
    Hybrid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// WASM module loader configuration.
pub struct WasmConfig {
    /// URL of the compiled `.wasm` module.
    pub wasm_url: String,
    /// Optional JS glue module URL, when the module requires a non-bindgen shim.
    pub js_glue_url: Option<String>,
    /// Module type discriminator (opaque to the loader, forwarded to host imports).
    pub module_type: String,
    /// Surface rendering strategy.
    pub render_mode: WasmRenderMode,
    /// Optional requested initial linear memory pages.
    pub memory: Option<u32>,
    /// Whether to use `WebAssembly.instantiateStreaming` when available.
    #[serde(default = "default_true")]
    pub streaming_compilation: bool,
}

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resolved isolation strategy for a manifest, selected per `spec.md` §3 precedence:
/// `wasm` beats `sandbox` beats plain federated.
pub enum RuntimeStrategy {
    /// Plain module-federation remote, loaded in-process.
    Federated,
    /// Sandboxed iframe communicating through the host bridge.
    Sandbox(SandboxConfig),
    /// WebAssembly module instantiated with host-provided imports.
    Wasm(WasmConfig),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Declarative description of a remote app, as registered with the shell.
pub struct AppManifest {
    /// Stable application identifier / module-federation handle.
    pub id: AppId,
    /// Human-facing app name.
    pub name: String,
    /// Semver-ish version string.
    pub version: String,
    /// Optional module-federation remote entry URL.
    pub remote_entry: Option<String>,
    /// Federated module entrypoint export name.
    pub entrypoint: String,
    /// Optional launcher display name override (falls back to `name`).
    pub display_name: Option<String>,
    /// Optional icon id.
    pub icon: Option<String>,
    /// Optional description shown in app details.
    pub description: Option<String>,
    /// Optional search keywords.
    pub keywords: Vec<String>,
    /// Declared permission set.
    pub permissions: BTreeSet<Permission>,
    /// Events that trigger activation handlers.
    pub activation_events: BTreeSet<String>,
    /// Default/min/max window geometry.
    #[serde(default)]
    pub window: WindowDefaults,
    /// Behavior flags requested at window-open time.
    #[serde(default)]
    pub flags: ManifestWindowFlags,
    /// Optional CSS isolation hint.
    pub isolation: Option<IsolationConfig>,
    /// Optional sandboxed-iframe configuration.
    pub sandbox: Option<SandboxConfig>,
    /// Optional WASM module configuration.
    pub wasm: Option<WasmConfig>,
    /// Where the manifest originated.
    #[serde(default)]
    pub source: ManifestSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
/// Behavior flags requested by a manifest for windows it opens.
pub struct ManifestWindowFlags {
    /// Requests `resizable` default (overridden by `window.resizable` when set).
    pub resizable: Option<bool>,
    /// Requests `maximizable` default.
    pub maximizable: Option<bool>,
    /// Requests `minimizable` default.
    pub minimizable: Option<bool>,
    /// Requests `closable` default.
    pub closable: Option<bool>,
    /// Requests the window always stay above normal windows.
    pub always_on_top: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Manifest provenance.
pub enum ManifestSource {
    /// Hardcoded/bundled manifest registered at boot.
    Local,
    /// Manifest installed from the marketplace.
    Marketplace,
}

impl Default for ManifestSource {
    fn default() -> Self {
        Self::Local
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Manifest validation failure.
pub enum ManifestValidationError {
    /// `id` was empty.
    #[error("manifest id must not be empty")]
    EmptyId,
    /// `name` was empty.
    #[error("manifest `{id}` name must not be empty")]
    EmptyName {
        /// Offending manifest id.
        id: AppId,
    },
    /// A declared permission is not in the known permission enumeration.
    #[error("manifest `{id}` declares unknown permission `{permission}`")]
    UnknownPermission {
        /// Offending manifest id.
        id: AppId,
        /// Raw permission token that failed to parse.
        permission: String,
    },
}

impl AppManifest {
    /// Validates structural invariants: non-empty id/name and a declared-permission
    /// subset of the known permission enumeration.
    ///
    /// Exactly one runtime strategy is always resolvable via [`AppManifest::strategy`]
    /// (it defaults to [`RuntimeStrategy::Federated`]), so strategy selection itself
    /// never fails validation.
    pub fn validate(&self) -> Result<(), ManifestValidationError> {
        if self.id.trim().is_empty() {
            return Err(ManifestValidationError::EmptyId);
        }
        if self.name.trim().is_empty() {
            return Err(ManifestValidationError::EmptyName { id: self.id.clone() });
        }
        Ok(())
    }

    /// Validates a manifest whose permissions arrived as raw, unparsed strings,
    /// surfacing the first permission that fails to parse against the known
    /// enumeration (see `spec.md` §4.4).
    pub fn validate_raw_permissions(
        &self,
        raw_permissions: &[String],
    ) -> Result<(), ManifestValidationError> {
        self.validate()?;
        for raw in raw_permissions {
            if Permission::parse(raw).is_none() {
                return Err(ManifestValidationError::UnknownPermission {
                    id: self.id.clone(),
                    permission: raw.clone(),
                });
            }
        }
        Ok(())
    }

    /// Resolves the runtime loading strategy with `wasm > sandbox > federated`
    /// precedence, per `spec.md` §3.
    pub fn strategy(&self) -> RuntimeStrategy {
        if let Some(wasm) = &self.wasm {
            RuntimeStrategy::Wasm(wasm.clone())
        } else if let Some(sandbox) = &self.sandbox {
            RuntimeStrategy::Sandbox(sandbox.clone())
        } else {
            RuntimeStrategy::Federated
        }
    }

    /// Resolves window geometry falling back from the caller's request to manifest
    /// defaults, then to the hardcoded 500x400 fallback.
    pub fn resolve_default_size(&self) -> (u32, u32) {
        (
            self.window.width.unwrap_or(FALLBACK_WINDOW_WIDTH),
            self.window.height.unwrap_or(FALLBACK_WINDOW_HEIGHT),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_manifest() -> AppManifest {
        AppManifest {
            id: "app.demo".to_string(),
            name: "Demo".to_string(),
            version: "1.0.0".to_string(),
            remote_entry: Some("https://cdn.example/demo/remoteEntry.js".to_string()),
            entrypoint: "./App".to_string(),
            display_name: None,
            icon: None,
            description: None,
            keywords: Vec::new(),
            permissions: BTreeSet::new(),
            activation_events: BTreeSet::new(),
            window: WindowDefaults::default(),
            flags: ManifestWindowFlags::default(),
            isolation: None,
            sandbox: None,
            wasm: None,
            source: ManifestSource::Local,
        }
    }

    #[test]
    fn empty_id_rejected() {
        let mut manifest = base_manifest();
        manifest.id = "  ".to_string();
        assert_eq!(manifest.validate(), Err(ManifestValidationError::EmptyId));
    }

    #[test]
    fn empty_name_rejected() {
        let mut manifest = base_manifest();
        manifest.name = "".to_string();
        assert_eq!(
            manifest.validate(),
            Err(ManifestValidationError::EmptyName {
                id: "app.demo".to_string()
            })
        );
    }

    #[test]
    fn unknown_raw_permission_rejected() {
        let manifest = base_manifest();
        let err = manifest
            .validate_raw_permissions(&["geolocation".to_string()])
            .unwrap_err();
        assert_eq!(
            err,
            ManifestValidationError::UnknownPermission {
                id: "app.demo".to_string(),
                permission: "geolocation".to_string()
            }
        );
    }

    #[test]
    fn wasm_beats_sandbox_beats_federated() {
        let mut manifest = base_manifest();
        manifest.sandbox = Some(SandboxConfig {
            url: "https://example.com/app".to_string(),
            origin: "https://example.com".to_string(),
            allow: BTreeSet::new(),
        });
        assert!(matches!(manifest.strategy(), RuntimeStrategy::Sandbox(_)));

        manifest.wasm = Some(WasmConfig {
            wasm_url: "https://example.com/app.wasm".to_string(),
            js_glue_url: None,
            module_type: "esm".to_string(),
            render_mode: WasmRenderMode::Canvas2d,
            memory: None,
            streaming_compilation: true,
        });
        assert!(matches!(manifest.strategy(), RuntimeStrategy::Wasm(_)));
    }

    #[test]
    fn default_size_falls_back_to_hardcoded_constants() {
        let manifest = base_manifest();
        assert_eq!(
            manifest.resolve_default_size(),
            (FALLBACK_WINDOW_WIDTH, FALLBACK_WINDOW_HEIGHT)
        );
    }
}
