//! Top-level wiring: boots `app_registry`, `permissions_store`, `desktop_services`,
//! `window_store`, and `host_bridge` into one runtime, and mints a per-app
//! [`app_sdk::AppSdk`] scoped to each mounted manifest.
//!
//! Grounded on `desktop_runtime::runtime_context::DesktopProvider`, which builds one
//! set of stores behind a context object rather than module-level globals
//! (`spec.md` §9 "Global state ... pass them explicitly or via a context object").
//! Unlike the teacher's leptos `RwSignal`-based context, the stores here are kept in
//! the same `Rc<RefCell<_>>` shape `app_sdk::SharedStores` already uses — `app_sdk`
//! is deliberately leptos-free (see that crate's docs), so this context just extends
//! the same bundle with the registry boot driver and the bridge origin table rather
//! than introducing a second, incompatible state-sharing mechanism.

use app_registry::{BootState, RegistryBoot};
use app_sdk::{AppSdk, SharedStores};
use desktop_contract::AppManifest;
use desktop_contract::permission::PermissionGrant;
use host_bridge::OriginRegistry;
use permissions_store::PendingRequest;
use platform_host::SyncKvProvider;
use std::cell::RefCell;
use std::rc::Rc;

use crate::config::DesktopConfig;

/// Owns every shared store plus the registry boot driver and bridge origin table for
/// one running desktop instance.
pub struct DesktopShell<Storage> {
    stores: SharedStores<Storage>,
    registry: Rc<RefCell<RegistryBoot>>,
    origins: Rc<RefCell<OriginRegistry>>,
    config: DesktopConfig,
}

impl<Storage: SyncKvProvider + Clone> DesktopShell<Storage> {
    /// Builds a fresh, unbooted shell over `storage_provider`.
    pub fn new(storage_provider: Storage, config: DesktopConfig) -> Self {
        Self {
            stores: SharedStores::new(storage_provider),
            registry: Rc::new(RefCell::new(RegistryBoot::new())),
            origins: Rc::new(RefCell::new(OriginRegistry::new())),
            config,
        }
    }

    /// Current viewport/taskbar configuration.
    pub fn config(&self) -> DesktopConfig {
        self.config
    }

    /// Updates the viewport/taskbar configuration (e.g. on browser resize).
    pub fn set_config(&mut self, config: DesktopConfig) {
        self.config = config;
    }

    /// Runs the five-step boot sequence from `spec.md` §4.4, given the hardcoded
    /// local manifests and any rehydrated marketplace manifests. Registers each
    /// sandboxed manifest's declared origin with the bridge's [`OriginRegistry`] as
    /// the "register with remote loader" step, since that is the one piece of loader
    /// registration `desktop_shell` itself is responsible for wiring (the loader
    /// strategies themselves live in `remote_loaders` and are invoked per-window by
    /// the window chrome, not at boot).
    pub fn boot(&self, local_manifests: Vec<AppManifest>, marketplace_manifests: Vec<AppManifest>) {
        let mut registry = self.registry.borrow_mut();
        registry.begin();
        if registry.register_local_manifests(local_manifests).is_err() {
            return;
        }
        if registry.rehydrate_marketplace_manifests(marketplace_manifests).is_err() {
            return;
        }

        let origins = self.origins.clone();
        let _ = registry.run_external_step(|store| {
            let mut origins = origins.borrow_mut();
            for manifest in store.all() {
                if let Some(sandbox) = &manifest.sandbox {
                    origins.register(manifest.id.clone(), sandbox.origin.clone());
                }
            }
            Ok(())
        });

        registry.finish();
    }

    /// Current boot lifecycle state (`spec.md` §4.4, §7 error class 4).
    pub fn boot_state(&self) -> BootState {
        self.registry.borrow().state().clone()
    }

    /// Looks up a booted manifest by id.
    pub fn manifest(&self, app_id: &str) -> Option<AppManifest> {
        self.registry.borrow().store().get(app_id).cloned()
    }

    /// Mints the capability-scoped SDK façade for `app_id`, declaring exactly the
    /// permission set its manifest requested. Returns `None` if the boot sequence
    /// hasn't completed or the app isn't registered (`spec.md` §7 error class 4: no
    /// apps are available while the registry isn't `Ready`).
    pub fn sdk_for(&self, app_id: &str) -> Option<AppSdk<Storage>> {
        if !matches!(self.boot_state(), BootState::Ready) {
            return None;
        }
        let manifest = self.manifest(app_id)?;
        Some(AppSdk::new(manifest.id, manifest.permissions, self.stores.clone()))
    }

    /// The bridge's registered sandbox origins, for the host-side `postMessage`
    /// listener to consult when policing inbound events (`spec.md` §4.7).
    pub fn origins(&self) -> Rc<RefCell<OriginRegistry>> {
        self.origins.clone()
    }

    /// The `(app_id, permission)` the user is currently being asked to decide, if
    /// any. A host-level UI layer renders this head-of-queue prompt; the prompt queue
    /// itself is pure data owned by `permissions_store` (`spec.md` §4.6).
    pub fn pending_prompt(&self) -> Option<(String, desktop_contract::Permission)> {
        self.stores
            .permissions()
            .borrow()
            .pending_prompt()
            .map(|request: &PendingRequest| (request.app_id.clone(), request.permission))
    }

    /// Resolves the head-of-queue prompt with the user's decision.
    pub fn resolve_pending_prompt(&self, grant: PermissionGrant) {
        self.stores.permissions().borrow_mut().resolve_head(grant);
    }

    /// Resolves the head-of-queue prompt as denied — the Escape/dismiss default
    /// (`spec.md` §4.6 "the default focused button is Deny").
    pub fn deny_pending_prompt(&self) {
        self.stores.permissions().borrow_mut().deny_head();
    }
}

#[cfg(test)]
mod tests {
    use desktop_contract::{AppManifest, ManifestSource, ManifestWindowFlags, WindowDefaults};
    use platform_host::MemorySyncKvProvider;
    use std::collections::BTreeSet;

    use super::*;

    fn manifest(id: &str) -> AppManifest {
        AppManifest {
            id: id.to_string(),
            name: id.to_string(),
            version: "1.0.0".to_string(),
            remote_entry: None,
            entrypoint: "App".to_string(),
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

    fn shell() -> DesktopShell<MemorySyncKvProvider> {
        DesktopShell::new(MemorySyncKvProvider::default(), DesktopConfig::default())
    }

    #[test]
    fn sdk_for_is_unavailable_before_boot_completes() {
        let shell = shell();
        assert!(shell.sdk_for("notes").is_none());
    }

    #[test]
    fn booting_registers_local_manifests_and_mints_a_scoped_sdk() {
        let shell = shell();
        shell.boot(vec![manifest("notes")], Vec::new());
        assert_eq!(shell.boot_state(), BootState::Ready);
        let sdk = shell.sdk_for("notes").expect("notes is registered");
        assert_eq!(sdk.app_id(), "notes");
    }

    #[test]
    fn a_duplicate_local_manifest_moves_the_registry_to_error_and_blocks_every_sdk() {
        let shell = shell();
        shell.boot(vec![manifest("notes"), manifest("notes")], Vec::new());
        assert!(matches!(shell.boot_state(), BootState::Error(_)));
        assert!(shell.sdk_for("notes").is_none());
    }

    #[test]
    fn sandboxed_manifests_register_their_declared_origin_with_the_bridge() {
        let mut sandboxed = manifest("mail");
        sandboxed.sandbox = Some(desktop_contract::SandboxConfig {
            url: "https://mail.example.com/app".to_string(),
            origin: "https://mail.example.com".to_string(),
            allow: BTreeSet::new(),
        });
        let shell = shell();
        shell.boot(vec![sandboxed], Vec::new());
        assert!(shell.origins().borrow().accepts("mail", "https://mail.example.com"));
    }

    #[test]
    fn an_enforced_declared_permission_queues_a_prompt_the_shell_can_resolve() {
        use desktop_contract::Permission;
        use futures::FutureExt;

        let mut with_storage = manifest("notes");
        with_storage.permissions.insert(Permission::Storage);
        let shell = shell();
        shell.boot(vec![with_storage], Vec::new());
        let sdk = shell.sdk_for("notes").unwrap();

        assert!(shell.pending_prompt().is_none());
        // Polling once is enough to enqueue the request; it won't resolve until the
        // shell answers the prompt, so the awaited future itself is discarded here.
        assert!(sdk.permissions().request(Permission::Storage).now_or_never().is_none());
        assert_eq!(shell.pending_prompt(), Some(("notes".to_string(), Permission::Storage)));

        shell.resolve_pending_prompt(PermissionGrant::Granted);
        assert!(shell.pending_prompt().is_none());
        assert_eq!(sdk.permissions().check(Permission::Storage), PermissionGrant::Granted);
    }
}
