//! Registry boot sequencing.
//!
//! Mirrors the teacher's `host::install_boot_hydration`, which sequences hydration
//! steps and dispatches an explicit completion action rather than letting each step
//! mutate shared state ad hoc. Here the sequence is a pure state machine so
//! `desktop_shell` can drive it from an effectful `spawn_local` without the ordering
//! logic itself depending on any browser API (`spec.md` §4.4).

use desktop_contract::AppManifest;
use log::{error, info};

use crate::manifest_store::{ManifestStore, RegistryError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Lifecycle state of the registry boot sequence.
pub enum BootState {
    /// No boot attempt has started yet.
    Idle,
    /// A boot attempt is in progress; no manifest can be queried as ready.
    Loading,
    /// Every step completed; the registry is safe to query.
    Ready,
    /// A step failed; the registry holds whatever partial state existed before the
    /// failing step (never exposed as "ready").
    Error(String),
}

/// The five-step boot sequence named in `spec.md` §4.4, as an explicit enum rather
/// than a bare step index, so failures can report exactly where they occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootStep {
    /// Register hardcoded/bundled manifests, validating each against its schema.
    RegisterLocalManifests,
    /// Rehydrate previously-installed marketplace manifests from persistent storage.
    RehydrateMarketplaceManifests,
    /// Register every resolved manifest's strategy with the remote loader.
    RegisterWithRemoteLoader,
    /// Inject the capability-scoped SDK factory into the global app bridge.
    InjectSdkFactory,
    /// Invoke each manifest's activation-event handlers.
    InvokeActivationHandlers,
}

impl BootStep {
    /// The five steps, in the fixed order they always execute.
    pub const ORDER: [BootStep; 5] = [
        BootStep::RegisterLocalManifests,
        BootStep::RehydrateMarketplaceManifests,
        BootStep::RegisterWithRemoteLoader,
        BootStep::InjectSdkFactory,
        BootStep::InvokeActivationHandlers,
    ];
}

/// Drives the registry's boot sequence.
///
/// Holds the [`ManifestStore`] being populated and the current [`BootState`]. Each
/// step is invoked in order; a failure at any step moves the machine to
/// [`BootState::Error`] and aborts the remaining steps, leaving the store in whatever
/// partial state it reached (the store is never surfaced as "ready" from this state,
/// per `spec.md` §4.4's "no partial success" rule).
#[derive(Debug, Clone, Default)]
pub struct RegistryBoot {
    store: ManifestStore,
    state: BootState,
}

impl Default for BootState {
    fn default() -> Self {
        BootState::Idle
    }
}

impl RegistryBoot {
    /// Creates a fresh, idle boot driver over an empty store.
    pub fn new() -> Self {
        Self {
            store: ManifestStore::new(),
            state: BootState::Idle,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> &BootState {
        &self.state
    }

    /// The manifest store, queryable regardless of boot state (callers should check
    /// [`RegistryBoot::state`] before trusting it reflects a completed boot).
    pub fn store(&self) -> &ManifestStore {
        &self.store
    }

    /// Transitions `Idle -> Loading`. A no-op (does not reset the store) if already
    /// loading or ready; returns `false` without transitioning from [`BootState::Error`]
    /// so a caller retries explicitly via [`RegistryBoot::reset`].
    pub fn begin(&mut self) -> bool {
        match self.state {
            BootState::Idle => {
                self.state = BootState::Loading;
                true
            }
            BootState::Loading | BootState::Ready => true,
            BootState::Error(_) => false,
        }
    }

    /// Resets an errored or completed boot back to `Idle` with an empty store, so a
    /// fresh [`RegistryBoot::begin`] can be attempted.
    pub fn reset(&mut self) {
        self.store = ManifestStore::new();
        self.state = BootState::Idle;
    }

    /// Step 1: registers the hardcoded/bundled manifests.
    pub fn register_local_manifests(&mut self, manifests: Vec<AppManifest>) -> Result<(), RegistryError> {
        self.run_step(|boot| {
            for manifest in manifests {
                boot.store.register(manifest)?;
            }
            Ok(())
        })
    }

    /// Step 2: rehydrates previously-installed marketplace manifests.
    pub fn rehydrate_marketplace_manifests(
        &mut self,
        manifests: Vec<AppManifest>,
    ) -> Result<(), RegistryError> {
        self.run_step(|boot| {
            for manifest in manifests {
                boot.store.upsert(manifest)?;
            }
            Ok(())
        })
    }

    /// Step 3/4/5: a generic hook for remote-loader registration, SDK factory
    /// injection, and activation-handler invocation. Each of these steps is driven by
    /// crates that sit above `app_registry` in the dependency graph (`remote_loaders`,
    /// `app_sdk`), so `desktop_shell` supplies the step as a closure over the already
    /// booted manifest list rather than `app_registry` depending upward on them.
    pub fn run_external_step<F>(&mut self, step: F) -> Result<(), RegistryError>
    where
        F: FnOnce(&ManifestStore) -> Result<(), String>,
    {
        if !matches!(self.state, BootState::Loading) {
            return Ok(());
        }
        match step(&self.store) {
            Ok(()) => Ok(()),
            Err(message) => {
                error!("registry boot step failed: {message}");
                self.state = BootState::Error(message);
                Ok(())
            }
        }
    }

    /// Marks the boot sequence complete, transitioning `Loading -> Ready`. A no-op
    /// when already `Error` or `Ready`.
    pub fn finish(&mut self) {
        if matches!(self.state, BootState::Loading) {
            info!("registry boot complete: {} manifests", self.store.len());
            self.state = BootState::Ready;
        }
    }

    fn run_step<F>(&mut self, step: F) -> Result<(), RegistryError>
    where
        F: FnOnce(&mut Self) -> Result<(), RegistryError>,
    {
        if !matches!(self.state, BootState::Loading) {
            return Ok(());
        }
        match step(self) {
            Ok(()) => Ok(()),
            Err(err) => {
                error!("registry boot step failed: {err}");
                self.state = BootState::Error(err.to_string());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use desktop_contract::manifest::{ManifestWindowFlags, WindowDefaults};
    use std::collections::BTreeSet;

    fn manifest(id: &str) -> AppManifest {
        AppManifest {
            id: id.to_string(),
            name: format!("App {id}"),
            version: "1.0.0".to_string(),
            remote_entry: None,
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
            source: desktop_contract::manifest::ManifestSource::Local,
        }
    }

    #[test]
    fn full_sequence_reaches_ready() {
        let mut boot = RegistryBoot::new();
        assert!(boot.begin());
        boot.register_local_manifests(vec![manifest("notes")]).unwrap();
        boot.rehydrate_marketplace_manifests(vec![]).unwrap();
        boot.run_external_step(|_store| Ok(())).unwrap();
        boot.finish();
        assert_eq!(boot.state(), &BootState::Ready);
        assert_eq!(boot.store().len(), 1);
    }

    #[test]
    fn a_failing_step_moves_to_error_and_is_never_ready() {
        let mut boot = RegistryBoot::new();
        boot.begin();
        boot.register_local_manifests(vec![manifest("notes")]).unwrap();
        let err = boot.register_local_manifests(vec![manifest("notes")]).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateId(_)));
        assert!(matches!(boot.state(), BootState::Error(_)));

        // Subsequent steps are no-ops once in Error.
        boot.finish();
        assert!(matches!(boot.state(), BootState::Error(_)));
    }

    #[test]
    fn reset_clears_store_and_returns_to_idle() {
        let mut boot = RegistryBoot::new();
        boot.begin();
        boot.register_local_manifests(vec![manifest("notes")]).unwrap();
        boot.reset();
        assert_eq!(boot.state(), &BootState::Idle);
        assert!(boot.store().is_empty());
    }

    #[test]
    fn begin_refuses_to_leave_error_state_without_explicit_reset() {
        let mut boot = RegistryBoot::new();
        boot.begin();
        boot.register_local_manifests(vec![manifest("notes")]).unwrap();
        boot.register_local_manifests(vec![manifest("notes")]).unwrap_err();
        assert!(!boot.begin());
    }
}
