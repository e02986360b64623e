//! In-memory manifest registry keyed by app id.
//!
//! Mirrors the teacher's `apps::build_app_registry` table-of-descriptors shape, but
//! holds [`AppManifest`] values validated through `desktop_contract` instead of
//! leptos-view-coupled descriptors, and distinguishes manifests bundled with the shell
//! from ones rehydrated from the marketplace per `spec.md` §4.4.

use std::collections::BTreeMap;

use desktop_contract::{AppId, AppManifest, ManifestSource, ManifestValidationError};

#[derive(Debug, thiserror::Error)]
/// Failure registering a manifest.
pub enum RegistryError {
    /// The manifest failed `AppManifest::validate`.
    #[error("manifest {id:?} failed validation: {source}")]
    InvalidManifest {
        /// The offending app id, if the manifest carried one.
        id: Option<AppId>,
        /// Underlying validation failure.
        #[source]
        source: ManifestValidationError,
    },
    /// A manifest with this id is already registered.
    #[error("app {0:?} is already registered")]
    DuplicateId(AppId),
    /// No manifest is registered under this id.
    #[error("app {0:?} is not registered")]
    NotFound(AppId),
}

#[derive(Debug, Clone, Default)]
/// Holds every known [`AppManifest`], keyed by app id.
///
/// Iteration order is the app id's lexical order (`BTreeMap`), matching the stable
/// launcher/desktop-icon ordering the teacher's `launcher_apps` helper relies on.
pub struct ManifestStore {
    manifests: BTreeMap<AppId, AppManifest>,
}

impl ManifestStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            manifests: BTreeMap::new(),
        }
    }

    /// Validates and inserts `manifest`, rejecting a duplicate id.
    pub fn register(&mut self, manifest: AppManifest) -> Result<(), RegistryError> {
        manifest
            .validate()
            .map_err(|source| RegistryError::InvalidManifest {
                id: Some(manifest.id.clone()),
                source,
            })?;
        if self.manifests.contains_key(&manifest.id) {
            return Err(RegistryError::DuplicateId(manifest.id));
        }
        self.manifests.insert(manifest.id.clone(), manifest);
        Ok(())
    }

    /// Validates and inserts `manifest`, replacing any existing entry with the same id.
    ///
    /// Used when rehydrating marketplace manifests: a manifest already reinstalled in
    /// a prior session should overwrite its stale cached copy rather than error.
    pub fn upsert(&mut self, manifest: AppManifest) -> Result<(), RegistryError> {
        manifest
            .validate()
            .map_err(|source| RegistryError::InvalidManifest {
                id: Some(manifest.id.clone()),
                source,
            })?;
        self.manifests.insert(manifest.id.clone(), manifest);
        Ok(())
    }

    /// Removes a manifest, returning an error if it was never registered.
    pub fn unregister(&mut self, id: &str) -> Result<AppManifest, RegistryError> {
        self.manifests
            .remove(id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    /// Looks up a manifest by id.
    pub fn get(&self, id: &str) -> Option<&AppManifest> {
        self.manifests.get(id)
    }

    /// Returns every registered manifest in app-id order.
    pub fn all(&self) -> impl Iterator<Item = &AppManifest> {
        self.manifests.values()
    }

    /// Returns every manifest from the given [`ManifestSource`], in app-id order.
    pub fn from_source(&self, source: ManifestSource) -> impl Iterator<Item = &AppManifest> {
        self.manifests.values().filter(move |m| m.source == source)
    }

    /// Number of registered manifests.
    pub fn len(&self) -> usize {
        self.manifests.len()
    }

    /// Whether the store holds no manifests.
    pub fn is_empty(&self) -> bool {
        self.manifests.is_empty()
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
            remote_entry: Some(format!("https://cdn.example/{id}/remoteEntry.js")),
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
    fn register_rejects_duplicate_id() {
        let mut store = ManifestStore::new();
        store.register(manifest("notes")).unwrap();
        let err = store.register(manifest("notes")).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateId(id) if id == "notes"));
    }

    #[test]
    fn upsert_replaces_existing_entry() {
        let mut store = ManifestStore::new();
        store.register(manifest("notes")).unwrap();
        let mut updated = manifest("notes");
        updated.name = "Notes v2".to_string();
        store.upsert(updated).unwrap();
        assert_eq!(store.get("notes").unwrap().name, "Notes v2");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn register_rejects_invalid_manifest() {
        let mut store = ManifestStore::new();
        let mut bad = manifest("notes");
        bad.id = String::new();
        let err = store.register(bad).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidManifest { .. }));
    }

    #[test]
    fn unregister_reports_missing_id() {
        let mut store = ManifestStore::new();
        let err = store.unregister("missing").unwrap_err();
        assert!(matches!(err, RegistryError::NotFound(id) if id == "missing"));
    }

    #[test]
    fn from_source_filters_by_provenance() {
        let mut store = ManifestStore::new();
        store.register(manifest("local-one")).unwrap();
        let mut marketplace = manifest("mp-one");
        marketplace.source = ManifestSource::Marketplace;
        store.register(marketplace).unwrap();

        let locals: Vec<_> = store.from_source(ManifestSource::Local).map(|m| m.id.clone()).collect();
        assert_eq!(locals, vec!["local-one".to_string()]);
    }
}
