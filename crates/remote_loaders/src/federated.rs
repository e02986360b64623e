//! Module-federation style remote loading: a plain in-process import with a
//! lazily-populated module cache.
//!
//! Per `spec.md` §4.5, a successful fetch is cached so remounting the same app (e.g.
//! reopening a closed window) does not refetch; an explicit retry after a failure
//! clears the cache so the next mount attempt fetches fresh rather than reusing
//! whatever partial/stale handle caused the failure.

use std::collections::BTreeSet;

use crate::error::LoaderError;
use crate::mount::{LoadState, MountedApp};

/// Resolved handle to a federated remote module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FederatedModuleHandle {
    /// The remote entry URL the module was fetched from.
    pub remote_entry: String,
    /// Export names the remote module advertises.
    pub exports: BTreeSet<String>,
}

/// Performs the actual dynamic import/fetch of a federated remote.
///
/// Kept as a trait rather than a concrete `wasm-bindgen` call so [`FederatedLoader`]'s
/// caching and retry semantics stay unit-testable off-browser; `desktop_shell` supplies
/// the real browser-side fetcher.
pub trait FederatedFetcher {
    /// Fetches and instantiates the remote module at `remote_entry`.
    fn fetch(&self, remote_entry: &str) -> Result<FederatedModuleHandle, LoaderError>;
}

/// Federated-strategy loader for a single app.
pub struct FederatedLoader<F: FederatedFetcher> {
    remote_entry: String,
    entrypoint: String,
    fetcher: F,
    cache: Option<FederatedModuleHandle>,
    state: LoadState,
}

impl<F: FederatedFetcher> FederatedLoader<F> {
    /// Creates a loader for `remote_entry`, requiring the fetched module to export
    /// `entrypoint`.
    pub fn new(remote_entry: impl Into<String>, entrypoint: impl Into<String>, fetcher: F) -> Self {
        Self {
            remote_entry: remote_entry.into(),
            entrypoint: entrypoint.into(),
            fetcher,
            cache: None,
            state: LoadState::Idle,
        }
    }

    /// The cached module handle, if a fetch has ever succeeded since the last clear.
    pub fn cached(&self) -> Option<&FederatedModuleHandle> {
        self.cache.as_ref()
    }
}

impl<F: FederatedFetcher> MountedApp for FederatedLoader<F> {
    fn state(&self) -> &LoadState {
        &self.state
    }

    fn mount(&mut self) -> Result<(), LoaderError> {
        match self.state {
            LoadState::Ready => return Ok(()),
            LoadState::Loading => return Err(LoaderError::AlreadyMounted),
            _ => {}
        }
        self.state = LoadState::Loading;

        if let Some(cached) = &self.cache {
            if cached.exports.contains(&self.entrypoint) {
                self.state = LoadState::Ready;
                return Ok(());
            }
        }

        let handle = match self.fetcher.fetch(&self.remote_entry) {
            Ok(handle) => handle,
            Err(err) => {
                self.state = LoadState::Error(err.clone());
                return Err(err);
            }
        };
        if !handle.exports.contains(&self.entrypoint) {
            let err = LoaderError::MissingEntrypoint(self.entrypoint.clone());
            self.state = LoadState::Error(err.clone());
            return Err(err);
        }
        self.cache = Some(handle);
        self.state = LoadState::Ready;
        Ok(())
    }

    fn unmount(&mut self) {
        self.state = LoadState::Idle;
    }

    fn retry(&mut self) -> Result<(), LoaderError> {
        if matches!(self.state, LoadState::Loading | LoadState::Ready) {
            return Err(LoaderError::StillMounted);
        }
        self.cache = None;
        self.unmount();
        self.mount()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingFetcher {
        calls: Cell<u32>,
        fail_until: u32,
        exports: BTreeSet<String>,
    }

    impl FederatedFetcher for CountingFetcher {
        fn fetch(&self, remote_entry: &str) -> Result<FederatedModuleHandle, LoaderError> {
            let n = self.calls.get() + 1;
            self.calls.set(n);
            if n <= self.fail_until {
                return Err(LoaderError::FetchFailed("network".to_string()));
            }
            Ok(FederatedModuleHandle {
                remote_entry: remote_entry.to_string(),
                exports: self.exports.clone(),
            })
        }
    }

    fn exports_with(name: &str) -> BTreeSet<String> {
        let mut set = BTreeSet::new();
        set.insert(name.to_string());
        set
    }

    #[test]
    fn successful_mount_populates_cache() {
        let fetcher = CountingFetcher {
            calls: Cell::new(0),
            fail_until: 0,
            exports: exports_with("App"),
        };
        let mut loader = FederatedLoader::new("https://cdn/app.js", "App", fetcher);
        loader.mount().unwrap();
        assert_eq!(loader.state(), &LoadState::Ready);
        assert!(loader.cached().is_some());
        assert_eq!(loader.fetcher.calls.get(), 1);
    }

    #[test]
    fn remount_after_unmount_reuses_cache_without_refetching() {
        let fetcher = CountingFetcher {
            calls: Cell::new(0),
            fail_until: 0,
            exports: exports_with("App"),
        };
        let mut loader = FederatedLoader::new("https://cdn/app.js", "App", fetcher);
        loader.mount().unwrap();
        loader.unmount();
        loader.mount().unwrap();
        assert_eq!(loader.fetcher.calls.get(), 1);
    }

    #[test]
    fn retry_clears_cache_and_refetches() {
        let fetcher = CountingFetcher {
            calls: Cell::new(0),
            fail_until: 1,
            exports: exports_with("App"),
        };
        let mut loader = FederatedLoader::new("https://cdn/app.js", "App", fetcher);
        assert!(loader.mount().is_err());
        assert!(matches!(loader.state(), LoadState::Error(_)));
        loader.retry().unwrap();
        assert_eq!(loader.state(), &LoadState::Ready);
        assert_eq!(loader.fetcher.calls.get(), 2);
    }

    #[test]
    fn missing_entrypoint_surfaces_as_error() {
        let fetcher = CountingFetcher {
            calls: Cell::new(0),
            fail_until: 0,
            exports: exports_with("Other"),
        };
        let mut loader = FederatedLoader::new("https://cdn/app.js", "App", fetcher);
        let err = loader.mount().unwrap_err();
        assert_eq!(err, LoaderError::MissingEntrypoint("App".to_string()));
    }
}
