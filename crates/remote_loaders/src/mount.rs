//! Uniform mount lifecycle shared by every loading strategy.
//!
//! Each strategy (`federated`, `sandbox`, `wasm_loader`) produces a value implementing
//! [`MountedApp`]; the window chrome that hosts a remote app only ever talks to this
//! trait object, never to a strategy-specific type, mirroring how the teacher's
//! `AppHost` façade hides leptos callback plumbing behind one narrow surface.

use crate::error::LoaderError;

/// Loading lifecycle of a single mounted app instance, driven by the window chrome's
/// placeholder / error-panel / retry UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Mount has not been attempted yet.
    Idle,
    /// Fetch/instantiate is in flight; the window shows a loading placeholder.
    Loading,
    /// The app mounted successfully and is live.
    Ready,
    /// Mounting failed; the window shows an error panel with a retry affordance. The
    /// failure never tears down the enclosing window itself (`spec.md` §4.5).
    Error(LoaderError),
}

/// A remote app instance that has been (or is being) mounted into a window.
///
/// Implementors own whatever strategy-specific resources mounting allocated (a cached
/// federated module handle, a live iframe element, an instantiated WASM instance) and
/// release them on [`MountedApp::unmount`].
pub trait MountedApp {
    /// Current lifecycle state.
    fn state(&self) -> &LoadState;

    /// Attempts to mount the app. A no-op returning `Ok(())` if already [`LoadState::Ready`];
    /// returns [`LoaderError::AlreadyMounted`] if called again while [`LoadState::Loading`].
    fn mount(&mut self) -> Result<(), LoaderError>;

    /// Tears down any live resources and returns to [`LoadState::Idle`].
    fn unmount(&mut self);

    /// Clears a failed load and attempts to mount again. Strategies that cache a
    /// loader handle (e.g. [`crate::federated::FederatedLoader`]) drop that cache here
    /// so the retry re-fetches rather than re-surfacing the same stale failure.
    fn retry(&mut self) -> Result<(), LoaderError> {
        if matches!(self.state(), LoadState::Loading | LoadState::Ready) {
            return Err(LoaderError::StillMounted);
        }
        self.unmount();
        self.mount()
    }
}
