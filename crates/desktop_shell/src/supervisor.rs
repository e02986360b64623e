//! Async suspension-point supervisor (`spec.md` §5, §9 "Promises and cancellation").
//!
//! Every `await` point named in `spec.md` §5 (remote app fetch/compile, IndexedDB
//! ops, `requestPermission` resolution, the bridge round-trip) runs through this
//! supervisor rather than a bare `spawn_local`, so a future whose owner was torn down
//! mid-flight never mutates a dead component's state. Grounded on the teacher's
//! `desktop_runtime::host::run_runtime_effect`, which wraps every side-effecting
//! `spawn_local` call in a `logging::warn!`-on-error closure; here the wrapping also
//! checks a cancellation flag before running the completion callback at all.

use std::cell::Cell;
use std::rc::Rc;

/// A cheaply-cloned cancellation flag shared between an owner (a mounted window or
/// app instance) and every in-flight request it started.
///
/// Cloning shares the same underlying flag: calling [`CancelToken::cancel`] on any
/// clone marks every clone cancelled.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    /// Creates a fresh, not-yet-cancelled token.
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(false)))
    }

    /// Marks this token (and every clone of it) cancelled.
    pub fn cancel(&self) {
        self.0.set(true);
    }

    /// Whether [`CancelToken::cancel`] has been called.
    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Spawns `future`, invoking `on_complete` with its output unless `token` was
/// cancelled before the future resolved. Mirrors the "late resolution after unmount"
/// guard `spec.md` §5 requires of async storage reads, generalized to every
/// suspension point in §5 rather than just storage.
#[cfg(target_arch = "wasm32")]
pub fn spawn_supervised<F, T, C>(token: CancelToken, future: F, on_complete: C)
where
    F: std::future::Future<Output = T> + 'static,
    C: FnOnce(T) + 'static,
{
    wasm_bindgen_futures::spawn_local(async move {
        let output = future.await;
        if !token.is_cancelled() {
            on_complete(output);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_fresh_token_is_not_cancelled() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
    }

    #[test]
    fn cancelling_one_clone_cancels_every_clone() {
        let token = CancelToken::new();
        let owned_by_request = token.clone();
        token.cancel();
        assert!(owned_by_request.is_cancelled());
    }
}
