//! Drag, resize, and keyboard-dispatch transition logic.
//!
//! See `spec.md` §4.3. The rAF coalescing, pointer listener wiring, and global cursor
//! override are `desktop_shell`-side browser glue; this crate owns the pure per-frame
//! transitions so they stay unit-testable off-browser, matching the split the teacher
//! keeps between `window_manager.rs` (pure) and `desktop_runtime::host` (effectful).

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod drag;
mod resize;
mod shortcuts;

pub use drag::{DragInhibitReason, DragSession, SnapPreviewTracker, MIN_VISIBLE_AREA};
pub use resize::{apply_resize_delta, ResizeDirection};
pub use shortcuts::{
    ShortcutActionId, ShortcutBinding, ShortcutRegistry, ShortcutScope, CASCADE, CLOSE_WINDOW,
    FOCUS_NEXT, FOCUS_PREVIOUS, MINIMIZE_ALL, OPEN_COMMAND_PALETTE, OPEN_LAUNCHER,
    TILE_HORIZONTAL, TILE_VERTICAL,
};

#[cfg(test)]
mod tests {
    use super::*;
    use snap_zones::compute_snap_zones;
    use window_store::{Rect, WindowId};

    #[test]
    fn drag_then_pointer_up_commits_active_snap_zone() {
        // Scenario 5 from spec.md §8: drag a normal window from header (100,50) with
        // pointer at (400,300) -> (5,540) on a 1920x1080 viewport, taskbarH=48.
        let zones = compute_snap_zones(1920.0, 1080.0, 48.0);
        let session = DragSession::start(WindowId(1), 400.0, 300.0, Rect::new(100.0, 50.0, 400.0, 300.0));

        // The snap zone is hit-tested against the cursor position itself, not the
        // (possibly clamped) window origin.
        let snap = session.snap_zone_at(5.0, 540.0, &zones);
        assert_eq!(snap, Some(snap_zones::SnapPosition::Left));

        let left_zone = zones
            .iter()
            .find(|z| z.position == snap_zones::SnapPosition::Left)
            .unwrap();
        assert_eq!(left_zone.bounds.x, 0.0);
        assert_eq!(left_zone.bounds.y, 0.0);
        assert_eq!(left_zone.bounds.w, 960.0);
    }
}
