//! Header-drag session state: pointer/window origin snapshot, viewport containment,
//! and snap-zone preview tracking.
//!
//! The rAF coalescing and global pointer listener wiring described in `spec.md` §4.3
//! is browser glue that belongs to `desktop_shell`; this crate owns the pure per-frame
//! transition so it stays unit-testable off-browser, matching the split the teacher
//! keeps between `window_manager::snap_window_to_viewport_edge` (pure) and
//! `desktop_runtime::host` (effectful).

use snap_zones::{snap_zone_at_position, SnapPosition, SnapZone};
use window_store::{Rect, WindowId};

/// Minimum area (px) of a dragged window that must remain inside the viewport on
/// every axis, per `spec.md` §4.3.
pub const MIN_VISIBLE_AREA: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Reason a drag gesture never starts.
pub enum DragInhibitReason {
    /// The pointer-down event used a button other than primary/left.
    NonPrimaryButton,
    /// The pointer started on a child chrome control (e.g. close/minimize button).
    StartedOnChildControl,
    /// The target window is currently maximized.
    WindowMaximized,
}

/// Returns the reason a drag should be inhibited, if any, per `spec.md` §4.3.
pub fn drag_inhibited(
    is_primary_button: bool,
    started_on_child_control: bool,
    window_is_maximized: bool,
) -> Option<DragInhibitReason> {
    if !is_primary_button {
        return Some(DragInhibitReason::NonPrimaryButton);
    }
    if started_on_child_control {
        return Some(DragInhibitReason::StartedOnChildControl);
    }
    if window_is_maximized {
        return Some(DragInhibitReason::WindowMaximized);
    }
    None
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Snapshot taken at pointer-down, used to derive every subsequent frame's geometry.
pub struct DragSession {
    /// Window being dragged.
    pub window_id: WindowId,
    /// Pointer viewport position at drag start.
    pub pointer_start_x: f64,
    /// Pointer viewport position at drag start.
    pub pointer_start_y: f64,
    /// Window origin at drag start.
    pub window_start_x: f64,
    /// Window origin at drag start.
    pub window_start_y: f64,
    /// Window size, held fixed for the duration of a drag.
    pub width: f64,
    /// Window size, held fixed for the duration of a drag.
    pub height: f64,
}

impl DragSession {
    /// Starts a new drag session from a pointer-down snapshot.
    pub fn start(
        window_id: WindowId,
        pointer_x: f64,
        pointer_y: f64,
        window_rect: Rect,
    ) -> Self {
        Self {
            window_id,
            pointer_start_x: pointer_x,
            pointer_start_y: pointer_y,
            window_start_x: window_rect.x,
            window_start_y: window_rect.y,
            width: window_rect.w,
            height: window_rect.h,
        }
    }

    /// Computes the window origin for the current pointer position, constrained so at
    /// least [`MIN_VISIBLE_AREA`] of the window stays inside `[0, vw) x [0, vh)`.
    pub fn origin_at(&self, pointer_x: f64, pointer_y: f64, viewport_w: f64, viewport_h: f64) -> (f64, f64) {
        let dx = pointer_x - self.pointer_start_x;
        let dy = pointer_y - self.pointer_start_y;
        let raw_x = self.window_start_x + dx;
        let raw_y = self.window_start_y + dy;

        let min_x = MIN_VISIBLE_AREA - self.width;
        let max_x = viewport_w - MIN_VISIBLE_AREA;
        let min_y = 0.0;
        let max_y = viewport_h - MIN_VISIBLE_AREA;

        let x = raw_x.clamp(min_x.min(max_x), max_x.max(min_x));
        let y = raw_y.clamp(min_y.min(max_y), max_y.max(min_y));
        (x, y)
    }

    /// Computes the active snap zone, if any, for the current pointer position.
    pub fn snap_zone_at(&self, pointer_x: f64, pointer_y: f64, zones: &[SnapZone]) -> Option<SnapPosition> {
        snap_zone_at_position(pointer_x, pointer_y, zones)
    }
}

#[derive(Debug, Default)]
/// Tracks the currently-previewed snap zone so callers only fire a preview callback
/// when the active zone actually changes, per `spec.md` §4.3.
pub struct SnapPreviewTracker {
    current: Option<SnapPosition>,
}

impl SnapPreviewTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Returns the previously-previewed zone.
    pub fn current(&self) -> Option<SnapPosition> {
        self.current
    }

    /// Updates the tracker with the latest hit-test result, returning `Some(zone)`
    /// only on a transition (including transitions to/from `None`); returns `None`
    /// when the active zone is unchanged from the last call.
    pub fn update(&mut self, zone: Option<SnapPosition>) -> Option<Option<SnapPosition>> {
        if zone == self.current {
            return None;
        }
        self.current = zone;
        Some(zone)
    }

    /// Clears the tracker, as happens on pointer-up or unmount.
    pub fn clear(&mut self) {
        self.current = None;
    }
}
