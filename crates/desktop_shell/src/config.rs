//! Tunable constants and the runtime-provided viewport/taskbar config (`spec.md` §2,
//! §4.1/§4.2). Mirrors the teacher's `pub const` cluster at the top of
//! `window_manager.rs` — the geometry constants that belong to a single pure crate
//! (`CORNER_SIZE`, `MIN_VISIBLE_AREA`, `CASCADE_STEP`) already live there; this module
//! only holds the cross-cutting defaults that `desktop_shell` itself is responsible
//! for supplying at boot.

/// Taskbar height in pixels assumed when the host page hasn't measured its own chrome
/// yet (used for the very first `desktop_viewport_rect` query before layout settles).
pub const DEFAULT_TASKBAR_HEIGHT_PX: f64 = 48.0;

/// Sync-storage key prefix apps are scoped under (`spec.md` §6), re-exported here so
/// callers wiring `desktop_shell` don't need to reach into `scoped_storage` directly.
pub const APP_STATE_PREFIX: &str = scoped_storage::SYNC_KEY_PREFIX;

/// Viewport and chrome measurements the shell needs at boot and on resize.
///
/// Everything here is legitimately runtime-provided (the browser viewport changes
/// size; the taskbar's rendered height is a layout fact, not a constant) unlike the
/// fixed geometry thresholds owned by `snap_zones`/`interaction_engine`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesktopConfig {
    /// Current viewport width in pixels.
    pub viewport_w: f64,
    /// Current viewport height in pixels.
    pub viewport_h: f64,
    /// Current taskbar height in pixels.
    pub taskbar_h: f64,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            viewport_w: 1920.0,
            viewport_h: 1080.0,
            taskbar_h: DEFAULT_TASKBAR_HEIGHT_PX,
        }
    }
}

impl DesktopConfig {
    /// The viewport rect windows may occupy, with the taskbar strip excluded from the
    /// bottom (`spec.md` §4.1 "clamps initial position ... [0, vh - taskbarHeight)").
    pub fn usable_rect(&self) -> window_store::Rect {
        window_store::Rect {
            x: 0.0,
            y: 0.0,
            w: self.viewport_w,
            h: (self.viewport_h - self.taskbar_h).max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usable_rect_excludes_the_taskbar_strip() {
        let config = DesktopConfig { viewport_w: 1920.0, viewport_h: 1080.0, taskbar_h: 48.0 };
        let rect = config.usable_rect();
        assert_eq!(rect.w, 1920.0);
        assert_eq!(rect.h, 1032.0);
    }

    #[test]
    fn usable_rect_never_goes_negative_when_taskbar_exceeds_viewport() {
        let config = DesktopConfig { viewport_w: 800.0, viewport_h: 40.0, taskbar_h: 48.0 };
        assert_eq!(config.usable_rect().h, 0.0);
    }
}
