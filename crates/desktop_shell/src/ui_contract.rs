//! Interface contracts for the thin UI surfaces named in `spec.md` §4.9 (window
//! header, taskbar, launcher/command palette, context menu). These surfaces are
//! explicitly "listed only for interface" — out of implementation scope — so this
//! module documents the contracts an external UI layer must honor as trait methods
//! and constants rather than building the DOM components themselves, the same way
//! `SPEC_FULL.md` §4.9 scopes them.

use window_store::WindowId;

/// A control rendered inside a window header that must not trigger the header's own
/// drag-start handling when clicked (`spec.md` §4.9a: "the header must not swallow
/// clicks on its child control buttons").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderControl {
    /// Minimize button.
    Minimize,
    /// Maximize/restore button.
    MaximizeRestore,
    /// Close button.
    Close,
}

/// Contract a window header UI must implement: pointer events that land on a
/// [`HeaderControl`] are swallowed by that control and never reach the header's drag
/// handler; everything else starts a drag per `interaction_engine`'s drag-inhibition
/// rules.
pub trait WindowChrome {
    /// Whether a pointerdown at this header position hit a child control rather than
    /// the draggable header background.
    fn hit_test_control(&self, header_x: f64, header_y: f64) -> Option<HeaderControl>;
}

/// Outcome of clicking a taskbar entry, per `spec.md` §4.9b: "the taskbar button for
/// the focused window toggles minimize on re-click; for a minimized window, it
/// restores focus".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskbarClickOutcome {
    /// Window was already focused and not minimized: minimize it.
    Minimize(WindowId),
    /// Window was minimized: restore and focus it.
    RestoreAndFocus(WindowId),
    /// Window was neither focused nor minimized: just focus it.
    Focus(WindowId),
}

/// Computes the taskbar toggle outcome for a click on `clicked`'s entry, given the
/// currently focused window id and whether `clicked` is minimized.
///
/// Pure function so a taskbar UI layer only needs to supply the three booleans this
/// crate already tracks (`window_store::Window::lifecycle_state`,
/// `WindowStore::focused_window_id`) and never reimplements the toggle rule itself.
pub fn taskbar_click_outcome(clicked: WindowId, focused: Option<WindowId>, clicked_is_minimized: bool) -> TaskbarClickOutcome {
    if clicked_is_minimized {
        return TaskbarClickOutcome::RestoreAndFocus(clicked);
    }
    if focused == Some(clicked) {
        return TaskbarClickOutcome::Minimize(clicked);
    }
    TaskbarClickOutcome::Focus(clicked)
}

/// Hover delay (ms) before a context-menu submenu opens on hover, re-exported from
/// `desktop_services` so a UI layer doesn't need to depend on that crate directly just
/// for this one constant (`spec.md` §4.9d).
pub use desktop_services::context_menu::SUBMENU_HOVER_DELAY_MS;

/// Modal overlay contract shared by the launcher and command palette (`spec.md`
/// §4.9c): both must trap focus within the overlay and cycle entries with arrow keys.
pub trait ModalOverlay {
    /// Moves the active-entry cursor by `delta` (±1), wrapping at the ends.
    fn cycle(&mut self, delta: i32);

    /// Whether focus is currently trapped inside this overlay.
    fn is_focus_trapped(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicking_the_focused_unminimized_entry_minimizes_it() {
        let id = WindowId(1);
        assert_eq!(taskbar_click_outcome(id, Some(id), false), TaskbarClickOutcome::Minimize(id));
    }

    #[test]
    fn clicking_a_minimized_entry_restores_and_focuses_regardless_of_focus_state() {
        let id = WindowId(2);
        assert_eq!(taskbar_click_outcome(id, None, true), TaskbarClickOutcome::RestoreAndFocus(id));
        assert_eq!(taskbar_click_outcome(id, Some(id), true), TaskbarClickOutcome::RestoreAndFocus(id));
    }

    #[test]
    fn clicking_an_unfocused_unminimized_entry_just_focuses_it() {
        let id = WindowId(3);
        assert_eq!(taskbar_click_outcome(id, Some(WindowId(9)), false), TaskbarClickOutcome::Focus(id));
    }
}
