//! Per-app context menu service: a thin pass-through to [`ContextMenuState`]
//! (`spec.md` §4.8/§4.9). The menu instance itself has no app-level state worth
//! gating — an app may only ever open a menu anchored within its own window — so this
//! service is a stateless convenience re-export rather than a store-backed facade.

pub use desktop_services::{ContextMenuState, SUBMENU_HOVER_DELAY_MS};

/// Opens a context menu anchored (and clamped to viewport) at the given position.
pub fn open_context_menu(requested_x: f64, requested_y: f64, menu_w: f64, menu_h: f64, viewport_w: f64, viewport_h: f64) -> ContextMenuState {
    ContextMenuState::open(requested_x, requested_y, menu_w, menu_h, viewport_w, viewport_h)
}
