//! Context menu placement and nested-submenu interaction state.
//!
//! Per `spec.md` §4.8: the menu's requested anchor position is clamped so it never
//! renders offscreen; a submenu opens either immediately via `ArrowRight` or after a
//! 150ms hover dwell; and the whole menu closes on any pointerdown outside its bounds.

/// Hover dwell time, in milliseconds, before a hovered item's submenu opens on its own.
pub const SUBMENU_HOVER_DELAY_MS: u64 = 150;

#[derive(Debug, Clone, Copy, PartialEq)]
/// Axis-aligned bounds in viewport coordinates.
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
}

impl Rect {
    /// Whether `(px, py)` falls within these bounds (half-open, matching
    /// `[x, x+w) x [y, y+h)`).
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }
}

/// Clamps a requested menu anchor so the whole `menu_w x menu_h` box stays within
/// `[0, viewport_w) x [0, viewport_h)`, flipping to the opposite side of the cursor
/// when the menu would otherwise overflow past the right or bottom edge.
pub fn clamp_menu_position(
    requested_x: f64,
    requested_y: f64,
    menu_w: f64,
    menu_h: f64,
    viewport_w: f64,
    viewport_h: f64,
) -> Rect {
    let x = if requested_x + menu_w > viewport_w {
        (requested_x - menu_w).max(0.0)
    } else {
        requested_x.max(0.0)
    };
    let y = if requested_y + menu_h > viewport_h {
        (requested_y - menu_h).max(0.0)
    } else {
        requested_y.max(0.0)
    };
    Rect {
        x,
        y,
        w: menu_w,
        h: menu_h,
    }
}

#[derive(Debug, Clone, PartialEq)]
struct PendingHover {
    path: Vec<usize>,
    started_at_ms: u64,
}

/// Interaction state for one open context menu, including any nested submenus.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextMenuState {
    bounds: Rect,
    open_submenu_paths: Vec<Vec<usize>>,
    pending_hover: Option<PendingHover>,
}

impl ContextMenuState {
    /// Opens a menu anchored (and clamped) at the given position.
    pub fn open(requested_x: f64, requested_y: f64, menu_w: f64, menu_h: f64, viewport_w: f64, viewport_h: f64) -> Self {
        Self {
            bounds: clamp_menu_position(requested_x, requested_y, menu_w, menu_h, viewport_w, viewport_h),
            open_submenu_paths: Vec::new(),
            pending_hover: None,
        }
    }

    /// The clamped root menu bounds.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Every currently-open submenu path, outermost first.
    pub fn open_submenu_paths(&self) -> &[Vec<usize>] {
        &self.open_submenu_paths
    }

    /// Whether the submenu at `path` is currently open.
    pub fn is_submenu_open(&self, path: &[usize]) -> bool {
        self.open_submenu_paths.iter().any(|p| p.as_slice() == path)
    }

    /// Begins (or restarts) the hover dwell timer for the item at `path`. A no-op if
    /// `path`'s submenu is already open.
    pub fn hover_item(&mut self, path: Vec<usize>, now_ms: u64) {
        if self.is_submenu_open(&path) {
            self.pending_hover = None;
            return;
        }
        if self.pending_hover.as_ref().map(|h| &h.path) != Some(&path) {
            self.pending_hover = Some(PendingHover { path, started_at_ms: now_ms });
        }
    }

    /// Clears the hover dwell timer, e.g. when the pointer leaves every item.
    pub fn clear_hover(&mut self) {
        self.pending_hover = None;
    }

    /// Advances time; if the pending hover has dwelt past [`SUBMENU_HOVER_DELAY_MS`],
    /// opens its submenu. Returns the path that was opened, if any.
    pub fn tick(&mut self, now_ms: u64) -> Option<Vec<usize>> {
        let hover = self.pending_hover.as_ref()?;
        if now_ms.saturating_sub(hover.started_at_ms) < SUBMENU_HOVER_DELAY_MS {
            return None;
        }
        let path = self.pending_hover.take().unwrap().path;
        self.open_submenu_at(path.clone());
        Some(path)
    }

    /// Opens the submenu at `path` immediately, bypassing the hover dwell — the
    /// `ArrowRight` keyboard path.
    pub fn open_via_arrow_right(&mut self, path: Vec<usize>) {
        self.open_submenu_at(path);
    }

    fn open_submenu_at(&mut self, path: Vec<usize>) {
        // Close any sibling/deeper submenu that isn't an ancestor of the newly-opened
        // path, so only one chain of submenus is ever open at once.
        self.open_submenu_paths.retain(|open| path.starts_with(open.as_slice()) || open.starts_with(path.as_slice()));
        if !self.open_submenu_paths.iter().any(|p| p == &path) {
            self.open_submenu_paths.push(path);
        }
        self.pending_hover = None;
    }

    /// Closes every submenu at or deeper than `depth` (0 = the root menu's immediate
    /// children), e.g. when the pointer moves back to a shallower item.
    pub fn close_submenus_at_or_deeper_than(&mut self, depth: usize) {
        self.open_submenu_paths.retain(|p| p.len() < depth + 1);
        self.pending_hover = None;
    }

    /// Whether a pointerdown at `(px, py)` falls outside the root menu and every open
    /// submenu, and should therefore close the whole menu.
    pub fn is_outside_pointerdown(&self, px: f64, py: f64, submenu_bounds: &[Rect]) -> bool {
        if self.bounds.contains(px, py) {
            return false;
        }
        !submenu_bounds.iter().any(|b| b.contains(px, py))
    }
}
