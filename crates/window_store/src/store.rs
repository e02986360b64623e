//! The authoritative window store: id allocation, focus stack, and bulk layout ops.

use std::collections::HashMap;

use crate::model::{LifecycleState, OpenWindowRequest, Rect, Window, WindowFlags, WindowId, WindowMeta};

/// Fallback width used when neither the open request nor a manifest supplies one.
pub const FALLBACK_WIDTH: f64 = 500.0;
/// Fallback height used when neither the open request nor a manifest supplies one.
pub const FALLBACK_HEIGHT: f64 = 400.0;

/// Per-step pixel offset used by the open-window cascade and by [`WindowStore::cascade_windows`].
pub const CASCADE_STEP: f64 = 32.0;
/// Number of cascade steps before the offset wraps back to the origin.
pub const CASCADE_WRAP: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq)]
/// Layout direction for [`WindowStore::tile_windows`].
pub enum TileMode {
    /// Windows stacked side by side, full viewport height each.
    Horizontal,
    /// Windows stacked top to bottom, full viewport width each.
    Vertical,
    /// Windows arranged in a `ceil(sqrt(n))`-column grid.
    Grid,
}

/// Authoritative store for every open window: geometry, z-order, focus stack, and
/// lifecycle state. Mutating operations complete in a single call and never leave
/// partially-applied state visible to a reader, matching `spec.md` §4.1's atomicity
/// requirement for `setBounds`/`minimizeAll`/`closeAll`.
#[derive(Debug, Clone, Default)]
pub struct WindowStore {
    windows: HashMap<WindowId, Window>,
    /// Ordered least-recently-focused (front) to most-recently-focused (back).
    focus_stack: Vec<WindowId>,
    next_id: u64,
}

impl WindowStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            windows: HashMap::new(),
            focus_stack: Vec::new(),
            next_id: 1,
        }
    }

    /// Returns the number of currently-open windows.
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Returns whether the store holds no windows.
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Returns the window record for `id`, if open.
    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(&id)
    }

    /// Returns every open window, in no particular order.
    pub fn windows(&self) -> impl Iterator<Item = &Window> {
        self.windows.values()
    }

    /// Returns the id of the currently-focused window: the most-recently-focused
    /// entry in the focus stack that is not minimized, scanning back to front.
    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.focus_stack.iter().rev().copied().find(|id| {
            self.windows
                .get(id)
                .map(|w| !matches!(w.state, LifecycleState::Minimized))
                .unwrap_or(false)
        })
    }

    /// Returns the focus stack, back-to-front (index 0 = least recently focused).
    pub fn focus_stack(&self) -> &[WindowId] {
        &self.focus_stack
    }

    fn max_z_index(&self) -> u32 {
        self.windows.values().map(|w| w.z_index).max().unwrap_or(0)
    }

    /// Opens a new window, assigning it the top z-index and focus.
    ///
    /// Geometry is taken from the request, falling back to `500x400`
    /// ([`FALLBACK_WIDTH`]/[`FALLBACK_HEIGHT`]) when unspecified, then clamped fully
    /// inside `[0, vw) x [0, vh - taskbar_h)` and cascaded by a constant offset seeded
    /// by the current open-window count, per `spec.md` §4.1.
    pub fn open_window(
        &mut self,
        req: OpenWindowRequest,
        viewport_w: f64,
        viewport_h: f64,
        taskbar_h: f64,
        now_ms: u64,
    ) -> WindowId {
        let id = WindowId(self.next_id);
        self.next_id += 1;

        let (w, h) = req.constraints.clamp(
            req.width.unwrap_or(FALLBACK_WIDTH),
            req.height.unwrap_or(FALLBACK_HEIGHT),
        );

        let available_h = (viewport_h - taskbar_h).max(0.0);
        let step = (self.windows.len() as u32 % CASCADE_WRAP) as f64;
        let mut x = CASCADE_STEP + step * CASCADE_STEP;
        let mut y = CASCADE_STEP + step * CASCADE_STEP;
        x = x.min((viewport_w - w).max(0.0)).max(0.0);
        y = y.min((available_h - h).max(0.0)).max(0.0);

        let z_index = self.max_z_index() + 1;
        let window = Window {
            id,
            app_id: req.app_id,
            title: req.title,
            rect: Rect::new(x, y, w, h),
            previous_bounds: None,
            constraints: req.constraints,
            z_index,
            state: LifecycleState::Normal,
            flags: req.flags,
            props: req.props,
            meta: WindowMeta {
                icon: req.icon,
                created_at_ms: now_ms,
                focused_at_ms: now_ms,
            },
        };
        self.windows.insert(id, window);
        self.focus_stack.push(id);
        id
    }

    /// Closes a window, removing it from the store and the focus stack.
    ///
    /// Returns `false` if `id` was not open.
    pub fn close_window(&mut self, id: WindowId) -> bool {
        if self.windows.remove(&id).is_none() {
            return false;
        }
        self.focus_stack.retain(|w| *w != id);
        true
    }

    /// Closes every open window in one atomic mutation.
    pub fn close_all(&mut self) {
        self.windows.clear();
        self.focus_stack.clear();
    }

    /// Moves `id` to the front of the focus stack and assigns it a strictly higher
    /// z-index than every other window. No-op (but still returns `true`) if `id` is
    /// already focused.
    pub fn focus_window(&mut self, id: WindowId, now_ms: u64) -> bool {
        if !self.windows.contains_key(&id) {
            return false;
        }
        self.focus_stack.retain(|w| *w != id);
        self.focus_stack.push(id);
        let z = self.max_z_index() + 1;
        if let Some(window) = self.windows.get_mut(&id) {
            window.z_index = z;
            window.meta.focused_at_ms = now_ms;
        }
        true
    }

    fn cycle_focus(&mut self, now_ms: u64, forward: bool) -> Option<WindowId> {
        let mut ids: Vec<WindowId> = self.windows.keys().copied().collect();
        if ids.is_empty() {
            return None;
        }
        ids.sort();

        let visible: Vec<WindowId> = ids
            .iter()
            .copied()
            .filter(|id| {
                self.windows
                    .get(id)
                    .map(|w| !matches!(w.state, LifecycleState::Minimized))
                    .unwrap_or(false)
            })
            .collect();
        if visible.is_empty() {
            return None;
        }

        let current = self.focused_window_id();
        let next = match current.and_then(|c| visible.iter().position(|id| *id == c)) {
            Some(pos) => {
                let len = visible.len();
                let offset = if forward { 1 } else { len - 1 };
                visible[(pos + offset) % len]
            }
            None => visible[0],
        };
        self.focus_window(next, now_ms);
        Some(next)
    }

    /// Focuses the next window after the currently-focused one, in ascending id
    /// order among non-minimized windows, wrapping around. Returns the newly
    /// focused id, or `None` if no window can be focused.
    pub fn focus_next(&mut self, now_ms: u64) -> Option<WindowId> {
        self.cycle_focus(now_ms, true)
    }

    /// Mirror of [`WindowStore::focus_next`] cycling backward.
    pub fn focus_previous(&mut self, now_ms: u64) -> Option<WindowId> {
        self.cycle_focus(now_ms, false)
    }

    /// Minimizes `id`, capturing its current bounds so [`WindowStore::restore_window`]
    /// can reinstate them verbatim. Does not reorder the focus stack.
    pub fn minimize_window(&mut self, id: WindowId) -> bool {
        let Some(window) = self.windows.get_mut(&id) else {
            return false;
        };
        if matches!(window.state, LifecycleState::Minimized) {
            return true;
        }
        window.previous_bounds = Some(window.rect);
        window.state = LifecycleState::Minimized;
        true
    }

    /// Minimizes every open window in one atomic mutation.
    pub fn minimize_all(&mut self) {
        for window in self.windows.values_mut() {
            if !matches!(window.state, LifecycleState::Minimized) {
                window.previous_bounds = Some(window.rect);
                window.state = LifecycleState::Minimized;
            }
        }
    }

    /// Maximizes `id` to fill `[0, vw) x [0, vh - taskbar_h)`, capturing its prior
    /// bounds for [`WindowStore::restore_window`]/[`WindowStore::toggle_maximize`].
    pub fn maximize_window(&mut self, id: WindowId, viewport_w: f64, viewport_h: f64, taskbar_h: f64) -> bool {
        let Some(window) = self.windows.get_mut(&id) else {
            return false;
        };
        if !matches!(window.state, LifecycleState::Maximized) {
            window.previous_bounds = Some(window.rect);
        }
        window.rect = Rect::new(0.0, 0.0, viewport_w, (viewport_h - taskbar_h).max(0.0));
        window.state = LifecycleState::Maximized;
        true
    }

    /// Restores `id` to its `previous_bounds`, if any, and clears the maximized /
    /// minimized lifecycle state back to normal.
    pub fn restore_window(&mut self, id: WindowId) -> bool {
        let Some(window) = self.windows.get_mut(&id) else {
            return false;
        };
        if let Some(bounds) = window.previous_bounds.take() {
            window.rect = bounds;
        }
        window.state = LifecycleState::Normal;
        true
    }

    /// Maximizes `id` if not currently maximized, otherwise restores it. Mirrors a
    /// titlebar double-click / maximize-button toggle.
    pub fn toggle_maximize(&mut self, id: WindowId, viewport_w: f64, viewport_h: f64, taskbar_h: f64) -> bool {
        match self.windows.get(&id).map(|w| w.state) {
            Some(LifecycleState::Maximized) => self.restore_window(id),
            Some(_) => self.maximize_window(id, viewport_w, viewport_h, taskbar_h),
            None => false,
        }
    }

    /// Sets only the position, leaving size untouched. Position is not clamped to
    /// constraints (viewport containment during drag is the interaction layer's
    /// concern, per `spec.md` §4.1/§4.3).
    pub fn update_position(&mut self, id: WindowId, x: f64, y: f64) -> bool {
        let Some(window) = self.windows.get_mut(&id) else {
            return false;
        };
        window.rect.x = x;
        window.rect.y = y;
        true
    }

    /// Sets only the size, clamped to the window's [`crate::model::SizeConstraints`].
    pub fn update_size(&mut self, id: WindowId, w: f64, h: f64) -> bool {
        let Some(window) = self.windows.get_mut(&id) else {
            return false;
        };
        let (w, h) = window.constraints.clamp(w, h);
        window.rect.w = w;
        window.rect.h = h;
        true
    }

    /// Atomically sets the full bounds, clamping width/height to constraints.
    pub fn set_bounds(&mut self, id: WindowId, bounds: Rect) -> bool {
        let Some(window) = self.windows.get_mut(&id) else {
            return false;
        };
        let (w, h) = window.constraints.clamp(bounds.w, bounds.h);
        window.rect = Rect::new(bounds.x, bounds.y, w, h);
        true
    }

    /// Arranges every open, non-minimized window per `mode` inside
    /// `[0, vw) x [0, vh - taskbar_h)`. Minimized windows are left untouched.
    ///
    /// `Grid` uses `ceil(sqrt(n))` columns, spreading any remainder across the final
    /// row, per `spec.md` §4.1.
    pub fn tile_windows(&mut self, mode: TileMode, viewport_w: f64, viewport_h: f64, taskbar_h: f64) {
        let mut ids: Vec<WindowId> = self
            .windows
            .iter()
            .filter(|(_, w)| !matches!(w.state, LifecycleState::Minimized))
            .map(|(id, _)| *id)
            .collect();
        ids.sort();
        let n = ids.len();
        if n == 0 {
            return;
        }
        let available_h = (viewport_h - taskbar_h).max(0.0);

        match mode {
            TileMode::Horizontal => {
                let w = viewport_w / n as f64;
                for (i, id) in ids.into_iter().enumerate() {
                    self.place(id, i as f64 * w, 0.0, w, available_h);
                }
            }
            TileMode::Vertical => {
                let h = available_h / n as f64;
                for (i, id) in ids.into_iter().enumerate() {
                    self.place(id, 0.0, i as f64 * h, viewport_w, h);
                }
            }
            TileMode::Grid => {
                let cols = (n as f64).sqrt().ceil() as usize;
                let rows = (n + cols - 1) / cols;
                let cell_w = viewport_w / cols as f64;
                let cell_h = available_h / rows as f64;
                let last_row = rows - 1;
                let last_row_count = n - last_row * cols;
                let last_row_cell_w = viewport_w / last_row_count as f64;
                for (i, id) in ids.into_iter().enumerate() {
                    let col = i % cols;
                    let row = i / cols;
                    if row == last_row && last_row_count < cols {
                        self.place(
                            id,
                            col as f64 * last_row_cell_w,
                            row as f64 * cell_h,
                            last_row_cell_w,
                            cell_h,
                        );
                    } else {
                        self.place(
                            id,
                            col as f64 * cell_w,
                            row as f64 * cell_h,
                            cell_w,
                            cell_h,
                        );
                    }
                }
            }
        }
    }

    fn place(&mut self, id: WindowId, x: f64, y: f64, w: f64, h: f64) {
        if let Some(window) = self.windows.get_mut(&id) {
            let (cw, ch) = window.constraints.clamp(w, h);
            window.rect = Rect::new(x, y, cw, ch);
            window.state = LifecycleState::Normal;
            window.previous_bounds = None;
        }
    }

    /// Cascades every open, non-minimized window from the top-left corner of the
    /// viewport by a constant per-step offset, clamped so each window stays fully
    /// on screen.
    pub fn cascade_windows(&mut self, viewport_w: f64, viewport_h: f64, taskbar_h: f64) {
        let mut ids: Vec<WindowId> = self
            .windows
            .iter()
            .filter(|(_, w)| !matches!(w.state, LifecycleState::Minimized))
            .map(|(id, _)| *id)
            .collect();
        ids.sort();
        let available_h = (viewport_h - taskbar_h).max(0.0);

        for (i, id) in ids.into_iter().enumerate() {
            let step = (i as u32 % CASCADE_WRAP) as f64;
            let Some(window) = self.windows.get_mut(&id) else {
                continue;
            };
            let x = (CASCADE_STEP + step * CASCADE_STEP)
                .min((viewport_w - window.rect.w).max(0.0))
                .max(0.0);
            let y = (CASCADE_STEP + step * CASCADE_STEP)
                .min((available_h - window.rect.h).max(0.0))
                .max(0.0);
            window.rect.x = x;
            window.rect.y = y;
            window.state = LifecycleState::Normal;
            window.previous_bounds = None;
        }
    }

    /// Sets the title of an open window.
    pub fn set_title(&mut self, id: WindowId, title: impl Into<String>) -> bool {
        let Some(window) = self.windows.get_mut(&id) else {
            return false;
        };
        window.title = title.into();
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
/// Errors produced by window store operations (reserved for future fallible ops;
/// today every mutator instead returns `bool`/`Option` per `spec.md` §7's
/// not-found-is-not-fatal guidance).
pub enum WindowStoreError {
    /// Referenced an id with no corresponding open window.
    #[error("no window open with that id")]
    WindowNotFound,
}
