//! Per-app windows service: passes through to [`WindowStore`] unchanged, scoped so an
//! app can only mutate windows it owns (`spec.md` §4.8).

use desktop_contract::manifest::AppId;
use platform_host::SyncKvProvider;
use window_store::{OpenWindowRequest, Rect, Window, WindowId};

use crate::stores::SharedStores;

/// Windows sub-service scoped to one app.
pub struct WindowsService<Storage> {
    app_id: AppId,
    stores: SharedStores<Storage>,
}

impl<Storage: SyncKvProvider + Clone> WindowsService<Storage> {
    pub(crate) fn new(app_id: AppId, stores: SharedStores<Storage>) -> Self {
        Self { app_id, stores }
    }

    fn owns(&self, id: WindowId) -> bool {
        self.stores
            .windows
            .borrow()
            .get(id)
            .map(|w| w.app_id == self.app_id)
            .unwrap_or(false)
    }

    /// Opens a new window for this app. `req.app_id` is overwritten with the calling
    /// app's id regardless of what the caller set, so an app can never open a window
    /// attributed to another app.
    pub fn open(&self, mut req: OpenWindowRequest, viewport_w: f64, viewport_h: f64, taskbar_h: f64, now_ms: u64) -> WindowId {
        req.app_id = self.app_id.clone();
        self.stores.windows.borrow_mut().open_window(req, viewport_w, viewport_h, taskbar_h, now_ms)
    }

    /// Every window owned by this app.
    pub fn list(&self) -> Vec<Window> {
        self.stores
            .windows
            .borrow()
            .windows()
            .filter(|w| w.app_id == self.app_id)
            .cloned()
            .collect()
    }

    /// Reads a single window owned by this app.
    pub fn get(&self, id: WindowId) -> Option<Window> {
        if !self.owns(id) {
            return None;
        }
        self.stores.windows.borrow().get(id).cloned()
    }

    /// Closes a window owned by this app. Returns `false` if the window is not open
    /// or is not owned by this app.
    pub fn close(&self, id: WindowId) -> bool {
        if !self.owns(id) {
            return false;
        }
        self.stores.windows.borrow_mut().close_window(id)
    }

    /// Focuses a window owned by this app.
    pub fn focus(&self, id: WindowId, now_ms: u64) -> bool {
        if !self.owns(id) {
            return false;
        }
        self.stores.windows.borrow_mut().focus_window(id, now_ms)
    }

    /// Minimizes a window owned by this app.
    pub fn minimize(&self, id: WindowId) -> bool {
        if !self.owns(id) {
            return false;
        }
        self.stores.windows.borrow_mut().minimize_window(id)
    }

    /// Maximizes a window owned by this app.
    pub fn maximize(&self, id: WindowId, viewport_w: f64, viewport_h: f64, taskbar_h: f64) -> bool {
        if !self.owns(id) {
            return false;
        }
        self.stores.windows.borrow_mut().maximize_window(id, viewport_w, viewport_h, taskbar_h)
    }

    /// Restores a window owned by this app from minimized or maximized state.
    pub fn restore(&self, id: WindowId) -> bool {
        if !self.owns(id) {
            return false;
        }
        self.stores.windows.borrow_mut().restore_window(id)
    }

    /// Toggles maximize/restore on a window owned by this app.
    pub fn toggle_maximize(&self, id: WindowId, viewport_w: f64, viewport_h: f64, taskbar_h: f64) -> bool {
        if !self.owns(id) {
            return false;
        }
        self.stores.windows.borrow_mut().toggle_maximize(id, viewport_w, viewport_h, taskbar_h)
    }

    /// Updates the position of a window owned by this app.
    pub fn update_position(&self, id: WindowId, x: f64, y: f64) -> bool {
        if !self.owns(id) {
            return false;
        }
        self.stores.windows.borrow_mut().update_position(id, x, y)
    }

    /// Updates the size of a window owned by this app.
    pub fn update_size(&self, id: WindowId, w: f64, h: f64) -> bool {
        if !self.owns(id) {
            return false;
        }
        self.stores.windows.borrow_mut().update_size(id, w, h)
    }

    /// Sets the bounds of a window owned by this app atomically.
    pub fn set_bounds(&self, id: WindowId, bounds: Rect) -> bool {
        if !self.owns(id) {
            return false;
        }
        self.stores.windows.borrow_mut().set_bounds(id, bounds)
    }

    /// Renames a window owned by this app.
    pub fn set_title(&self, id: WindowId, title: impl Into<String>) -> bool {
        if !self.owns(id) {
            return false;
        }
        self.stores.windows.borrow_mut().set_title(id, title)
    }
}

#[cfg(test)]
mod tests {
    use platform_host::MemorySyncKvProvider;

    use super::*;

    fn service(app_id: &str) -> WindowsService<MemorySyncKvProvider> {
        WindowsService::new(app_id.to_string(), SharedStores::new(MemorySyncKvProvider::default()))
    }

    #[test]
    fn opened_window_is_attributed_to_the_calling_app_even_if_spoofed() {
        let svc = service("notes");
        let mut req = OpenWindowRequest::new("someone-else", "Notes");
        req.app_id = "someone-else".to_string();
        let id = svc.open(req, 1000.0, 800.0, 40.0, 0);
        assert_eq!(svc.get(id).unwrap().app_id, "notes");
    }

    #[test]
    fn an_app_cannot_close_a_window_it_does_not_own() {
        let stores = SharedStores::new(MemorySyncKvProvider::default());
        let notes = WindowsService::new("notes".to_string(), stores.clone());
        let calendar = WindowsService::new("calendar".to_string(), stores);
        let id = notes.open(OpenWindowRequest::new("notes", "Notes"), 1000.0, 800.0, 40.0, 0);
        assert!(!calendar.close(id));
        assert!(notes.get(id).is_some());
        assert!(notes.close(id));
    }

    #[test]
    fn list_only_returns_this_apps_windows() {
        let stores = SharedStores::new(MemorySyncKvProvider::default());
        let notes = WindowsService::new("notes".to_string(), stores.clone());
        let calendar = WindowsService::new("calendar".to_string(), stores);
        notes.open(OpenWindowRequest::new("notes", "Notes"), 1000.0, 800.0, 40.0, 0);
        calendar.open(OpenWindowRequest::new("calendar", "Calendar"), 1000.0, 800.0, 40.0, 0);
        assert_eq!(notes.list().len(), 1);
        assert_eq!(notes.list()[0].title, "Notes");
    }
}
