//! Per-app, capability-gated notifications service (`spec.md` §4.8). Every method
//! first calls `checkAndEnforce(appId, Permission::Notifications)`; when the current
//! grant is not `granted` the call is a quiet no-op — no exception crosses the app
//! boundary (`spec.md` §7, error class 2).

use std::collections::BTreeSet;
use std::rc::Rc;

use desktop_contract::notification::{Notification, NotificationKind};
use desktop_contract::permission::Permission;
use platform_host::SyncKvProvider;

use crate::gate::Gate;
use crate::stores::SharedStores;

/// Notifications sub-service scoped to one app.
pub struct NotificationsService<Storage> {
    gate: Gate<Storage>,
}

impl<Storage: SyncKvProvider + Clone> NotificationsService<Storage> {
    pub(crate) fn new(app_id: String, declared: Rc<BTreeSet<Permission>>, stores: SharedStores<Storage>) -> Self {
        Self {
            gate: Gate::new(app_id, declared, stores),
        }
    }

    fn push(&self, kind: NotificationKind, title: &str, message: Option<&str>, duration_ms: u32, dismissible: bool, now_ms: u64) -> Option<u64> {
        if !self.gate.check_and_enforce(Permission::Notifications) {
            return None;
        }
        let id = self.gate.stores.allocate_notification_id();
        self.gate.stores.notifications.borrow_mut().push(
            Notification {
                id,
                kind,
                title: title.to_string(),
                message: message.map(str::to_string),
                duration_ms,
                dismissible,
            },
            now_ms,
        );
        Some(id)
    }

    /// Shows an informational toast. Returns its id, or `None` if the permission is
    /// not granted.
    pub fn info(&self, title: &str, message: Option<&str>, duration_ms: u32, now_ms: u64) -> Option<u64> {
        self.push(NotificationKind::Info, title, message, duration_ms, true, now_ms)
    }

    /// Shows a success toast.
    pub fn success(&self, title: &str, message: Option<&str>, duration_ms: u32, now_ms: u64) -> Option<u64> {
        self.push(NotificationKind::Success, title, message, duration_ms, true, now_ms)
    }

    /// Shows a warning toast.
    pub fn warning(&self, title: &str, message: Option<&str>, duration_ms: u32, now_ms: u64) -> Option<u64> {
        self.push(NotificationKind::Warning, title, message, duration_ms, true, now_ms)
    }

    /// Shows an error toast.
    pub fn error(&self, title: &str, message: Option<&str>, duration_ms: u32, now_ms: u64) -> Option<u64> {
        self.push(NotificationKind::Error, title, message, duration_ms, true, now_ms)
    }

    /// Dismisses a notification by id. A quiet no-op if the permission is not
    /// granted.
    pub fn dismiss(&self, id: u64) {
        if !self.gate.check_and_enforce(Permission::Notifications) {
            return;
        }
        self.gate.stores.notifications.borrow_mut().dismiss(id);
    }

    /// Every currently-visible notification. An empty list if the permission is not
    /// granted.
    pub fn visible(&self) -> Vec<Notification> {
        if !self.gate.check_and_enforce(Permission::Notifications) {
            return Vec::new();
        }
        self.gate.stores.notifications.borrow().visible().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use platform_host::MemorySyncKvProvider;

    use super::*;

    fn declared(has_notifications: bool) -> Rc<BTreeSet<Permission>> {
        let mut set = BTreeSet::new();
        if has_notifications {
            set.insert(Permission::Notifications);
        }
        Rc::new(set)
    }

    #[test]
    fn without_a_granted_permission_info_returns_none() {
        let stores = SharedStores::new(MemorySyncKvProvider::default());
        let svc = NotificationsService::new("notes".to_string(), declared(true), stores);
        assert_eq!(svc.info("Title", None, 1000, 0), None);
    }

    #[test]
    fn with_a_granted_permission_info_pushes_and_returns_an_id() {
        let stores = SharedStores::new(MemorySyncKvProvider::default());
        stores.permissions.borrow_mut().set_grant("notes", Permission::Notifications, desktop_contract::permission::PermissionGrant::Granted);
        let svc = NotificationsService::new("notes".to_string(), declared(true), stores);
        let id = svc.info("Title", None, 1000, 0);
        assert!(id.is_some());
        assert_eq!(svc.visible().len(), 1);
    }

    #[test]
    fn undeclared_permission_never_pushes_even_if_a_grant_exists() {
        let stores = SharedStores::new(MemorySyncKvProvider::default());
        stores.permissions.borrow_mut().set_grant("notes", Permission::Notifications, desktop_contract::permission::PermissionGrant::Granted);
        let svc = NotificationsService::new("notes".to_string(), declared(false), stores);
        assert_eq!(svc.info("Title", None, 1000, 0), None);
    }
}
