//! Shared store handles every per-app façade is built against.

use std::cell::RefCell;
use std::rc::Rc;

use desktop_services::{CollaborationMirror, CommandRegistry, NotificationStore, SettingsStore};
use permissions_store::PermissionsStore;
use platform_host::SyncKvProvider;
use window_store::WindowStore;

/// Interior-mutable handles to every store the SDK's sub-services read and mutate,
/// shared by cheap `Rc` clone across every app's façade (mirroring the teacher's
/// single-`DesktopState`-instance wiring, without committing this crate to `leptos`).
pub struct SharedStores<Storage> {
    pub(crate) windows: Rc<RefCell<WindowStore>>,
    pub(crate) commands: Rc<RefCell<CommandRegistry>>,
    pub(crate) settings: Rc<RefCell<SettingsStore>>,
    pub(crate) notifications: Rc<RefCell<NotificationStore>>,
    pub(crate) collaboration: Rc<RefCell<CollaborationMirror>>,
    pub(crate) permissions: Rc<RefCell<PermissionsStore>>,
    pub(crate) storage_provider: Storage,
    pub(crate) next_notification_id: Rc<RefCell<u64>>,
}

impl<Storage: SyncKvProvider + Clone> SharedStores<Storage> {
    /// Builds a fresh set of empty stores over the given storage provider.
    pub fn new(storage_provider: Storage) -> Self {
        Self {
            windows: Rc::new(RefCell::new(WindowStore::new())),
            commands: Rc::new(RefCell::new(CommandRegistry::new())),
            settings: Rc::new(RefCell::new(SettingsStore::new())),
            notifications: Rc::new(RefCell::new(NotificationStore::new())),
            collaboration: Rc::new(RefCell::new(CollaborationMirror::new())),
            permissions: Rc::new(RefCell::new(PermissionsStore::new())),
            storage_provider,
            next_notification_id: Rc::new(RefCell::new(1)),
        }
    }

    pub(crate) fn allocate_notification_id(&self) -> u64 {
        let mut next = self.next_notification_id.borrow_mut();
        let id = *next;
        *next += 1;
        id
    }

    /// The shared permission grant table and prompt queue, for a host-level UI layer
    /// to render the head-of-queue prompt and resolve it (`spec.md` §4.6 "rendering
    /// the modal is desktop_shell's job"; `app_sdk` itself only reads grants through
    /// [`crate::PermissionsService`]).
    pub fn permissions(&self) -> Rc<RefCell<PermissionsStore>> {
        self.permissions.clone()
    }
}

impl<Storage> Clone for SharedStores<Storage>
where
    Storage: Clone,
{
    fn clone(&self) -> Self {
        Self {
            windows: self.windows.clone(),
            commands: self.commands.clone(),
            settings: self.settings.clone(),
            notifications: self.notifications.clone(),
            collaboration: self.collaboration.clone(),
            permissions: self.permissions.clone(),
            storage_provider: self.storage_provider.clone(),
            next_notification_id: self.next_notification_id.clone(),
        }
    }
}
