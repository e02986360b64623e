//! The capability-scoped SDK façade itself (`spec.md` §4.8, component I).
//!
//! [`AppSdk`] is built once per running app instance from its `appId` and declared
//! permission set. It is already the "secure wrapper" described by the spec: windows,
//! commands, settings, and the context menu pass through to the shared stores
//! unchanged (scoped by app id where mutation is destructive); notifications,
//! storage, and collaboration gate every call behind `checkAndEnforce`; and
//! `permissions` is the replacement service that lists/requests grants. There is no
//! separately-constructible "unwrapped" façade — every caller, in-process or across
//! the `host_bridge` postMessage boundary (`spec.md` §4.7), reaches services only
//! through this one gated surface.

use std::collections::BTreeSet;
use std::rc::Rc;

use desktop_contract::manifest::AppId;
use desktop_contract::permission::Permission;
use platform_host::SyncKvProvider;

use crate::collaboration::CollaborationService;
use crate::commands::CommandsService;
use crate::notifications::NotificationsService;
use crate::permissions::PermissionsService;
use crate::settings::SettingsService;
use crate::storage::StorageService;
use crate::stores::SharedStores;
use crate::windows::WindowsService;

/// Per-app façade over every desktop service, scoped to `appId` and gated by its
/// manifest-declared permission set.
pub struct AppSdk<Storage> {
    app_id: AppId,
    declared: Rc<BTreeSet<Permission>>,
    stores: SharedStores<Storage>,
}

impl<Storage: SyncKvProvider + Clone> AppSdk<Storage> {
    /// Builds the façade for `app_id`, declaring `permissions` as the set the
    /// manifest requested (only permissions in this set can ever be granted; see
    /// [`Permission::is_enforced`]).
    pub fn new(app_id: impl Into<AppId>, permissions: BTreeSet<Permission>, stores: SharedStores<Storage>) -> Self {
        Self {
            app_id: app_id.into(),
            declared: Rc::new(permissions),
            stores,
        }
    }

    /// The app id this façade is scoped to.
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// Windows sub-service: unchanged pass-through, scoped so this app can only
    /// mutate windows it owns.
    pub fn windows(&self) -> WindowsService<Storage> {
        WindowsService::new(self.app_id.clone(), self.stores.clone())
    }

    /// Commands sub-service: unchanged pass-through, registrations tagged with this
    /// app's id.
    pub fn commands(&self) -> CommandsService<Storage> {
        CommandsService::new(self.app_id.clone(), self.stores.clone())
    }

    /// Settings sub-service: unchanged pass-through over the single shared document.
    pub fn settings(&self) -> SettingsService<Storage> {
        SettingsService::new(self.stores.clone())
    }

    /// Opens a context menu anchored (and clamped to viewport) at the given position.
    pub fn open_context_menu(&self, requested_x: f64, requested_y: f64, menu_w: f64, menu_h: f64, viewport_w: f64, viewport_h: f64) -> crate::context_menu::ContextMenuState {
        crate::context_menu::open_context_menu(requested_x, requested_y, menu_w, menu_h, viewport_w, viewport_h)
    }

    /// Notifications sub-service, gated on [`Permission::Notifications`].
    pub fn notifications(&self) -> NotificationsService<Storage> {
        NotificationsService::new(self.app_id.clone(), self.declared.clone(), self.stores.clone())
    }

    /// Storage sub-service, gated on [`Permission::Storage`].
    pub fn storage(&self) -> StorageService<Storage> {
        StorageService::new(self.app_id.clone(), self.declared.clone(), self.stores.clone())
    }

    /// Collaboration sub-service, gated on [`Permission::Collaboration`].
    pub fn collaboration(&self) -> CollaborationService<Storage> {
        CollaborationService::new(self.app_id.clone(), self.declared.clone(), self.stores.clone())
    }

    /// Permissions sub-service: lists effective grants and drives `request`.
    pub fn permissions(&self) -> PermissionsService<Storage> {
        PermissionsService::new(self.app_id.clone(), self.declared.clone(), self.stores.clone())
    }
}
