//! Shared capability-check plumbing used by every gated sub-service
//! (notifications, storage, collaboration) per `spec.md` §4.8.

use std::collections::BTreeSet;
use std::rc::Rc;

use desktop_contract::manifest::AppId;
use desktop_contract::permission::Permission;
use platform_host::SyncKvProvider;

use crate::stores::SharedStores;

/// Bundles the `(appId, declared permissions, stores)` triple every gated service
/// needs to implement `checkAndEnforce`.
pub(crate) struct Gate<Storage> {
    pub(crate) app_id: AppId,
    declared: Rc<BTreeSet<Permission>>,
    pub(crate) stores: SharedStores<Storage>,
}

impl<Storage: SyncKvProvider + Clone> Gate<Storage> {
    pub(crate) fn new(app_id: AppId, declared: Rc<BTreeSet<Permission>>, stores: SharedStores<Storage>) -> Self {
        Self { app_id, declared, stores }
    }

    /// Returns whether `permission` is currently granted to this app. Never prompts;
    /// a `Prompt` (undecided) or `Denied` grant both return `false`.
    pub(crate) fn check_and_enforce(&self, permission: Permission) -> bool {
        self.stores
            .permissions
            .borrow()
            .check(&self.app_id, permission, &self.declared)
            .is_granted()
    }
}
