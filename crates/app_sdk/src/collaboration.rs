//! Per-app, capability-gated collaboration mirror service (`spec.md` §4.8). Read-only:
//! the mirror itself is populated by whatever transport delivers presence updates
//! (out of scope, see `desktop_services::collaboration`); apps only ever read it
//! through this gate.

use std::collections::BTreeSet;
use std::rc::Rc;

use desktop_contract::permission::Permission;
use platform_host::SyncKvProvider;
use serde_json::Value;

use crate::gate::Gate;
use crate::stores::SharedStores;

/// Collaboration sub-service scoped to one app.
pub struct CollaborationService<Storage> {
    gate: Gate<Storage>,
}

impl<Storage: SyncKvProvider + Clone> CollaborationService<Storage> {
    pub(crate) fn new(app_id: String, declared: Rc<BTreeSet<Permission>>, stores: SharedStores<Storage>) -> Self {
        Self {
            gate: Gate::new(app_id, declared, stores),
        }
    }

    /// The mirrored state for a single participant. `None` both when the participant
    /// is unknown and when the permission is not granted.
    pub fn participant(&self, participant_id: &str) -> Option<Value> {
        if !self.gate.check_and_enforce(Permission::Collaboration) {
            return None;
        }
        self.gate.stores.collaboration.borrow().participant(participant_id).cloned()
    }

    /// Every mirrored participant. An empty list if the permission is not granted.
    pub fn participants(&self) -> Vec<(String, Value)> {
        if !self.gate.check_and_enforce(Permission::Collaboration) {
            return Vec::new();
        }
        self.gate
            .stores
            .collaboration
            .borrow()
            .participants()
            .map(|(id, state)| (id.to_string(), state.clone()))
            .collect()
    }
}
