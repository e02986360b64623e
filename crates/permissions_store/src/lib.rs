//! Per-app permission grants and the interactive prompt queue.
//!
//! See `spec.md` §4.7. A grant is keyed by `(appId, Permission)`; only permissions in
//! [`Permission::is_enforced`]'s set are ever actually gated, and a permission the
//! app's manifest never declared is refused without ever reaching the grants table or
//! the prompt queue (`spec.md` §4.7/§4.8/§9).

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::collections::{BTreeSet, HashMap, VecDeque};

use desktop_contract::manifest::AppId;
use desktop_contract::permission::{Permission, PermissionGrant};
use futures::channel::oneshot;

/// One request waiting for the user to respond to a permission prompt.
pub struct PendingRequest {
    /// App requesting the permission.
    pub app_id: AppId,
    /// Permission requested.
    pub permission: Permission,
    resolver: Option<oneshot::Sender<PermissionGrant>>,
}

impl std::fmt::Debug for PendingRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingRequest")
            .field("app_id", &self.app_id)
            .field("permission", &self.permission)
            .finish()
    }
}

/// Result of [`PermissionsStore::request`]: either an immediate decision, or a
/// receiver that resolves once the queued prompt is answered.
pub enum PermissionRequestOutcome {
    /// The decision was immediate; no prompt was shown.
    Resolved(PermissionGrant),
    /// The request was queued; await this receiver for the user's decision.
    Pending(oneshot::Receiver<PermissionGrant>),
}

/// Table of decided permission grants plus the queue of prompts awaiting a decision.
#[derive(Default)]
pub struct PermissionsStore {
    grants: HashMap<(AppId, Permission), PermissionGrant>,
    queue: VecDeque<PendingRequest>,
}

impl PermissionsStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            grants: HashMap::new(),
            queue: VecDeque::new(),
        }
    }

    /// Synchronously checks the current grant for `(app_id, permission)` without
    /// prompting.
    ///
    /// Returns [`PermissionGrant::Denied`] outright, without consulting the grants
    /// table, when `permission` is not in `declared` or is not an
    /// [`Permission::is_enforced`] permission. Otherwise returns the stored grant,
    /// defaulting to [`PermissionGrant::Prompt`] for a permission never decided.
    pub fn check(&self, app_id: &str, permission: Permission, declared: &BTreeSet<Permission>) -> PermissionGrant {
        if !declared.contains(&permission) || !permission.is_enforced() {
            return PermissionGrant::Denied;
        }
        self.grants
            .get(&(app_id.to_string(), permission))
            .copied()
            .unwrap_or(PermissionGrant::Prompt)
    }

    /// Requests a decision for `(app_id, permission)`.
    ///
    /// Resolves immediately with [`PermissionGrant::Denied`] (and never touches the
    /// grants table or queue) if `permission` is undeclared or unenforced, or with the
    /// existing grant if one was already decided. Otherwise enqueues a
    /// [`PendingRequest`] and returns a receiver that resolves once
    /// [`PermissionsStore::resolve_head`] is called for it — returned rather than
    /// awaited internally so this method never holds `&mut self` across an await
    /// point, letting the caller drive the prompt UI (which itself needs `&mut self`)
    /// while the request is outstanding.
    pub fn request(
        &mut self,
        app_id: impl Into<AppId>,
        permission: Permission,
        declared: &BTreeSet<Permission>,
    ) -> PermissionRequestOutcome {
        let app_id = app_id.into();
        if !declared.contains(&permission) || !permission.is_enforced() {
            return PermissionRequestOutcome::Resolved(PermissionGrant::Denied);
        }
        if let Some(existing) = self.grants.get(&(app_id.clone(), permission)) {
            if *existing != PermissionGrant::Prompt {
                return PermissionRequestOutcome::Resolved(*existing);
            }
        }
        let (tx, rx) = oneshot::channel();
        self.queue.push_back(PendingRequest {
            app_id,
            permission,
            resolver: Some(tx),
        });
        PermissionRequestOutcome::Pending(rx)
    }

    /// The prompt currently shown to the user, if any (the head of the queue).
    pub fn pending_prompt(&self) -> Option<&PendingRequest> {
        self.queue.front()
    }

    /// Every queued prompt, in presentation order (head first).
    pub fn prompt_queue(&self) -> impl Iterator<Item = &PendingRequest> {
        self.queue.iter()
    }

    /// Moves an already-queued request for `(app_id, permission)` to the head of the
    /// queue, e.g. when the app re-requests a permission it is still waiting on and
    /// that should take priority over other pending prompts.
    pub fn promote_to_head(&mut self, app_id: &str, permission: Permission) {
        if let Some(pos) = self
            .queue
            .iter()
            .position(|req| req.app_id == app_id && req.permission == permission)
        {
            if pos != 0 {
                if let Some(req) = self.queue.remove(pos) {
                    self.queue.push_front(req);
                }
            }
        }
    }

    /// Resolves the head-of-queue prompt with `grant`, persisting it to the grants
    /// table and waking the pending [`PermissionsStore::request`] future.
    ///
    /// A no-op if the queue is empty.
    pub fn resolve_head(&mut self, grant: PermissionGrant) {
        let Some(mut request) = self.queue.pop_front() else {
            return;
        };
        self.grants.insert((request.app_id.clone(), request.permission), grant);
        log::info!("permission {} for `{}` resolved to {grant:?}", request.permission, request.app_id);
        if let Some(resolver) = request.resolver.take() {
            let _ = resolver.send(grant);
        }
    }

    /// Resolves the head-of-queue prompt with [`PermissionGrant::Denied`], the default
    /// outcome when the prompt UI is dismissed via Escape (`spec.md` §4.7).
    pub fn deny_head(&mut self) {
        self.resolve_head(PermissionGrant::Denied);
    }

    /// Directly sets a grant, bypassing the prompt queue (used to seed grants
    /// rehydrated from persistent storage at boot).
    pub fn set_grant(&mut self, app_id: impl Into<AppId>, permission: Permission, grant: PermissionGrant) {
        self.grants.insert((app_id.into(), permission), grant);
    }

    /// Every decided grant for `app_id`.
    pub fn grants_for(&self, app_id: &str) -> impl Iterator<Item = (Permission, PermissionGrant)> + '_ {
        self.grants
            .iter()
            .filter(move |((id, _), _)| id == app_id)
            .map(|((_, perm), grant)| (*perm, *grant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn declared_with(permission: Permission) -> BTreeSet<Permission> {
        let mut set = BTreeSet::new();
        set.insert(permission);
        set
    }

    #[test]
    fn undeclared_permission_is_denied_and_never_persisted() {
        let mut store = PermissionsStore::new();
        let declared = BTreeSet::new();
        let outcome = store.request("notes", Permission::Notifications, &declared);
        assert!(matches!(outcome, PermissionRequestOutcome::Resolved(PermissionGrant::Denied)));
        assert!(store.pending_prompt().is_none());
        assert_eq!(store.grants_for("notes").count(), 0);
    }

    #[test]
    fn unenforced_permission_is_denied_even_when_declared() {
        let mut store = PermissionsStore::new();
        let declared = declared_with(Permission::Camera);
        let outcome = store.request("notes", Permission::Camera, &declared);
        assert!(matches!(outcome, PermissionRequestOutcome::Resolved(PermissionGrant::Denied)));
        assert_eq!(store.grants_for("notes").count(), 0);
    }

    #[test]
    fn check_defaults_to_prompt_for_an_undecided_enforced_permission() {
        let store = PermissionsStore::new();
        let declared = declared_with(Permission::Notifications);
        assert_eq!(store.check("notes", Permission::Notifications, &declared), PermissionGrant::Prompt);
    }

    #[test]
    fn an_undecided_enforced_permission_queues_a_prompt_and_resolve_head_wakes_it() {
        let mut store = PermissionsStore::new();
        let declared = declared_with(Permission::Storage);
        let outcome = store.request("notes", Permission::Storage, &declared);
        let receiver = match outcome {
            PermissionRequestOutcome::Pending(rx) => rx,
            PermissionRequestOutcome::Resolved(_) => panic!("expected a queued prompt"),
        };
        assert_eq!(store.pending_prompt().unwrap().app_id, "notes");

        store.resolve_head(PermissionGrant::Granted);
        let grant = block_on(receiver).unwrap();
        assert_eq!(grant, PermissionGrant::Granted);
        assert_eq!(store.check("notes", Permission::Storage, &declared), PermissionGrant::Granted);
    }

    #[test]
    fn a_decided_grant_resolves_immediately_without_queuing() {
        let mut store = PermissionsStore::new();
        let declared = declared_with(Permission::Storage);
        store.set_grant("notes", Permission::Storage, PermissionGrant::Granted);
        let outcome = store.request("notes", Permission::Storage, &declared);
        assert!(matches!(outcome, PermissionRequestOutcome::Resolved(PermissionGrant::Granted)));
        assert!(store.pending_prompt().is_none());
    }

    #[test]
    fn resolve_head_persists_and_is_reflected_by_check() {
        let mut store = PermissionsStore::new();
        let declared = declared_with(Permission::Storage);
        store.set_grant("notes", Permission::Storage, PermissionGrant::Granted);
        assert_eq!(store.check("notes", Permission::Storage, &declared), PermissionGrant::Granted);
    }

    #[test]
    fn promote_to_head_reorders_queue() {
        let mut store = PermissionsStore::new();
        store.queue.push_back(PendingRequest {
            app_id: "a".to_string(),
            permission: Permission::Notifications,
            resolver: None,
        });
        store.queue.push_back(PendingRequest {
            app_id: "b".to_string(),
            permission: Permission::Storage,
            resolver: None,
        });
        store.promote_to_head("b", Permission::Storage);
        assert_eq!(store.pending_prompt().unwrap().app_id, "b");
    }

    #[test]
    fn deny_head_resolves_with_denied() {
        let mut store = PermissionsStore::new();
        store.queue.push_back(PendingRequest {
            app_id: "a".to_string(),
            permission: Permission::Notifications,
            resolver: None,
        });
        store.deny_head();
        assert_eq!(
            store.check("a", Permission::Notifications, &declared_with(Permission::Notifications)),
            PermissionGrant::Denied
        );
        assert!(store.pending_prompt().is_none());
    }
}
