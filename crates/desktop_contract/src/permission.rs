//! Capability/permission enumeration shared by the registry, permissions store, and SDK.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Forward-compatible superset of capabilities an app manifest may declare.
///
/// Only [`Permission::Notifications`], [`Permission::Storage`], and
/// [`Permission::Collaboration`] are enforced by the capability-scoped SDK today; the
/// remaining variants are recognized by the registry/validator but not yet gated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Permission {
    /// Toast/notification service access.
    Notifications,
    /// Scoped key-value storage access.
    Storage,
    /// Read access to the system clipboard.
    ClipboardRead,
    /// Write access to the system clipboard.
    ClipboardWrite,
    /// Read access to the virtual filesystem surface.
    FilesystemRead,
    /// Write access to the virtual filesystem surface.
    FilesystemWrite,
    /// Outbound network access.
    Network,
    /// Camera capture access.
    Camera,
    /// Microphone capture access.
    Microphone,
    /// Shared collaboration state mirror access.
    Collaboration,
}

impl Permission {
    /// All permissions recognized by the workspace shell, in declaration order.
    pub const ALL: [Permission; 10] = [
        Permission::Notifications,
        Permission::Storage,
        Permission::ClipboardRead,
        Permission::ClipboardWrite,
        Permission::FilesystemRead,
        Permission::FilesystemWrite,
        Permission::Network,
        Permission::Camera,
        Permission::Microphone,
        Permission::Collaboration,
    ];

    /// Returns the wire/manifest token for this permission.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Notifications => "notifications",
            Self::Storage => "storage",
            Self::ClipboardRead => "clipboard.read",
            Self::ClipboardWrite => "clipboard.write",
            Self::FilesystemRead => "filesystem.read",
            Self::FilesystemWrite => "filesystem.write",
            Self::Network => "network",
            Self::Camera => "camera",
            Self::Microphone => "microphone",
            Self::Collaboration => "collaboration",
        }
    }

    /// Parses a manifest/wire permission token.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == raw)
    }

    /// Whether the capability-scoped SDK currently enforces this permission.
    ///
    /// See `spec.md` §4.8 and §9 open questions: `collaboration` is enforced like any
    /// other gated service going forward, alongside `notifications` and `storage`.
    pub const fn is_enforced(self) -> bool {
        matches!(
            self,
            Self::Notifications | Self::Storage | Self::Collaboration
        )
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored decision for a `(appId, permission)` pair.
///
/// Absence of a stored grant is represented by callers as [`PermissionGrant::Prompt`];
/// the permissions store never persists a `Prompt` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionGrant {
    /// The app may invoke the gated capability.
    Granted,
    /// The app may not invoke the gated capability.
    Denied,
    /// No stored decision; a prompt is required before the effective grant is known.
    Prompt,
}

impl PermissionGrant {
    /// Whether the grant currently allows the gated call to proceed.
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_known_token() {
        for permission in Permission::ALL {
            assert_eq!(Permission::parse(permission.as_str()), Some(permission));
        }
    }

    #[test]
    fn parse_rejects_unknown_token() {
        assert_eq!(Permission::parse("geolocation"), None);
    }

    #[test]
    fn only_three_permissions_are_enforced() {
        let enforced: Vec<_> = Permission::ALL.into_iter().filter(|p| p.is_enforced()).collect();
        assert_eq!(
            enforced,
            vec![
                Permission::Notifications,
                Permission::Storage,
                Permission::Collaboration
            ]
        );
    }
}
