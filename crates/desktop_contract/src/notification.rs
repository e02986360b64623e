//! Notification data model shared by the desktop services store and the SDK.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Visual/semantic category of a notification.
pub enum NotificationKind {
    /// Neutral informational toast.
    Info,
    /// Positive outcome toast.
    Success,
    /// Cautionary toast.
    Warning,
    /// Failure toast.
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A single notification entry tracked by the desktop services store.
pub struct Notification {
    /// Unique notification id.
    pub id: u64,
    /// Notification category.
    pub kind: NotificationKind,
    /// Short title text.
    pub title: String,
    /// Optional longer message body.
    pub message: Option<String>,
    /// Auto-dismiss duration in milliseconds; `0` means persistent.
    pub duration_ms: u32,
    /// Whether the user can dismiss the notification manually.
    pub dismissible: bool,
}

impl Notification {
    /// Whether this notification should remain until explicitly dismissed.
    pub const fn is_persistent(&self) -> bool {
        self.duration_ms == 0
    }
}
