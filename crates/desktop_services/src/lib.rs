//! Commands, notifications, settings, context menu, and collaboration mirror
//! services exposed to apps through the capability-scoped SDK.
//!
//! See `spec.md` §4.8.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod collaboration;
pub mod commands;
pub mod context_menu;
pub mod notifications;
pub mod settings;

pub use collaboration::CollaborationMirror;
pub use commands::{Command, CommandError, CommandHandler, CommandRegistry};
pub use context_menu::{ContextMenuState, Rect as ContextMenuRect, SUBMENU_HOVER_DELAY_MS};
pub use notifications::{NotificationStore, MAX_VISIBLE_NOTIFICATIONS};
pub use settings::{SettingsStore, SubscriptionId};
