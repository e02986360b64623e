//! Browser notification host service.

mod service;

pub use service::{NoopNotificationService, NotificationFuture, NotificationService};
