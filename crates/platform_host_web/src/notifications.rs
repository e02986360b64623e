//! OS-level notification adapter backed by the Web Notifications API.
//!
//! Distinct from the in-app toast model in `desktop_contract::Notification` /
//! `desktop_services`: this is an optional ambient surface the shell may use to mirror a
//! toast out to the browser's native notification center.

use platform_host::{NotificationFuture, NotificationService};

#[derive(Debug, Clone, Copy, Default)]
/// Browser notification adapter backed by the Web Notifications API.
pub struct WebNotificationService;

impl NotificationService for WebNotificationService {
    fn notify<'a>(
        &'a self,
        title: &'a str,
        body: &'a str,
    ) -> NotificationFuture<'a, Result<(), String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                use wasm_bindgen::JsValue;
                let rendered = if body.trim().is_empty() {
                    title.to_string()
                } else {
                    format!("{title}: {body}")
                };
                return web_sys::Notification::new(&rendered)
                    .map(|_| ())
                    .map_err(|err: JsValue| format!("notification dispatch failed: {err:?}"));
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (title, body);
                Ok(())
            }
        })
    }
}
