//! Theme surface (`spec.md` §6): publishes the resolved theme to the DOM root as a
//! `data-theme` attribute. Apps read it reactively; this crate only owns the publish
//! side, matching the scope note in `SPEC_FULL.md` §4.9 that visual theming beyond
//! this attribute contract is out of scope.

use serde::{Deserialize, Serialize};

/// The two resolved theme values `spec.md` §6 names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark theme.
    Dark,
    /// Light theme.
    Light,
}

impl Theme {
    /// The literal value written into the `data-theme` attribute.
    pub fn as_attr_value(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// Publishes [`Theme`] changes to the document root element's `data-theme` attribute.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeFacade;

impl ThemeFacade {
    /// Sets `data-theme` on the document root to `theme`'s attribute value.
    ///
    /// A no-op off the browser target (there is no document root to publish to on the
    /// native test host).
    pub fn publish(self, theme: Theme) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(window) = web_sys::window() else { return };
            let Some(document) = window.document() else { return };
            let Some(root) = document.document_element() else { return };
            let _ = root.set_attribute("data-theme", theme.as_attr_value());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = theme;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_values_match_the_documented_literals() {
        assert_eq!(Theme::Dark.as_attr_value(), "dark");
        assert_eq!(Theme::Light.as_attr_value(), "light");
    }
}
