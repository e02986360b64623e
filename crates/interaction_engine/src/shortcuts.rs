//! Keyboard shortcut registry and global-scope dispatch.
//!
//! See `spec.md` §4.3: a registry maps [`KeyCombo`] to handlers scoped to
//! `global`/`window`/`app`; only `global`-scoped combos fire from the document-level
//! keydown listener, and only after confirming the event target is not an editable
//! element.

use key_combo::{KeyCombo, PhysicalKeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Scope a registered shortcut is dispatched from.
pub enum ShortcutScope {
    /// Fires from the document-level keydown listener regardless of focus.
    Global,
    /// Fires only while the owning window has focus (dispatched by the window chrome,
    /// not by the global listener).
    Window,
    /// Fires only while the owning app's surface has focus.
    App,
}

/// Stable identifier for a registered shortcut action.
pub type ShortcutActionId = &'static str;

/// The nine built-in global shortcut actions named in `spec.md` §4.3.
pub const OPEN_LAUNCHER: ShortcutActionId = "shell.open-launcher";
/// Closes the focused window.
pub const CLOSE_WINDOW: ShortcutActionId = "shell.close-window";
/// Minimizes every open window.
pub const MINIMIZE_ALL: ShortcutActionId = "shell.minimize-all";
/// Focuses the next window in the focus stack.
pub const FOCUS_NEXT: ShortcutActionId = "shell.focus-next";
/// Focuses the previous window in the focus stack.
pub const FOCUS_PREVIOUS: ShortcutActionId = "shell.focus-previous";
/// Tiles open windows in equal-width columns.
pub const TILE_HORIZONTAL: ShortcutActionId = "shell.tile-horizontal";
/// Tiles open windows in equal-height rows.
pub const TILE_VERTICAL: ShortcutActionId = "shell.tile-vertical";
/// Cascades open windows from the top-left corner.
pub const CASCADE: ShortcutActionId = "shell.cascade";
/// Opens the command palette.
pub const OPEN_COMMAND_PALETTE: ShortcutActionId = "shell.open-command-palette";

#[derive(Debug, Clone, PartialEq)]
/// One registered shortcut binding.
pub struct ShortcutBinding {
    /// The key combination that triggers this binding.
    pub combo: KeyCombo,
    /// Dispatch scope.
    pub scope: ShortcutScope,
    /// Action identifier invoked on match.
    pub action: ShortcutActionId,
    /// Whether this binding currently participates in dispatch.
    pub enabled: bool,
}

#[derive(Debug, Clone, Default)]
/// Ordered registry of shortcut bindings.
///
/// Registration order is preserved and is significant: [`ShortcutRegistry::dispatch_global`]
/// returns the *first* enabled, global-scope binding whose combo matches.
pub struct ShortcutRegistry {
    bindings: Vec<ShortcutBinding>,
}

impl ShortcutRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self { bindings: Vec::new() }
    }

    /// Creates a registry pre-populated with the nine built-in global shortcuts at
    /// their conventional default combos.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(KeyCombo::bare("d").with_meta(), ShortcutScope::Global, OPEN_LAUNCHER);
        registry.register(KeyCombo::bare("w").with_meta(), ShortcutScope::Global, CLOSE_WINDOW);
        registry.register(KeyCombo::bare("m").with_meta().with_shift(), ShortcutScope::Global, MINIMIZE_ALL);
        registry.register(KeyCombo::bare("tab").with_meta(), ShortcutScope::Global, FOCUS_NEXT);
        registry.register(
            KeyCombo::bare("tab").with_meta().with_shift(),
            ShortcutScope::Global,
            FOCUS_PREVIOUS,
        );
        registry.register(
            KeyCombo::bare("arrowleft").with_meta().with_shift(),
            ShortcutScope::Global,
            TILE_HORIZONTAL,
        );
        registry.register(
            KeyCombo::bare("arrowup").with_meta().with_shift(),
            ShortcutScope::Global,
            TILE_VERTICAL,
        );
        registry.register(KeyCombo::bare("c").with_meta().with_shift(), ShortcutScope::Global, CASCADE);
        registry.register(KeyCombo::bare("p").with_meta().with_shift(), ShortcutScope::Global, OPEN_COMMAND_PALETTE);
        registry
    }

    /// Registers a new binding, enabled by default.
    pub fn register(&mut self, combo: KeyCombo, scope: ShortcutScope, action: ShortcutActionId) {
        self.bindings.push(ShortcutBinding {
            combo,
            scope,
            action,
            enabled: true,
        });
    }

    /// Enables or disables every binding for `action`.
    pub fn set_enabled(&mut self, action: ShortcutActionId, enabled: bool) {
        for binding in &mut self.bindings {
            if binding.action == action {
                binding.enabled = enabled;
            }
        }
    }

    /// Returns every registered binding.
    pub fn bindings(&self) -> &[ShortcutBinding] {
        &self.bindings
    }

    /// Dispatches a document-level keydown event against `global`-scope bindings
    /// only, returning the first enabled match's action id.
    ///
    /// Returns `None` without consulting the registry when `target_is_editable` is
    /// true (the event originated in an input/textarea/contentEditable element), per
    /// `spec.md` §4.3.
    pub fn dispatch_global(
        &self,
        event: &impl PhysicalKeyEvent,
        target_is_editable: bool,
    ) -> Option<ShortcutActionId> {
        if target_is_editable {
            return None;
        }
        self.bindings
            .iter()
            .find(|b| b.enabled && b.scope == ShortcutScope::Global && b.combo.matches(event))
            .map(|b| b.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use key_combo::KeyEventFixture;

    #[test]
    fn global_listener_never_fires_on_editable_target() {
        let registry = ShortcutRegistry::with_builtins();
        let event = KeyEventFixture {
            key: "w",
            meta: true,
            ..Default::default()
        };
        assert_eq!(registry.dispatch_global(&event, true), None);
        assert_eq!(registry.dispatch_global(&event, false), Some(CLOSE_WINDOW));
    }

    #[test]
    fn window_and_app_scoped_bindings_never_fire_from_global_dispatch() {
        let mut registry = ShortcutRegistry::new();
        registry.register(KeyCombo::bare("s").with_ctrl(), ShortcutScope::App, "app.save");
        let event = KeyEventFixture {
            key: "s",
            ctrl: true,
            ..Default::default()
        };
        assert_eq!(registry.dispatch_global(&event, false), None);
    }

    #[test]
    fn disabling_a_binding_removes_it_from_dispatch() {
        let mut registry = ShortcutRegistry::with_builtins();
        registry.set_enabled(CLOSE_WINDOW, false);
        let event = KeyEventFixture {
            key: "w",
            meta: true,
            ..Default::default()
        };
        assert_eq!(registry.dispatch_global(&event, false), None);
    }

    #[test]
    fn first_matching_enabled_binding_wins() {
        let mut registry = ShortcutRegistry::new();
        registry.register(KeyCombo::bare("k").with_ctrl(), ShortcutScope::Global, "first");
        registry.register(KeyCombo::bare("k").with_ctrl(), ShortcutScope::Global, "second");
        let event = KeyEventFixture {
            key: "k",
            ctrl: true,
            ..Default::default()
        };
        assert_eq!(registry.dispatch_global(&event, false), Some("first"));
    }
}
