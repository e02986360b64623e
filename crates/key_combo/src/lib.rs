//! Platform-aware hotkey parsing, matching, and formatting.
//!
//! Grammar (see `spec.md` §6): parts separated by `+`, case-insensitive, whitespace
//! tolerant. Recognized modifier tokens: `cmd|command|meta`, `ctrl|control`,
//! `alt|option`, `shift`. Exactly one non-modifier key is required; any other shape
//! fails to parse.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// A case-folded key plus independently-tracked modifier flags.
///
/// Equality (and [`KeyCombo::matches`]) requires every modifier flag to match
/// exactly; a combo with `ctrl` set never matches an event with `ctrl` unset, even if
/// every other flag lines up (no subset-match).
pub struct KeyCombo {
    /// Case-folded (lowercase) key token, e.g. `"p"`, `"escape"`, `"arrowup"`.
    pub key: String,
    /// Control modifier.
    pub ctrl: bool,
    /// Platform "meta" modifier (Cmd on macOS, the Windows key elsewhere).
    pub meta: bool,
    /// Alt/Option modifier.
    pub alt: bool,
    /// Shift modifier.
    pub shift: bool,
}

impl KeyCombo {
    /// Creates a combo for a bare key with no modifiers.
    pub fn bare(key: impl Into<String>) -> Self {
        Self {
            key: key.into().to_lowercase(),
            ctrl: false,
            meta: false,
            alt: false,
            shift: false,
        }
    }

    /// Returns a copy with `ctrl` set.
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// Returns a copy with `meta` set.
    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    /// Returns a copy with `alt` set.
    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    /// Returns a copy with `shift` set.
    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Returns whether a physical key event matches this combo exactly: the
    /// case-folded key must be equal and every modifier flag must match exactly
    /// (subsets are rejected).
    pub fn matches(&self, event: &impl PhysicalKeyEvent) -> bool {
        self.key == event.key().to_lowercase()
            && self.ctrl == event.ctrl()
            && self.meta == event.meta()
            && self.alt == event.alt()
            && self.shift == event.shift()
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_key_combo(self))
    }
}

/// Minimal view over a physical keyboard event, implemented by callers against their
/// platform's event type (e.g. `web_sys::KeyboardEvent`) so this crate stays
/// dependency-free and unit-testable off-browser.
pub trait PhysicalKeyEvent {
    /// Returns the raw (non-case-folded) key token, e.g. `"P"` or `"Escape"`.
    fn key(&self) -> &str;
    /// Whether the control modifier is held.
    fn ctrl(&self) -> bool;
    /// Whether the platform meta modifier is held.
    fn meta(&self) -> bool;
    /// Whether the alt/option modifier is held.
    fn alt(&self) -> bool;
    /// Whether the shift modifier is held.
    fn shift(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// In-memory [`PhysicalKeyEvent`] fixture, used by tests and by any caller that
/// normalizes a native event into plain fields before matching.
pub struct KeyEventFixture<'a> {
    /// Raw key token.
    pub key: &'a str,
    /// Control modifier.
    pub ctrl: bool,
    /// Meta modifier.
    pub meta: bool,
    /// Alt modifier.
    pub alt: bool,
    /// Shift modifier.
    pub shift: bool,
}

impl<'a> PhysicalKeyEvent for KeyEventFixture<'a> {
    fn key(&self) -> &str {
        self.key
    }
    fn ctrl(&self) -> bool {
        self.ctrl
    }
    fn meta(&self) -> bool {
        self.meta
    }
    fn alt(&self) -> bool {
        self.alt
    }
    fn shift(&self) -> bool {
        self.shift
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Reason a shortcut string failed to parse.
pub enum KeyComboParseError {
    /// The string contained no non-modifier key token.
    MissingKey,
    /// The string contained more than one non-modifier key token.
    MultipleKeys,
    /// A `+`-separated part was empty (e.g. leading/trailing/doubled `+`).
    EmptyPart,
}

impl fmt::Display for KeyComboParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingKey => f.write_str("shortcut string has no non-modifier key"),
            Self::MultipleKeys => f.write_str("shortcut string has more than one non-modifier key"),
            Self::EmptyPart => f.write_str("shortcut string has an empty `+`-separated part"),
        }
    }
}

impl std::error::Error for KeyComboParseError {}

/// Parses a shortcut string such as `"Cmd+Shift+P"` into a [`KeyCombo`].
///
/// # Errors
///
/// Returns [`KeyComboParseError`] when the string does not contain exactly one
/// non-modifier key token.
pub fn parse_key_combo(raw: &str) -> Result<KeyCombo, KeyComboParseError> {
    let mut combo = KeyCombo::bare("");
    let mut key: Option<String> = None;

    for part in raw.split('+') {
        let token = part.trim();
        if token.is_empty() {
            return Err(KeyComboParseError::EmptyPart);
        }
        match token.to_lowercase().as_str() {
            "cmd" | "command" | "meta" => combo.meta = true,
            "ctrl" | "control" => combo.ctrl = true,
            "alt" | "option" => combo.alt = true,
            "shift" => combo.shift = true,
            other => {
                if key.is_some() {
                    return Err(KeyComboParseError::MultipleKeys);
                }
                key = Some(other.to_string());
            }
        }
    }

    combo.key = key.ok_or(KeyComboParseError::MissingKey)?;
    Ok(combo)
}

/// Formats a [`KeyCombo`] back into a canonical shortcut string, e.g. `"Ctrl+Shift+P"`.
///
/// Modifier order is always Ctrl, Meta, Alt, Shift, followed by the upper-cased key
/// token, so `parse_key_combo(&format_key_combo(c)) == Ok(c)` for any `c` produced by
/// [`parse_key_combo`] (see `spec.md` §8 `matchesKeyCombo`/`formatKeyCombo` property).
pub fn format_key_combo(combo: &KeyCombo) -> String {
    let mut parts = Vec::with_capacity(5);
    if combo.ctrl {
        parts.push("Ctrl".to_string());
    }
    if combo.meta {
        parts.push("Meta".to_string());
    }
    if combo.alt {
        parts.push("Alt".to_string());
    }
    if combo.shift {
        parts.push("Shift".to_string());
    }
    parts.push(combo.key.to_uppercase());
    parts.join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cmd_shift_p() {
        let combo = parse_key_combo("Cmd+Shift+P").expect("parse");
        assert_eq!(
            combo,
            KeyCombo {
                key: "p".to_string(),
                ctrl: false,
                meta: true,
                alt: false,
                shift: true,
            }
        );
    }

    #[test]
    fn matches_exact_modifiers_only() {
        let combo = parse_key_combo("Cmd+Shift+P").expect("parse");
        let matching = KeyEventFixture {
            key: "p",
            ctrl: false,
            meta: true,
            alt: false,
            shift: true,
        };
        assert!(combo.matches(&matching));

        let extra_modifier = KeyEventFixture {
            alt: true,
            ..matching
        };
        assert!(!combo.matches(&extra_modifier));

        let missing_modifier = KeyEventFixture {
            shift: false,
            ..matching
        };
        assert!(!combo.matches(&missing_modifier));
    }

    #[test]
    fn whitespace_and_case_are_tolerated() {
        let a = parse_key_combo("  ctrl + SHIFT + p ").expect("parse a");
        let b = parse_key_combo("Ctrl+Shift+P").expect("parse b");
        assert_eq!(a, b);
    }

    #[test]
    fn requires_exactly_one_non_modifier_key() {
        assert_eq!(
            parse_key_combo("Ctrl+Shift"),
            Err(KeyComboParseError::MissingKey)
        );
        assert_eq!(
            parse_key_combo("Ctrl+P+Q"),
            Err(KeyComboParseError::MultipleKeys)
        );
        assert_eq!(parse_key_combo("Ctrl++P"), Err(KeyComboParseError::EmptyPart));
    }

    #[test]
    fn format_then_parse_round_trips() {
        for raw in ["Cmd+Shift+P", "Ctrl+L", "Alt+Tab", "Q"] {
            let combo = parse_key_combo(raw).expect("parse");
            let formatted = format_key_combo(&combo);
            let reparsed = parse_key_combo(&formatted).expect("reparse");
            assert_eq!(combo, reparsed);
        }
    }

    #[test]
    fn recognizes_all_modifier_aliases() {
        assert_eq!(parse_key_combo("command+k").unwrap().meta, true);
        assert_eq!(parse_key_combo("control+k").unwrap().ctrl, true);
        assert_eq!(parse_key_combo("option+k").unwrap().alt, true);
    }
}
