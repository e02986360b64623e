//! Sandboxed-iframe strategy: sandbox-token normalization, scheme validation, and
//! origin-registration integration with [`host_bridge`].
//!
//! Per `spec.md` §4.5, the shell never forwards a manifest's requested sandbox tokens
//! to the iframe verbatim: unknown tokens are dropped, and the single combination that
//! would let the embedded document escape the sandbox entirely (`allow-scripts` plus
//! `allow-same-origin`) is refused by dropping `allow-same-origin`.

use std::collections::BTreeSet;

use desktop_contract::manifest::SandboxConfig;
use host_bridge::OriginRegistry;

use crate::error::LoaderError;
use crate::mount::{LoadState, MountedApp};

/// Grants script execution inside the sandboxed document.
pub const ALLOW_SCRIPTS: &str = "allow-scripts";
/// Grants the sandboxed document its own origin instead of `null`.
///
/// Requesting this alongside [`ALLOW_SCRIPTS`] lets the document use that origin's
/// same-origin privileges to reach back out of the sandbox, so the pair is never
/// forwarded together.
pub const ALLOW_SAME_ORIGIN: &str = "allow-same-origin";

const ALLOWED_SANDBOX_TOKENS: &[&str] = &[
    ALLOW_SCRIPTS,
    ALLOW_SAME_ORIGIN,
    "allow-forms",
    "allow-popups",
    "allow-modals",
    "allow-downloads",
    "allow-popups-to-escape-sandbox",
];

/// Normalizes a manifest's requested sandbox tokens into the set actually applied to
/// the iframe's `sandbox` attribute: lowercased, trimmed, filtered to known tokens,
/// always including `allow-scripts` (`spec.md` §4.5's baseline), and with
/// `allow-same-origin` dropped since it is always requested alongside `allow-scripts`.
pub fn normalize_sandbox_tokens(requested: &BTreeSet<String>) -> BTreeSet<String> {
    let mut normalized: BTreeSet<String> = requested
        .iter()
        .map(|token| token.trim().to_lowercase())
        .filter(|token| ALLOWED_SANDBOX_TOKENS.contains(&token.as_str()))
        .collect();
    normalized.insert(ALLOW_SCRIPTS.to_string());

    if normalized.contains(ALLOW_SAME_ORIGIN) {
        log::warn!("dropping `allow-same-origin`: requesting it with `allow-scripts` would let the sandbox escape");
        normalized.remove(ALLOW_SAME_ORIGIN);
    }
    normalized
}

/// Validates that `url` uses an `http:` or `https:` scheme, the only schemes the
/// sandboxed-iframe loader accepts (`spec.md` §4.5 refuses `javascript:`, `data:`, and
/// other schemes that could bypass the iframe boundary).
pub fn validate_sandbox_scheme(url: &str) -> Result<(), LoaderError> {
    if url.starts_with("https://") || url.starts_with("http://") {
        Ok(())
    } else {
        Err(LoaderError::DisallowedScheme(url.to_string()))
    }
}

/// Resolved, validated sandbox configuration ready to apply to an iframe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSandbox {
    /// Document source URL.
    pub url: String,
    /// Origin the bridge will accept inbound messages from.
    pub origin: String,
    /// Normalized sandbox attribute tokens.
    pub tokens: BTreeSet<String>,
}

/// Validates and normalizes a manifest's [`SandboxConfig`].
pub fn resolve_sandbox(config: &SandboxConfig) -> Result<ResolvedSandbox, LoaderError> {
    validate_sandbox_scheme(&config.url)?;
    Ok(ResolvedSandbox {
        url: config.url.clone(),
        origin: config.origin.clone(),
        tokens: normalize_sandbox_tokens(&config.allow),
    })
}

/// Sandboxed-iframe-strategy loader for a single app.
///
/// Mounting registers the app's origin with the shared [`OriginRegistry`] so inbound
/// bridge messages are policed; unmounting revokes it. The iframe element itself is
/// created/destroyed by `desktop_shell`'s browser glue, which holds the actual DOM
/// handle — this type only owns the lifecycle bookkeeping.
pub struct SandboxLoader<'a> {
    key: String,
    resolved: ResolvedSandbox,
    registry: &'a mut OriginRegistry,
    state: LoadState,
}

impl<'a> SandboxLoader<'a> {
    /// Validates `config` and prepares a loader keyed by `key` (the hosting window id).
    pub fn new(key: impl Into<String>, config: &SandboxConfig, registry: &'a mut OriginRegistry) -> Result<Self, LoaderError> {
        let resolved = resolve_sandbox(config)?;
        Ok(Self {
            key: key.into(),
            resolved,
            registry,
            state: LoadState::Idle,
        })
    }

    /// The normalized configuration that will be (or was) applied to the iframe.
    pub fn resolved(&self) -> &ResolvedSandbox {
        &self.resolved
    }
}

impl<'a> MountedApp for SandboxLoader<'a> {
    fn state(&self) -> &LoadState {
        &self.state
    }

    fn mount(&mut self) -> Result<(), LoaderError> {
        match self.state {
            LoadState::Ready => return Ok(()),
            LoadState::Loading => return Err(LoaderError::AlreadyMounted),
            _ => {}
        }
        self.registry.register(self.key.clone(), self.resolved.origin.clone());
        self.state = LoadState::Ready;
        Ok(())
    }

    fn unmount(&mut self) {
        self.registry.unregister(&self.key);
        self.state = LoadState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn unknown_tokens_are_dropped() {
        let normalized = normalize_sandbox_tokens(&tokens(&["allow-forms", "allow-pointer-lock"]));
        assert_eq!(normalized, tokens(&["allow-forms", ALLOW_SCRIPTS]));
    }

    #[test]
    fn scripts_and_same_origin_together_drops_same_origin() {
        let normalized = normalize_sandbox_tokens(&tokens(&[ALLOW_SCRIPTS, ALLOW_SAME_ORIGIN]));
        assert_eq!(normalized, tokens(&[ALLOW_SCRIPTS]));
    }

    #[test]
    fn allow_scripts_is_always_present_even_when_not_requested() {
        let normalized = normalize_sandbox_tokens(&tokens(&["allow-forms"]));
        assert!(normalized.contains(ALLOW_SCRIPTS));
    }

    #[test]
    fn same_origin_alone_is_upgraded_and_then_dropped() {
        // A manifest that requests only `allow-same-origin` still gets the mandatory
        // `allow-scripts` baseline, which means the dangerous combination is now
        // present and `allow-same-origin` must be stripped, not kept.
        let normalized = normalize_sandbox_tokens(&tokens(&[ALLOW_SAME_ORIGIN]));
        assert_eq!(normalized, tokens(&[ALLOW_SCRIPTS]));
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let err = validate_sandbox_scheme("javascript:alert(1)").unwrap_err();
        assert_eq!(err, LoaderError::DisallowedScheme("javascript:alert(1)".to_string()));
        assert!(validate_sandbox_scheme("https://example.com/app").is_ok());
    }

    #[test]
    fn mount_registers_origin_and_unmount_revokes_it() {
        let mut registry = OriginRegistry::new();
        let config = SandboxConfig {
            url: "https://example.com/app".to_string(),
            origin: "https://example.com".to_string(),
            allow: BTreeSet::new(),
        };
        {
            let mut loader = SandboxLoader::new("win-1", &config, &mut registry).unwrap();
            loader.mount().unwrap();
        }
        assert!(registry.accepts("win-1", "https://example.com"));

        let mut loader2 = SandboxLoader::new("win-1", &config, &mut registry).unwrap();
        loader2.unmount();
        assert!(!registry.accepts("win-1", "https://example.com"));
    }
}
