//! App-scoped storage: a synchronous, prefix-partitioned key-value surface and an
//! asynchronous per-app surface, both layered over the host-agnostic providers in
//! `platform_host` without knowing whether the backing store is `localStorage`,
//! IndexedDB, or an in-memory stand-in.
//!
//! See `spec.md` §6: sync keys are shaped `archbase:${appId}:${key}`; the async
//! provider partitions a single logical object store by `${appId}:${key}`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod async_storage;
mod sync_storage;

pub use async_storage::ScopedAsyncStorage;
pub use sync_storage::ScopedSyncStorage;

/// Literal prefix every sync-scoped key is namespaced under, per `spec.md` §6.
pub const SYNC_KEY_PREFIX: &str = "archbase:";

fn sync_key(app_id: &str, key: &str) -> String {
    format!("{SYNC_KEY_PREFIX}{app_id}:{key}")
}

fn async_key(app_id: &str, key: &str) -> String {
    format!("{app_id}:{key}")
}

/// Strips this app's sync prefix from a raw provider key, returning the scope-local
/// name, or `None` if the key does not belong to `app_id`.
fn strip_sync_prefix<'a>(app_id: &str, raw_key: &'a str) -> Option<&'a str> {
    let owned_prefix = sync_key(app_id, "");
    raw_key.strip_prefix(&owned_prefix)
}

fn strip_async_prefix<'a>(app_id: &str, raw_key: &'a str) -> Option<&'a str> {
    let owned_prefix = async_key(app_id, "");
    raw_key.strip_prefix(&owned_prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_key_shape_matches_the_persisted_namespace_contract() {
        assert_eq!(sync_key("notes", "draft"), "archbase:notes:draft");
    }

    #[test]
    fn strip_sync_prefix_recovers_the_local_name() {
        assert_eq!(strip_sync_prefix("notes", "archbase:notes:draft"), Some("draft"));
        assert_eq!(strip_sync_prefix("notes", "archbase:calendar:draft"), None);
    }
}
