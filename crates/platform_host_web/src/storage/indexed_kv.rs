//! IndexedDB-backed generic key-value provider, used by `scoped_storage`'s async
//! per-app provider.

use platform_host::{AsyncKvProvider, KvFuture};

#[derive(Debug, Clone, Copy, Default)]
/// Browser key-value provider backed by a single IndexedDB object store.
pub struct WebIndexedKvProvider;

impl AsyncKvProvider for WebIndexedKvProvider {
    fn get<'a>(&'a self, key: &'a str) -> KvFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { crate::bridge::kv_get(key).await })
    }

    fn set<'a>(&'a self, key: &'a str, value: &'a str) -> KvFuture<'a, Result<(), String>> {
        Box::pin(async move { crate::bridge::kv_set(key, value).await })
    }

    fn remove<'a>(&'a self, key: &'a str) -> KvFuture<'a, Result<(), String>> {
        Box::pin(async move { crate::bridge::kv_remove(key).await })
    }

    fn keys<'a>(&'a self) -> KvFuture<'a, Result<Vec<String>, String>> {
        Box::pin(async move { crate::bridge::kv_keys().await })
    }
}
