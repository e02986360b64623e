//! Generic key-value storage contracts backing the scoped storage crate.
//!
//! [`SyncKvProvider`] models a synchronous key-value surface (`localStorage`-shaped);
//! [`AsyncKvProvider`] models an asynchronous one (IndexedDB-shaped). `scoped_storage`
//! layers app-id prefixing/partitioning on top of either without knowing which backend
//! is in play.

use std::{
    cell::RefCell,
    collections::BTreeMap,
    future::Future,
    pin::Pin,
    rc::Rc,
};

/// Host service for a synchronous flat key-value store.
pub trait SyncKvProvider {
    /// Reads the raw value stored at `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
    /// Writes `value` at `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the write (e.g. quota exceeded).
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    /// Removes `key`, if present.
    fn remove(&self, key: &str);
    /// Returns every key currently stored, in unspecified order.
    fn keys(&self) -> Vec<String>;
}

#[derive(Debug, Clone, Default)]
/// In-memory [`SyncKvProvider`] used by native tests and as a fallback.
pub struct MemorySyncKvProvider {
    inner: Rc<RefCell<BTreeMap<String, String>>>,
}

impl SyncKvProvider for MemorySyncKvProvider {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.inner.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.inner.borrow_mut().remove(key);
    }

    fn keys(&self) -> Vec<String> {
        self.inner.borrow().keys().cloned().collect()
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op [`SyncKvProvider`] for unsupported targets.
pub struct NoopSyncKvProvider;

impl SyncKvProvider for NoopSyncKvProvider {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }
    fn set(&self, _key: &str, _value: &str) -> Result<(), String> {
        Ok(())
    }
    fn remove(&self, _key: &str) {}
    fn keys(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Object-safe boxed future used by [`AsyncKvProvider`] methods.
pub type KvFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for an asynchronous flat key-value store (one logical object store).
pub trait AsyncKvProvider {
    /// Reads the raw value stored at `key`, if any.
    fn get<'a>(&'a self, key: &'a str) -> KvFuture<'a, Result<Option<String>, String>>;
    /// Writes `value` at `key`.
    fn set<'a>(&'a self, key: &'a str, value: &'a str) -> KvFuture<'a, Result<(), String>>;
    /// Removes `key`, if present.
    fn remove<'a>(&'a self, key: &'a str) -> KvFuture<'a, Result<(), String>>;
    /// Returns every key currently stored, in unspecified order.
    fn keys<'a>(&'a self) -> KvFuture<'a, Result<Vec<String>, String>>;
}

#[derive(Debug, Clone, Default)]
/// In-memory [`AsyncKvProvider`] used by native tests and as a fallback.
pub struct MemoryAsyncKvProvider {
    inner: Rc<RefCell<BTreeMap<String, String>>>,
}

impl AsyncKvProvider for MemoryAsyncKvProvider {
    fn get<'a>(&'a self, key: &'a str) -> KvFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.inner.borrow().get(key).cloned()) })
    }

    fn set<'a>(&'a self, key: &'a str, value: &'a str) -> KvFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        })
    }

    fn remove<'a>(&'a self, key: &'a str) -> KvFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner.borrow_mut().remove(key);
            Ok(())
        })
    }

    fn keys<'a>(&'a self) -> KvFuture<'a, Result<Vec<String>, String>> {
        Box::pin(async move { Ok(self.inner.borrow().keys().cloned().collect()) })
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op [`AsyncKvProvider`] for unsupported targets.
pub struct NoopAsyncKvProvider;

impl AsyncKvProvider for NoopAsyncKvProvider {
    fn get<'a>(&'a self, _key: &'a str) -> KvFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }
    fn set<'a>(&'a self, _key: &'a str, _value: &'a str) -> KvFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
    fn remove<'a>(&'a self, _key: &'a str) -> KvFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
    fn keys<'a>(&'a self) -> KvFuture<'a, Result<Vec<String>, String>> {
        Box::pin(async { Ok(Vec::new()) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn memory_sync_kv_round_trips() {
        let kv = MemorySyncKvProvider::default();
        kv.set("a", "1").unwrap();
        assert_eq!(kv.get("a"), Some("1".to_string()));
        kv.remove("a");
        assert_eq!(kv.get("a"), None);
    }

    #[test]
    fn memory_async_kv_round_trips() {
        let kv = MemoryAsyncKvProvider::default();
        block_on(kv.set("a", "1")).unwrap();
        assert_eq!(block_on(kv.get("a")).unwrap(), Some("1".to_string()));
        assert_eq!(block_on(kv.keys()).unwrap(), vec!["a".to_string()]);
        block_on(kv.remove("a")).unwrap();
        assert_eq!(block_on(kv.get("a")).unwrap(), None);
    }
}
