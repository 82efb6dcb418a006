use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::catalog::errors::Result;

/// Write interface of the key-value store that holds exported catalog views.
///
/// Keys are strings; integer track ids are rendered in decimal before they
/// reach the store. Writes overwrite, last write wins. Implementations map
/// their own failures into [`Error::StoreError`](crate::catalog::errors::Error).
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Store one key/value pair.
    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()>;

    /// Store many key/value pairs in one call.
    async fn set_many(&self, entries: Vec<(String, Vec<u8>)>) -> Result<()>;
}

/// In-memory [`KeyValueStore`] backend.
///
/// Holds values in a mutex-guarded map and records how writes arrived
/// (point-write order, bulk-call count), which is what tests and embedded
/// hosts without an external store need.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    data: HashMap<String, Vec<u8>>,
    point_writes: Vec<String>,
    bulk_calls: usize,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read back the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.lock().data.get(key).cloned()
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.lock().data.len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.lock().data.is_empty()
    }

    /// Number of `set_many` calls received so far.
    pub fn bulk_calls(&self) -> usize {
        self.lock().bulk_calls
    }

    /// Keys written through `set`, in arrival order.
    pub fn point_writes(&self) -> Vec<String> {
        self.lock().point_writes.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("store mutex poisoned")
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()> {
        let mut inner = self.lock();
        inner.point_writes.push(key.to_string());
        inner.data.insert(key.to_string(), value);
        Ok(())
    }

    async fn set_many(&self, entries: Vec<(String, Vec<u8>)>) -> Result<()> {
        let mut inner = self.lock();
        inner.bulk_calls += 1;
        inner.data.extend(entries);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let store = MemoryStore::new();
        store.set("a", vec![1, 2]).await.unwrap();

        assert_eq!(store.get("a"), Some(vec![1, 2]));
        assert_eq!(store.get("b"), None);
        assert_eq!(store.point_writes(), vec!["a".to_string()]);
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let store = MemoryStore::new();
        store.set("a", vec![1]).await.unwrap();
        store.set("a", vec![2]).await.unwrap();

        assert_eq!(store.get("a"), Some(vec![2]));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_set_many() {
        let store = MemoryStore::new();
        store
            .set_many(vec![
                ("1".to_string(), vec![1]),
                ("2".to_string(), vec![2]),
            ])
            .await
            .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.bulk_calls(), 1);
        assert!(store.point_writes().is_empty());
    }
}
