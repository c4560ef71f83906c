//! In-process cache with get-or-compute semantics.

use std::borrow::Borrow;
use std::fmt;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::OnceCell;

/// Concurrent, non-expiring key-value cache.
///
/// Each key owns a `OnceCell`, so concurrent misses for the same key await a
/// single initializer instead of racing. A failed initializer leaves its cell
/// empty and the next caller retries; errors are never stored.
pub struct MemoryCache<K, V> {
    entries: DashMap<K, Arc<OnceCell<V>>>,
}

impl<K, V> MemoryCache<K, V>
where
    K: Eq + Hash,
    V: Clone + Send + Sync,
{
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Get a value without computing it.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries
            .get(key)
            .and_then(|cell| cell.get().cloned())
    }

    /// Return the cached value for `key`, or run `init` once to produce it.
    pub async fn get_or_try_init<F, Fut, E>(&self, key: K, init: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.get(&key) {
            return Ok(value);
        }

        // Clone the cell out so no shard lock is held across the await.
        let cell = self.entries.entry(key).or_default().clone();
        cell.get_or_try_init(init).await.cloned()
    }

    /// Number of populated entries.
    pub fn len(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.value().initialized())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.get(key).is_some()
    }
}

impl<K, V> Default for MemoryCache<K, V>
where
    K: Eq + Hash,
    V: Clone + Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V> fmt::Debug for MemoryCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryCache")
            .field("keys", &self.entries.len())
            .finish()
    }
}
