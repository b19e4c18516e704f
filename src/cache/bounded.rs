//! Thread-safe bounded LRU cache.
//!
//! `BoundedLruCache` is the type services hold. It wraps an `LruStore` in a
//! single `parking_lot::Mutex` taken for the whole of each operation, so
//! concurrent callers are serialized and never see a half-applied update.
//! Every operation is total: a miss is `None`, `put` and `remove` always
//! succeed.

use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;
use std::num::NonZeroUsize;

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::cache::{CacheStats, LruStore, DEFAULT_CAPACITY};

// == Bounded LRU Cache ==
/// Fixed-capacity key-value cache with least-recently-used eviction.
///
/// Share one instance between services with `Arc<BoundedLruCache<K, V>>`.
#[derive(Debug)]
pub struct BoundedLruCache<K, V> {
    inner: Mutex<LruStore<K, V>>,
}

impl<K, V> BoundedLruCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
{
    /// Creates an empty cache holding at most `capacity` entries.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            inner: Mutex::new(LruStore::new(capacity)),
        }
    }

    // == Put ==
    /// Inserts or replaces the value for `key`; `key` becomes most recently used.
    ///
    /// When a new key arrives at capacity, the least recently used entry is
    /// evicted in the same critical section.
    pub fn put(&self, key: K, value: V) {
        debug!(?key, "Add to cache");
        let evicted = self.inner.lock().put(key, value);

        if let Some((evicted_key, _)) = evicted {
            info!(key = ?evicted_key, "Evicted least recently used entry");
        }
    }

    // == Get ==
    /// Returns a clone of the value for `key`, marking it most recently used.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
        V: Clone,
    {
        let value = self.inner.lock().get(key).cloned();

        if value.is_some() {
            debug!(?key, "Get from cache");
        } else {
            debug!(?key, "Key not found in cache");
        }
        value
    }

    /// Returns a clone of the value for `key` without changing its recency.
    pub fn peek<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.inner.lock().peek(key).cloned()
    }

    // == Remove ==
    /// Removes `key`. Returns whether an entry was present.
    pub fn remove<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let removed = self.inner.lock().remove(key).is_some();
        debug!(?key, removed, "Remove from cache");
        removed
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().contains(key)
    }

    /// Current number of entries, always within `0..=capacity`.
    pub fn size(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn capacity(&self) -> NonZeroUsize {
        self.inner.lock().capacity()
    }

    /// Snapshot of the keys, most recently used first.
    pub fn keys(&self) -> Vec<K> {
        self.inner.lock().iter().map(|(key, _)| key.clone()).collect()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }
}

impl<K, V> Default for BoundedLruCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
