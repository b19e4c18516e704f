//! Cache Store Module
//!
//! Single-threaded LRU engine: a `HashMap` from key to list slot paired with
//! a `RecencyList` holding the entries in access order.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::num::NonZeroUsize;

use crate::cache::lru::{Iter, RecencyList};
use crate::cache::CacheStats;

// == LRU Store ==
/// Bounded key-value storage with least-recently-used eviction.
///
/// Not synchronized; `BoundedLruCache` wraps it in a lock.
#[derive(Debug)]
pub struct LruStore<K, V> {
    /// Key to recency list slot
    index: HashMap<K, usize>,
    /// Entries ordered most to least recently used
    order: RecencyList<K, V>,
    stats: CacheStats,
    capacity: NonZeroUsize,
}

impl<K, V> LruStore<K, V>
where
    K: Eq + Hash + Clone,
{
    // == Constructor ==
    /// Creates an empty store holding at most `capacity` entries.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity.get()),
            order: RecencyList::with_capacity(capacity.get()),
            stats: CacheStats::new(),
            capacity,
        }
    }

    // == Put ==
    /// Inserts or replaces the value for `key` and marks it most recently used.
    ///
    /// Replacing an existing key never evicts. Inserting a new key into a
    /// full store evicts the least recently used entry first, which is
    /// returned so the caller can log or release it.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&slot) = self.index.get(&key) {
            if let Some(current) = self.order.get_mut(slot) {
                *current = value;
            }
            self.order.touch(slot);
            return None;
        }

        let evicted = if self.index.len() >= self.capacity.get() {
            self.evict_oldest()
        } else {
            None
        };

        let slot = self.order.push_front(key.clone(), value);
        self.index.insert(key, slot);

        evicted
    }

    // == Get ==
    /// Returns the value for `key` and marks it most recently used.
    ///
    /// A miss leaves size and order untouched; only the miss counter moves.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.index.get(key).copied() {
            Some(slot) => {
                self.stats.record_hit();
                self.order.touch(slot);
                self.order.get(slot)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Peek ==
    /// Returns the value for `key` without affecting recency or counters.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).and_then(|&slot| self.order.get(slot))
    }

    // == Remove ==
    /// Removes `key` and returns its value, if present.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = self.index.remove(key)?;
        self.order.remove(slot).map(|(_, value)| value)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    // == Iteration ==
    /// Iterates entries from most to least recently used.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.order.iter()
    }

    /// Drops all entries. Counters are kept.
    pub fn clear(&mut self) {
        self.index.clear();
        self.order.clear();
    }

    // == Stats ==
    /// Returns a snapshot of the counters with current size and capacity.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            total_entries: self.index.len(),
            capacity: self.capacity.get(),
            ..self.stats.clone()
        }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    fn evict_oldest(&mut self) -> Option<(K, V)> {
        let (key, value) = self.order.evict_oldest()?;
        self.index.remove(&key);
        self.stats.record_eviction();
        Some((key, value))
    }
}
