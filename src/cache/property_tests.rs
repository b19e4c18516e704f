//! Property-Based Tests for Cache Module
//!
//! Checks `BoundedLruCache` against a plain `Vec` reference model that keeps
//! keys ordered most to least recently used.

use proptest::prelude::*;
use std::num::NonZeroUsize;

use crate::cache::BoundedLruCache;

// == Reference Model ==
/// Naive LRU: front of the Vec is most recently used.
#[derive(Debug, Default)]
struct Model {
    capacity: usize,
    entries: Vec<(u8, u32)>,
}

impl Model {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::new(),
        }
    }

    fn put(&mut self, key: u8, value: u32) {
        if let Some(pos) = self.entries.iter().position(|(k, _)| *k == key) {
            self.entries.remove(pos);
        } else if self.entries.len() >= self.capacity {
            self.entries.pop();
        }
        self.entries.insert(0, (key, value));
    }

    fn get(&mut self, key: u8) -> Option<u32> {
        let pos = self.entries.iter().position(|(k, _)| *k == key)?;
        let entry = self.entries.remove(pos);
        self.entries.insert(0, entry);
        Some(entry.1)
    }

    fn remove(&mut self, key: u8) -> bool {
        match self.entries.iter().position(|(k, _)| *k == key) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    fn keys(&self) -> Vec<u8> {
        self.entries.iter().map(|(k, _)| *k).collect()
    }
}

// == Strategies ==
#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: u8, value: u32 },
    Get { key: u8 },
    Remove { key: u8 },
}

/// Keys drawn from a small space so hits, overwrites and evictions all occur.
fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        3 => (0u8..12, any::<u32>()).prop_map(|(key, value)| CacheOp::Put { key, value }),
        2 => (0u8..12).prop_map(|key| CacheOp::Get { key }),
        1 => (0u8..12).prop_map(|key| CacheOp::Remove { key }),
    ]
}

fn new_cache(capacity: usize) -> BoundedLruCache<u8, u32> {
    BoundedLruCache::new(NonZeroUsize::new(capacity).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Any op sequence leaves the cache in exactly the order the model predicts.
    #[test]
    fn prop_matches_reference_model(
        capacity in 1usize..8,
        ops in prop::collection::vec(cache_op_strategy(), 1..120)
    ) {
        let cache = new_cache(capacity);
        let mut model = Model::new(capacity);

        for op in ops {
            match op {
                CacheOp::Put { key, value } => {
                    cache.put(key, value);
                    model.put(key, value);
                }
                CacheOp::Get { key } => {
                    prop_assert_eq!(cache.get(&key), model.get(key), "get({}) mismatch", key);
                }
                CacheOp::Remove { key } => {
                    prop_assert_eq!(cache.remove(&key), model.remove(key), "remove({}) mismatch", key);
                }
            }
            prop_assert_eq!(cache.keys(), model.keys());
            prop_assert!(cache.size() <= capacity);
        }
    }

    // Distinct-key inserts never push size above capacity.
    #[test]
    fn prop_capacity_enforcement(
        capacity in 1usize..16,
        count in 1usize..200
    ) {
        let cache: BoundedLruCache<String, usize> =
            BoundedLruCache::new(NonZeroUsize::new(capacity).unwrap());

        for i in 0..count {
            cache.put(format!("key_{i}"), i);
            prop_assert!(cache.size() <= capacity, "size {} exceeds {}", cache.size(), capacity);
        }
        prop_assert_eq!(cache.size(), count.min(capacity));
        prop_assert_eq!(cache.stats().evictions as usize, count.saturating_sub(capacity));
    }

    // After filling to N and reading k1, the next insert evicts k2 instead.
    #[test]
    fn prop_read_refreshes_recency(capacity in 2usize..10) {
        let cache = new_cache(capacity);
        for key in 0..capacity as u8 {
            cache.put(key, u32::from(key));
        }

        prop_assert_eq!(cache.get(&0), Some(0));
        cache.put(200, 200);

        prop_assert!(cache.contains(&0));
        prop_assert!(!cache.contains(&1));
        prop_assert_eq!(cache.size(), capacity);
    }

    // Overwriting keeps the count and returns the latest value.
    #[test]
    fn prop_overwrite_semantics(key in any::<u8>(), v1 in any::<u32>(), v2 in any::<u32>()) {
        let cache = new_cache(5);

        cache.put(key, v1);
        cache.put(key, v2);

        prop_assert_eq!(cache.size(), 1);
        prop_assert_eq!(cache.get(&key), Some(v2));
    }

    // Missing lookups leave size and order alone.
    #[test]
    fn prop_miss_does_not_mutate(
        present in prop::collection::vec(0u8..100, 1..5),
        absent in 100u8..=255
    ) {
        let cache = new_cache(5);
        for key in &present {
            cache.put(*key, 1);
        }
        let keys_before = cache.keys();

        prop_assert_eq!(cache.get(&absent), None);
        prop_assert_eq!(cache.keys(), keys_before);
    }

    // Removal drops exactly the one key, or nothing if absent.
    #[test]
    fn prop_remove_decrements_by_one(
        keys in prop::collection::hash_set(any::<u8>(), 1..5),
        target in any::<u8>()
    ) {
        let cache = new_cache(5);
        for key in &keys {
            cache.put(*key, 0);
        }
        let before = cache.size();
        let was_present = keys.contains(&target);

        prop_assert_eq!(cache.remove(&target), was_present);
        prop_assert_eq!(cache.size(), before - usize::from(was_present));
        prop_assert_eq!(cache.get(&target), None);
    }
}
