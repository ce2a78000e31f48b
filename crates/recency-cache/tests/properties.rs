//! Property-based tests for LRU ordering and capacity.

use proptest::prelude::*;
use recency_cache::{noop, LruCache};
use std::collections::VecDeque;

#[derive(Debug, Clone)]
enum Op {
    Set(u8, u16),
    Get(u8),
    Remove(u8),
    RemoveOldest,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0u8..24, any::<u16>()).prop_map(|(k, v)| Op::Set(k, v)),
        3 => (0u8..24).prop_map(Op::Get),
        1 => (0u8..24).prop_map(Op::Remove),
        1 => Just(Op::RemoveOldest),
    ]
}

/// Straightforward O(n) model: front is most recently used
#[derive(Default)]
struct Model {
    entries: VecDeque<(u8, u16)>,
}

impl Model {
    fn position(&self, key: u8) -> Option<usize> {
        self.entries.iter().position(|(k, _)| *k == key)
    }

    fn set(&mut self, key: u8, value: u16, capacity: usize) -> Option<(u8, u16)> {
        if let Some(pos) = self.position(key) {
            self.entries.remove(pos);
            self.entries.push_front((key, value));
            return None;
        }
        self.entries.push_front((key, value));
        if self.entries.len() > capacity {
            self.entries.pop_back()
        } else {
            None
        }
    }

    fn get(&mut self, key: u8) -> Option<u16> {
        let pos = self.position(key)?;
        let entry = self.entries.remove(pos)?;
        self.entries.push_front(entry);
        Some(entry.1)
    }

    fn remove(&mut self, key: u8) -> Option<u16> {
        let pos = self.position(key)?;
        self.entries.remove(pos).map(|(_, v)| v)
    }

    fn keys(&self) -> Vec<u8> {
        self.entries.iter().map(|(k, _)| *k).collect()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn matches_reference_model(capacity in 1usize..8, ops in prop::collection::vec(arb_op(), 0..200)) {
        let cache = LruCache::new(capacity, noop()).unwrap();
        let mut model = Model::default();

        for op in ops {
            match op {
                Op::Set(k, v) => {
                    cache.set(k, v);
                    model.set(k, v, capacity);
                }
                Op::Get(k) => {
                    prop_assert_eq!(cache.get(&k), model.get(k));
                }
                Op::Remove(k) => {
                    prop_assert_eq!(cache.remove(&k), model.remove(k));
                }
                Op::RemoveOldest => {
                    prop_assert_eq!(cache.remove_oldest(), model.entries.pop_back());
                }
            }
            prop_assert!(cache.len() <= capacity);
            prop_assert_eq!(cache.keys(), model.keys());
        }

        prop_assert!(cache.check_invariants());
    }

    #[test]
    fn capacity_is_never_exceeded(capacity in 1usize..16, keys in prop::collection::vec(any::<u16>(), 0..300)) {
        let cache = LruCache::new(capacity, noop()).unwrap();
        for key in keys {
            cache.set(key, ());
            prop_assert!(cache.len() <= capacity);
        }
        prop_assert!(cache.check_invariants());
    }

    #[test]
    fn untouched_entries_leave_in_insertion_order(count in 1usize..32) {
        let cache = LruCache::new(count, noop()).unwrap();
        for key in 0..count {
            cache.set(key, key);
        }

        let expected: Vec<usize> = (0..count).rev().collect();
        prop_assert_eq!(cache.keys(), expected);

        for key in 0..count {
            prop_assert_eq!(cache.remove_oldest(), Some((key, key)));
        }
        prop_assert!(cache.is_empty());
    }
}
