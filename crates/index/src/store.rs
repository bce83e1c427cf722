//! Value store seam for ranked indexes.
//!
//! The ranked index keeps its payloads in an associative container keyed by
//! entry key. The container itself is not ordered; order lives in the key
//! array. Any map with get/set/clear semantics can back an index.

use alloc::collections::BTreeMap;
use binrank_core::Key;
use hashbrown::HashMap;

/// Associative storage of key -> value.
pub trait ValueStore<V> {
    /// Returns the value stored under `key`.
    fn get(&self, key: Key) -> Option<&V>;

    /// Stores `value` under `key`, returning the previous value.
    fn set(&mut self, key: Key, value: V) -> Option<V>;

    /// Removes the value stored under `key`.
    fn clear(&mut self, key: Key) -> Option<V>;

    /// Returns the number of stored values.
    fn len(&self) -> usize;

    /// Returns true if a value is stored under `key`.
    fn has(&self, key: Key) -> bool {
        self.get(key).is_some()
    }

    /// Returns true if the store holds no values.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V> ValueStore<V> for HashMap<Key, V> {
    #[inline]
    fn get(&self, key: Key) -> Option<&V> {
        HashMap::get(self, &key)
    }

    #[inline]
    fn set(&mut self, key: Key, value: V) -> Option<V> {
        self.insert(key, value)
    }

    #[inline]
    fn clear(&mut self, key: Key) -> Option<V> {
        self.remove(&key)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn has(&self, key: Key) -> bool {
        self.contains_key(&key)
    }
}

impl<V> ValueStore<V> for BTreeMap<Key, V> {
    #[inline]
    fn get(&self, key: Key) -> Option<&V> {
        BTreeMap::get(self, &key)
    }

    #[inline]
    fn set(&mut self, key: Key, value: V) -> Option<V> {
        self.insert(key, value)
    }

    #[inline]
    fn clear(&mut self, key: Key) -> Option<V> {
        self.remove(&key)
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn has(&self, key: Key) -> bool {
        self.contains_key(&key)
    }
}
