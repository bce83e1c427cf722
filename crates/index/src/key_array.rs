//! Sorted key array.
//!
//! Keys are kept contiguous in comparator order. Positional insert and
//! delete shift the tail; capacity only ever doubles.

use alloc::vec::Vec;
use binrank_core::{effective_capacity, Key};
use core::ops::Index;

/// An owned, growable sequence of keys in rank order.
#[derive(Clone, Debug)]
pub struct SortedKeyArray {
    keys: Vec<Key>,
    /// Logical capacity. `Vec` may over-allocate, so this is tracked here.
    capacity: usize,
}

impl SortedKeyArray {
    /// Creates an empty array. A zero capacity selects the default.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = effective_capacity(capacity);
        Self {
            keys: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the number of keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the array holds no keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the logical capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the key at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Key> {
        self.keys.get(index).copied()
    }

    /// Returns the keys as a slice, left to right.
    #[inline]
    pub fn as_slice(&self) -> &[Key] {
        &self.keys
    }

    /// Doubles the capacity if the array is full.
    ///
    /// Returns true if a growth happened.
    pub fn ensure_capacity(&mut self) -> bool {
        if self.keys.len() < self.capacity {
            return false;
        }
        let grown = self.capacity * 2;
        self.keys.reserve_exact(grown - self.keys.len());
        self.capacity = grown;
        true
    }

    /// Inserts `key` at `index`, shifting later keys right.
    ///
    /// Capacity must have been ensured beforehand.
    pub fn insert_at(&mut self, index: usize, key: Key) {
        debug_assert!(index <= self.keys.len());
        debug_assert!(self.keys.len() < self.capacity);
        self.keys.insert(index, key);
    }

    /// Removes the key at `index`, shifting later keys left.
    pub fn delete_at(&mut self, index: usize) -> Key {
        debug_assert!(index < self.keys.len());
        self.keys.remove(index)
    }
}

impl Index<usize> for SortedKeyArray {
    type Output = Key;

    #[inline]
    fn index(&self, index: usize) -> &Key {
        &self.keys[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use binrank_core::DEFAULT_CAPACITY;

    #[test]
    fn test_default_capacity() {
        let array = SortedKeyArray::with_capacity(0);
        assert_eq!(array.capacity(), DEFAULT_CAPACITY);
        assert!(array.is_empty());
    }

    #[test]
    fn test_insert_and_delete_shift() {
        let mut array = SortedKeyArray::with_capacity(8);
        array.insert_at(0, 10);
        array.insert_at(1, 30);
        array.insert_at(1, 20);
        array.insert_at(0, 5);
        assert_eq!(array.as_slice(), &[5, 10, 20, 30]);

        assert_eq!(array.delete_at(1), 10);
        assert_eq!(array.as_slice(), &[5, 20, 30]);
        assert_eq!(array.delete_at(2), 30);
        assert_eq!(array.as_slice(), &[5, 20]);
        assert_eq!(array.len(), 2);
        assert_eq!(array[1], 20);
        assert_eq!(array.get(2), None);
    }

    #[test]
    fn test_growth_doubles() {
        let mut array = SortedKeyArray::with_capacity(1);
        let mut growths = 0;
        for key in 0..5 {
            if array.ensure_capacity() {
                growths += 1;
            }
            array.insert_at(array.len(), key);
        }
        // 1 -> 2 -> 4 -> 8
        assert_eq!(growths, 3);
        assert_eq!(array.capacity(), 8);
        assert_eq!(array.as_slice(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_capacity_never_shrinks() {
        let mut array = SortedKeyArray::with_capacity(2);
        array.insert_at(0, 1);
        array.insert_at(1, 2);
        assert!(array.ensure_capacity());
        array.insert_at(2, 3);
        array.delete_at(0);
        array.delete_at(0);
        array.delete_at(0);
        assert_eq!(array.capacity(), 4);
        assert!(!array.ensure_capacity());
    }
}
