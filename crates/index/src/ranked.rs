//! Ranked index facade.
//!
//! A `RankedIndex` pairs a sorted key array with a value store. Every key in
//! the array has exactly one value in the store and vice versa. Ranks are
//! 1-based and can be counted from either end; they are snapshots that hold
//! until the next mutation.

use crate::comparator::RankComparator;
use crate::finder::PositionFinder;
use crate::key_array::SortedKeyArray;
use crate::stats::RankStats;
use crate::store::ValueStore;
use alloc::string::String;
use alloc::vec::Vec;
use binrank_core::{Error, Key, Rank, Result, DEFAULT_CAPACITY};
use core::fmt;
use core::marker::PhantomData;
use hashbrown::HashMap;

/// A dynamic set of keyed values kept in comparator order.
#[derive(Debug)]
pub struct RankedIndex<V, C, S = HashMap<Key, V>> {
    /// Informational name.
    name: String,
    /// Orders values; fixed for the lifetime of the index.
    comparator: C,
    /// Keys in rank order.
    keys: SortedKeyArray,
    /// Key -> value payloads.
    store: S,
    /// Statistics for this index.
    stats: RankStats,
    _marker: PhantomData<V>,
}

impl<V, C> RankedIndex<V, C>
where
    C: RankComparator<V>,
{
    /// Creates an empty index with the default capacity.
    pub fn new(name: impl Into<String>, comparator: C) -> Self {
        Self::with_capacity(name, comparator, DEFAULT_CAPACITY)
    }

    /// Creates an empty index. A zero capacity selects the default.
    pub fn with_capacity(name: impl Into<String>, comparator: C, capacity: usize) -> Self {
        Self::from_parts(name.into(), comparator, HashMap::new(), capacity)
    }
}

impl<V, C, S> RankedIndex<V, C, S>
where
    C: RankComparator<V>,
    S: ValueStore<V>,
{
    /// Assembles an index around an empty store.
    pub(crate) fn from_parts(name: String, comparator: C, store: S, capacity: usize) -> Self {
        debug_assert!(store.is_empty());
        let keys = SortedKeyArray::with_capacity(capacity);
        tracing::debug!(rank_name = %name, capacity = keys.capacity(), "binary rank: created");
        Self {
            name,
            comparator,
            keys,
            store,
            stats: RankStats::new(),
            _marker: PhantomData,
        }
    }

    /// Returns the name of this index.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current key array capacity.
    pub fn capacity(&self) -> usize {
        self.keys.capacity()
    }

    /// Returns the number of ranked items.
    pub fn item_count(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the index holds no items.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns true if a value is stored under `key`.
    pub fn contains_key(&self, key: Key) -> bool {
        self.store.has(key)
    }

    /// Returns the comparator of this index.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the statistics for this index.
    pub fn stats(&self) -> &RankStats {
        &self.stats
    }

    fn finder(&self) -> PositionFinder<'_, V, C, S> {
        PositionFinder::new(&self.keys, &self.store, &self.comparator, &self.stats)
    }

    /// Returns the rank of `key` counted from the left, or `None` if absent.
    pub fn rank_from_left(&self, key: Key) -> Result<Option<Rank>> {
        Ok(self.finder().exact_position(key)?.map(|index| index + 1))
    }

    /// Returns the rank of `key` counted from the right, or `None` if absent.
    pub fn rank_from_right(&self, key: Key) -> Result<Option<Rank>> {
        let count = self.keys.len();
        Ok(self.finder().exact_position(key)?.map(|index| count - index))
    }

    /// Returns the value and key at `rank` counted from the left.
    pub fn item_from_left(&self, rank: Rank) -> Option<(&V, Key)> {
        if rank == 0 || rank > self.keys.len() {
            return None;
        }
        self.item_at(rank - 1)
    }

    /// Returns the value and key at `rank` counted from the right.
    pub fn item_from_right(&self, rank: Rank) -> Option<(&V, Key)> {
        if rank == 0 || rank > self.keys.len() {
            return None;
        }
        self.item_at(self.keys.len() - rank)
    }

    fn item_at(&self, index: usize) -> Option<(&V, Key)> {
        let key = self.keys.get(index)?;
        self.store.get(key).map(|value| (value, key))
    }

    /// Returns the value stored under `key`.
    pub fn item_by_key(&self, key: Key) -> Option<&V> {
        self.store.get(key)
    }

    /// Inserts or replaces the value of `key` and returns its new rank from
    /// the left.
    ///
    /// If the comparator fails, the index is left as it was before the call.
    pub fn update_item(&mut self, key: Key, value: V) -> Result<Rank> {
        let previous = self.finder().exact_position(key)?;
        if let Some(index) = previous {
            self.keys.delete_at(index);
        }

        if self.keys.ensure_capacity() {
            self.stats.record_growth();
            tracing::debug!(
                rank_name = %self.name,
                capacity = self.keys.capacity(),
                "binary rank: key array grown"
            );
        }

        let index = match self.finder().insert_position(key, &value) {
            Ok(index) => index,
            Err(err) => {
                if let Some(index) = previous {
                    self.keys.insert_at(index, key);
                    tracing::debug!(key, index, "binary rank: update rolled back");
                }
                return Err(err);
            }
        };

        self.store.set(key, value);
        self.keys.insert_at(index, key);
        Ok(index + 1)
    }

    /// Removes `key` and returns the rank from the left it held, or `None` if
    /// it was absent.
    pub fn remove_item(&mut self, key: Key) -> Result<Option<Rank>> {
        let index = match self.finder().exact_position(key)? {
            Some(index) => index,
            None => return Ok(None),
        };
        self.keys.delete_at(index);
        self.store.clear(key);
        Ok(Some(index + 1))
    }

    /// Returns a copy of all keys, left to right.
    pub fn dump_from_left(&self) -> Vec<Key> {
        self.keys.as_slice().to_vec()
    }

    /// Iterates over `(key, value)` pairs, left to right.
    pub fn iter_from_left(&self) -> impl Iterator<Item = (Key, &V)> + '_ {
        self.keys
            .as_slice()
            .iter()
            .filter_map(move |&key| self.store.get(key).map(|value| (key, value)))
    }

    /// Checks the ordering and coherence invariants over the whole index.
    ///
    /// Walks every adjacent pair, so this costs O(count) comparator calls.
    /// A duplicate, unstored or misordered key yields `ConsistencyFailure`;
    /// values stored for keys that are not ranked yield `CountMismatch`.
    pub fn validate(&self) -> Result<()> {
        let keys = self.keys.as_slice();
        if self.store.len() != keys.len() {
            return Err(Error::CountMismatch {
                ranked: keys.len(),
                stored: self.store.len(),
            });
        }
        let mut seen = hashbrown::HashSet::with_capacity(keys.len());
        for &key in keys {
            if !seen.insert(key) || !self.store.has(key) {
                return Err(Error::consistency_failure(key));
            }
        }
        for pair in keys.windows(2) {
            let (key, next) = (pair[0], pair[1]);
            let (value, next_value) = match (self.store.get(key), self.store.get(next)) {
                (Some(value), Some(next_value)) => (value, next_value),
                _ => return Err(Error::consistency_failure(key)),
            };
            self.stats.record_comparison();
            let ret = self
                .comparator
                .compare(value, next_value)
                .map_err(|source| Error::comparator_failure(key, next, source))?;
            if ret < 0 {
                return Err(Error::consistency_failure(next));
            }
        }
        Ok(())
    }
}

impl<V, C, S> fmt::Display for RankedIndex<V, C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rank:{},capacity:{},count:{}",
            self.name,
            self.keys.capacity(),
            self.keys.len()
        )
    }
}
