//! Binary search over the sorted key array.
//!
//! Two searches are provided: one for the insertion point of a key that is
//! not in the array, and one for the exact position of a key that is. The
//! comparator orders values, not keys, so distinct keys can tie. Exact
//! lookup therefore lands somewhere inside a tie run and then scans outward
//! from there until it meets the key itself.

use crate::comparator::RankComparator;
use crate::key_array::SortedKeyArray;
use crate::stats::RankStats;
use crate::store::ValueStore;
use binrank_core::{Error, Key, Result};
use core::marker::PhantomData;

/// Outcome of the binary search phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Landing {
    /// Landed on a tied entry at this index.
    Tied(usize),
    /// Search exhausted; `left` is the insertion point.
    Exhausted(usize),
}

/// State of one side of the tie-resolution scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cursor {
    /// Next index to visit on this side.
    Open(usize),
    /// This side left the tie run or ran off the array.
    Closed,
}

/// Position finder over a key array, its value store and comparator.
pub struct PositionFinder<'a, V, C, S> {
    keys: &'a SortedKeyArray,
    store: &'a S,
    comparator: &'a C,
    stats: &'a RankStats,
    _marker: PhantomData<fn(&V)>,
}

impl<'a, V, C, S> PositionFinder<'a, V, C, S>
where
    C: RankComparator<V>,
    S: ValueStore<V>,
{
    /// Creates a finder over the given parts of an index.
    pub fn new(
        keys: &'a SortedKeyArray,
        store: &'a S,
        comparator: &'a C,
        stats: &'a RankStats,
    ) -> Self {
        Self {
            keys,
            store,
            comparator,
            stats,
            _marker: PhantomData,
        }
    }

    /// Stored value of a ranked key.
    #[inline]
    fn stored(&self, other: Key) -> Result<&'a V> {
        self.store
            .get(other)
            .ok_or(Error::consistency_failure(other))
    }

    /// Compares `value` (belonging to `key`) against the stored value of `other`.
    fn compare(&self, key: Key, value: &V, other: Key) -> Result<i64> {
        let other_value = self.stored(other)?;
        self.stats.record_comparison();
        self.comparator
            .compare(value, other_value)
            .map_err(|source| Error::comparator_failure(key, other, source))
    }

    /// Binary search for `value` in `[0, len)`.
    ///
    /// When `identity` is set, landing on that key counts as a tie without
    /// consulting the comparator.
    fn binary_search(&self, key: Key, value: &V, identity: bool) -> Result<Landing> {
        // Signed bounds: `right` goes to -1 when the value ranks before everything.
        let mut left: isize = 0;
        let mut right: isize = self.keys.len() as isize - 1;

        while left <= right {
            let mid = (left + right) / 2;
            let mid_key = self.keys[mid as usize];
            if identity && mid_key == key {
                return Ok(Landing::Tied(mid as usize));
            }

            let ret = self.compare(key, value, mid_key)?;
            if ret > 0 {
                right = mid - 1;
            } else if ret < 0 {
                left = mid + 1;
            } else {
                return Ok(Landing::Tied(mid as usize));
            }
        }

        Ok(Landing::Exhausted(left as usize))
    }

    /// Finds where a key that is not in the array should be inserted for
    /// `value`.
    ///
    /// On a tie the first tied position met is returned. Any position in the
    /// tie run keeps the array ordered, and no bias towards either end of the
    /// run is applied.
    pub fn insert_position(&self, key: Key, value: &V) -> Result<usize> {
        match self.binary_search(key, value, false)? {
            Landing::Tied(index) | Landing::Exhausted(index) => Ok(index),
        }
    }

    /// Finds the index of `key` in the array.
    ///
    /// Returns `Ok(None)` if the store holds no value for `key`.
    pub fn exact_position(&self, key: Key) -> Result<Option<usize>> {
        let value = match self.store.get(key) {
            Some(value) => value,
            None => return Ok(None),
        };

        let mid = match self.binary_search(key, value, true)? {
            Landing::Tied(mid) => mid,
            Landing::Exhausted(_) => {
                tracing::error!(
                    key,
                    count = self.keys.len(),
                    "binary rank: key missing from its sort position"
                );
                return Err(Error::consistency_failure(key));
            }
        };
        if self.keys[mid] == key {
            return Ok(Some(mid));
        }

        self.resolve_tie(key, value, mid).map(Some)
    }

    /// Scans outward from `mid`, which ties with `key` but is not it.
    ///
    /// Left and right cursors are advanced alternately. A side closes as soon
    /// as it meets an entry that no longer ties. The scan ends on the first
    /// identity match or when both sides are closed.
    fn resolve_tie(&self, key: Key, value: &V, mid: usize) -> Result<usize> {
        let len = self.keys.len();
        let mut left = Cursor::Open(mid);
        let mut right = if mid + 1 < len {
            Cursor::Open(mid + 1)
        } else {
            Cursor::Closed
        };

        while left != Cursor::Closed || right != Cursor::Closed {
            if let Cursor::Open(index) = left {
                if self.is_key_at(key, index) {
                    return Ok(index);
                }
                left = match self.still_tied(key, value, index)? {
                    true if index > 0 => Cursor::Open(index - 1),
                    _ => Cursor::Closed,
                };
            }

            if let Cursor::Open(index) = right {
                if self.is_key_at(key, index) {
                    return Ok(index);
                }
                right = match self.still_tied(key, value, index)? {
                    true if index + 1 < len => Cursor::Open(index + 1),
                    _ => Cursor::Closed,
                };
            }
        }

        tracing::error!(key, mid, "binary rank: tie run exhausted without identity match");
        Err(Error::consistency_failure(key))
    }

    /// Identity check at `index`.
    #[inline]
    fn is_key_at(&self, key: Key, index: usize) -> bool {
        self.stats.record_tie_step();
        let found = self.keys[index] == key;
        tracing::trace!(key, index, found, "tie scan step");
        found
    }

    /// Whether the entry at `index` still ties with `value`.
    #[inline]
    fn still_tied(&self, key: Key, value: &V, index: usize) -> Result<bool> {
        let other = self.keys[index];
        let other_value = self.stored(other)?;
        self.stats.record_comparison();
        self.comparator
            .ties(value, other_value)
            .map_err(|source| Error::comparator_failure(key, other, source))
    }
}
