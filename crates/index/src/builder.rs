//! Builder for ranked indexes.

use crate::comparator::RankComparator;
use crate::ranked::RankedIndex;
use crate::store::ValueStore;
use alloc::string::String;
use binrank_core::{effective_capacity, Error, Key, Result, DEFAULT_CAPACITY};
use core::marker::PhantomData;
use hashbrown::HashMap;

/// Builder for creating ranked indexes.
///
/// ```rust
/// use binrank_index::{OrdComparator, RankBuilder};
///
/// let mut index = RankBuilder::new("arena")
///     .capacity(64)
///     .unwrap()
///     .comparator(OrdComparator::desc())
///     .build()
///     .unwrap();
///
/// index.update_item(7, 1200).unwrap();
/// assert_eq!(index.rank_from_left(7).unwrap(), Some(1));
/// assert_eq!(index.capacity(), 64);
/// ```
#[derive(Debug)]
pub struct RankBuilder<V, C, S = HashMap<Key, V>> {
    name: String,
    capacity: usize,
    comparator: Option<C>,
    store: Option<S>,
    _marker: PhantomData<V>,
}

impl<V, C> RankBuilder<V, C> {
    /// Creates a new builder for an index with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            capacity: DEFAULT_CAPACITY,
            comparator: None,
            store: None,
            _marker: PhantomData,
        }
    }
}

impl<V, C, S> RankBuilder<V, C, S>
where
    C: RankComparator<V>,
    S: ValueStore<V>,
{
    /// Sets the initial key array capacity. Zero selects the default.
    pub fn capacity(mut self, capacity: i64) -> Result<Self> {
        if capacity < 0 {
            return Err(Error::contract_violation("capacity is less than 0"));
        }
        let capacity = usize::try_from(capacity)
            .map_err(|_| Error::contract_violation("capacity does not fit in memory"))?;
        self.capacity = effective_capacity(capacity);
        Ok(self)
    }

    /// Sets the comparator.
    pub fn comparator(mut self, comparator: C) -> Self {
        self.comparator = Some(comparator);
        self
    }

    /// Replaces the value store backing the index. The store must be empty.
    pub fn store<T: ValueStore<V>>(self, store: T) -> RankBuilder<V, C, T> {
        RankBuilder {
            name: self.name,
            capacity: self.capacity,
            comparator: self.comparator,
            store: Some(store),
            _marker: PhantomData,
        }
    }

    /// Builds the index.
    pub fn build(self) -> Result<RankedIndex<V, C, S>>
    where
        S: Default,
    {
        let comparator = self
            .comparator
            .ok_or_else(|| Error::contract_violation("compare function is missing"))?;
        let store = self.store.unwrap_or_default();
        if !store.is_empty() {
            return Err(Error::contract_violation("value store is not empty"));
        }
        Ok(RankedIndex::from_parts(
            self.name,
            comparator,
            store,
            self.capacity,
        ))
    }
}
