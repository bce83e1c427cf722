//! Binrank Index - A ranked ordered index.
//!
//! This crate keeps a dynamic set of integer-keyed values sorted by a
//! caller-supplied comparator and answers two queries:
//!
//! - rank of a key, counted from the left or the right (1-based)
//! - key and value at a given rank
//!
//! The comparator may report ties between distinct keys. Lookups resolve a
//! specific key inside its tie run by scanning outward from the position the
//! binary search lands on.
//!
//! - `RankedIndex`: the index facade
//! - `RankBuilder`: configurable construction
//! - `RankComparator`: comparator contract, with `OrdComparator` and
//!   `FieldsComparator` implementations
//! - `ValueStore`: key -> value storage seam
//!
//! # Example
//!
//! ```rust
//! use binrank_index::{OrdComparator, RankedIndex};
//!
//! // Highest score takes rank 1
//! let mut board = RankedIndex::new("arena", OrdComparator::desc());
//! board.update_item(10, 300).unwrap();
//! board.update_item(20, 100).unwrap();
//! board.update_item(30, 200).unwrap();
//!
//! assert_eq!(board.rank_from_left(30).unwrap(), Some(2));
//! assert_eq!(board.rank_from_right(30).unwrap(), Some(2));
//! assert_eq!(board.item_from_left(1), Some((&300, 10)));
//! assert_eq!(board.dump_from_left(), vec![10, 30, 20]);
//!
//! assert_eq!(board.remove_item(10).unwrap(), Some(1));
//! assert_eq!(board.item_count(), 2);
//! ```

#![no_std]

extern crate alloc;

pub mod builder;
pub mod comparator;
pub mod finder;
pub mod key_array;
pub mod ranked;
pub mod stats;
pub mod store;

pub use binrank_core::{CompareError, Error, Key, Rank, Result, DEFAULT_CAPACITY};
pub use builder::RankBuilder;
pub use comparator::{FieldsComparator, Order, OrdComparator, RankComparator};
pub use finder::PositionFinder;
pub use key_array::SortedKeyArray;
pub use ranked::RankedIndex;
pub use stats::RankStats;
pub use store::ValueStore;
