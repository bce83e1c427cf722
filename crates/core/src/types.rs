//! Primitive types shared by binrank crates.

/// Unique identifier of an entry in a ranked index.
pub type Key = i64;

/// 1-based position of an entry, counted from the left or the right.
pub type Rank = usize;

/// Initial key array capacity used when none (or zero) is requested.
pub const DEFAULT_CAPACITY: usize = 512;

/// Resolves a caller-supplied capacity: zero falls back to the default.
#[inline]
pub fn effective_capacity(requested: usize) -> usize {
    if requested == 0 {
        DEFAULT_CAPACITY
    } else {
        requested
    }
}
