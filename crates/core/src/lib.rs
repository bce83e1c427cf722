//! Binrank Core - Shared types for the binrank ranked index.
//!
//! This crate provides the foundational pieces used by `binrank-index`:
//!
//! - `Key`: signed 64-bit entry identifier
//! - `Rank`: 1-based position of an entry
//! - `DEFAULT_CAPACITY`: initial key array capacity
//! - `Error`: error types for ranked index operations
//!
//! # Example
//!
//! ```rust
//! use binrank_core::{CompareError, Error, DEFAULT_CAPACITY};
//!
//! let err = Error::comparator_failure(10, 20, CompareError::new("score is missing"));
//! assert_eq!(err.to_string(), "binary rank: fail to compare:10-20,score is missing");
//! assert_eq!(DEFAULT_CAPACITY, 512);
//! ```

#![no_std]

extern crate alloc;

mod error;
mod types;

pub use error::{CompareError, Error, Result};
pub use types::{effective_capacity, Key, Rank, DEFAULT_CAPACITY};
