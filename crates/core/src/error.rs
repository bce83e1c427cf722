//! Error types for binrank.

use crate::types::Key;
use alloc::string::String;
use core::fmt;

/// Result type alias for binrank operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error raised by a comparator callback.
///
/// Carries the callback's own message and, when the host can provide one,
/// a trace describing where the failure happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompareError {
    message: String,
    trace: Option<String>,
}

impl CompareError {
    /// Creates a comparator error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            trace: None,
        }
    }

    /// Attaches a trace to this error.
    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the trace, if any.
    pub fn trace(&self) -> Option<&str> {
        self.trace.as_deref()
    }
}

impl fmt::Display for CompareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.trace {
            Some(trace) => write!(f, "{},traceback:{}", self.message, trace),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Error types for ranked index operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The caller broke an API precondition. The operation had no effect.
    ContractViolation {
        message: String,
    },
    /// The comparator failed while comparing the values of `key` and `other`.
    ComparatorFailure {
        key: Key,
        other: Key,
        source: CompareError,
    },
    /// A key the value store reports as present could not be located in
    /// its tie run.
    ConsistencyFailure {
        key: Key,
    },
    /// The value store and the key array disagree on the number of entries.
    CountMismatch {
        ranked: usize,
        stored: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ContractViolation { message } => {
                write!(f, "binary rank: contract violation: {}", message)
            }
            Error::ComparatorFailure { key, other, source } => {
                write!(f, "binary rank: fail to compare:{}-{},{}", key, other, source)
            }
            Error::ConsistencyFailure { key } => {
                write!(f, "binary rank: fail to find item:{}", key)
            }
            Error::CountMismatch { ranked, stored } => {
                write!(f, "binary rank: count mismatch:ranked {},stored {}", ranked, stored)
            }
        }
    }
}

impl Error {
    /// Creates a contract violation error.
    pub fn contract_violation(message: impl Into<String>) -> Self {
        Error::ContractViolation {
            message: message.into(),
        }
    }

    /// Creates a comparator failure for the pair `key`/`other`.
    pub fn comparator_failure(key: Key, other: Key, source: CompareError) -> Self {
        Error::ComparatorFailure { key, other, source }
    }

    /// Creates a consistency failure for `key`.
    pub fn consistency_failure(key: Key) -> Self {
        Error::ConsistencyFailure { key }
    }

    /// Returns true if this error indicates a broken index invariant.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::ConsistencyFailure { .. } | Error::CountMismatch { .. }
        )
    }
}
