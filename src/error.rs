//! Error types for sequence operations.

use thiserror::Error;

/// Result type alias for sequence operations.
pub type SequenceResult<T> = Result<T, SequenceError>;

/// Errors raised when a sequence operation's precondition does not hold.
///
/// Both kinds are contract violations on the caller's side; nothing is
/// retried or clamped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// Positional access outside `0..length`.
    #[error("Index {index} out of range for sequence of length {length}")]
    OutOfRange { index: i64, length: usize },

    /// An operation that needs at least one element ran on an empty sequence.
    #[error("Operation requires a non-empty sequence")]
    EmptyCollection,
}

impl SequenceError {
    /// Creates an OutOfRange error.
    pub fn out_of_range(index: impl Into<i64>, length: usize) -> Self {
        Self::OutOfRange {
            index: index.into(),
            length,
        }
    }

    /// Creates an EmptyCollection error.
    pub fn empty_collection() -> Self {
        Self::EmptyCollection
    }
}
