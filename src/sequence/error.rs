//! Error types for sequence operations.
//!
//! Every error is a local precondition failure reported by the call that
//! violated it. Internal algorithms (rebalancing, index construction) are
//! total and never produce errors of their own.

use std::fmt;

/// Represents a failed precondition of a sequence operation.
///
/// # Examples
///
/// ```rust
/// use lambars_sequence::sequence::{Sequence, SequenceError};
///
/// let sequence = Sequence::from_vec(vec![1, 2, 3]);
/// assert_eq!(
///     sequence.get(5),
///     Err(SequenceError::OutOfBounds { index: 5, length: 3 })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// An element index was not below the sequence length.
    OutOfBounds {
        /// The requested index.
        index: usize,
        /// The length of the sequence.
        length: usize,
    },
    /// A window, length or encoded input was not acceptable.
    InvalidArgument {
        /// A short description of the rejected argument.
        reason: &'static str,
    },
    /// A value sequence was built from an input with a missing element.
    NullElement {
        /// The position of the first missing element.
        index: usize,
    },
}

impl SequenceError {
    pub(crate) const fn invalid(reason: &'static str) -> Self {
        Self::InvalidArgument { reason }
    }
}

impl fmt::Display for SequenceError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { index, length } => {
                write!(formatter, "index {index} out of bounds for length {length}")
            }
            Self::InvalidArgument { reason } => write!(formatter, "invalid argument: {reason}"),
            Self::NullElement { index } => write!(formatter, "missing element at index {index}"),
        }
    }
}

impl std::error::Error for SequenceError {}
