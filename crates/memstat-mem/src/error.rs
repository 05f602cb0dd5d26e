//! Error types for the checked memory primitives and word allocation.

use std::error::Error;
use std::fmt;

/// Errors reported by the checked byte accessors and the word allocator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MemError {
    /// An index was outside the buffer.
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// Length of the buffer that was indexed.
        len: usize,
    },
    /// `count * 4` does not fit in an allocation request.
    CapacityOverflow {
        /// Number of words requested.
        words: usize,
    },
    /// The global allocator could not satisfy the request.
    AllocationFailed {
        /// Number of words requested.
        words: usize,
    },
}

impl fmt::Display for MemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for buffer of length {len}")
            }
            Self::CapacityOverflow { words } => {
                write!(f, "word buffer of {words} words exceeds the maximum allocation size")
            }
            Self::AllocationFailed { words } => {
                write!(f, "allocation of {words} words failed")
            }
        }
    }
}

impl Error for MemError {}
