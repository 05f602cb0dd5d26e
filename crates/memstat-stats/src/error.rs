//! Error types for sample statistics.

use std::error::Error;
use std::fmt;

/// Reasons a sample cannot be summarised.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatsError {
    /// The sample holds no values.
    EmptySample,
    /// The sample is longer than a statistics sample may be.
    SampleTooLong {
        /// Length of the rejected sample.
        len: usize,
        /// Largest accepted length.
        max: usize,
    },
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySample => write!(f, "invalid input array size: sample is empty"),
            Self::SampleTooLong { len, max } => {
                write!(f, "invalid input array size: {len} values, at most {max} allowed")
            }
        }
    }
}

impl Error for StatsError {}
