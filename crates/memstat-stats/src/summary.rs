//! One-call summaries and their text rendering.
//!
//! Formatting lives here so the statistics in [`crate::stats`] never
//! depend on an output sink.

use std::fmt;

use crate::error::StatsError;
use crate::stats::{median_of_sorted, Stats};

/// Minimum, maximum, mean and median of one sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    /// Smallest value.
    pub minimum: u8,
    /// Largest value.
    pub maximum: u8,
    /// Arithmetic mean.
    pub mean: f64,
    /// Median under the configured policy.
    pub median: f64,
}

impl Stats {
    /// Compute every statistic of `sample`.
    ///
    /// The sample is sorted once; in
    /// [`SampleMode::InPlace`](crate::SampleMode::InPlace) it is left sorted
    /// descending.
    pub fn summarize(&self, sample: &mut [u8]) -> Result<Summary, StatsError> {
        let mean = self.mean(sample)?;
        let policy = self.config().median;
        self.with_sorted(sample, |sorted| Summary {
            minimum: sorted[sorted.len() - 1],
            maximum: sorted[0],
            mean,
            median: median_of_sorted(sorted, policy),
        })
    }
}

/// [`Stats::summarize`] with the default configuration.
pub fn summarize(sample: &mut [u8]) -> Result<Summary, StatsError> {
    Stats::default().summarize(sample)
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==== Statistics ====")?;
        writeln!(f, "Minimum: {}", self.minimum)?;
        writeln!(f, "Maximum: {}", self.maximum)?;
        writeln!(f, "Mean: {:.3}", self.mean)?;
        writeln!(f, "Median: {:.3}", self.median)?;
        writeln!(f, "====================")
    }
}

/// Index/value listing of a byte array, one element per line.
#[derive(Clone, Copy, Debug)]
pub struct ArrayListing<'a>(pub &'a [u8]);

impl fmt::Display for ArrayListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            writeln!(f, "array[{i}]: {v}")?;
        }
        Ok(())
    }
}
