//! Mean, median, minimum and maximum of a byte sample.

use smallvec::SmallVec;

use crate::config::{MedianPolicy, SampleMode, StatsConfig};
use crate::error::StatsError;
use crate::sort::sort_descending;

/// Longest sample accepted by the statistics functions.
pub const MAX_SAMPLE_LEN: usize = u8::MAX as usize;

/// Private copy of a sample for [`SampleMode::SortedCopy`]; always inline.
type SampleCopy = SmallVec<[u8; 256]>;

/// Reject empty and over-long samples, reporting why.
fn validate(sample: &[u8]) -> Result<(), StatsError> {
    if sample.is_empty() {
        log::warn!("invalid input array size: sample is empty");
        return Err(StatsError::EmptySample);
    }
    if sample.len() > MAX_SAMPLE_LEN {
        log::warn!(
            "invalid input array size: {} values, at most {MAX_SAMPLE_LEN} allowed",
            sample.len()
        );
        return Err(StatsError::SampleTooLong {
            len: sample.len(),
            max: MAX_SAMPLE_LEN,
        });
    }
    Ok(())
}

/// Median of a non-empty, descending-sorted sample.
pub(crate) fn median_of_sorted(sorted: &[u8], policy: MedianPolicy) -> f64 {
    let n = sorted.len();
    if n % 2 == 0 {
        (f64::from(sorted[n / 2 - 1]) + f64::from(sorted[n / 2])) / 2.0
    } else {
        let index = match policy {
            MedianPolicy::Middle => n / 2,
            MedianPolicy::Legacy => ((n + 1) / 2).min(n - 1),
        };
        f64::from(sorted[index])
    }
}

/// Statistics over byte samples under a fixed [`StatsConfig`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    config: StatsConfig,
}

impl Stats {
    /// Create a calculator with the given configuration.
    pub const fn new(config: StatsConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> StatsConfig {
        self.config
    }

    /// Arithmetic mean. Never reorders the sample.
    pub fn mean(&self, sample: &[u8]) -> Result<f64, StatsError> {
        validate(sample)?;
        // 255 values of at most 255 sum to well under u32::MAX.
        let sum: u32 = sample.iter().map(|&v| u32::from(v)).sum();
        Ok(f64::from(sum) / sample.len() as f64)
    }

    /// Median of the sample.
    ///
    /// Even lengths average the two middle values. Odd lengths pick one
    /// element according to [`MedianPolicy`].
    pub fn median(&self, sample: &mut [u8]) -> Result<f64, StatsError> {
        let policy = self.config.median;
        self.with_sorted(sample, |sorted| median_of_sorted(sorted, policy))
    }

    /// Smallest value: the last element after a descending sort.
    pub fn minimum(&self, sample: &mut [u8]) -> Result<u8, StatsError> {
        self.with_sorted(sample, |sorted| sorted[sorted.len() - 1])
    }

    /// Largest value: the first element after a descending sort.
    pub fn maximum(&self, sample: &mut [u8]) -> Result<u8, StatsError> {
        self.with_sorted(sample, |sorted| sorted[0])
    }

    /// Validate, sort according to [`SampleMode`], then read the result.
    pub(crate) fn with_sorted<R>(
        &self,
        sample: &mut [u8],
        read: impl FnOnce(&[u8]) -> R,
    ) -> Result<R, StatsError> {
        validate(sample)?;
        match self.config.mode {
            SampleMode::InPlace => {
                sort_descending(sample);
                Ok(read(sample))
            }
            SampleMode::SortedCopy => {
                let mut copy: SampleCopy = SmallVec::from_slice(sample);
                sort_descending(&mut copy);
                Ok(read(&copy))
            }
        }
    }
}

/// Arithmetic mean of `sample` with the default configuration.
pub fn mean(sample: &[u8]) -> Result<f64, StatsError> {
    Stats::default().mean(sample)
}

/// Median of `sample`, sorting it in place (descending).
pub fn median(sample: &mut [u8]) -> Result<f64, StatsError> {
    Stats::default().median(sample)
}

/// Minimum of `sample`, sorting it in place (descending).
pub fn minimum(sample: &mut [u8]) -> Result<u8, StatsError> {
    Stats::default().minimum(sample)
}

/// Maximum of `sample`, sorting it in place (descending).
pub fn maximum(sample: &mut [u8]) -> Result<u8, StatsError> {
    Stats::default().maximum(sample)
}
