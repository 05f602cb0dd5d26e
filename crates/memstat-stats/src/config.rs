//! Statistics configuration.

/// Which element an odd-length median reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MedianPolicy {
    /// The true middle element, index `len / 2` of the sorted sample.
    #[default]
    Middle,
    /// Index `(len + 1) / 2`, one past the middle, clamped to the last
    /// element. Kept for bit-compatible output with older firmware.
    Legacy,
}

/// Where the descending sort behind min/max/median happens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SampleMode {
    /// Sort the caller's buffer; it is left in descending order.
    #[default]
    InPlace,
    /// Sort a private copy; the caller's buffer keeps its order.
    SortedCopy,
}

/// Configuration for [`Stats`](crate::Stats).
///
/// Defaults: [`MedianPolicy::Middle`], [`SampleMode::InPlace`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatsConfig {
    /// Odd-length median selection.
    pub median: MedianPolicy,
    /// In-place or copy sorting.
    pub mode: SampleMode,
}

impl StatsConfig {
    /// Default configuration.
    pub const fn new() -> Self {
        Self {
            median: MedianPolicy::Middle,
            mode: SampleMode::InPlace,
        }
    }

    /// In-place sorting with the legacy median index.
    pub const fn legacy() -> Self {
        Self {
            median: MedianPolicy::Legacy,
            mode: SampleMode::InPlace,
        }
    }

    /// Replace the median policy.
    pub const fn with_median(mut self, median: MedianPolicy) -> Self {
        self.median = median;
        self
    }

    /// Replace the sample mode.
    pub const fn with_mode(mut self, mode: SampleMode) -> Self {
        self.mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_middle_in_place() {
        let config = StatsConfig::default();
        assert_eq!(config, StatsConfig::new());
        assert_eq!(config.median, MedianPolicy::Middle);
        assert_eq!(config.mode, SampleMode::InPlace);
    }

    #[test]
    fn builders_replace_one_field() {
        let config = StatsConfig::legacy().with_mode(SampleMode::SortedCopy);
        assert_eq!(config.median, MedianPolicy::Legacy);
        assert_eq!(config.mode, SampleMode::SortedCopy);
        assert_eq!(config.with_median(MedianPolicy::Middle).median, MedianPolicy::Middle);
    }
}
