//! memstat: memory primitives and byte-sample statistics.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the memstat sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use memstat::prelude::*;
//!
//! // Shift a buffer right by two bytes; the ranges overlap.
//! let mut buf = [1u8, 2, 3, 4, 5, 6];
//! move_within(&mut buf, 0, 2, 4);
//! assert_eq!(buf, [1, 2, 1, 2, 3, 4]);
//!
//! // Word buffers have exactly one owner.
//! let mut words = allocate_words(4).unwrap();
//! words[0] = -7;
//! release_words(Some(words));
//!
//! // Statistics sort the sample in place by default.
//! let mut sample = [5u8, 3, 9, 1];
//! let summary = summarize(&mut sample).unwrap();
//! assert_eq!((summary.minimum, summary.maximum), (1, 9));
//! assert_eq!(sample, [9, 5, 3, 1]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`mem`] | `memstat-mem` | Byte access, move/copy/fill/reverse, word buffers, raw pointer layer |
//! | [`stats`] | `memstat-stats` | Descending merge sort, mean/median/min/max, summaries |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Byte-buffer primitives and word allocation (`memstat-mem`).
pub use memstat_mem as mem;

/// Sorting and sample statistics (`memstat-stats`).
pub use memstat_stats as stats;

/// Common imports.
///
/// ```rust
/// use memstat::prelude::*;
/// ```
pub mod prelude {
    pub use memstat_mem::{
        allocate_words, clear, clear_all, copy, fill, get, move_within, release_words, reverse,
        set, set_all, zero, MemError, WordBuffer,
    };
    pub use memstat_stats::{
        maximum, mean, median, minimum, sort_descending, summarize, ArrayListing, MedianPolicy,
        SampleMode, Stats, StatsConfig, StatsError, Summary,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use memstat_test_utils::fixtures::SAMPLE_40;

    #[test]
    fn components_are_independent() {
        // Statistics over a buffer that the primitives produced.
        let mut buf = [0u8; 40];
        copy(&SAMPLE_40, &mut buf, 40);
        reverse(&mut buf, 40);
        let before = buf;
        let stats = Stats::new(StatsConfig::new().with_mode(SampleMode::SortedCopy));
        assert_eq!(stats.maximum(&mut buf), Ok(250));
        assert_eq!(buf, before);
    }
}
