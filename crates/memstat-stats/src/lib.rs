//! Descending merge sort and sample statistics over byte arrays.
//!
//! A sample is a `u8` slice of 1 to [`MAX_SAMPLE_LEN`] values. Minimum,
//! maximum and median are read off a descending sort; whether that sort
//! happens in the caller's buffer or in a private copy is chosen by
//! [`SampleMode`]. The free functions ([`median`], [`minimum`], ...) use
//! the default configuration, which sorts in place.
//!
//! Invalid samples are reported through the `log` facade and returned as
//! [`StatsError`]; nothing here panics on caller input.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod sort;
pub mod stats;
pub mod summary;

pub use config::{MedianPolicy, SampleMode, StatsConfig};
pub use error::StatsError;
pub use sort::{sort_descending, sort_descending_by_key};
pub use stats::{maximum, mean, median, minimum, Stats, MAX_SAMPLE_LEN};
pub use summary::{summarize, ArrayListing, Summary};
