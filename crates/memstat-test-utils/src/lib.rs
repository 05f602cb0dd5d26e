//! Reference models and fixtures for memstat development.
//!
//! The models in [`reference`] are deliberately naive (full temporary
//! copies, std sorting) so property tests can compare the real primitives
//! against something obviously correct.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod reference;

pub use fixtures::{patterned_bytes, SAMPLE_40};
pub use reference::{reference_median, reference_move, reference_sort_descending};
