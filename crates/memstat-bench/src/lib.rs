//! Benchmark inputs for memstat.
//!
//! - [`buffer_profile`]: patterned byte buffers at the sizes the benches sweep
//! - [`SAMPLE_SIZES`]: statistics sample lengths up to the 255-value cap

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use memstat_test_utils::fixtures::patterned_bytes;

/// Buffer sizes swept by the memory benches.
pub const BUFFER_SIZES: [usize; 4] = [64, 1024, 16 * 1024, 256 * 1024];

/// Sample lengths swept by the statistics benches.
pub const SAMPLE_SIZES: [usize; 4] = [8, 40, 128, 255];

/// A deterministic buffer of `len` bytes for benchmarking.
pub fn buffer_profile(len: usize) -> Vec<u8> {
    patterned_bytes(len, 0x5EED)
}
