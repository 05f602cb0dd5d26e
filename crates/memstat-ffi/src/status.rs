//! C-compatible status codes.
//!
//! [`MemstatStatus`] is a `repr(i32)` enum; conversions from the Rust
//! error types of `memstat-mem` and `memstat-stats` are provided.

use memstat_mem::MemError;
use memstat_stats::StatsError;

/// Status code returned by FFI functions that do not return a pointer or
/// a value.
///
/// `Ok` = 0, all errors are negative. Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemstatStatus {
    /// Success.
    Ok = 0,
    /// A required pointer was null.
    NullPointer = -1,
    /// The sample length was zero.
    EmptySample = -2,
    /// The sample length exceeded 255.
    SampleTooLong = -3,
    /// An index was outside the buffer.
    IndexOutOfBounds = -4,
    /// The requested word count cannot be represented in bytes.
    CapacityOverflow = -5,
    /// The allocator could not satisfy the request.
    AllocationFailed = -6,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl From<&MemError> for MemstatStatus {
    fn from(e: &MemError) -> Self {
        match e {
            MemError::IndexOutOfBounds { .. } => MemstatStatus::IndexOutOfBounds,
            MemError::CapacityOverflow { .. } => MemstatStatus::CapacityOverflow,
            MemError::AllocationFailed { .. } => MemstatStatus::AllocationFailed,
        }
    }
}

impl From<&StatsError> for MemstatStatus {
    fn from(e: &StatsError) -> Self {
        match e {
            StatsError::EmptySample => MemstatStatus::EmptySample,
            StatsError::SampleTooLong { .. } => MemstatStatus::SampleTooLong,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_values_are_stable() {
        assert_eq!(MemstatStatus::Ok as i32, 0);
        assert_eq!(MemstatStatus::NullPointer as i32, -1);
        assert_eq!(MemstatStatus::EmptySample as i32, -2);
        assert_eq!(MemstatStatus::SampleTooLong as i32, -3);
        assert_eq!(MemstatStatus::IndexOutOfBounds as i32, -4);
        assert_eq!(MemstatStatus::CapacityOverflow as i32, -5);
        assert_eq!(MemstatStatus::AllocationFailed as i32, -6);
        assert_eq!(MemstatStatus::Panicked as i32, -128);
    }

    #[test]
    fn mem_errors_map_one_to_one() {
        let cases = [
            (
                MemError::IndexOutOfBounds { index: 1, len: 0 },
                MemstatStatus::IndexOutOfBounds,
            ),
            (
                MemError::CapacityOverflow { words: 1 },
                MemstatStatus::CapacityOverflow,
            ),
            (
                MemError::AllocationFailed { words: 1 },
                MemstatStatus::AllocationFailed,
            ),
        ];
        for (err, status) in &cases {
            assert_eq!(MemstatStatus::from(err), *status);
        }
    }

    #[test]
    fn stats_errors_map_one_to_one() {
        assert_eq!(
            MemstatStatus::from(&StatsError::EmptySample),
            MemstatStatus::EmptySample
        );
        assert_eq!(
            MemstatStatus::from(&StatsError::SampleTooLong { len: 300, max: 255 }),
            MemstatStatus::SampleTooLong
        );
    }
}
