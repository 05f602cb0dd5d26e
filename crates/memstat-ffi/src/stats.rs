//! Statistics FFI.
//!
//! Floating-point results use `-1.0` as the invalid-input sentinel. Integer
//! results are returned as `i32`: a value in `0..=255` on success, a
//! negative [`MemstatStatus`] otherwise. Minimum, maximum, median and the
//! sort sort the caller's array in place (descending) unless a
//! [`MemstatStatsConfig`] asks for a private copy.

use std::slice;

use memstat_stats::{MedianPolicy, SampleMode, Stats, StatsConfig, StatsError};

use crate::status::MemstatStatus;

/// Sentinel returned by the floating-point statistics on invalid input.
pub const MEMSTAT_INVALID_STAT: f64 = -1.0;

/// Statistics options. A null config pointer means all-zero (defaults).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemstatStatsConfig {
    /// Non-zero selects the legacy odd-length median index.
    pub legacy_median: u8,
    /// Non-zero sorts a private copy and leaves the caller's array alone.
    pub sorted_copy: u8,
}

impl From<MemstatStatsConfig> for StatsConfig {
    fn from(c: MemstatStatsConfig) -> Self {
        StatsConfig {
            median: if c.legacy_median != 0 {
                MedianPolicy::Legacy
            } else {
                MedianPolicy::Middle
            },
            mode: if c.sorted_copy != 0 {
                SampleMode::SortedCopy
            } else {
                SampleMode::InPlace
            },
        }
    }
}

/// All four statistics of a sample.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MemstatSummary {
    /// Smallest value.
    pub minimum: u8,
    /// Largest value.
    pub maximum: u8,
    /// Arithmetic mean.
    pub mean: f64,
    /// Median.
    pub median: f64,
}

fn check_null(array: *const u8) -> Result<(), MemstatStatus> {
    if array.is_null() {
        log::warn!("null pointer detected");
        return Err(MemstatStatus::NullPointer);
    }
    Ok(())
}

/// Borrow `len` bytes at `array` for reading.
///
/// # Safety
///
/// A non-null `array` must be valid for reads of `len` bytes.
#[allow(unsafe_code)]
unsafe fn sample<'a>(array: *const u8, len: usize) -> Result<&'a [u8], MemstatStatus> {
    check_null(array)?;
    // SAFETY: non-null, and valid for `len` bytes per caller contract.
    Ok(unsafe { slice::from_raw_parts(array, len) })
}

/// Borrow `len` bytes at `array` for sorting.
///
/// # Safety
///
/// A non-null `array` must be valid for reads and writes of `len` bytes.
#[allow(unsafe_code)]
unsafe fn sample_mut<'a>(array: *mut u8, len: usize) -> Result<&'a mut [u8], MemstatStatus> {
    check_null(array)?;
    // SAFETY: non-null, and valid for `len` bytes per caller contract.
    Ok(unsafe { slice::from_raw_parts_mut(array, len) })
}

fn status_of(e: &StatsError) -> i32 {
    MemstatStatus::from(e) as i32
}

/// Sort `array[0..len]` descending, in place. Stable.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn memstat_sort_array(array: *mut u8, len: usize) -> i32 {
    ffi_guard!({
        // SAFETY: caller contract on array/len.
        match unsafe { sample_mut(array, len) } {
            Ok(buf) => {
                memstat_stats::sort_descending(buf);
                MemstatStatus::Ok as i32
            }
            Err(status) => status as i32,
        }
    })
}

/// Arithmetic mean of `array[0..len]`, or `-1.0` on invalid input.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn memstat_find_mean(array: *const u8, len: usize) -> f64 {
    ffi_guard_or!(MEMSTAT_INVALID_STAT, {
        // SAFETY: caller contract on array/len.
        match unsafe { sample(array, len) } {
            Ok(buf) => memstat_stats::mean(buf).unwrap_or(MEMSTAT_INVALID_STAT),
            Err(_) => MEMSTAT_INVALID_STAT,
        }
    })
}

/// Median of `array[0..len]`, or `-1.0` on invalid input. Sorts in place.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn memstat_find_median(array: *mut u8, len: usize) -> f64 {
    ffi_guard_or!(MEMSTAT_INVALID_STAT, {
        // SAFETY: caller contract on array/len.
        match unsafe { sample_mut(array, len) } {
            Ok(buf) => memstat_stats::median(buf).unwrap_or(MEMSTAT_INVALID_STAT),
            Err(_) => MEMSTAT_INVALID_STAT,
        }
    })
}

/// Minimum of `array[0..len]`, or a negative status. Sorts in place.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn memstat_find_minimum(array: *mut u8, len: usize) -> i32 {
    ffi_guard!({
        // SAFETY: caller contract on array/len.
        match unsafe { sample_mut(array, len) } {
            Ok(buf) => memstat_stats::minimum(buf).map_or_else(|e| status_of(&e), i32::from),
            Err(status) => status as i32,
        }
    })
}

/// Maximum of `array[0..len]`, or a negative status. Sorts in place.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn memstat_find_maximum(array: *mut u8, len: usize) -> i32 {
    ffi_guard!({
        // SAFETY: caller contract on array/len.
        match unsafe { sample_mut(array, len) } {
            Ok(buf) => memstat_stats::maximum(buf).map_or_else(|e| status_of(&e), i32::from),
            Err(status) => status as i32,
        }
    })
}

/// Compute all statistics of `array[0..len]` into `*out`.
///
/// `config` may be null for defaults. `*out` is written only on success.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn memstat_summary(
    array: *mut u8,
    len: usize,
    config: *const MemstatStatsConfig,
    out: *mut MemstatSummary,
) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return MemstatStatus::NullPointer as i32;
        }
        let config = if config.is_null() {
            MemstatStatsConfig::default()
        } else {
            // SAFETY: non-null config is readable per caller contract.
            unsafe { *config }
        };
        // SAFETY: caller contract on array/len.
        let buf = match unsafe { sample_mut(array, len) } {
            Ok(buf) => buf,
            Err(status) => return status as i32,
        };
        match Stats::new(config.into()).summarize(buf) {
            Ok(s) => {
                // SAFETY: out is non-null and writable per caller contract.
                unsafe {
                    *out = MemstatSummary {
                        minimum: s.minimum,
                        maximum: s.maximum,
                        mean: s.mean,
                        median: s.median,
                    }
                };
                MemstatStatus::Ok as i32
            }
            Err(e) => status_of(&e),
        }
    })
}
