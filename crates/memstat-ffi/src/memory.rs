//! Byte access and bulk memory FFI.
//!
//! Single-byte and whole-range entry points return a [`MemstatStatus`]
//! code. The bulk entry points keep the classic pointer contract: they
//! return the destination pointer, or null when a required pointer is
//! null. A zero length is never an error.

use std::ptr;
use std::slice;

use memstat_mem::{access, raw};

use crate::status::MemstatStatus;

/// View `len` bytes at `ptr` as a mutable slice, or `None` if `ptr` is null.
///
/// # Safety
///
/// A non-null `ptr` must be valid for reads and writes of `len` bytes.
#[allow(unsafe_code)]
unsafe fn bytes_mut<'a>(ptr: *mut u8, len: usize) -> Option<&'a mut [u8]> {
    if ptr.is_null() {
        return None;
    }
    // SAFETY: non-null, and valid for `len` bytes per caller contract.
    Some(unsafe { slice::from_raw_parts_mut(ptr, len) })
}

/// Write `value` at `ptr[index]`.
///
/// Returns `MEMSTAT_STATUS_NULL_POINTER` for a null `ptr`. The index is
/// not bounds-checked; `ptr[index]` must be writable.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn memstat_set_value(ptr: *mut u8, index: usize, value: u8) -> i32 {
    ffi_guard!({
        let Some(len) = index.checked_add(1) else {
            return MemstatStatus::IndexOutOfBounds as i32;
        };
        // SAFETY: caller guarantees ptr[0..=index] is valid.
        match unsafe { bytes_mut(ptr, len) } {
            Some(buf) => {
                access::set(buf, index, value);
                MemstatStatus::Ok as i32
            }
            None => MemstatStatus::NullPointer as i32,
        }
    })
}

/// Write zero at `ptr[index]`. Same contract as [`memstat_set_value`].
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn memstat_clear_value(ptr: *mut u8, index: usize) -> i32 {
    memstat_set_value(ptr, index, 0)
}

/// Read `ptr[index]`. Returns 0 for a null `ptr`.
///
/// **Ambiguity warning:** returns 0 for both "the byte is 0" and "null
/// pointer." Prefer [`memstat_get_value_get`] for unambiguous error detection.
///
/// The index is not bounds-checked; `ptr[index]` must be readable.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn memstat_get_value(ptr: *const u8, index: usize) -> u8 {
    ffi_guard_or!(0, {
        if ptr.is_null() {
            return 0;
        }
        let Some(len) = index.checked_add(1) else {
            return 0;
        };
        // SAFETY: non-null, and ptr[0..=index] is readable per caller contract.
        let buf = unsafe { slice::from_raw_parts(ptr, len) };
        access::get(buf, index)
    })
}

/// Read `ptr[index]` with explicit error reporting.
///
/// Writes the byte to `*out` and returns `MEMSTAT_STATUS_OK`. Returns
/// `MEMSTAT_STATUS_NULL_POINTER` without writing to `out` if either
/// pointer is null. The index is not bounds-checked.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn memstat_get_value_get(ptr: *const u8, index: usize, out: *mut u8) -> i32 {
    ffi_guard!({
        if ptr.is_null() || out.is_null() {
            return MemstatStatus::NullPointer as i32;
        }
        let Some(len) = index.checked_add(1) else {
            return MemstatStatus::IndexOutOfBounds as i32;
        };
        // SAFETY: non-null, and ptr[0..=index] is readable per caller contract.
        let buf = unsafe { slice::from_raw_parts(ptr, len) };
        // SAFETY: out is non-null and writable per caller contract.
        unsafe { *out = access::get(buf, index) };
        MemstatStatus::Ok as i32
    })
}

/// Write `value` to `ptr[0..size]`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn memstat_set_all(ptr: *mut u8, value: u8, size: usize) -> i32 {
    ffi_guard!({
        // SAFETY: caller guarantees ptr[0..size] is valid.
        match unsafe { bytes_mut(ptr, size) } {
            Some(buf) => {
                access::set_all(buf, value, size);
                MemstatStatus::Ok as i32
            }
            None => MemstatStatus::NullPointer as i32,
        }
    })
}

/// Zero `ptr[0..size]`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn memstat_clear_all(ptr: *mut u8, size: usize) -> i32 {
    memstat_set_all(ptr, 0, size)
}

/// Move `length` bytes from `src` to `dst`; correct when they overlap.
///
/// Returns `dst`, or null if either pointer is null.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn memstat_memmove(src: *const u8, dst: *mut u8, length: usize) -> *mut u8 {
    ffi_guard_or!(ptr::null_mut(), {
        // SAFETY: ranges valid per caller contract; nulls handled inside.
        unsafe { raw::move_bytes(src, dst, length) }
    })
}

/// Copy `length` bytes from `src` to `dst`. The ranges must not overlap.
///
/// Returns `dst`, or null if either pointer is null.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn memstat_memcopy(src: *const u8, dst: *mut u8, length: usize) -> *mut u8 {
    ffi_guard_or!(ptr::null_mut(), {
        // SAFETY: valid, disjoint ranges per caller contract.
        unsafe { raw::copy_bytes(src, dst, length) }
    })
}

/// Write `value` to `length` bytes at `src`. Returns `src`, or null.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn memstat_memset(src: *mut u8, length: usize, value: u8) -> *mut u8 {
    ffi_guard_or!(ptr::null_mut(), {
        // SAFETY: range valid per caller contract.
        unsafe { raw::fill_bytes(src, length, value) }
    })
}

/// Zero `length` bytes at `src`. Returns `src`, or null.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn memstat_memzero(src: *mut u8, length: usize) -> *mut u8 {
    ffi_guard_or!(ptr::null_mut(), {
        // SAFETY: range valid per caller contract.
        unsafe { raw::zero_bytes(src, length) }
    })
}

/// Reverse `length` bytes at `src` in place. Returns `src`, or null.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn memstat_reverse(src: *mut u8, length: usize) -> *mut u8 {
    ffi_guard_or!(ptr::null_mut(), {
        // SAFETY: range valid per caller contract.
        unsafe { raw::reverse_bytes(src, length) }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_clear_round_trip() {
        let mut buf = [0u8; 4];
        let p = buf.as_mut_ptr();
        assert_eq!(memstat_set_value(p, 3, 0x5A), MemstatStatus::Ok as i32);
        assert_eq!(memstat_get_value(p, 3), 0x5A);
        assert_eq!(memstat_clear_value(p, 3), MemstatStatus::Ok as i32);
        assert_eq!(buf, [0; 4]);
    }

    #[test]
    fn null_byte_access_is_reported() {
        assert_eq!(
            memstat_set_value(ptr::null_mut(), 0, 1),
            MemstatStatus::NullPointer as i32
        );
        assert_eq!(memstat_get_value(ptr::null(), 0), 0);
        assert_eq!(
            memstat_set_all(ptr::null_mut(), 1, 4),
            MemstatStatus::NullPointer as i32
        );
    }

    #[test]
    fn index_overflow_is_rejected() {
        let mut b = 0u8;
        assert_eq!(
            memstat_set_value(&mut b, usize::MAX, 1),
            MemstatStatus::IndexOutOfBounds as i32
        );
        assert_eq!(b, 0);
    }

    #[test]
    fn get_value_get_separates_zero_from_null() {
        let buf = [0u8, 9];
        let mut out = 0xFFu8;
        assert_eq!(
            memstat_get_value_get(buf.as_ptr(), 0, &mut out),
            MemstatStatus::Ok as i32
        );
        assert_eq!(out, 0);
        assert_eq!(memstat_get_value_get(buf.as_ptr(), 1, &mut out), 0);
        assert_eq!(out, 9);

        out = 0xFF;
        assert_eq!(
            memstat_get_value_get(ptr::null(), 0, &mut out),
            MemstatStatus::NullPointer as i32
        );
        assert_eq!(
            memstat_get_value_get(buf.as_ptr(), 0, ptr::null_mut()),
            MemstatStatus::NullPointer as i32
        );
        assert_eq!(out, 0xFF);
    }

    #[test]
    fn set_all_and_clear_all() {
        let mut buf = [0u8; 5];
        let p = buf.as_mut_ptr();
        assert_eq!(memstat_set_all(p, 7, 3), 0);
        assert_eq!(buf, [7, 7, 7, 0, 0]);
        assert_eq!(memstat_clear_all(p, 2), 0);
        assert_eq!(buf, [0, 0, 7, 0, 0]);
    }

    #[test]
    #[allow(unsafe_code)]
    fn memmove_overlap_right() {
        let mut buf = [1u8, 2, 3, 4, 5];
        let p = buf.as_mut_ptr();
        let dst = unsafe { p.add(1) };
        assert_eq!(memstat_memmove(p, dst, 4), dst);
        assert_eq!(buf, [1, 1, 2, 3, 4]);
    }

    #[test]
    fn memmove_null_returns_null() {
        let mut buf = [1u8; 3];
        assert!(memstat_memmove(ptr::null(), buf.as_mut_ptr(), 3).is_null());
        assert!(memstat_memcopy(buf.as_ptr(), ptr::null_mut(), 3).is_null());
        assert_eq!(buf, [1; 3]);
    }

    #[test]
    fn memcopy_returns_destination_start() {
        let src = [4u8, 5, 6];
        let mut dst = [0u8; 3];
        let d = dst.as_mut_ptr();
        assert_eq!(memstat_memcopy(src.as_ptr(), d, 3), d);
        assert_eq!(dst, src);
    }

    #[test]
    fn memset_memzero_reverse() {
        let mut buf = [0u8; 4];
        let p = buf.as_mut_ptr();
        assert_eq!(memstat_memset(p, 4, 9), p);
        assert_eq!(memstat_memzero(p, 1), p);
        assert_eq!(buf, [0, 9, 9, 9]);
        buf = [1, 2, 3, 4];
        let p = buf.as_mut_ptr();
        assert_eq!(memstat_reverse(p, 4), p);
        assert_eq!(buf, [4, 3, 2, 1]);
        assert!(memstat_reverse(ptr::null_mut(), 4).is_null());
    }
}
