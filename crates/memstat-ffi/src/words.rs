//! Word-buffer allocation FFI.
//!
//! Blocks come from the global allocator with a length header (see
//! `memstat_mem::raw`), so [`memstat_free_words`] needs only the pointer.
//! Releasing a block twice is undefined; releasing null is a no-op.

use std::ptr;

use memstat_mem::raw;

use crate::status::MemstatStatus;

/// Allocate `length` uninitialised 32-bit words.
///
/// Returns null if the byte size overflows or the allocator fails.
/// [`memstat_reserve_words_get`] reports which of the two happened.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn memstat_reserve_words(length: usize) -> *mut i32 {
    ffi_guard_or!(ptr::null_mut(), { raw::alloc_words(length) })
}

/// Allocate `length` uninitialised 32-bit words with explicit error
/// reporting.
///
/// Writes the block to `*out` and returns `MEMSTAT_STATUS_OK`. Returns
/// `MEMSTAT_STATUS_CAPACITY_OVERFLOW` or `MEMSTAT_STATUS_ALLOCATION_FAILED`
/// after writing null to `*out`, or `MEMSTAT_STATUS_NULL_POINTER` if `out`
/// is null.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn memstat_reserve_words_get(length: usize, out: *mut *mut i32) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return MemstatStatus::NullPointer as i32;
        }
        let (block, status) = match raw::try_alloc_words(length) {
            Ok(block) => (block.as_ptr(), MemstatStatus::Ok),
            Err(e) => (ptr::null_mut(), MemstatStatus::from(&e)),
        };
        // SAFETY: out is non-null and writable per caller contract.
        unsafe { *out = block };
        status as i32
    })
}

/// Release a block from [`memstat_reserve_words`]. Null is a no-op.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn memstat_free_words(src: *mut i32) {
    ffi_guard_or!((), {
        // SAFETY: src is null or a live block per caller contract.
        unsafe { raw::free_words(src) }
    })
}
