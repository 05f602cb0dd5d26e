//! Pointer-level primitives with the C calling contract.
//!
//! These mirror [`crate::ops`] for callers that only have raw pointers
//! (the `memstat-ffi` crate). The contract is the classic one:
//!
//! - a null pointer yields a null return and touches nothing;
//! - a zero length, or `src == dst`, returns the destination untouched;
//! - everything else (valid ranges, overlap passed to [`copy_bytes`],
//!   releasing a block twice) is the caller's responsibility.
//!
//! Word blocks handed out by [`alloc_words`] carry a one-word header that
//! records their length, so [`free_words`] can rebuild the allocation
//! layout from the pointer alone.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::mem;
use std::ptr::{self, NonNull};

use crate::error::MemError;

/// Move `length` bytes from `src` to `dst`, correct under overlap.
///
/// Walks front to back when `dst < src` and back to front from the last
/// byte when `dst > src`. Returns `dst`, or null if either pointer is null.
///
/// # Safety
///
/// When neither pointer is null and `length > 0`, `src` must be valid for
/// reads and `dst` valid for writes of `length` bytes.
pub unsafe fn move_bytes(src: *const u8, dst: *mut u8, length: usize) -> *mut u8 {
    if src.is_null() || dst.is_null() {
        return ptr::null_mut();
    }
    if length < 1 || ptr::eq(src, dst) {
        return dst;
    }

    if (dst as *const u8) < src {
        let mut s = src;
        let mut d = dst;
        for _ in 0..length {
            // SAFETY: s and d stay within the caller-guaranteed ranges.
            unsafe {
                *d = *s;
                s = s.add(1);
                d = d.add(1);
            }
        }
    } else {
        // SAFETY: length >= 1, so the last byte is at offset length - 1.
        let (mut last_s, mut last_d) = unsafe { (src.add(length - 1), dst.add(length - 1)) };
        for i in 0..length {
            // SAFETY: walking down from the last byte; never steps below the
            // range start because the final iteration does not decrement.
            unsafe {
                *last_d = *last_s;
                if i + 1 < length {
                    last_s = last_s.sub(1);
                    last_d = last_d.sub(1);
                }
            }
        }
    }
    dst
}

/// Copy `length` bytes from `src` to `dst`, front to back.
///
/// Returns `dst`, or null if either pointer is null.
///
/// # Safety
///
/// As [`move_bytes`], and the two ranges must not overlap.
pub unsafe fn copy_bytes(src: *const u8, dst: *mut u8, length: usize) -> *mut u8 {
    if src.is_null() || dst.is_null() {
        return ptr::null_mut();
    }
    if length < 1 || ptr::eq(src, dst) {
        return dst;
    }
    // SAFETY: caller guarantees valid, non-overlapping ranges.
    unsafe { ptr::copy_nonoverlapping(src, dst, length) };
    dst
}

/// Write `value` to `length` bytes starting at `buffer`.
///
/// Returns `buffer`, or null if `buffer` is null.
///
/// # Safety
///
/// When `buffer` is non-null, it must be valid for writes of `length` bytes.
pub unsafe fn fill_bytes(buffer: *mut u8, length: usize, value: u8) -> *mut u8 {
    if buffer.is_null() {
        return ptr::null_mut();
    }
    let mut p = buffer;
    for _ in 0..length {
        // SAFETY: p stays within the caller-guaranteed range.
        unsafe {
            *p = value;
            p = p.add(1);
        }
    }
    buffer
}

/// Zero `length` bytes starting at `buffer`.
///
/// # Safety
///
/// As [`fill_bytes`].
pub unsafe fn zero_bytes(buffer: *mut u8, length: usize) -> *mut u8 {
    // SAFETY: forwarded contract.
    unsafe { fill_bytes(buffer, length, 0) }
}

/// Reverse `length` bytes starting at `buffer` in place.
///
/// Returns `buffer`, or null if `buffer` is null.
///
/// # Safety
///
/// As [`fill_bytes`], with reads as well as writes.
pub unsafe fn reverse_bytes(buffer: *mut u8, length: usize) -> *mut u8 {
    if buffer.is_null() {
        return ptr::null_mut();
    }
    if length < 1 {
        return buffer;
    }
    for i in 0..length / 2 {
        // SAFETY: i and length - 1 - i are distinct offsets inside the range.
        unsafe { ptr::swap(buffer.add(i), buffer.add(length - 1 - i)) };
    }
    buffer
}

/// Bytes reserved in front of every word block to record its length.
const HEADER: usize = mem::size_of::<usize>();

/// Layout of a word block with its length header.
fn block_layout(words: usize) -> Option<Layout> {
    let body = Layout::array::<i32>(words).ok()?;
    let (layout, offset) = Layout::new::<usize>().extend(body).ok()?;
    debug_assert_eq!(offset, HEADER);
    Some(layout.pad_to_align())
}

/// Allocate an uninitialised block of `words` 32-bit integers.
///
/// Fails with [`MemError::CapacityOverflow`] when the block size cannot be
/// represented and [`MemError::AllocationFailed`] when the global allocator
/// refuses it. The block must be released with [`free_words`].
pub fn try_alloc_words(words: usize) -> Result<NonNull<i32>, MemError> {
    let Some(layout) = block_layout(words) else {
        log::debug!("word block of {words} words overflows the allocation size");
        return Err(MemError::CapacityOverflow { words });
    };
    // SAFETY: layout has non-zero size (it always includes the header).
    let base = unsafe { alloc::alloc(layout) };
    let Some(base) = NonNull::new(base) else {
        log::debug!("global allocator refused {} bytes", layout.size());
        return Err(MemError::AllocationFailed { words });
    };
    // SAFETY: base is valid for the header write and aligned for usize; the
    // body starts HEADER bytes in, which is aligned for i32.
    unsafe {
        base.cast::<usize>().write(words);
        Ok(base.add(HEADER).cast::<i32>())
    }
}

/// [`try_alloc_words`] with the C contract: null on any failure.
pub fn alloc_words(words: usize) -> *mut i32 {
    try_alloc_words(words).map_or(ptr::null_mut(), NonNull::as_ptr)
}

/// Release a block returned by [`alloc_words`]. Null is a no-op.
///
/// # Safety
///
/// `block` must be null or a pointer returned by [`alloc_words`] that has
/// not already been released.
pub unsafe fn free_words(block: *mut i32) {
    if block.is_null() {
        return;
    }
    // SAFETY: per contract the header sits HEADER bytes before the body.
    let base = unsafe { block.cast::<u8>().sub(HEADER) };
    // SAFETY: the header was written by alloc_words.
    let words = unsafe { base.cast::<usize>().read() };
    if let Some(layout) = block_layout(words) {
        // SAFETY: same layout that alloc_words used for this block.
        unsafe { alloc::dealloc(base, layout) };
    }
}
