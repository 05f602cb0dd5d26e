//! Single-byte and whole-range accessors.
//!
//! [`get`], [`set`] and [`clear`] index like ordinary slices and panic on
//! an out-of-range index. The `try_` variants report the same condition as
//! [`MemError::IndexOutOfBounds`] instead.

use crate::error::MemError;

/// Read the byte at `index`.
///
/// # Panics
///
/// Panics if `index >= buffer.len()`.
#[inline]
pub fn get(buffer: &[u8], index: usize) -> u8 {
    buffer[index]
}

/// Write `value` at `index`.
///
/// # Panics
///
/// Panics if `index >= buffer.len()`.
#[inline]
pub fn set(buffer: &mut [u8], index: usize, value: u8) {
    buffer[index] = value;
}

/// Write zero at `index`.
///
/// # Panics
///
/// Panics if `index >= buffer.len()`.
#[inline]
pub fn clear(buffer: &mut [u8], index: usize) {
    set(buffer, index, 0);
}

/// Checked [`get`].
pub fn try_get(buffer: &[u8], index: usize) -> Result<u8, MemError> {
    buffer.get(index).copied().ok_or(MemError::IndexOutOfBounds {
        index,
        len: buffer.len(),
    })
}

/// Checked [`set`].
pub fn try_set(buffer: &mut [u8], index: usize, value: u8) -> Result<(), MemError> {
    let len = buffer.len();
    match buffer.get_mut(index) {
        Some(slot) => {
            *slot = value;
            Ok(())
        }
        None => Err(MemError::IndexOutOfBounds { index, len }),
    }
}

/// Checked [`clear`].
pub fn try_clear(buffer: &mut [u8], index: usize) -> Result<(), MemError> {
    try_set(buffer, index, 0)
}

/// Write `value` to every byte in `[0, size)`.
///
/// `size` is clamped to the buffer length.
pub fn set_all(buffer: &mut [u8], value: u8, size: usize) {
    let end = size.min(buffer.len());
    for i in 0..end {
        set(buffer, i, value);
    }
}

/// Zero every byte in `[0, size)`.
///
/// `size` is clamped to the buffer length.
pub fn clear_all(buffer: &mut [u8], size: usize) {
    set_all(buffer, 0, size);
}
