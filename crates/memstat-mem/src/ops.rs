//! Bulk byte operations: overlap-safe move, copy, fill, zero, reverse.
//!
//! Every operation takes an explicit length, clamps it to the buffers it
//! was given and returns the region it wrote. A zero effective length is a
//! no-op that returns an empty slice.

/// Move `length` bytes inside `buffer` from offset `src` to offset `dst`.
///
/// Correct when the two ranges overlap: bytes are copied front to back when
/// `dst < src` and back to front when `dst > src`, so no source byte is
/// overwritten before it has been read. `src == dst` is a no-op.
///
/// `length` is clamped so that neither range runs past the end of
/// `buffer`. Returns the destination range.
pub fn move_within(buffer: &mut [u8], src: usize, dst: usize, length: usize) -> &mut [u8] {
    let len = buffer.len();
    let n = length
        .min(len.saturating_sub(src))
        .min(len.saturating_sub(dst));
    let start = dst.min(len);

    if n == 0 || src == dst {
        return &mut buffer[start..start + n];
    }

    if dst < src {
        for i in 0..n {
            buffer[dst + i] = buffer[src + i];
        }
    } else {
        for i in (0..n).rev() {
            buffer[dst + i] = buffer[src + i];
        }
    }
    &mut buffer[dst..dst + n]
}

/// Copy `length` bytes from `src` into `dst`, front to back.
///
/// The two borrows cannot alias, so no direction check is needed.
/// `length` is clamped to the shorter of the two buffers. Returns the
/// written prefix of `dst`.
pub fn copy<'a>(src: &[u8], dst: &'a mut [u8], length: usize) -> &'a mut [u8] {
    let n = length.min(src.len()).min(dst.len());
    let out = &mut dst[..n];
    out.copy_from_slice(&src[..n]);
    out
}

/// Write `value` to the first `length` bytes of `buffer`.
///
/// Returns the filled prefix.
pub fn fill(buffer: &mut [u8], length: usize, value: u8) -> &mut [u8] {
    let n = length.min(buffer.len());
    let out = &mut buffer[..n];
    for byte in out.iter_mut() {
        *byte = value;
    }
    out
}

/// Zero the first `length` bytes of `buffer`.
pub fn zero(buffer: &mut [u8], length: usize) -> &mut [u8] {
    fill(buffer, length, 0)
}

/// Reverse the first `length` bytes of `buffer` in place.
///
/// Performs `length / 2` mirrored swaps; the middle byte of an odd-length
/// range stays where it is. Returns the reversed prefix.
pub fn reverse(buffer: &mut [u8], length: usize) -> &mut [u8] {
    let n = length.min(buffer.len());
    let out = &mut buffer[..n];
    for i in 0..n / 2 {
        out.swap(i, n - 1 - i);
    }
    out
}
