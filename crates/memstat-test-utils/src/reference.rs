//! Naive reference implementations.

/// Move through a full temporary copy of the source range.
///
/// Uses the same clamping rule as `memstat_mem::move_within`: the length
/// is cut so that neither range runs past the end of `data`.
pub fn reference_move(data: &[u8], src: usize, dst: usize, length: usize) -> Vec<u8> {
    let len = data.len();
    let n = length
        .min(len.saturating_sub(src))
        .min(len.saturating_sub(dst));
    let mut out = data.to_vec();
    if n == 0 {
        return out;
    }
    let tmp: Vec<u8> = data[src..src + n].to_vec();
    out[dst..dst + n].copy_from_slice(&tmp);
    out
}

/// Stable descending sort via `slice::sort_by` (itself stable).
pub fn reference_sort_descending(data: &[u8]) -> Vec<u8> {
    let mut out = data.to_vec();
    out.sort_by(|a, b| b.cmp(a));
    out
}

/// Textbook median of a non-empty sample.
pub fn reference_median(data: &[u8]) -> f64 {
    let sorted = reference_sort_descending(data);
    let n = sorted.len();
    if n % 2 == 0 {
        (f64::from(sorted[n / 2 - 1]) + f64::from(sorted[n / 2])) / 2.0
    } else {
        f64::from(sorted[n / 2])
    }
}
