//! Stable top-down merge sort, descending.
//!
//! Each merge copies its two halves into temporaries and writes them back
//! largest-first. On ties the left element wins (`>=`), which keeps equal
//! values in their original relative order.

use smallvec::SmallVec;

/// Temporaries for one half of a merge. A full sample is at most 255
/// values, so each half fits inline.
type Half<T> = SmallVec<[T; 128]>;

/// Sort `array` in place, largest value first.
///
/// Stable. Slices shorter than two elements are left as they are.
pub fn sort_descending(array: &mut [u8]) {
    sort_descending_by_key(array, |&v| v);
}

/// Sort `array` in place by descending `key`, keeping equal keys in their
/// original order.
pub fn sort_descending_by_key<T, K, F>(array: &mut [T], key: F)
where
    T: Copy,
    K: Ord,
    F: Fn(&T) -> K + Copy,
{
    if array.len() < 2 {
        return;
    }
    merge_sort(array, 0, array.len() - 1, key);
}

/// Sort the inclusive range `[left, right]`.
fn merge_sort<T, K, F>(array: &mut [T], left: usize, right: usize, key: F)
where
    T: Copy,
    K: Ord,
    F: Fn(&T) -> K + Copy,
{
    if left < right {
        let mid = left + (right - left) / 2;
        merge_sort(array, left, mid, key);
        merge_sort(array, mid + 1, right, key);
        merge(array, left, mid, right, key);
    }
}

/// Merge the sorted runs `[left, mid]` and `[mid + 1, right]`.
fn merge<T, K, F>(array: &mut [T], left: usize, mid: usize, right: usize, key: F)
where
    T: Copy,
    K: Ord,
    F: Fn(&T) -> K,
{
    let lhs: Half<T> = array[left..=mid].iter().copied().collect();
    let rhs: Half<T> = array[mid + 1..=right].iter().copied().collect();

    let (mut i, mut j, mut k) = (0, 0, left);
    while i < lhs.len() && j < rhs.len() {
        if key(&lhs[i]) >= key(&rhs[j]) {
            array[k] = lhs[i];
            i += 1;
        } else {
            array[k] = rhs[j];
            j += 1;
        }
        k += 1;
    }

    // Drain whichever half is left over.
    for &v in lhs[i..].iter().chain(&rhs[j..]) {
        array[k] = v;
        k += 1;
    }
}
