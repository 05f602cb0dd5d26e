//! Pointer-layer contract tests: overlap direction, sentinels, and
//! agreement between the raw and slice layers.

#![allow(unsafe_code)]

use std::ptr;

use memstat_mem::{move_within, raw, reverse};
use memstat_test_utils::reference::reference_move;
use proptest::prelude::*;

/// Run `raw::move_bytes` over two offsets into one buffer.
fn raw_move(data: &[u8], src: usize, dst: usize, length: usize) -> Vec<u8> {
    let mut buf = data.to_vec();
    let len = buf.len();
    let n = length
        .min(len.saturating_sub(src))
        .min(len.saturating_sub(dst));
    if n > 0 {
        let base = buf.as_mut_ptr();
        // SAFETY: both ranges lie inside `buf`.
        unsafe { raw::move_bytes(base.add(src), base.add(dst), n) };
    }
    buf
}

#[test]
fn sentinels_leave_memory_untouched() {
    let mut buf = [1u8, 2, 3, 4];
    let before = buf;
    let p = buf.as_mut_ptr();
    unsafe {
        assert!(raw::move_bytes(ptr::null(), p, 4).is_null());
        assert_eq!(raw::move_bytes(p, p, 4), p);
        assert_eq!(raw::move_bytes(p.add(1), p, 0), p);
        assert_eq!(raw::copy_bytes(p.add(2), p, 0), p);
        assert_eq!(raw::fill_bytes(p, 0, 9), p);
        assert_eq!(raw::reverse_bytes(p, 0), p);
    }
    assert_eq!(buf, before);
}

#[test]
fn raw_copy_matches_raw_move_when_disjoint() {
    let src = [5u8, 6, 7, 8];
    let mut a = [0u8; 4];
    let mut b = [0u8; 4];
    unsafe {
        raw::copy_bytes(src.as_ptr(), a.as_mut_ptr(), 4);
        raw::move_bytes(src.as_ptr(), b.as_mut_ptr(), 4);
    }
    assert_eq!(a, b);
}

proptest! {
    #[test]
    fn raw_move_matches_reference(
        data in proptest::collection::vec(any::<u8>(), 1..96),
        src in 0usize..96,
        dst in 0usize..96,
        length in 0usize..96,
    ) {
        prop_assert_eq!(raw_move(&data, src, dst, length), reference_move(&data, src, dst, length));
    }

    #[test]
    fn raw_and_slice_layers_agree(
        data in proptest::collection::vec(any::<u8>(), 0..96),
        src in 0usize..96,
        dst in 0usize..96,
        length in 0usize..96,
    ) {
        let mut sliced = data.clone();
        move_within(&mut sliced, src, dst, length);
        prop_assert_eq!(raw_move(&data, src, dst, length), sliced);
    }

    #[test]
    fn raw_reverse_matches_slice_reverse(
        data in proptest::collection::vec(any::<u8>(), 0..96),
    ) {
        let mut a = data.clone();
        let mut b = data.clone();
        let n = a.len();
        unsafe { raw::reverse_bytes(a.as_mut_ptr(), n) };
        reverse(&mut b, n);
        prop_assert_eq!(a, b);
    }
}
