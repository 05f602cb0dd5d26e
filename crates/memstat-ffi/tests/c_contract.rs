//! End-to-end checks of the exported C entry points.

#![allow(unsafe_code)]

use std::ptr;

use memstat_ffi::memory::{memstat_memcopy, memstat_memmove, memstat_memzero};
use memstat_ffi::stats::{memstat_find_mean, memstat_summary, MEMSTAT_INVALID_STAT};
use memstat_ffi::words::{memstat_free_words, memstat_reserve_words};
use memstat_ffi::{MemstatStatsConfig, MemstatStatus, MemstatSummary};
use memstat_test_utils::fixtures::SAMPLE_40;
use memstat_test_utils::reference::reference_move;
use proptest::prelude::*;

#[test]
fn summary_of_course_sample() {
    let mut sample = SAMPLE_40;
    let mut out = MemstatSummary::default();
    let rc = memstat_summary(sample.as_mut_ptr(), sample.len(), ptr::null(), &mut out);
    assert_eq!(rc, MemstatStatus::Ok as i32);
    assert_eq!(out.minimum, 2);
    assert_eq!(out.maximum, 250);
    assert_eq!(out.median, 87.5);
    assert_eq!(sample[0], 250);
}

#[test]
fn sorted_copy_config_keeps_sample() {
    let mut sample = SAMPLE_40;
    let config = MemstatStatsConfig {
        legacy_median: 0,
        sorted_copy: 1,
    };
    let mut out = MemstatSummary::default();
    assert_eq!(
        memstat_summary(sample.as_mut_ptr(), sample.len(), &config, &mut out),
        0
    );
    assert_eq!(sample, SAMPLE_40);
}

#[test]
fn over_long_sample_is_reported() {
    let long = [1u8; 300];
    assert_eq!(memstat_find_mean(long.as_ptr(), long.len()), MEMSTAT_INVALID_STAT);
}

#[test]
fn words_survive_a_memzero_of_their_bytes() {
    let block = memstat_reserve_words(4);
    assert!(!block.is_null());
    let bytes = block.cast::<u8>();
    assert_eq!(memstat_memzero(bytes, 16), bytes);
    unsafe {
        assert!((0..4).all(|i| *block.add(i) == 0));
    }
    memstat_free_words(block);
}

#[test]
fn memcopy_and_memmove_agree_on_disjoint_ranges() {
    let src = [1u8, 2, 3, 4, 5, 6];
    let mut a = [0u8; 6];
    let mut b = [0u8; 6];
    memstat_memcopy(src.as_ptr(), a.as_mut_ptr(), 6);
    memstat_memmove(src.as_ptr(), b.as_mut_ptr(), 6);
    assert_eq!(a, b);
}

proptest! {
    #[test]
    fn memmove_matches_reference(
        data in proptest::collection::vec(any::<u8>(), 1..64),
        src in 0usize..64,
        dst in 0usize..64,
        length in 0usize..64,
    ) {
        let mut buf = data.clone();
        let len = buf.len();
        let (src, dst) = (src % len, dst % len);
        let n = length.min(len - src).min(len - dst);
        let base = buf.as_mut_ptr();
        let (s, d) = unsafe { (base.add(src), base.add(dst)) };
        let out = memstat_memmove(s, d, n);
        prop_assert_eq!(out, d);
        prop_assert_eq!(buf, reference_move(&data, src, dst, n));
    }
}
