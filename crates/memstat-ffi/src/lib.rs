//! C ABI for the memstat memory primitives and statistics.
//!
//! Every entry point checks its pointers, maps Rust errors onto
//! [`MemstatStatus`] codes or documented sentinels, and catches panics
//! before they reach the caller. This crate is one of two that may
//! contain `unsafe` code (along with `memstat-mem`).
//!
//! | Group | Entry points |
//! |-------|--------------|
//! | bytes | `memstat_get_value`, `memstat_get_value_get`, `memstat_set_value`, `memstat_clear_value`, `memstat_set_all`, `memstat_clear_all` |
//! | bulk | `memstat_memmove`, `memstat_memcopy`, `memstat_memset`, `memstat_memzero`, `memstat_reverse` |
//! | words | `memstat_reserve_words`, `memstat_reserve_words_get`, `memstat_free_words` |
//! | stats | `memstat_sort_array`, `memstat_find_mean`, `memstat_find_median`, `memstat_find_minimum`, `memstat_find_maximum`, `memstat_summary` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

/// Run an FFI body, turning a panic into [`MemstatStatus::Panicked`].
macro_rules! ffi_guard {
    ($body:block) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $body)) {
            Ok(status) => status,
            Err(_) => $crate::status::MemstatStatus::Panicked as i32,
        }
    };
}

/// Run an FFI body, returning `$fallback` if it panics.
macro_rules! ffi_guard_or {
    ($fallback:expr, $body:block) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $body)) {
            Ok(value) => value,
            Err(_) => $fallback,
        }
    };
}

pub mod memory;
pub mod stats;
pub mod status;
pub mod words;

pub use status::MemstatStatus;
pub use stats::{MemstatStatsConfig, MemstatSummary};
