//! Byte-buffer primitives and word-buffer allocation.
//!
//! Everything here operates on caller-owned buffers: nothing reallocates,
//! nothing keeps state between calls. This crate is one of two that may
//! contain `unsafe` code (along with `memstat-ffi`).
//!
//! # Layers
//!
//! ```text
//! access  get / set / clear / set_all / clear_all   (&[u8], &mut [u8])
//! ops     move_within / copy / fill / zero / reverse (&mut [u8])
//! words   WordBuffer, allocate_words, release_words  (owned Box<[i32]>)
//! raw     pointer-level versions of the above        (unsafe fn)
//! ```
//!
//! The slice layers clamp lengths to the buffer they are given, so a short
//! buffer never causes an out-of-range write. The [`raw`] layer keeps the
//! C contract literally: null pointers and zero lengths are sentinels,
//! everything else is the caller's responsibility.
//!
//! # Overlap
//!
//! Safe Rust cannot hold two mutable views of one buffer, so an
//! overlapping move is expressed as two offsets into a single buffer
//! ([`move_within`]). [`copy`] takes two distinct borrows and therefore
//! never sees overlap at all.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod access;
pub mod error;
pub mod ops;
pub mod raw;
pub mod words;

pub use access::{clear, clear_all, get, set, set_all, try_clear, try_get, try_set};
pub use error::MemError;
pub use ops::{copy, fill, move_within, reverse, zero};
pub use words::{allocate_words, release_words, WordBuffer};
