//! Owned buffers of 32-bit words.
//!
//! [`WordBuffer`] is a move-only handle: allocation hands ownership to the
//! caller, [`release_words`] hands it back. Release consumes the handle, so
//! a released buffer cannot be used or released again.

use std::fmt;
use std::mem;
use std::ops::{Deref, DerefMut};

use crate::error::MemError;

/// Largest word count whose byte size fits in an allocation request.
pub const MAX_WORDS: usize = isize::MAX as usize / mem::size_of::<i32>();

/// A heap-allocated, fixed-length buffer of `i32` words with one owner.
///
/// Contents are zero-initialised.
#[must_use]
pub struct WordBuffer {
    data: Box<[i32]>,
}

impl WordBuffer {
    /// Number of words.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds zero words.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Size of the buffer in bytes (`len * 4`).
    pub fn byte_len(&self) -> usize {
        self.data.len() * mem::size_of::<i32>()
    }

    /// The words as a slice.
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    /// The words as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.data
    }
}

impl Deref for WordBuffer {
    type Target = [i32];

    fn deref(&self) -> &[i32] {
        &self.data
    }
}

impl DerefMut for WordBuffer {
    fn deref_mut(&mut self) -> &mut [i32] {
        &mut self.data
    }
}

impl fmt::Debug for WordBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordBuffer")
            .field("len", &self.data.len())
            .finish()
    }
}

/// Allocate a buffer of `count` words (`count * 4` bytes).
///
/// Fails with [`MemError::CapacityOverflow`] when the byte size cannot be
/// represented and [`MemError::AllocationFailed`] when the allocator
/// refuses the request. There is no retry.
pub fn allocate_words(count: usize) -> Result<WordBuffer, MemError> {
    if count > MAX_WORDS {
        return Err(MemError::CapacityOverflow { words: count });
    }
    let mut data: Vec<i32> = Vec::new();
    data.try_reserve_exact(count)
        .map_err(|_| MemError::AllocationFailed { words: count })?;
    data.resize(count, 0);
    log::trace!("allocated word buffer of {count} words");
    Ok(WordBuffer {
        data: data.into_boxed_slice(),
    })
}

/// Return a buffer to the allocator. `None` is a no-op.
pub fn release_words(buffer: Option<WordBuffer>) {
    if let Some(buffer) = buffer {
        log::trace!("releasing word buffer of {} words", buffer.len());
        drop(buffer);
    }
}
