//! Heap blocks of 4-byte words

use alloc::boxed::Box;
use alloc::vec::Vec;

use logger::warn;

/// Size of one word in bytes
pub const WORD_SIZE: usize = core::mem::size_of::<i32>();

/// Reserve a zeroed block of `length` words.
///
/// Returns `None` when the allocator can't satisfy the request (or the byte size overflows)
/// instead of aborting.
#[must_use = "Dropping the block frees it right away"]
pub fn reserve_words(length: usize) -> Option<Box<[i32]>> {
    let mut block = Vec::new();
    if let Err(error) = block.try_reserve_exact(length) {
        warn!("Failed reserving {} words: {:?}", length, error);
        return None;
    }

    // Capacity is already there, so this can't reallocate
    block.resize(length, 0);

    Some(block.into_boxed_slice())
}

/// Release a block obtained from [`reserve_words`]
pub fn free_words(block: Box<[i32]>) {
    drop(block);
}
