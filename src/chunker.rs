// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! This module provides utilities for walking a byte buffer in consecutive, non-overlapping
//! blocks and transforming each block in place, electronic-codebook style.

use crate::algorithm::RC6AlgoError;

/// A lazy iterator that applies a block transform to a buffer one block at a time.
///
/// The `BlockChunker` struct consists of the remaining blocks of a buffer and the transform to
/// apply to them. Each call to `next()` transforms the next block in place and yields a
/// read-only view of the result, so the caller can stream the output while it is produced.
/// Blocks that were never yielded are left untouched.
///
/// # Examples
///
/// ```
/// use rc6::BlockChunker;
///
/// let mut buf = [1, 2, 3, 4];
/// let chunker = BlockChunker::new(&mut buf, 2, |b: &mut [u8]| b.reverse()).unwrap();
///
/// let blocks: Vec<Vec<u8>> = chunker.map(|b| b.to_vec()).collect();
/// assert_eq!(blocks, [[2, 1], [4, 3]]);
/// assert_eq!(buf, [2, 1, 4, 3]);
/// ```
pub struct BlockChunker<'a, F> {
    blocks: std::slice::ChunksExactMut<'a, u8>,
    transform: F,
}

impl<'a, F> BlockChunker<'a, F>
where
    F: FnMut(&mut [u8]),
{
    /// Creates a new `BlockChunker` over `bytes` split into `block_size` sized blocks.
    ///
    /// Fails when `bytes` is empty or its length is not a multiple of `block_size`, before
    /// any block is touched.
    pub fn new(
        bytes: &'a mut [u8],
        block_size: usize,
        transform: F,
    ) -> Result<BlockChunker<'a, F>, RC6AlgoError> {
        check_block_len(bytes.len(), block_size)?;

        Ok(BlockChunker {
            blocks: bytes.chunks_exact_mut(block_size),
            transform,
        })
    }
}

impl<'a, F> Iterator for BlockChunker<'a, F>
where
    F: FnMut(&mut [u8]),
{
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        let block = self.blocks.next()?;
        (self.transform)(block);
        Some(block)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.blocks.size_hint()
    }
}

impl<'a, F> ExactSizeIterator for BlockChunker<'a, F> where F: FnMut(&mut [u8]) {}

/// Checks that a buffer of `len` bytes splits into a positive number of whole blocks.
pub fn check_block_len(len: usize, block_size: usize) -> Result<(), RC6AlgoError> {
    if block_size == 0 || len == 0 || len % block_size != 0 {
        tracing::debug!(len, block_size, "rejected rc6 buffer");
        return Err(RC6AlgoError::InvalidBlockLength { len, block_size });
    }
    Ok(())
}
