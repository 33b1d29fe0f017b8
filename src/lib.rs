// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! This library provides an implementation of the RC6 block cipher algorithm
//!
//! RC6 is a symmetric-key block cipher designed by Rivest, Robshaw, Sidney and Yin as an AES
//! candidate. It is parameterized as RC6-w/r/b: a word size `w` (16, 32 or 64 bits here), a
//! number of rounds `r` (0 to 255, 20 by default) and a key length `b` of up to 65535 bits.
//! A block is four words, so RC6-32 works on 16 byte blocks.
//!
//! The key schedule expands the key into `2r + 4` round-key words which are then used by the
//! block transform. Words are always read from and written to bytes in little-endian order.
//! Buffers longer than one block are processed block by block with no chaining (ECB); padding
//! and modes of operation are left to the caller.
//!
//! ```
//! use rc6::{RC6, RC6Algo, RC6InitError, DEFAULT_ROUNDS};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let rc6 = RC6::<u32>::new(b"0123456789abcdef", DEFAULT_ROUNDS)?;
//!
//! let mut data = *b"sixteen byte blk and another one";
//! rc6.encrypt(&mut data)?;
//! rc6.decrypt(&mut data)?;
//! assert_eq!(&data, b"sixteen byte blk and another one");
//! # Ok(())
//! # }
//! ```
//!

mod algorithm;
mod chunker;
mod key_schedule;
mod type_traits;

pub use crate::algorithm::*;
pub use crate::chunker::BlockChunker;
pub use crate::key_schedule::{round_key_count, MAX_KEY_BITS};
pub use crate::type_traits::{BitRotatable, FromToLeBytes, FromU64, Word};
