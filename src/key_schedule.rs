// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! The RC6 key schedule: expands a variable length key into `2r + 4` round-key words.
//!
use crate::algorithm::RC6InitError;
use crate::type_traits::*;
use std::cmp::max;

/// The largest supported key length in bits.
pub const MAX_KEY_BITS: usize = u16::MAX as usize;

/// Returns the number of round-key words, `2r + 4`, used by an RC6 instance with `rounds` rounds.
pub const fn round_key_count(rounds: u8) -> usize {
    2 * rounds as usize + 4
}

/// Expands the first `key_bits` bits of `key` into a round-key table for `rounds` rounds.
///
/// Only the `ceil(key_bits / 8)` leading bytes of `key` are read; the last key word is zero
/// padded when they do not fill it. A zero length key is expanded as a single zero word.
pub(crate) fn expand_key<T: Word>(
    key: &[u8],
    key_bits: usize,
    rounds: u8,
) -> Result<Box<[T]>, RC6InitError> {
    let key_len = key_bits.div_ceil(8);
    if key_bits > MAX_KEY_BITS || key.len() < key_len {
        tracing::debug!(key_bits, key_len = key.len(), "rejected rc6 key");
        return Err(RC6InitError::InvalidKeyLength {
            key_bits,
            key_len: key.len(),
        });
    }

    let (s_arr, l_arr) = init_sl_arrays::<T>(&key[..key_len], rounds);
    let s_arr = mix_sl_arrays(s_arr, l_arr);

    tracing::debug!(
        width = T::BITS,
        rounds,
        key_bits,
        round_keys = s_arr.len(),
        "expanded rc6 key schedule"
    );

    Ok(s_arr)
}

fn init_sl_arrays<T: Word>(key: &[u8], rounds: u8) -> (Box<[T]>, Box<[T]>) {
    let p = pw::<T>();
    let q = qw::<T>();

    // a scratch copy of the key words; the caller's key is never written to
    let l: Box<[T]> = if key.is_empty() {
        Box::new([T::zero()])
    } else {
        key.chunks(T::BYTES).map(T::from_le_slice).collect()
    };

    let s = std::iter::successors(Some(p), |x| Some(x.wrapping_add(&q)))
        .take(round_key_count(rounds))
        .collect();

    (s, l)
}

fn mix_sl_arrays<T: Word>(mut s_arr: Box<[T]>, mut l_arr: Box<[T]>) -> Box<[T]> {
    let total_count = 3 * max(s_arr.len(), l_arr.len());

    let mut a = T::zero();
    let mut b = T::zero();
    let mut i = 0;
    let mut j = 0;
    for _ in 0..total_count {
        // A = S[i] = (S[i] + A + B) <<< 3
        a = s_arr[i].wrapping_add(&a).wrapping_add(&b).rotate_left(3u32);
        s_arr[i] = a;
        // B = L[j] = (L[j] + A + B) <<< (A + B)
        let ab = a.wrapping_add(&b);
        b = l_arr[j].wrapping_add(&ab).rotate_left(ab);
        l_arr[j] = b;

        i = (i + 1) % s_arr.len();
        j = (j + 1) % l_arr.len();
    }

    s_arr
}

fn pw<T: Word>() -> T {
    // ODD((E - 2) * (1 << w))
    // constant for 64bit
    const P: u64 = 0xB7E151628AED2A6B;
    let p = P >> (64 - T::BITS);
    T::from_u64(p | 1)
}

fn qw<T: Word>() -> T {
    // ODD((PHI - 1) * (1 << w))
    // constant for 64bit
    const Q: u64 = 0x9E3779B97F4A7C15;
    let q = Q >> (64 - T::BITS);
    T::from_u64(q | 1)
}
