// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! Word-level traits used by the RC6 key schedule and block transform: modular bit rotation,
//! construction from the 64-bit magic constants and explicit little-endian byte conversion.
//!

/// A trait for unsigned types that rotates by an amount taken modulo the word width.
///
/// Only the low `lg w` bits of the amount are significant, so rotating a `u32` by `37`
/// is the same as rotating it by `5`.
pub trait BitRotatable<T: num_traits::Unsigned> {
    type Output;

    fn rotate_left(self, x: T) -> Self::Output;
    fn rotate_right(self, x: T) -> Self::Output;
}

macro_rules! impl_bit_rotatable {
    ($t:ty, $t2:ty) => {
        impl BitRotatable<$t> for $t2 {
            type Output = $t2;

            #[inline]
            fn rotate_left(self, x: $t) -> Self::Output {
                <$t2>::rotate_left(self, rotation_amount::<Self::Output>(x as u32))
            }

            #[inline]
            fn rotate_right(self, x: $t) -> Self::Output {
                <$t2>::rotate_right(self, rotation_amount::<Self::Output>(x as u32))
            }
        }
    };
}

impl_bit_rotatable!(u16, u16);
impl_bit_rotatable!(u32, u16);
impl_bit_rotatable!(u32, u32);
impl_bit_rotatable!(u32, u64);
impl_bit_rotatable!(u64, u64);

/// A trait for types that can be created from a `u64` value by truncation.
pub trait FromU64 {
    fn from_u64(v: u64) -> Self;
}

macro_rules! impl_from_u64 {
    ($($ty:ty)*) => {
        $(
            impl FromU64 for $ty {
                #[inline]
                fn from_u64(v: u64) -> $ty {
                    v as $ty
                }
            }
        )*
    }
}

impl_from_u64!(u16 u32 u64);

/// A trait for words that are read from and written to byte buffers in little-endian order,
/// independently of the host byte order.
pub trait FromToLeBytes: Sized {
    /// Size of one word in bytes.
    const BYTES: usize;

    /// A four word cipher block as raw bytes.
    type Block: AsRef<[u8]> + AsMut<[u8]> + Default + Copy + std::fmt::Debug + PartialEq;

    /// Reads a word from up to `BYTES` leading bytes of `bytes`; missing bytes are taken as zero.
    fn from_le_slice(bytes: &[u8]) -> Self;

    /// Writes the word into the first `BYTES` bytes of `out`.
    fn write_le_slice(self, out: &mut [u8]);
}

macro_rules! impl_from_to_bytes {
    ($($t:ty => $block:ty),*) => {
        $(
            impl FromToLeBytes for $t {
                const BYTES: usize = std::mem::size_of::<$t>();

                type Block = $block;

                #[inline]
                fn from_le_slice(bytes: &[u8]) -> $t {
                    let mut buf = [0u8; std::mem::size_of::<$t>()];
                    let n = std::cmp::min(bytes.len(), buf.len());
                    buf[..n].copy_from_slice(&bytes[..n]);
                    <$t>::from_le_bytes(buf)
                }

                #[inline]
                fn write_le_slice(self, out: &mut [u8]) {
                    let bytes = <$t>::to_le_bytes(self);
                    out[..bytes.len()].copy_from_slice(&bytes);
                }
            }
        )*
    };
}

impl_from_to_bytes!(u16 => [u8; 8], u32 => [u8; 16], u64 => [u8; 32]);

/// The word type of an RC6-w instance.
///
/// Bundles the arithmetic the cipher needs: wrapping add/sub/mul, xor, modular rotations by
/// either a word or a `u32` amount and little-endian conversion.
pub trait Word:
    num_traits::Unsigned
    + num_traits::WrappingAdd
    + num_traits::WrappingSub
    + num_traits::WrappingMul
    + std::marker::Copy
    + std::fmt::Debug
    + std::ops::BitXor<Self, Output = Self>
    + BitRotatable<Self, Output = Self>
    + BitRotatable<u32, Output = Self>
    + FromU64
    + FromToLeBytes
    + Into<u64>
{
    /// Word width `w` in bits.
    const BITS: u32;
    /// Base two log of the word width, the fixed rotation of the quadratic function.
    const LG_W: u32;
}

macro_rules! impl_word {
    ($($t:ty)*) => {
        $(
            impl Word for $t {
                const BITS: u32 = <$t>::BITS;
                const LG_W: u32 = <$t>::BITS.trailing_zeros();
            }
        )*
    };
}

impl_word!(u16 u32 u64);

fn rotation_amount<T>(x: u32) -> u32 {
    x % (std::mem::size_of::<T>() * 8) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_amount_wrap() {
        let x = 0xffffff;
        let expected = 0x1f;
        let amount = rotation_amount::<u32>(x);
        assert_eq!(expected, amount);
    }

    #[test]
    fn rotation_amount_nowrap() {
        let x = 4;
        let amount = rotation_amount::<u32>(x);
        assert_eq!(x, amount);
    }

    #[test]
    fn rotate_uses_low_bits_only() {
        let x: u32 = 0x8000_0001;
        assert_eq!(BitRotatable::<u32>::rotate_left(x, 33u32), 0x0000_0003);
        assert_eq!(BitRotatable::<u32>::rotate_right(x, 32u32), x);
        assert_eq!(BitRotatable::<u16>::rotate_left(0x8001u16, 0x11u16), 0x0003);
        assert_eq!(
            BitRotatable::<u64>::rotate_left(1u64, 0xFFFF_FFFF_0000_0041u64),
            2
        );
    }

    #[test]
    fn lg_w() {
        assert_eq!(<u16 as Word>::LG_W, 4);
        assert_eq!(<u32 as Word>::LG_W, 5);
        assert_eq!(<u64 as Word>::LG_W, 6);
    }

    #[test]
    fn le_slice_is_host_independent() {
        assert_eq!(u32::from_le_slice(&[0x78, 0x56, 0x34, 0x12]), 0x1234_5678);
        assert_eq!(u32::from_le_slice(&[0x78, 0x56]), 0x5678);
        assert_eq!(u32::from_le_slice(&[]), 0);

        let mut out = [0u8; 6];
        0xA1B2_C3D4u32.write_le_slice(&mut out[1..]);
        assert_eq!(out, [0, 0xD4, 0xC3, 0xB2, 0xA1, 0]);
    }
}
