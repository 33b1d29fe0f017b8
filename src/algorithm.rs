// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! The implementaton details of the RC6 block cipher algorithm
//!
use crate::chunker::*;
use crate::key_schedule::*;
use crate::type_traits::*;

/// The number of rounds used when none is specified, as in RC6-32/20/b.
pub const DEFAULT_ROUNDS: u8 = 20;

/// The RC6 struct represents an instance of the RC6 block cipher algorithm.
///
/// The `RC6` struct holds the round count and the expanded round-key table and provides
/// methods for encrypting and decrypting individual four-word blocks. The table is never
/// modified by the transform methods, so a shared `&RC6` can be used from several threads
/// on disjoint buffers.
#[derive(Clone)]
pub struct RC6<T> {
    rounds: u8,
    s_arr: Box<[T]>,
}

impl<T: Word> RC6<T> {
    /// Creates a new RC6 instance keyed with all of `key` and `rounds` rounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use rc6::RC6;
    ///
    /// let key = b"my secret key";
    /// let rc6 = RC6::<u32>::new(key, 20);
    /// assert!(rc6.is_ok());
    /// ```
    pub fn new(key: &[u8], rounds: u8) -> Result<RC6<T>, RC6InitError> {
        RC6::with_key_bits(key, key.len().saturating_mul(8), rounds)
    }

    /// Creates a new RC6 instance from the first `key_bits` bits of `key`.
    ///
    /// The key buffer must hold at least `ceil(key_bits / 8)` bytes and `key_bits` may not
    /// exceed 65535. A key length of zero is valid and behaves as a single all-zero key word.
    ///
    /// # Examples
    ///
    /// ```
    /// use rc6::{RC6, RC6InitError};
    ///
    /// # fn main() -> Result<(), RC6InitError> {
    /// let key = [0u8; 32];
    /// let rc6 = RC6::<u32>::with_key_bits(&key, 128, 20)?;
    /// assert_eq!(rc6.round_keys().len(), 44);
    ///
    /// let res = RC6::<u32>::with_key_bits(&key, 257, 20);
    /// assert!(matches!(res, Err(RC6InitError::InvalidKeyLength { .. })));
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_key_bits(key: &[u8], key_bits: usize, rounds: u8) -> Result<RC6<T>, RC6InitError> {
        let s_arr = expand_key(key, key_bits, rounds)?;
        Ok(RC6 { rounds, s_arr })
    }

    /// Replaces the round-key table with one expanded from a new key and round count.
    ///
    /// On error the instance keeps its previous key.
    pub fn rekey(&mut self, key: &[u8], key_bits: usize, rounds: u8) -> Result<(), RC6InitError> {
        self.s_arr = expand_key(key, key_bits, rounds)?;
        self.rounds = rounds;
        Ok(())
    }

    /// The number of rounds this instance was keyed with.
    pub fn rounds(&self) -> u8 {
        self.rounds
    }

    /// The expanded round-key table `S[0..2r+4]`.
    pub fn round_keys(&self) -> &[T] {
        &self.s_arr
    }

    /// The size in bytes of one block, four words.
    pub const BLOCK_SIZE: usize = 4 * T::BYTES;

    /// Encrypts the four-word block `[a, b, c, d]` in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use rc6::{RC6, RC6InitError};
    ///
    /// # fn main() -> Result<(), RC6InitError> {
    /// let rc6 = RC6::<u32>::new(&[0; 16], 20)?;
    ///
    /// let mut words = [0; 4];
    /// rc6.encrypt_words(&mut words);
    ///
    /// assert_eq!(words, [0x36A5C38F, 0x78F7B156, 0x4EDF29C1, 0x1EA44898]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn encrypt_words(&self, words: &mut [T; 4]) {
        let [mut a, mut b, mut c, mut d] = *words;
        let (first, rest) = self.s_arr.split_at(2);
        let (round_keys, last) = rest.split_at(rest.len() - 2);

        b = b.wrapping_add(&first[0]);
        d = d.wrapping_add(&first[1]);

        for s in round_keys.chunks_exact(2) {
            let t = quadratic(b);
            let u = quadratic(d);
            // A = ((A ^ t) <<< u) + S[2i]
            // C = ((C ^ u) <<< t) + S[2i + 1]
            a = (a ^ t).rotate_left(u).wrapping_add(&s[0]);
            c = (c ^ u).rotate_left(t).wrapping_add(&s[1]);
            (a, b, c, d) = (b, c, d, a);
        }

        a = a.wrapping_add(&last[0]);
        c = c.wrapping_add(&last[1]);

        *words = [a, b, c, d];
    }

    /// Decrypts the four-word block `[a, b, c, d]` in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use rc6::{RC6, RC6InitError};
    ///
    /// # fn main() -> Result<(), RC6InitError> {
    /// let rc6 = RC6::<u32>::new(&[0; 16], 20)?;
    ///
    /// let mut words = [0x36A5C38F, 0x78F7B156, 0x4EDF29C1, 0x1EA44898];
    /// rc6.decrypt_words(&mut words);
    ///
    /// assert_eq!(words, [0; 4]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn decrypt_words(&self, words: &mut [T; 4]) {
        let [mut a, mut b, mut c, mut d] = *words;
        let (first, rest) = self.s_arr.split_at(2);
        let (round_keys, last) = rest.split_at(rest.len() - 2);

        c = c.wrapping_sub(&last[1]);
        a = a.wrapping_sub(&last[0]);

        for s in round_keys.chunks_exact(2).rev() {
            (a, b, c, d) = (d, a, b, c);
            let u = quadratic(d);
            let t = quadratic(b);
            // C = ((C - S[2i + 1]) >>> t) ^ u
            // A = ((A - S[2i]) >>> u) ^ t
            c = c.wrapping_sub(&s[1]).rotate_right(t) ^ u;
            a = a.wrapping_sub(&s[0]).rotate_right(u) ^ t;
        }

        d = d.wrapping_sub(&first[1]);
        b = b.wrapping_sub(&first[0]);

        *words = [a, b, c, d];
    }

    /// Encrypts a single block of little-endian bytes in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use rc6::{RC6, RC6InitError};
    ///
    /// # fn main() -> Result<(), RC6InitError> {
    /// let rc6 = RC6::<u32>::new(&[0; 16], 20)?;
    ///
    /// let mut block = [0; 16];
    /// rc6.encrypt_block(&mut block);
    ///
    /// assert_eq!(
    ///     block,
    ///     [
    ///         0x8F, 0xC3, 0xA5, 0x36, 0x56, 0xB1, 0xF7, 0x78, 0xC1, 0x29, 0xDF, 0x4E, 0x98, 0x48,
    ///         0xA4, 0x1E,
    ///     ]
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub fn encrypt_block(&self, block: &mut T::Block) {
        self.encrypt_slice(block.as_mut());
    }

    /// Decrypts a single block of little-endian bytes in place.
    pub fn decrypt_block(&self, block: &mut T::Block) {
        self.decrypt_slice(block.as_mut());
    }

    /// Returns a lazy iterator that encrypts `bytes` one block at a time, yielding every block
    /// right after it has been encrypted in place.
    ///
    /// The length of `bytes` is checked before any block is touched.
    ///
    /// # Examples
    ///
    /// ```
    /// use rc6::{RC6, RC6AlgoError};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let rc6 = RC6::<u32>::new(b"my secret key", 20)?;
    /// let mut data = [0u8; 48];
    ///
    /// let mut ciphertext = Vec::new();
    /// for block in rc6.encrypt_blocks(&mut data)? {
    ///     ciphertext.extend_from_slice(block);
    /// }
    /// assert_eq!(ciphertext, data);
    ///
    /// let res = rc6.encrypt_blocks(&mut data[..17]);
    /// assert!(matches!(res, Err(RC6AlgoError::InvalidBlockLength { .. })));
    /// # Ok(())
    /// # }
    /// ```
    pub fn encrypt_blocks<'a>(
        &'a self,
        bytes: &'a mut [u8],
    ) -> Result<BlockChunker<'a, impl FnMut(&mut [u8]) + 'a>, RC6AlgoError> {
        BlockChunker::new(bytes, Self::BLOCK_SIZE, move |block: &mut [u8]| {
            self.encrypt_slice(block)
        })
    }

    /// Returns a lazy iterator that decrypts `bytes` one block at a time, yielding every block
    /// right after it has been decrypted in place.
    pub fn decrypt_blocks<'a>(
        &'a self,
        bytes: &'a mut [u8],
    ) -> Result<BlockChunker<'a, impl FnMut(&mut [u8]) + 'a>, RC6AlgoError> {
        BlockChunker::new(bytes, Self::BLOCK_SIZE, move |block: &mut [u8]| {
            self.decrypt_slice(block)
        })
    }

    fn encrypt_slice(&self, block: &mut [u8]) {
        let mut words = read_words::<T>(block);
        self.encrypt_words(&mut words);
        write_words(words, block);
    }

    fn decrypt_slice(&self, block: &mut [u8]) {
        let mut words = read_words::<T>(block);
        self.decrypt_words(&mut words);
        write_words(words, block);
    }
}

impl<T> std::fmt::Debug for RC6<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // round keys are key material
        f.debug_struct("RC6")
            .field("rounds", &self.rounds)
            .field("round_keys", &self.s_arr.len())
            .finish()
    }
}

/// f(x) = (x * (2x + 1)) <<< lg w
#[inline]
fn quadratic<T: Word>(x: T) -> T {
    let x2_1 = x.wrapping_add(&x).wrapping_add(&T::one());
    x.wrapping_mul(&x2_1).rotate_left(T::LG_W)
}

fn read_words<T: Word>(block: &[u8]) -> [T; 4] {
    let mut words = [T::zero(); 4];
    for (word, bytes) in words.iter_mut().zip(block.chunks_exact(T::BYTES)) {
        *word = T::from_le_slice(bytes);
    }
    words
}

fn write_words<T: Word>(words: [T; 4], block: &mut [u8]) {
    for (word, bytes) in words.into_iter().zip(block.chunks_exact_mut(T::BYTES)) {
        word.write_le_slice(bytes);
    }
}

/// The `RC6AlgoError` enum represents the possible errors that can occur during the
/// encryption decryption in [RC6Algo].
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RC6AlgoError {
    #[error(
        "invalid input length `{len}`; expected a positive multiple of `{block_size}` bytes"
    )]
    InvalidBlockLength { len: usize, block_size: usize },
}

/// The `RC6Algo` trait provides methods for encrypting and decrypting data using
/// the RC6 block cipher algorithm in ECB fashion. This trait is useful when the RC6 algorithm
/// needs to be constructed with a word size that is determined at runtime.
pub trait RC6Algo {
    /// The size in bytes of one block.
    fn block_size(&self) -> usize;

    /// Encrypts every block of the given slice of bytes in place, independently of each other.
    ///
    /// Returns a reference to the encrypted bytes on success, or an [RC6AlgoError] if
    /// the slice is empty or not a multiple of the block size, in which case it is left untouched.
    fn encrypt<'a>(&self, bytes: &'a mut [u8]) -> Result<&'a mut [u8], RC6AlgoError>;

    /// Decrypts every block of the given slice of bytes in place, independently of each other.
    ///
    /// Returns a reference to the decrypted bytes on success, or an [RC6AlgoError] if
    /// the slice is empty or not a multiple of the block size, in which case it is left untouched.
    fn decrypt<'a>(&self, bytes: &'a mut [u8]) -> Result<&'a mut [u8], RC6AlgoError>;

    /// The round-key table widened to `u64` words.
    fn round_key_words(&self) -> Vec<u64>;

    /// Returns an encrypted copy of `bytes`.
    fn encrypt_to_vec(&self, bytes: &[u8]) -> Result<Vec<u8>, RC6AlgoError> {
        let mut out = bytes.to_vec();
        self.encrypt(&mut out)?;
        Ok(out)
    }

    /// Returns a decrypted copy of `bytes`.
    fn decrypt_to_vec(&self, bytes: &[u8]) -> Result<Vec<u8>, RC6AlgoError> {
        let mut out = bytes.to_vec();
        self.decrypt(&mut out)?;
        Ok(out)
    }
}

impl<T: Word> RC6Algo for RC6<T> {
    fn block_size(&self) -> usize {
        Self::BLOCK_SIZE
    }

    fn encrypt<'a>(&self, bytes: &'a mut [u8]) -> Result<&'a mut [u8], RC6AlgoError> {
        tracing::trace!(len = bytes.len(), "rc6 ecb encrypt");
        self.encrypt_blocks(bytes)?.for_each(drop);
        Ok(bytes)
    }

    fn decrypt<'a>(&self, bytes: &'a mut [u8]) -> Result<&'a mut [u8], RC6AlgoError> {
        tracing::trace!(len = bytes.len(), "rc6 ecb decrypt");
        self.decrypt_blocks(bytes)?.for_each(drop);
        Ok(bytes)
    }

    fn round_key_words(&self) -> Vec<u64> {
        self.s_arr.iter().map(|&s| s.into()).collect()
    }
}

/// The `RC6InitError` enum represents the possible errors that can occur during the
/// [RC6] initialization
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RC6InitError {
    #[error(
        "invalid key length: `{key_bits}` bits from a `{key_len}` byte key; supported range is [0, 65535] bits within the key"
    )]
    InvalidKeyLength { key_bits: usize, key_len: usize },
}

/// The `RC6DynInitError` enum represents the possible errors that can occur during the
/// [RC6] initialization with runtime width using [new_rc6_dyn]
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RC6DynInitError {
    #[error("invalid width `{0}`; supported widths are: {{16, 32, 64}}")]
    InvalidWidth(usize),
    #[error("invalid round count `{0}`; supported range is [0, 255]")]
    InvalidRoundCount(usize),
    #[error(
        "invalid key length: `{key_bits}` bits from a `{key_len}` byte key; supported range is [0, 65535] bits within the key"
    )]
    InvalidKeyLength { key_bits: usize, key_len: usize },
}

impl From<RC6InitError> for RC6DynInitError {
    fn from(value: RC6InitError) -> Self {
        match value {
            RC6InitError::InvalidKeyLength { key_bits, key_len } => {
                RC6DynInitError::InvalidKeyLength { key_bits, key_len }
            }
        }
    }
}

/// Constructs a new [RC6] encryption algorithm instance with runtime word size, round count
/// and key length.
///
/// # Arguments
///
/// * width - The bit width of the word size to be used in the algorithm (16, 32, or 64).
/// * rounds - The number of rounds of encryption to be performed by the algorithm.
/// * key - A slice of bytes holding the key.
/// * key_bits - How many bits of `key` make up the key.
///
/// # Returns
///
/// A Result containing a boxed dyn [RC6Algo] instance on success, or a [RC6DynInitError] on failure.
///
/// # Examples
///
/// ```
/// use rc6::{new_rc6_dyn, RC6Algo};
///
/// let key = b"my secret key";
/// let algo = new_rc6_dyn(32, 20, key, key.len() * 8).unwrap();
/// let pt_org = [0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07,
///               0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F];
/// let mut pt = pt_org.clone();
/// let mut ct = algo.encrypt(&mut pt).unwrap();
/// assert_ne!(pt_org, ct);
/// let decrypted = algo.decrypt(&mut ct).unwrap();
/// assert_eq!(pt_org, decrypted);
/// ````
pub fn new_rc6_dyn(
    width: usize,
    rounds: usize,
    key: &[u8],
    key_bits: usize,
) -> Result<Box<dyn RC6Algo + Send + Sync>, RC6DynInitError> {
    const W16: usize = std::mem::size_of::<u16>() * 8;
    const W32: usize = std::mem::size_of::<u32>() * 8;
    const W64: usize = std::mem::size_of::<u64>() * 8;

    let rounds = u8::try_from(rounds).map_err(|_| RC6DynInitError::InvalidRoundCount(rounds))?;
    match width {
        W16 => Ok(Box::new(RC6::<u16>::with_key_bits(key, key_bits, rounds)?)),
        W32 => Ok(Box::new(RC6::<u32>::with_key_bits(key, key_bits, rounds)?)),
        W64 => Ok(Box::new(RC6::<u64>::with_key_bits(key, key_bits, rounds)?)),
        _ => Err(RC6DynInitError::InvalidWidth(width)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> Vec<u8> {
        (0..s.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
            .collect()
    }

    fn check_vector<T: Word>(rounds: u8, key: &str, pt: &str, ct: &str) {
        let key = hex(key);
        let rc6 = RC6::<T>::new(&key, rounds).unwrap();

        let mut block = hex(pt);
        RC6Algo::encrypt(&rc6, &mut block).unwrap();
        assert_eq!(block, hex(ct));

        RC6Algo::decrypt(&rc6, &mut block).unwrap();
        assert_eq!(block, hex(pt));
    }

    #[test]
    fn invalid_key_length() {
        let key = [0; 16];
        let res = RC6::<u32>::with_key_bits(&key, 129, 20);

        assert!(matches!(
            res,
            Err(RC6InitError::InvalidKeyLength { key_bits: 129, key_len })
            if key_len == key.len()
        ));
    }

    #[test]
    fn invalid_key_length_dyn() {
        let key = [0; 4];
        let res = new_rc6_dyn(32, 20, &key, 40);

        assert!(matches!(
            res,
            Err(RC6DynInitError::InvalidKeyLength { key_bits: 40, key_len: 4 })
        ));
    }

    #[test]
    fn invalid_width() {
        let width = 123;
        let key = [1, 2, 3, 4];
        let res = new_rc6_dyn(width, 20, &key, 32);

        assert!(matches!(
            res,
            Err(RC6DynInitError::InvalidWidth(error_width))
            if error_width == width
        ));
    }

    #[test]
    fn invalid_round_count() {
        let key = [1, 2, 3, 4];
        let res = new_rc6_dyn(32, 256, &key, 32);

        assert!(matches!(res, Err(RC6DynInitError::InvalidRoundCount(256))));
        assert!(new_rc6_dyn(32, 255, &key, 32).is_ok());
    }

    #[test]
    fn invalid_block_length_encrypt() {
        let rc6 = RC6::<u32>::new(&[1, 2, 3, 4], 20).unwrap();

        for len in [0, 1, 15, 17, 31] {
            let mut pt = vec![0xAA; len];
            let res = RC6Algo::encrypt(&rc6, &mut pt);

            assert_eq!(
                res.map(|_| ()),
                Err(RC6AlgoError::InvalidBlockLength { len, block_size: 16 })
            );
            assert!(pt.iter().all(|&b| b == 0xAA));
        }
    }

    #[test]
    fn invalid_block_length_decrypt() {
        let rc6 = new_rc6_dyn(16, 16, &[1, 2, 3, 4], 32).unwrap();

        let mut ct = [0; 12];
        let res = rc6.decrypt(&mut ct);

        assert_eq!(
            res.map(|_| ()),
            Err(RC6AlgoError::InvalidBlockLength { len: 12, block_size: 8 })
        );
    }

    #[test]
    fn encode_32_20_16_zero() {
        check_vector::<u32>(
            20,
            "00000000000000000000000000000000",
            "00000000000000000000000000000000",
            "8fc3a53656b1f778c129df4e9848a41e",
        );
    }

    #[test]
    fn encode_32_20_16() {
        check_vector::<u32>(
            20,
            "0123456789abcdef0112233445566778",
            "02132435465768798a9bacbdcedfe0f1",
            "524e192f4715c6231f51f6367ea43f18",
        );
    }

    #[test]
    fn encode_32_20_24_zero() {
        check_vector::<u32>(
            20,
            "000000000000000000000000000000000000000000000000",
            "00000000000000000000000000000000",
            "6cd61bcb190b30384e8a3f168690ae82",
        );
    }

    #[test]
    fn encode_32_20_24() {
        check_vector::<u32>(
            20,
            "0123456789abcdef0112233445566778899aabbccddeeff0",
            "02132435465768798a9bacbdcedfe0f1",
            "688329d019e505041e52e92af95291d4",
        );
    }

    #[test]
    fn encode_32_20_32_zero() {
        check_vector::<u32>(
            20,
            "0000000000000000000000000000000000000000000000000000000000000000",
            "00000000000000000000000000000000",
            "8f5fbd0510d15fa893fa3fda6e857ec2",
        );
    }

    #[test]
    fn encode_32_20_32() {
        check_vector::<u32>(
            20,
            "0123456789abcdef0112233445566778899aabbccddeeff01032547698badcfe",
            "02132435465768798a9bacbdcedfe0f1",
            "c8241816f0d7e48920ad16a1674e5d48",
        );
    }

    #[test]
    fn encode_16_16_8() {
        check_vector::<u16>(16, "0001020304050607", "0001020304050607", "2ff0b68eaeffad5b");
    }

    #[test]
    fn encode_32_20_16_sequential() {
        check_vector::<u32>(
            20,
            "000102030405060708090a0b0c0d0e0f",
            "000102030405060708090a0b0c0d0e0f",
            "3a96f9c7f6755cfe46f00e3dcd5d2a3c",
        );
    }

    #[test]
    fn encode_64_24_24() {
        check_vector::<u64>(
            24,
            "000102030405060708090a0b0c0d0e0f1011121314151617",
            "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
            "c002de050bd55e5d36864ab9853338e6dc4a1326c6bdaaeb1bc9e4fd67886617",
        );
    }

    #[test]
    fn encode_0_sized_key() {
        let rc6 = RC6::<u32>::with_key_bits(&[], 0, 20).unwrap();
        let mut pt = [0; 16];
        rc6.encrypt_block(&mut pt);
        assert_eq!(pt[..], hex("bc0aa90dcc98ef699676e3e646a8ce0e")[..]);

        let again = RC6::<u32>::new(&[], 20).unwrap();
        assert_eq!(rc6.round_keys(), again.round_keys());
    }

    #[test]
    fn encode_0_rounds() {
        let rc6 = RC6::<u32>::new(&[0; 16], 0).unwrap();
        assert_eq!(rc6.round_keys().len(), 4);

        let mut pt: [u8; 16] = std::array::from_fn(|i| i as u8);
        rc6.encrypt_block(&mut pt);
        assert_eq!(pt[..], hex("22b63b7caba976103d87c4e22b73c381")[..]);

        rc6.decrypt_block(&mut pt);
        assert_eq!(pt, std::array::from_fn::<u8, 16, _>(|i| i as u8));
    }

    #[test]
    fn rekey_replaces_table() {
        let mut rc6 = RC6::<u32>::new(&[0; 16], 20).unwrap();
        let other = RC6::<u32>::new(&[0; 24], 12).unwrap();

        rc6.rekey(&[0; 24], 192, 12).unwrap();
        assert_eq!(rc6.rounds(), 12);
        assert_eq!(rc6.round_keys(), other.round_keys());

        let res = rc6.rekey(&[0; 2], 32, 20);
        assert!(res.is_err());
        assert_eq!(rc6.rounds(), 12);
        assert_eq!(rc6.round_keys(), other.round_keys());
    }

    #[test]
    fn round_key_words_widen() {
        let rc6 = RC6::<u16>::new(&[0; 8], 16).unwrap();
        let words = RC6Algo::round_key_words(&rc6);
        assert_eq!(words.len(), 36);
        assert!(words
            .iter()
            .zip(rc6.round_keys())
            .all(|(&w, &s)| w == u64::from(s)));
    }

    #[test]
    fn debug_hides_round_keys() {
        let rc6 = RC6::<u32>::new(&[0; 16], 20).unwrap();
        assert_eq!(format!("{rc6:?}"), "RC6 { rounds: 20, round_keys: 44 }");
    }
}
