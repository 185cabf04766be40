//! Little-endian packing between byte buffers and 32-bit words
//!
//! Every place that views bytes as ChaCha words goes through here, so the
//! round engine only ever sees `u32` arrays and never depends on the
//! alignment or endianness of the caller's buffers.

use byteorder::{ByteOrder, LittleEndian};

use super::CHACHA_BLOCK_SIZE;
use crate::error::{validate, Result};

/// Unpack `src` into `dst`, four little-endian bytes per word
///
/// `src` must be exactly `4 * dst.len()` bytes long.
pub fn read_words(src: &[u8], dst: &mut [u32]) -> Result<()> {
    validate::length("ChaCha word input", src.len(), dst.len() * 4)?;
    LittleEndian::read_u32_into(src, dst);
    Ok(())
}

/// Pack `src` into `dst` as little-endian bytes
///
/// `dst` must be exactly `4 * src.len()` bytes long.
pub fn write_words(src: &[u32], dst: &mut [u8]) -> Result<()> {
    validate::length("ChaCha word output", dst.len(), src.len() * 4)?;
    LittleEndian::write_u32_into(src, dst);
    Ok(())
}

/// Serialize a full 16-word state into one keystream block
#[inline]
pub(crate) fn store_block(words: &[u32; 16], out: &mut [u8; CHACHA_BLOCK_SIZE]) {
    LittleEndian::write_u32_into(words, out);
}

/// Deserialize fixed-size key or nonce bytes into words
#[inline]
pub(crate) fn load<const B: usize, const W: usize>(bytes: &[u8; B]) -> [u32; W] {
    debug_assert_eq!(B, W * 4);
    let mut words = [0u32; W];
    LittleEndian::read_u32_into(bytes, &mut words);
    words
}
