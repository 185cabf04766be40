//! ChaCha family stream ciphers
//!
//! ChaCha/R with a 256-bit key, 96-bit nonce and 32-bit block counter as laid
//! out in RFC 8439, for any positive even round count R (20, 12 and 8 are the
//! usual choices).
//!
//! Two calling conventions are provided:
//!
//! - [`xor_key_stream`] / [`apply_key_stream`]: one-shot, stateless. Each call
//!   starts the keystream at the given counter.
//! - [`ChaCha`]: resumable. Successive calls continue the keystream exactly
//!   where the previous call stopped, whatever the chunk sizes.
//!
//! # Security Considerations
//!
//! A (nonce, counter) pair must never be reused with the same key. Nothing
//! here detects reuse, and the counter wraps silently after 2³² blocks.

use cipherkit_internal::constant_time::xor_in_place;
use zeroize::Zeroizing;

use crate::error::{validate, Result};

mod cipher;
mod round;
pub mod words;

pub use cipher::ChaCha;
pub use round::{keystream_block, ChaChaState, CONSTANTS};

/// Size of ChaCha key in bytes
pub const CHACHA_KEY_SIZE: usize = 32;
/// Size of ChaCha nonce in bytes
pub const CHACHA_NONCE_SIZE: usize = 12;
/// Size of ChaCha block in bytes
pub const CHACHA_BLOCK_SIZE: usize = 64;

/// Round count of ChaCha20
pub const CHACHA20_ROUNDS: usize = 20;
/// Round count of ChaCha12
pub const CHACHA12_ROUNDS: usize = 12;
/// Round count of ChaCha8
pub const CHACHA8_ROUNDS: usize = 8;

/// Check that `rounds` is a positive multiple of two
#[inline]
pub fn validate_rounds(rounds: usize) -> Result<()> {
    validate::parameter(
        rounds > 0 && rounds % 2 == 0,
        "rounds",
        "ChaCha rounds must be a positive multiple of 2",
    )
}

/// XOR `src` with the keystream for (`key`, `nonce`, `counter`) into `dst`
///
/// Writes `dst[..src.len()]`; the rest of `dst` is left alone. Fails before
/// writing anything if `dst` is shorter than `src` or `rounds` is invalid.
pub fn xor_key_stream(
    dst: &mut [u8],
    src: &[u8],
    nonce: &[u8; CHACHA_NONCE_SIZE],
    key: &[u8; CHACHA_KEY_SIZE],
    counter: u32,
    rounds: usize,
) -> Result<()> {
    validate::min_length("ChaCha destination", dst.len(), src.len())?;
    validate_rounds(rounds)?;

    let out = &mut dst[..src.len()];
    out.copy_from_slice(src);
    apply_key_stream(out, nonce, key, counter, rounds)
}

/// XOR the keystream for (`key`, `nonce`, `counter`) into `buf` in place
pub fn apply_key_stream(
    buf: &mut [u8],
    nonce: &[u8; CHACHA_NONCE_SIZE],
    key: &[u8; CHACHA_KEY_SIZE],
    counter: u32,
    rounds: usize,
) -> Result<()> {
    validate_rounds(rounds)?;

    let mut state = ChaChaState::new(key, nonce, counter);
    let n = round::xor_blocks(&mut state, rounds, buf);

    let tail = &mut buf[n..];
    if !tail.is_empty() {
        // Unused suffix of the last block is discarded
        let mut block = Zeroizing::new([0u8; CHACHA_BLOCK_SIZE]);
        round::generate(&mut state, rounds, &mut block);
        xor_in_place(tail, &block[..]);
    }

    Ok(())
}
