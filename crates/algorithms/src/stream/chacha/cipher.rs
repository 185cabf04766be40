//! Resumable ChaCha keystream

use cipherkit_internal::constant_time::xor_in_place;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::round::{self, ChaChaState};
use super::{validate_rounds, CHACHA_BLOCK_SIZE, CHACHA_KEY_SIZE, CHACHA_NONCE_SIZE};
use crate::error::{validate, Result};

/// ChaCha stream cipher that can be fed in arbitrary chunks
///
/// The output of any sequence of calls equals one call to
/// [`xor_key_stream`](super::xor_key_stream) over the concatenated input.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ChaCha {
    state: ChaChaState,
    /// Last generated keystream block
    block: [u8; CHACHA_BLOCK_SIZE],
    /// Bytes of `block` already used; 0 means nothing is left over
    offset: usize,
    rounds: usize,
}

impl ChaCha {
    /// Creates a cipher whose keystream starts at block counter 0
    pub fn new(
        nonce: &[u8; CHACHA_NONCE_SIZE],
        key: &[u8; CHACHA_KEY_SIZE],
        rounds: usize,
    ) -> Result<Self> {
        Self::with_counter(nonce, key, 0, rounds)
    }

    /// Creates a cipher whose keystream starts at block `counter`
    pub fn with_counter(
        nonce: &[u8; CHACHA_NONCE_SIZE],
        key: &[u8; CHACHA_KEY_SIZE],
        counter: u32,
        rounds: usize,
    ) -> Result<Self> {
        validate_rounds(rounds)?;

        Ok(Self {
            state: ChaChaState::new(key, nonce, counter),
            block: [0u8; CHACHA_BLOCK_SIZE],
            offset: 0,
            rounds,
        })
    }

    /// Number of rounds per block
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// XOR `src` with the next `src.len()` keystream bytes into `dst`
    ///
    /// Fails without consuming keystream if `dst` is shorter than `src`.
    pub fn xor_key_stream(&mut self, dst: &mut [u8], src: &[u8]) -> Result<()> {
        validate::min_length("ChaCha destination", dst.len(), src.len())?;

        let out = &mut dst[..src.len()];
        out.copy_from_slice(src);
        self.apply_key_stream(out);
        Ok(())
    }

    /// XOR the next `buf.len()` keystream bytes into `buf`
    pub fn apply_key_stream(&mut self, buf: &mut [u8]) {
        let mut pos = 0;

        // Leftover from the previous call
        if self.offset > 0 {
            let n = xor_in_place(buf, &self.block[self.offset..]);
            self.offset = (self.offset + n) % CHACHA_BLOCK_SIZE;
            pos = n;
        }

        pos += round::xor_blocks(&mut self.state, self.rounds, &mut buf[pos..]);

        let tail = &mut buf[pos..];
        if !tail.is_empty() {
            round::generate(&mut self.state, self.rounds, &mut self.block);
            self.offset = xor_in_place(tail, &self.block);
        }
    }
}
