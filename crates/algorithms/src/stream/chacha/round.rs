//! ChaCha state layout and round function
//!
//! The state is the 4×4 word matrix of RFC 8439 §2.3:
//!
//! ```text
//! cccccccc  cccccccc  cccccccc  cccccccc
//! kkkkkkkk  kkkkkkkk  kkkkkkkk  kkkkkkkk
//! kkkkkkkk  kkkkkkkk  kkkkkkkk  kkkkkkkk
//! bbbbbbbb  nnnnnnnn  nnnnnnnn  nnnnnnnn
//! ```
//!
//! `c` = constant, `k` = key, `b` = block counter, `n` = nonce.

use cipherkit_internal::constant_time::xor_in_place;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::{validate_rounds, words, CHACHA_BLOCK_SIZE, CHACHA_KEY_SIZE, CHACHA_NONCE_SIZE};
use crate::error::{validate, Result};

/// "expand 32-byte k" in little-endian words
pub const CONSTANTS: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

const COUNTER_WORD: usize = 12;

/// The 16-word ChaCha state
///
/// The (nonce, counter) pair must never repeat under one key. The state does
/// not track reuse; the counter silently wraps modulo 2³².
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ChaChaState {
    words: [u32; 16],
}

impl ChaChaState {
    /// Build the initial state from a key, a nonce and a starting counter
    pub fn new(
        key: &[u8; CHACHA_KEY_SIZE],
        nonce: &[u8; CHACHA_NONCE_SIZE],
        counter: u32,
    ) -> Self {
        let key_words: Zeroizing<[u32; 8]> = Zeroizing::new(words::load(key));
        let nonce_words: [u32; 3] = words::load(nonce);

        let mut state = [0u32; 16];
        state[..4].copy_from_slice(&CONSTANTS);
        state[4..12].copy_from_slice(&key_words[..]);
        state[COUNTER_WORD] = counter;
        state[13..].copy_from_slice(&nonce_words);

        Self { words: state }
    }

    /// Build the initial state from unsized key and nonce buffers
    ///
    /// Fails with a length error unless the key is 32 bytes and the nonce 12.
    pub fn from_slices(key: &[u8], nonce: &[u8], counter: u32) -> Result<Self> {
        validate::length("ChaCha key", key.len(), CHACHA_KEY_SIZE)?;
        validate::length("ChaCha nonce", nonce.len(), CHACHA_NONCE_SIZE)?;

        let mut key_bytes = Zeroizing::new([0u8; CHACHA_KEY_SIZE]);
        key_bytes.copy_from_slice(key);
        let mut nonce_bytes = [0u8; CHACHA_NONCE_SIZE];
        nonce_bytes.copy_from_slice(nonce);

        Ok(Self::new(&key_bytes, &nonce_bytes, counter))
    }

    /// The block counter that the next generated block will use
    pub fn counter(&self) -> u32 {
        self.words[COUNTER_WORD]
    }
}

/// The ChaCha quarter round function
#[inline(always)]
fn quarter_round(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(16);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(12);

    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(8);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(7);
}

/// Generate one keystream block and advance the counter
///
/// `rounds` must already be validated.
pub(crate) fn generate(state: &mut ChaChaState, rounds: usize, out: &mut [u8; CHACHA_BLOCK_SIZE]) {
    debug_assert!(rounds > 0 && rounds % 2 == 0);

    let mut working = Zeroizing::new(state.words);
    let w = &mut *working;

    for _ in 0..rounds / 2 {
        // Column rounds
        quarter_round(w, 0, 4, 8, 12);
        quarter_round(w, 1, 5, 9, 13);
        quarter_round(w, 2, 6, 10, 14);
        quarter_round(w, 3, 7, 11, 15);

        // Diagonal rounds
        quarter_round(w, 0, 5, 10, 15);
        quarter_round(w, 1, 6, 11, 12);
        quarter_round(w, 2, 7, 8, 13);
        quarter_round(w, 3, 4, 9, 14);
    }

    for (mixed, original) in w.iter_mut().zip(state.words.iter()) {
        *mixed = mixed.wrapping_add(*original);
    }
    words::store_block(w, out);

    state.words[COUNTER_WORD] = state.words[COUNTER_WORD].wrapping_add(1);
}

/// XOR whole keystream blocks into `data`
///
/// Only the leading `data.len() - data.len() % 64` bytes are touched; that
/// count is returned. The counter advances once per block.
///
/// This is the batch path: an accelerated variant must keep exactly these
/// inputs, outputs and counter semantics.
pub(crate) fn xor_blocks(state: &mut ChaChaState, rounds: usize, data: &mut [u8]) -> usize {
    let mut block = Zeroizing::new([0u8; CHACHA_BLOCK_SIZE]);
    let mut processed = 0;

    for chunk in data.chunks_exact_mut(CHACHA_BLOCK_SIZE) {
        generate(state, rounds, &mut block);
        xor_in_place(chunk, &block[..]);
        processed += CHACHA_BLOCK_SIZE;
    }

    processed
}

/// Produce one 64-byte keystream block from `state` and advance its counter
///
/// Fails with a parameter error if `rounds` is zero or odd.
pub fn keystream_block(
    state: &mut ChaChaState,
    rounds: usize,
    out: &mut [u8; CHACHA_BLOCK_SIZE],
) -> Result<()> {
    validate_rounds(rounds)?;
    generate(state, rounds, out);
    Ok(())
}
