//! CMAC / OMAC1 over an arbitrary block cipher
//!
//! NIST SP 800-38B, generalized to every block size that has a published
//! reduction polynomial: 64, 128, 256, 512 and 1024 bits.

use alloc::vec;
use alloc::vec::Vec;

use cipherkit_internal::constant_time::xor_in_place;
use zeroize::Zeroizing;

use super::Mac;
use crate::block::BlockCipher;
use crate::error::{validate, Error, Result};

/// Low bits of the reduction polynomial for a block size, if one exists
fn reduction_constant(block_size: usize) -> Option<u32> {
    match block_size {
        8 => Some(0x1b),
        16 => Some(0x87),
        32 => Some(0x425),
        64 => Some(0x125),
        128 => Some(0x80043),
        _ => None,
    }
}

/// Multiply by x in GF(2^n), branch-free on the secret top bit
fn dbl(block: &mut [u8], poly: u32) {
    let mask = (block[0] >> 7).wrapping_neg();

    let mut carry = 0u8;
    for byte in block.iter_mut().rev() {
        let next = *byte >> 7;
        *byte = (*byte << 1) | carry;
        carry = next;
    }

    let n = block.len();
    for (byte, p) in block[n - 4..].iter_mut().zip(poly.to_be_bytes()) {
        *byte ^= p & mask;
    }
}

/// CMAC keyed by a borrowed block cipher
pub struct Cmac<'a, B: BlockCipher + ?Sized> {
    cipher: &'a B,
    k1: Zeroizing<Vec<u8>>,
    k2: Zeroizing<Vec<u8>>,
    /// CBC chaining value
    state: Zeroizing<Vec<u8>>,
    /// Held-back input, up to one full block
    buffer: Zeroizing<Vec<u8>>,
    buffered: usize,
}

impl<'a, B: BlockCipher + ?Sized> Cmac<'a, B> {
    /// Derive the subkeys and return a MAC with no input absorbed
    pub fn new(cipher: &'a B) -> Result<Self> {
        let block_size = cipher.block_size();
        let poly = reduction_constant(block_size).ok_or(Error::UnsupportedCipher {
            algorithm: "CMAC",
            block_size,
        })?;

        let mut k1 = Zeroizing::new(vec![0u8; block_size]);
        cipher.encrypt_block(&mut k1)?;
        dbl(&mut k1, poly);

        let mut k2 = k1.clone();
        dbl(&mut k2, poly);

        Ok(Self {
            cipher,
            k1,
            k2,
            state: Zeroizing::new(vec![0u8; block_size]),
            buffer: Zeroizing::new(vec![0u8; block_size]),
            buffered: 0,
        })
    }

    /// One-shot tag over `data`
    pub fn compute(cipher: &'a B, data: &[u8]) -> Result<Vec<u8>> {
        let mut mac = Self::new(cipher)?;
        mac.update(data)?;
        mac.finalize()
    }

    /// Finish into a new buffer and reset
    pub fn finalize(&mut self) -> Result<Vec<u8>> {
        let mut tag = vec![0u8; self.output_size()];
        self.finalize_into_reset(&mut tag)?;
        Ok(tag)
    }

    fn absorb_buffer(&mut self) -> Result<()> {
        xor_in_place(&mut self.state, &self.buffer);
        self.cipher.encrypt_block(&mut self.state)
    }
}

impl<B: BlockCipher + ?Sized> Mac for Cmac<'_, B> {
    fn block_size(&self) -> usize {
        self.state.len()
    }

    fn output_size(&self) -> usize {
        self.state.len()
    }

    fn update(&mut self, mut data: &[u8]) -> Result<()> {
        let block_size = self.block_size();

        while !data.is_empty() {
            // A full buffer is only processed once more input shows it is
            // not the last block
            if self.buffered == block_size {
                self.absorb_buffer()?;
                self.buffered = 0;
            }

            let take = (block_size - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];
        }

        Ok(())
    }

    fn finalize_into_reset(&mut self, out: &mut [u8]) -> Result<()> {
        let block_size = self.block_size();
        validate::length("CMAC output", out.len(), block_size)?;

        if self.buffered == block_size {
            xor_in_place(&mut self.buffer, &self.k1);
        } else {
            self.buffer[self.buffered] = 0x80;
            self.buffer[self.buffered + 1..].fill(0);
            xor_in_place(&mut self.buffer, &self.k2);
        }

        let result = self.absorb_buffer();
        if result.is_ok() {
            out.copy_from_slice(&self.state);
        }
        self.reset();
        result
    }

    fn reset(&mut self) {
        self.state.fill(0);
        self.buffer.fill(0);
        self.buffered = 0;
    }
}
