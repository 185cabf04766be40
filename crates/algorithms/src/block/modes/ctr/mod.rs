//! Counter (CTR) mode over a full-width counter register
//!
//! Counter mode turns a block cipher into a stream cipher by encrypting
//! successive values of a counter and XORing the result with the data.
//!
//! Unlike the NIST SP 800-38A nonce‖counter layout, the whole block is the
//! counter here: it is incremented as one big-endian integer, carrying from
//! the last byte towards the first. This is the layout EAX requires, where
//! the initial register is an OMAC value rather than a structured nonce.

use alloc::vec;
use alloc::vec::Vec;

use cipherkit_internal::constant_time::xor_in_place;
use zeroize::Zeroizing;

use crate::block::BlockCipher;
use crate::error::{validate, Result};

/// Counter mode keyed by a borrowed block cipher
///
/// The register is never reset internally. Callers seed it with
/// [`set_counter`](Ctr::set_counter) before each message.
pub struct Ctr<'a, B: BlockCipher + ?Sized> {
    cipher: &'a B,
    counter: Zeroizing<Vec<u8>>,
    keystream: Zeroizing<Vec<u8>>,
}

impl<'a, B: BlockCipher + ?Sized> Ctr<'a, B> {
    /// Creates a CTR instance with an all-zero counter register
    pub fn new(cipher: &'a B) -> Result<Self> {
        let block_size = cipher.block_size();
        validate::parameter(
            block_size > 0,
            "block_size",
            "Block cipher must have a non-zero block size",
        )?;

        Ok(Self {
            cipher,
            counter: Zeroizing::new(vec![0u8; block_size]),
            keystream: Zeroizing::new(vec![0u8; block_size]),
        })
    }

    /// Block size of the underlying cipher
    pub fn block_size(&self) -> usize {
        self.counter.len()
    }

    /// Load the counter register
    ///
    /// `counter` must be exactly one block long.
    pub fn set_counter(&mut self, counter: &[u8]) -> Result<()> {
        validate::length("CTR counter block", counter.len(), self.counter.len())?;
        self.counter.copy_from_slice(counter);
        Ok(())
    }

    /// Current counter register
    pub fn counter(&self) -> &[u8] {
        &self.counter
    }

    /// Encrypt the current register into the keystream buffer
    fn refill(&mut self) -> Result<()> {
        self.keystream.copy_from_slice(&self.counter);
        self.cipher.encrypt_block(&mut self.keystream[..])
    }

    /// Increment the register as a big-endian integer spanning the block
    fn increment_counter(&mut self) {
        for byte in self.counter.iter_mut().rev() {
            *byte = byte.wrapping_add(1);
            if *byte != 0 {
                break;
            }
        }
    }

    /// XOR the keystream into `data` in place
    ///
    /// Each whole block advances the register by one. A trailing partial
    /// block uses a prefix of one more keystream block and leaves the
    /// register on that block.
    pub fn apply_keystream(&mut self, data: &mut [u8]) -> Result<()> {
        let block_size = self.block_size();
        let full = data.len() - data.len() % block_size;

        for chunk in data[..full].chunks_exact_mut(block_size) {
            self.refill()?;
            xor_in_place(chunk, &self.keystream);
            self.increment_counter();
        }

        let tail = &mut data[full..];
        if !tail.is_empty() {
            self.refill()?;
            xor_in_place(tail, &self.keystream);
        }

        Ok(())
    }

    /// XOR `src` with the keystream into `dst[..src.len()]`
    ///
    /// Encryption and decryption are the same operation.
    pub fn xor(&mut self, dst: &mut [u8], src: &[u8]) -> Result<()> {
        validate::min_length("CTR destination", dst.len(), src.len())?;

        let out = &mut dst[..src.len()];
        out.copy_from_slice(src);
        self.apply_keystream(out)
    }

    /// Encrypt a message into a new buffer
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut ciphertext = plaintext.to_vec();
        self.apply_keystream(&mut ciphertext)?;
        Ok(ciphertext)
    }

    /// Decrypt a message into a new buffer
    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.encrypt(ciphertext)
    }
}
