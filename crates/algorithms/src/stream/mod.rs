//! Stream cipher implementations
//!
//! This module provides implementations of stream ciphers, which are symmetric
//! key ciphers that encrypt plaintext by XOR-ing it with a pseudorandom
//! keystream.
//!
//! # Available Stream Ciphers
//!
//! - ChaCha: Bernstein's ChaCha with a configurable even round count
//!
//! # Security Considerations
//!
//! Stream ciphers require unique nonces for each encryption operation with the
//! same key. Reusing a nonce with the same key completely breaks the security
//! of the cipher.

/// ChaCha family of stream cipher implementations
pub mod chacha;

// Re-export commonly used types
pub use chacha::{ChaCha, CHACHA_BLOCK_SIZE, CHACHA_KEY_SIZE, CHACHA_NONCE_SIZE};

use crate::error::Result;

/// Common trait for stream cipher implementations
pub trait StreamCipher {
    /// The key size in bytes
    const KEY_SIZE: usize;

    /// The nonce size in bytes
    const NONCE_SIZE: usize;

    /// The internal block size in bytes (if applicable)
    const BLOCK_SIZE: usize;

    /// Process data in place (encrypts for encryption, decrypts for decryption)
    fn process(&mut self, data: &mut [u8]) -> Result<()>;

    /// Process `src` into `dst`, which must be at least as long as `src`
    fn process_into(&mut self, dst: &mut [u8], src: &[u8]) -> Result<()>;

    /// Encrypt data in place
    fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data)
    }

    /// Decrypt data in place
    fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data)
    }

    /// Write the next `output.len()` keystream bytes into `output`
    fn keystream(&mut self, output: &mut [u8]) -> Result<()> {
        output.fill(0);
        self.process(output)
    }
}

impl StreamCipher for ChaCha {
    const KEY_SIZE: usize = CHACHA_KEY_SIZE;
    const NONCE_SIZE: usize = CHACHA_NONCE_SIZE;
    const BLOCK_SIZE: usize = CHACHA_BLOCK_SIZE;

    fn process(&mut self, data: &mut [u8]) -> Result<()> {
        self.apply_key_stream(data);
        Ok(())
    }

    fn process_into(&mut self, dst: &mut [u8], src: &[u8]) -> Result<()> {
        self.xor_key_stream(dst, src)
    }
}
