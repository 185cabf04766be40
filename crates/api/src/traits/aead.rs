//! Authenticated encryption with associated data

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::Result;

/// An AEAD cipher that seals plaintext into `ciphertext || tag` and opens it
/// again, authenticating associated data along the way.
///
/// Implementations may reuse internal scratch state between calls, which is
/// why both operations take `&mut self`.
pub trait AuthenticatedCipher {
    /// Algorithm identifier used in error contexts
    const ALGORITHM_ID: &'static str;

    /// Size in bytes of the nonce accepted by `seal` and `open`
    fn nonce_size(&self) -> usize;

    /// Number of bytes `seal` adds to the plaintext length
    fn overhead(&self) -> usize;

    /// Encrypt and authenticate `plaintext`, authenticating `associated_data`
    ///
    /// Returns `ciphertext || tag`.
    fn seal(&mut self, nonce: &[u8], plaintext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>>;

    /// Verify and decrypt `ciphertext || tag`
    ///
    /// Fails with [`Error::AuthenticationFailed`](crate::Error::AuthenticationFailed)
    /// if the tag does not verify; no plaintext is returned in that case.
    fn open(&mut self, nonce: &[u8], ciphertext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>>;
}
