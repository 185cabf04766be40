//! Trait definitions for cryptographic operations

#[cfg(feature = "alloc")]
pub mod aead;

#[cfg(feature = "alloc")]
pub use aead::AuthenticatedCipher;
