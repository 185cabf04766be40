//! Cryptographic primitives for the cipherkit library
//!
//! This crate provides the ChaCha stream cipher family and, on top of a
//! caller-supplied block cipher, counter mode, CMAC and the EAX
//! authenticated encryption mode. The stream ciphers work in `no_std`
//! without an allocator; the block-cipher constructions need `alloc`
//! because their buffers are sized by the cipher at run time.
//!
//! # Security Features
//!
//! - Key material, keystream and intermediate MAC values are zeroized when
//!   dropped
//! - Tags are compared in constant time
//! - Decryption output is only produced after the tag has verified

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Stream cipher implementations
#[cfg(feature = "stream")]
pub mod stream;
#[cfg(feature = "stream")]
pub use stream::{ChaCha, StreamCipher};

// Block cipher abstraction and modes
#[cfg(feature = "block")]
pub mod block;
#[cfg(feature = "block")]
pub use block::{BlockCipher, Ctr};

// MAC implementations
#[cfg(feature = "mac")]
pub mod mac;
#[cfg(feature = "mac")]
pub use mac::{Cmac, Mac};

// AEAD implementations
#[cfg(feature = "aead")]
pub mod aead;
#[cfg(feature = "aead")]
pub use aead::Eax;
