//! Public API traits and types for the cipherkit library
//!
//! This crate provides the caller-facing surface of the cipherkit ecosystem:
//! the error type every operation reports through, and the trait that
//! authenticated ciphers implement.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

#[cfg(feature = "alloc")]
pub use traits::AuthenticatedCipher;
