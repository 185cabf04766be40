//! # cipherkit
//!
//! The ChaCha stream cipher family and EAX authenticated encryption over
//! any block cipher you bring.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! cipherkit = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support, implies `alloc`
//! - `alloc`: counter mode, CMAC and EAX, whose buffers are sized by the
//!   block cipher at run time
//!
//! Without either feature only the ChaCha stream ciphers are available.
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`cipherkit-api`]: Caller-facing error type and the AEAD trait
//! - [`cipherkit-internal`]: Constant-time helpers
//! - [`cipherkit-algorithms`]: ChaCha, counter mode, CMAC and EAX

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use cipherkit_algorithms as algorithms;
pub use cipherkit_api as api;
pub use cipherkit_internal as internal;

/// Common imports for cipherkit users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Stream ciphers
    pub use crate::algorithms::stream::chacha::{
        ChaCha, CHACHA12_ROUNDS, CHACHA20_ROUNDS, CHACHA8_ROUNDS, CHACHA_KEY_SIZE,
        CHACHA_NONCE_SIZE,
    };
    pub use crate::algorithms::stream::StreamCipher;

    // Block-cipher constructions
    #[cfg(feature = "alloc")]
    pub use crate::algorithms::{BlockCipher, Cmac, Ctr, Eax, Mac};
    #[cfg(feature = "alloc")]
    pub use crate::api::AuthenticatedCipher;

    // Re-export zeroize for users who hold their own secrets
    pub use zeroize::{Zeroize, Zeroizing};
}
