//! Authenticated Encryption with Associated Data (AEAD)
//!
//! AEAD constructions over a caller-supplied block cipher. Each implements
//! [`AuthenticatedCipher`](cipherkit_api::AuthenticatedCipher) so it can be
//! used through the public API with the API error type.

pub mod eax;

pub use eax::Eax;
