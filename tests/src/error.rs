//! Structured error types for vector-driven tests

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VectorError {
    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("crypto operation failed: {0}")]
    Crypto(String),

    #[error("unsupported key size: {0} bytes")]
    KeySize(usize),

    #[error("mismatch - expected: {expected}, got: {actual}")]
    Mismatch { expected: String, actual: String },
}

pub type Result<T> = std::result::Result<T, VectorError>;

impl From<cipherkit_algorithms::error::Error> for VectorError {
    fn from(e: cipherkit_algorithms::error::Error) -> Self {
        VectorError::Crypto(e.to_string())
    }
}

impl From<cipherkit_api::Error> for VectorError {
    fn from(e: cipherkit_api::Error) -> Self {
        VectorError::Crypto(e.to_string())
    }
}
