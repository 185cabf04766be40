//! Error handling for cryptographic primitives

use core::fmt;

use cipherkit_api::{Error as CoreError, Result as CoreResult};

/// The error type for cryptographic primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Authentication failure (e.g., AEAD tag verification)
    Authentication {
        /// Algorithm that failed authentication
        algorithm: &'static str,
    },

    /// The block cipher's block size is not usable by a construction
    UnsupportedCipher {
        /// Construction that rejected the cipher
        algorithm: &'static str,
        /// Block size of the rejected cipher in bytes
        block_size: usize,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for cryptographic primitives operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            },
            Error::Length { context, expected, actual } => {
                write!(f, "Invalid length for {}: expected {}, got {}",
                    context, expected, actual)
            },
            Error::Authentication { algorithm } => {
                write!(f, "Authentication failed for {}", algorithm)
            },
            Error::UnsupportedCipher { algorithm, block_size } => {
                write!(f, "{} does not support a block size of {} bytes",
                    algorithm, block_size)
            },
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::invalid_parameter(name, reason),
            Error::Length { context, expected, actual } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Authentication { algorithm } => CoreError::AuthenticationFailed {
                context: algorithm,
            },
            Error::UnsupportedCipher { algorithm, block_size } => CoreError::UnsupportedCipher {
                context: algorithm,
                block_size,
            },
        }
    }
}

/// Convert a primitives result to a core result with additional context
///
/// Parameter errors keep their parameter name as context, since that is the
/// more useful label for the caller.
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| match e {
        Error::Parameter { .. } => CoreError::from(e),
        other => CoreError::from(other).with_context(ctx),
    })
}

pub mod validate;
