//! Error type definitions for cryptographic operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for cryptographic operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Authentication failed error
    ///
    /// Deliberately carries no detail about why verification failed.
    AuthenticationFailed {
        context: &'static str,
    },

    /// The supplied cipher cannot be used by the requested construction
    UnsupportedCipher {
        context: &'static str,
        block_size: usize,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Build an `InvalidParameter` error
    ///
    /// `message` is kept only when this crate is built with `std`, so
    /// callers need not mirror that feature.
    pub fn invalid_parameter(context: &'static str, message: &'static str) -> Self {
        #[cfg(feature = "std")]
        {
            Self::InvalidParameter {
                context,
                message: String::from(message),
            }
        }
        #[cfg(not(feature = "std"))]
        {
            let _ = message;
            Self::InvalidParameter { context }
        }
    }

    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            #[cfg(feature = "std")]
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { .. } => Self::InvalidParameter { context },
            Self::AuthenticationFailed { .. } => Self::AuthenticationFailed { context },
            Self::UnsupportedCipher { block_size, .. } => Self::UnsupportedCipher {
                context,
                block_size,
            },
        }
    }

    /// Add a message to an existing error (when std is available)
    ///
    /// Only parameter errors carry a message; other variants are returned
    /// unchanged so authentication failures never gain detail.
    #[cfg(feature = "std")]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        match self {
            Self::InvalidParameter { context, .. } => Self::InvalidParameter {
                context,
                message: message.into(),
            },
            other => other,
        }
    }

    /// Whether this error reports a failed tag verification
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, Self::AuthenticationFailed { .. })
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength { context, expected, actual } => {
                write!(f, "{}: invalid length (expected {}, got {})",
                    context, expected, actual)
            },
            #[cfg(feature = "std")]
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            },
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { context } => {
                write!(f, "Invalid parameter: {}", context)
            },
            Self::AuthenticationFailed { context } => {
                write!(f, "Authentication failed: {}", context)
            },
            Self::UnsupportedCipher { context, block_size } => {
                write!(f, "{}: unsupported block size of {} bytes", context, block_size)
            },
        }
    }
}
