//! Error type definitions for field, curve and signature operations

use num_bigint::BigUint;
use thiserror::Error as ThisError;

/// Primary error type for k1curve operations
///
/// An invalid signature is deliberately absent: verification reports a
/// rejected signature as `false`, never as an error value.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Two field elements with different moduli were combined
    #[error("cross-field operation: modulus {left:X} does not match modulus {right:X}")]
    CrossField {
        /// Modulus of the left-hand operand
        left: BigUint,
        /// Modulus of the right-hand operand
        right: BigUint,
    },

    /// The multiplicative inverse of zero was requested
    #[error("{context}: zero has no multiplicative inverse")]
    ZeroInverse { context: &'static str },

    /// A private key or explicit scalar lies outside `[1, n-1]`
    #[error("{context}: scalar must lie in [1, n-1]")]
    OutOfRangeScalar { context: &'static str },

    /// Coordinates that do not describe a point of the curve
    #[error("invalid point in {context}: {message}")]
    InvalidPoint {
        context: &'static str,
        message: String,
    },

    /// Invalid curve or domain parameter
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Malformed encoded input (DER signatures, SEC1 points)
    #[error("encoding error in {context}: {message}")]
    Encoding {
        context: &'static str,
        message: String,
    },
}

/// Result type for k1curve operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an `InvalidParameter` error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create an `InvalidPoint` error
    pub fn point(context: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidPoint {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create an `Encoding` error
    pub fn encoding(context: &'static str, message: impl Into<String>) -> Self {
        Error::Encoding {
            context,
            message: message.into(),
        }
    }

    /// Replace the context of an existing error
    ///
    /// `CrossField` carries no context and is returned unchanged.
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::CrossField { .. } => self,
            Self::ZeroInverse { .. } => Self::ZeroInverse { context },
            Self::OutOfRangeScalar { .. } => Self::OutOfRangeScalar { context },
            Self::InvalidPoint { message, .. } => Self::InvalidPoint { context, message },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::Encoding { message, .. } => Self::Encoding { context, message },
        }
    }
}
