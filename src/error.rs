//! The error type for conversions that can fail in more than one way. Each failure is local and
//! deterministic: the same input always fails the same way, so there's nothing to retry.

use std::error::Error;
use std::fmt;

pub use bound::DomainError;
pub use hex::HexParseError;

/// Anything that can go wrong turning caller input into a color.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ConversionError {
    /// The hex string was malformed.
    Format(HexParseError),
    /// A channel was outside the range of its model.
    Domain(DomainError),
    /// A channel array had neither the model's number of channels nor one more for alpha.
    Arity {
        /// The number of channels in the model, without alpha.
        expected: usize,
        /// The number of values given.
        found: usize,
    },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ConversionError::Format(ref e) => write!(f, "invalid hex color: {}", e),
            ConversionError::Domain(ref e) => write!(f, "invalid channel: {}", e),
            ConversionError::Arity { expected, found } => write!(
                f,
                "expected {} channels, or {} with alpha, but got {}",
                expected,
                expected + 1,
                found
            ),
        }
    }
}

impl Error for ConversionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            ConversionError::Format(ref e) => Some(e),
            ConversionError::Domain(ref e) => Some(e),
            ConversionError::Arity { .. } => None,
        }
    }
}

impl From<HexParseError> for ConversionError {
    fn from(e: HexParseError) -> ConversionError {
        ConversionError::Format(e)
    }
}

impl From<DomainError> for ConversionError {
    fn from(e: DomainError) -> ConversionError {
        ConversionError::Domain(e)
    }
}
