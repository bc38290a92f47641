//! Error types for order key construction.
//!
//! Every variant describes a programmer error detected synchronously while building
//! a key. None of them leave anything half-built behind: a constructor either returns
//! a complete key or one of these errors.

use thiserror::Error;

/// Structured error types for order key construction.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// Nothing can be allocated before the all-zero sentinel
    #[error("Cannot create an order key before the zero sentinel")]
    BeforeSentinel,

    /// The lower boundary is not strictly before the upper boundary
    #[error("Invalid key bounds: start {start} is not before end {end}")]
    InvalidBounds { start: String, end: String },

    /// A bound key received more symbols than its declared width
    #[error("Order key of {len} symbols exceeds its bound of {max_size}")]
    SizeExceeded { len: usize, max_size: usize },

    /// A key contains a symbol outside the keyspace alphabet
    #[error("Symbol {symbol} is outside the alphabet of {top_value} symbols")]
    SymbolOutOfRange { symbol: u8, top_value: u16 },

    /// A keyspace was configured with an unusable alphabet size
    #[error("Invalid keyspace alphabet size: {top_value}")]
    InvalidKeyspace { top_value: u16 },

    /// Concatenation needs a bound left operand to know how far to pad it
    #[error("Cannot concatenate onto an unbound order key")]
    UnboundConcat,
}

impl KeyError {
    /// Check if this error comes from an invalid key construction request
    pub fn is_invalid_construction(&self) -> bool {
        matches!(
            self,
            KeyError::BeforeSentinel | KeyError::InvalidBounds { .. }
        )
    }

    /// Check if this error is a bound width violation
    pub fn is_size_exceeded(&self) -> bool {
        matches!(self, KeyError::SizeExceeded { .. })
    }

    /// Check if this error is related to the keyspace alphabet
    pub fn is_alphabet_error(&self) -> bool {
        matches!(
            self,
            KeyError::SymbolOutOfRange { .. } | KeyError::InvalidKeyspace { .. }
        )
    }
}

// Conversion from KeyError to the main Error type
impl From<KeyError> for crate::Error {
    fn from(err: KeyError) -> Self {
        crate::Error::Key(err)
    }
}
