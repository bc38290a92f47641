//! Keyspace configuration.
//!
//! A [`Keyspace`] fixes the alphabet order keys are drawn from and, optionally, the
//! fixed width every key it produces is bound to. All key constructors are available
//! as methods on a keyspace; the associated functions on
//! [`OrderKey`](crate::OrderKey) use [`Keyspace::default`].
//!
//! # Configuration
//!
//! Keyspaces are plain serde data, so an embedding application can keep them next to
//! the rest of its settings:
//!
//! ```
//! use orderkey::Keyspace;
//!
//! let keyspace: Keyspace = serde_json::from_str(r#"{"top_value": 16, "max_size": 4}"#).unwrap();
//! assert_eq!(keyspace.max_symbol(), 15);
//! assert_eq!(keyspace.max_size(), Some(4));
//!
//! // Missing fields fall back to the defaults
//! let keyspace: Keyspace = serde_json::from_str("{}").unwrap();
//! assert_eq!(keyspace, Keyspace::default());
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::{MIN_TOP_VALUE, TOP_VALUE};
use crate::key::{KeyError, OrderKey};

/// Alphabet and width settings for order key allocation.
///
/// The default keyspace uses one full byte per symbol (`top_value = 256`) and
/// produces unbound keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "KeyspaceConfig")]
pub struct Keyspace {
    top_value: u16,
    max_size: Option<usize>,
}

/// Unvalidated on-disk shape of a [`Keyspace`].
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
struct KeyspaceConfig {
    top_value: u16,
    max_size: Option<usize>,
}

impl Default for KeyspaceConfig {
    fn default() -> Self {
        Self {
            top_value: TOP_VALUE,
            max_size: None,
        }
    }
}

impl TryFrom<KeyspaceConfig> for Keyspace {
    type Error = KeyError;

    fn try_from(config: KeyspaceConfig) -> Result<Self, Self::Error> {
        let keyspace = Keyspace::new(config.top_value)?;
        Ok(match config.max_size {
            Some(max_size) => keyspace.with_max_size(max_size),
            None => keyspace,
        })
    }
}

impl Keyspace {
    /// The byte-per-symbol keyspace with unbound keys.
    pub const DEFAULT: Keyspace = Keyspace {
        top_value: TOP_VALUE,
        max_size: None,
    };

    /// Creates a keyspace over the alphabet `[0, top_value)`.
    ///
    /// Symbols are stored one per byte, so `top_value` must lie in `[2, 256]`.
    pub fn new(top_value: u16) -> Result<Self, KeyError> {
        if !(MIN_TOP_VALUE..=TOP_VALUE).contains(&top_value) {
            return Err(KeyError::InvalidKeyspace { top_value });
        }
        Ok(Self {
            top_value,
            max_size: None,
        })
    }

    /// Returns a copy of this keyspace whose keys are bound to `max_size` symbols.
    pub fn with_max_size(self, max_size: usize) -> Self {
        Self {
            max_size: Some(max_size),
            ..self
        }
    }

    /// Returns a copy of this keyspace producing unbound keys.
    pub fn unbound(self) -> Self {
        Self {
            max_size: None,
            ..self
        }
    }

    /// Number of symbols in the alphabet.
    pub fn top_value(&self) -> u16 {
        self.top_value
    }

    /// Largest symbol of the alphabet.
    pub fn max_symbol(&self) -> u8 {
        (self.top_value - 1) as u8
    }

    /// Symbol appended when a key needs one more level of depth.
    pub fn magic_middle(&self) -> u8 {
        (self.top_value / 2) as u8
    }

    /// Width keys produced by this keyspace are bound to, if any.
    pub fn max_size(&self) -> Option<usize> {
        self.max_size
    }

    /// Checks that every symbol of `key` belongs to this keyspace's alphabet.
    pub fn check(&self, key: &OrderKey) -> Result<(), KeyError> {
        match key
            .as_bytes()
            .iter()
            .find(|&&symbol| u16::from(symbol) >= self.top_value)
        {
            Some(&symbol) => Err(KeyError::SymbolOutOfRange {
                symbol,
                top_value: self.top_value,
            }),
            None => Ok(()),
        }
    }

    /// Builds a key from freshly allocated symbols, applying this keyspace's bound.
    pub(crate) fn make_key(&self, symbols: Vec<u8>) -> Result<OrderKey, KeyError> {
        match self.max_size {
            Some(max_size) => OrderKey::bound(symbols, max_size),
            None => Ok(OrderKey::new(symbols)),
        }
    }
}

impl Default for Keyspace {
    fn default() -> Self {
        Self::DEFAULT
    }
}
