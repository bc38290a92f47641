//! Order keys: immutable, lexicographically comparable positions.
//!
//! An [`OrderKey`] is a sequence of symbols compared in dictionary order. New keys
//! can always be allocated between two existing ones, before any non-zero key, and
//! after any key, so elements ordered by their keys never have to be renumbered.
//!
//! Constructors should be used with this order of preference:
//! - [`OrderKey::n_between`] when inserting one or more values between two existing
//!   values (or at an open end)
//! - [`OrderKey::before`] and [`OrderKey::after`] for a single value next to an
//!   existing one
//! - [`OrderKey::initial`] for the first values of a sequence
//!
//! # Examples
//!
//! ```
//! use orderkey::OrderKey;
//!
//! let keys = OrderKey::initial(3).unwrap();
//! let middle = OrderKey::between(&keys[0], &keys[1]).unwrap();
//!
//! assert!(keys[0] < middle);
//! assert!(middle < keys[1]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

mod bound;
mod construct;
pub mod errors;

pub use errors::KeyError;

/// An immutable position in an unbounded, totally ordered keyspace.
///
/// Keys are normalized on construction by stripping trailing zero symbols, which
/// carry no ordering information. Equality, ordering and hashing only look at the
/// normalized symbols; the optional bound width (see [`OrderKey::bound`]) is
/// carried alongside but never compared.
///
/// The empty key is the zero sentinel: it sorts before every other key and can be
/// used as a comparison endpoint, but it is not a valid allocated key because
/// nothing can ever be placed before it.
#[derive(Clone)]
pub struct OrderKey {
    symbols: Vec<u8>,
    max_size: Option<usize>,
}

impl OrderKey {
    /// The zero sentinel, smaller than every allocatable key.
    pub const SENTINEL: OrderKey = OrderKey {
        symbols: Vec::new(),
        max_size: None,
    };

    /// Creates an unbound key from raw symbols, stripping trailing zeros.
    ///
    /// A value that normalizes to the zero sentinel is still returned, but a
    /// warning is logged since such a key must never be used as a live position.
    ///
    /// # Examples
    ///
    /// ```
    /// use orderkey::OrderKey;
    ///
    /// assert_eq!(OrderKey::new(vec![4, 2, 0, 0]), OrderKey::new(vec![4, 2]));
    /// assert!(OrderKey::new(vec![0, 0]).is_sentinel());
    /// ```
    pub fn new(symbols: impl Into<Vec<u8>>) -> Self {
        Self::normalized(symbols.into(), None)
    }

    pub(crate) fn normalized(mut symbols: Vec<u8>, max_size: Option<usize>) -> Self {
        while symbols.last() == Some(&0) {
            symbols.pop();
        }
        if symbols.is_empty() {
            tracing::warn!(
                "Order key resolves to the zero sentinel, which is not a valid position"
            );
        }
        Self { symbols, max_size }
    }

    /// Returns true if this key is the zero sentinel.
    pub fn is_sentinel(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The normalized symbols, directly usable as a byte-ordered sort key.
    pub fn as_bytes(&self) -> &[u8] {
        &self.symbols
    }

    /// Number of normalized symbols.
    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// Consumes the key, returning its normalized symbols.
    pub fn into_bytes(self) -> Vec<u8> {
        self.symbols
    }
}

impl PartialEq for OrderKey {
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols
    }
}

impl Eq for OrderKey {}

impl Hash for OrderKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbols.hash(state);
    }
}

impl PartialOrd for OrderKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.symbols.cmp(&other.symbols)
    }
}

impl AsRef<[u8]> for OrderKey {
    fn as_ref(&self) -> &[u8] {
        &self.symbols
    }
}

impl From<OrderKey> for Vec<u8> {
    fn from(key: OrderKey) -> Self {
        key.symbols
    }
}

impl fmt::Debug for OrderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max_size {
            Some(max_size) => write!(f, "OrderKey({:?}, max_size={max_size})", self.symbols),
            None => write!(f, "OrderKey({:?})", self.symbols),
        }
    }
}

impl fmt::Display for OrderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.symbols))
    }
}

// Keys travel as plain byte strings; the bound width is a property of the
// keyspace that produced them and is not serialized.
impl serde::Serialize for OrderKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_bytes(&self.symbols)
    }
}

impl<'de> serde::Deserialize<'de> for OrderKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bytes = serde_bytes::ByteBuf::deserialize(deserializer)?;
        Ok(OrderKey::new(bytes.into_vec()))
    }
}
