//! Fixed-width ("bound") keys and concatenation.
//!
//! A bound key knows the maximum number of symbols it may hold. Padding a bound key
//! with zeros up to that width does not change its position, which makes it safe to
//! append another key after it: every key of the left segment still sorts before
//! every extension of a larger left segment. This is how hierarchical keys are
//! built, one fixed-width segment per level.

use super::{KeyError, OrderKey};

impl OrderKey {
    /// Creates a key bound to at most `max_size` symbols.
    ///
    /// The width is checked against the raw input, before trailing zeros are
    /// stripped.
    ///
    /// # Examples
    ///
    /// ```
    /// use orderkey::{KeyError, OrderKey};
    ///
    /// let key = OrderKey::bound(vec![7, 1], 2).unwrap();
    /// assert_eq!(key.max_size(), Some(2));
    ///
    /// assert_eq!(
    ///     OrderKey::bound(vec![7, 1, 0], 2),
    ///     Err(KeyError::SizeExceeded { len: 3, max_size: 2 })
    /// );
    /// ```
    pub fn bound(symbols: impl Into<Vec<u8>>, max_size: usize) -> Result<Self, KeyError> {
        let symbols = symbols.into();
        if symbols.len() > max_size {
            return Err(KeyError::SizeExceeded {
                len: symbols.len(),
                max_size,
            });
        }
        Ok(Self::normalized(symbols, Some(max_size)))
    }

    /// Returns this key bound to `max_size` symbols.
    pub fn with_max_size(self, max_size: usize) -> Result<Self, KeyError> {
        if self.symbols.len() > max_size {
            return Err(KeyError::SizeExceeded {
                len: self.symbols.len(),
                max_size,
            });
        }
        Ok(Self {
            max_size: Some(max_size),
            ..self
        })
    }

    /// Returns this key without a bound.
    pub fn unbound(self) -> Self {
        Self {
            max_size: None,
            ..self
        }
    }

    /// The width this key is bound to, if any.
    pub fn max_size(&self) -> Option<usize> {
        self.max_size
    }

    /// Returns true if this key carries a bound width.
    pub fn is_bound(&self) -> bool {
        self.max_size.is_some()
    }

    /// Appends `other` after this key, padded to its bound width.
    ///
    /// The left operand must be bound. The result is bound to the sum of both widths
    /// when `other` is bound too, and unbound otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use orderkey::OrderKey;
    ///
    /// let parent = OrderKey::bound(vec![3], 2).unwrap();
    /// let child = OrderKey::bound(vec![9], 2).unwrap();
    ///
    /// let path = parent.concat(&child).unwrap();
    /// assert_eq!(path.as_bytes(), &[3, 0, 9]);
    /// assert_eq!(path.max_size(), Some(4));
    /// assert!(parent < path);
    /// ```
    pub fn concat(&self, other: &OrderKey) -> Result<OrderKey, KeyError> {
        let width = self.max_size.ok_or(KeyError::UnboundConcat)?;

        let mut symbols = Vec::with_capacity(width + other.symbols.len());
        symbols.extend_from_slice(&self.symbols);
        symbols.resize(width, 0);
        symbols.extend_from_slice(&other.symbols);

        match other.max_size {
            Some(other_width) => OrderKey::bound(symbols, width + other_width),
            None => Ok(OrderKey::new(symbols)),
        }
    }
}
