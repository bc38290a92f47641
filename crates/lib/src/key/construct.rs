//! Key constructors.
//!
//! Single-key constructors ([`Keyspace::between`], [`Keyspace::before`],
//! [`Keyspace::after`]) work by direct midpoint arithmetic on the symbols. Bulk
//! constructors ([`Keyspace::initial`], [`Keyspace::n_between`]) delegate to the
//! code generator so that a whole batch comes out short and evenly spaced.

use super::{KeyError, OrderKey};
use crate::generate::generate;
use crate::keyspace::Keyspace;

/// Symbols strictly before `code`, or `None` if `code` is all zeros.
fn before_code(keyspace: &Keyspace, code: &[u8]) -> Option<Vec<u8>> {
    let i = code.iter().position(|&symbol| symbol != 0)?;
    let half = code[i] / 2;

    let mut out = Vec::with_capacity(i + 2);
    out.extend_from_slice(&code[..i]);
    out.push(half);
    if half == 0 {
        out.push(keyspace.magic_middle());
    }
    Some(out)
}

/// Symbols strictly after `code`.
fn after_code(keyspace: &Keyspace, code: &[u8]) -> Vec<u8> {
    let max = keyspace.max_symbol();
    match code.iter().position(|&symbol| symbol < max) {
        Some(i) => {
            let symbol = code[i];
            let mut out = Vec::with_capacity(i + 1);
            out.extend_from_slice(&code[..i]);
            out.push(symbol + (max - symbol).div_ceil(2));
            out
        }
        // Saturated at the top: grow instead of failing
        None => {
            let mut out = Vec::with_capacity(code.len() + 1);
            out.extend_from_slice(code);
            out.push(keyspace.magic_middle());
            out
        }
    }
}

/// Symbols strictly between `start` and `end`. Requires `start < end`.
fn between_code(keyspace: &Keyspace, start: &[u8], end: &[u8]) -> Vec<u8> {
    match start.iter().zip(end).position(|(a, b)| a != b) {
        Some(i) => {
            let mid = ((u16::from(start[i]) + u16::from(end[i])) / 2) as u8;
            if mid != start[i] {
                let mut out = start[..i].to_vec();
                out.push(mid);
                out
            } else {
                // Adjacent symbols: stay on start's branch and go past its tail
                let mut out = start[..=i].to_vec();
                out.extend(after_code(keyspace, &start[i + 1..]));
                out
            }
        }
        None => {
            // `start` is a strict prefix of `end`; the tail of `end` is non-zero
            let i = start.len();
            let mut out = start.to_vec();
            out.extend(before_code(keyspace, &end[i..]).unwrap_or_default());
            out
        }
    }
}

impl Keyspace {
    /// Validates a `start < end` range, where `start` may be absent or the sentinel.
    fn check_range(&self, start: Option<&OrderKey>, end: &OrderKey) -> Result<(), KeyError> {
        if let Some(start) = start {
            self.check(start)?;
        }
        self.check(end)?;
        if end.is_sentinel() {
            return Err(KeyError::BeforeSentinel);
        }
        match start {
            Some(start) if start >= end => Err(KeyError::InvalidBounds {
                start: start.to_string(),
                end: end.to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// Returns a key strictly between `start` and `end`.
    ///
    /// Prefer [`Keyspace::n_between`], which keeps batches evenly spaced.
    pub fn between(&self, start: &OrderKey, end: &OrderKey) -> Result<OrderKey, KeyError> {
        self.check_range(Some(start), end)?;
        self.make_key(between_code(self, start.as_bytes(), end.as_bytes()))
    }

    /// Returns the shortest key before `other`, closest to half of it.
    pub fn before(&self, other: &OrderKey) -> Result<OrderKey, KeyError> {
        self.check(other)?;
        let code = before_code(self, other.as_bytes()).ok_or(KeyError::BeforeSentinel)?;
        self.make_key(code)
    }

    /// Returns a key after `other`. This never fails for lack of room: a key made
    /// only of maximal symbols is extended by one symbol.
    pub fn after(&self, other: &OrderKey) -> Result<OrderKey, KeyError> {
        self.check(other)?;
        self.make_key(after_code(self, other.as_bytes()))
    }

    /// Returns `n` evenly spread, shortest possible keys for a new sequence.
    pub fn initial(&self, n: usize) -> Result<Vec<OrderKey>, KeyError> {
        generate(self, n, &[], None, &[])
            .into_iter()
            .map(|code| self.make_key(code))
            .collect()
    }

    /// Returns `n` increasing keys strictly between `start` and `end`.
    ///
    /// A missing boundary leaves that end of the range open; the zero sentinel is
    /// accepted as an (equivalent) open `start`. The keys are as short as possible,
    /// then as evenly spaced as possible.
    pub fn n_between(
        &self,
        n: usize,
        start: Option<&OrderKey>,
        end: Option<&OrderKey>,
    ) -> Result<Vec<OrderKey>, KeyError> {
        let start_bytes = start.map(OrderKey::as_bytes).unwrap_or_default();

        let prefix_len = match end {
            Some(end) => {
                self.check_range(start, end)?;
                start_bytes
                    .iter()
                    .zip(end.as_bytes())
                    .take_while(|(a, b)| a == b)
                    .count()
            }
            None => {
                if let Some(start) = start {
                    self.check(start)?;
                }
                0
            }
        };

        generate(
            self,
            n,
            &start_bytes[prefix_len..],
            end.map(|end| &end.as_bytes()[prefix_len..]),
            &start_bytes[..prefix_len],
        )
        .into_iter()
        .map(|code| self.make_key(code))
        .collect()
    }
}

impl OrderKey {
    /// Returns a key strictly between `start` and `end` in the default keyspace.
    ///
    /// # Examples
    ///
    /// ```
    /// use orderkey::OrderKey;
    ///
    /// let key = OrderKey::between(&OrderKey::new(vec![10]), &OrderKey::new(vec![20])).unwrap();
    /// assert_eq!(key, OrderKey::new(vec![15]));
    ///
    /// let key = OrderKey::between(&OrderKey::new(vec![10]), &OrderKey::new(vec![11])).unwrap();
    /// assert_eq!(key, OrderKey::new(vec![10, 128]));
    /// ```
    pub fn between(start: &OrderKey, end: &OrderKey) -> Result<OrderKey, KeyError> {
        Keyspace::DEFAULT.between(start, end)
    }

    /// Returns a key before `other` in the default keyspace.
    ///
    /// # Examples
    ///
    /// ```
    /// use orderkey::{KeyError, OrderKey};
    ///
    /// assert_eq!(OrderKey::before(&OrderKey::new(vec![10])).unwrap(), OrderKey::new(vec![5]));
    /// assert_eq!(OrderKey::before(&OrderKey::new(vec![1])).unwrap(), OrderKey::new(vec![0, 128]));
    /// assert_eq!(OrderKey::before(&OrderKey::SENTINEL), Err(KeyError::BeforeSentinel));
    /// ```
    pub fn before(other: &OrderKey) -> Result<OrderKey, KeyError> {
        Keyspace::DEFAULT.before(other)
    }

    /// Returns a key after `other` in the default keyspace.
    ///
    /// # Examples
    ///
    /// ```
    /// use orderkey::OrderKey;
    ///
    /// assert_eq!(OrderKey::after(&OrderKey::new(vec![100])).unwrap(), OrderKey::new(vec![178]));
    /// assert_eq!(OrderKey::after(&OrderKey::new(vec![255])).unwrap(), OrderKey::new(vec![255, 128]));
    /// ```
    pub fn after(other: &OrderKey) -> Result<OrderKey, KeyError> {
        Keyspace::DEFAULT.after(other)
    }

    /// Returns `n` initial keys in the default keyspace.
    pub fn initial(n: usize) -> Result<Vec<OrderKey>, KeyError> {
        Keyspace::DEFAULT.initial(n)
    }

    /// Returns `n` keys between two optional boundaries in the default keyspace.
    pub fn n_between(
        n: usize,
        start: Option<&OrderKey>,
        end: Option<&OrderKey>,
    ) -> Result<Vec<OrderKey>, KeyError> {
        Keyspace::DEFAULT.n_between(n, start, end)
    }
}
