//! Constants used throughout the orderkey library.
//!
//! This module provides central definitions for the default alphabet that order keys
//! are drawn from. A [`Keyspace`](crate::Keyspace) can narrow the alphabet, but never
//! widen it past one byte per symbol.

/// Number of distinct symbols in the default alphabet (one byte per symbol).
pub const TOP_VALUE: u16 = 256;

/// Largest symbol of the default alphabet.
pub const MAX_SYMBOL: u8 = (TOP_VALUE - 1) as u8;

/// Symbol appended when a key cannot be differentiated at its current depth.
pub const MAGIC_MIDDLE: u8 = (TOP_VALUE / 2) as u8;

/// Smallest alphabet a keyspace may be configured with.
pub const MIN_TOP_VALUE: u16 = 2;
