//!
//! orderkey: immutable order keys for sequences that are rearranged without renumbering.
//! This library provides the key algebra and a reorderable container built on top of it.
//!
//! ## Core Concepts
//!
//! * **Order keys (`key::OrderKey`)**: Immutable symbol sequences compared in dictionary order.
//!   A new key can always be allocated between two keys, before any non-zero key, or after any key.
//! * **Keyspaces (`keyspace::Keyspace`)**: The alphabet keys are drawn from and the optional
//!   fixed width keys are bound to. Bound keys can be concatenated into hierarchical keys.
//! * **Distribution (`distribute`)**: Integer spreading rules deciding which symbols receive keys.
//! * **Generation (`generate`)**: The recursive allocator producing short, evenly spaced batches.
//! * **Containers (`container::Reorderable`)**: Ordered collections of elements keyed by order keys,
//!   with a hash-map backed reference implementation (`container::MappingContainer`).
//!
//! ## Example
//!
//! ```
//! use orderkey::OrderKey;
//!
//! let keys = OrderKey::initial(3)?;
//! assert_eq!(keys[1].as_bytes(), &[128]);
//!
//! let inserted = OrderKey::n_between(2, Some(&keys[0]), Some(&keys[1]))?;
//! assert!(keys[0] < inserted[0] && inserted[0] < inserted[1] && inserted[1] < keys[1]);
//! # Ok::<(), orderkey::Error>(())
//! ```

pub mod constants;
pub mod container;
pub mod distribute;
pub mod generate;
pub mod key;
pub mod keyspace;

/// Re-export the key types for easier access.
pub use key::{KeyError, OrderKey};
/// Re-export the keyspace configuration.
pub use keyspace::Keyspace;

/// Result type used throughout the orderkey library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the orderkey library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured key construction errors from the key module
    #[error(transparent)]
    Key(key::KeyError),

    /// Structured container errors from the container module
    #[error(transparent)]
    Container(container::ContainerError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Key(_) => "key",
            Error::Container(_) => "container",
        }
    }

    /// Check if this error indicates an element was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Container(container_err) => container_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error is key-related.
    pub fn is_key_error(&self) -> bool {
        matches!(self, Error::Key(_))
    }

    /// Check if this error is a bound width violation.
    pub fn is_size_exceeded(&self) -> bool {
        match self {
            Error::Key(key_err) => key_err.is_size_exceeded(),
            _ => false,
        }
    }

    /// Check if this error comes from invalid arguments rather than missing state.
    pub fn is_validation_error(&self) -> bool {
        match self {
            Error::Key(key_err) => key_err.is_invalid_construction() || key_err.is_alphabet_error(),
            Error::Container(container_err) => container_err.is_invalid_request(),
        }
    }

    /// Check if this error is container-related.
    pub fn is_container_error(&self) -> bool {
        matches!(self, Error::Container(_))
    }
}
