//! Error types for reorderable container operations.

use thiserror::Error;

/// Structured error types for container operations.
///
/// A container operation that returns one of these errors has not modified the
/// container.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// A referenced element is not a member of the container
    #[error("Element not found in container: {element}")]
    ElementNotFound { element: String },

    /// An element appears twice in one request, or is both moved and used as a reference
    #[error("Duplicate element in container operation: {element}")]
    DuplicateElement { element: String },

    /// The start reference of a range does not come before its end reference
    #[error("Invalid container range: {start} does not come before {end}")]
    InvalidRange { start: String, end: String },

    /// The container has no element to return
    #[error("Container is empty")]
    Empty,
}

impl ContainerError {
    /// Check if this error indicates a missing element
    pub fn is_not_found(&self) -> bool {
        matches!(self, ContainerError::ElementNotFound { .. })
    }

    /// Check if this error comes from the arguments of the request itself
    pub fn is_invalid_request(&self) -> bool {
        matches!(
            self,
            ContainerError::DuplicateElement { .. } | ContainerError::InvalidRange { .. }
        )
    }

    /// Check if this error indicates the container was empty
    pub fn is_empty_error(&self) -> bool {
        matches!(self, ContainerError::Empty)
    }

    /// Get the element if this is an element-related error
    pub fn element(&self) -> Option<&str> {
        match self {
            ContainerError::ElementNotFound { element }
            | ContainerError::DuplicateElement { element } => Some(element),
            _ => None,
        }
    }
}

// Conversion from ContainerError to the main Error type
impl From<ContainerError> for crate::Error {
    fn from(err: ContainerError) -> Self {
        crate::Error::Container(err)
    }
}
