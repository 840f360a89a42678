//! Error types for tirea-array operations.

use thiserror::Error;

/// Result type alias for tirea-array operations.
pub type ArrayResult<T> = Result<T, ArrayError>;

/// Errors that can occur during tirea-array operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrayError {
    /// An argument had the wrong shape for the operation.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of what went wrong.
        message: String,
    },

    /// A value had a different JSON type than the operation requires.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// The expected type.
        expected: &'static str,
        /// The actual type found.
        found: &'static str,
    },

    /// Array index or range is out of bounds.
    #[error("index {index} out of bounds (len: {len})")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The actual length of the array.
        len: usize,
    },

    /// A JSON pointer string could not be parsed.
    #[error("invalid JSON pointer {pointer:?}: {reason}")]
    InvalidPointer {
        /// The pointer text.
        pointer: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl ArrayError {
    /// Create an invalid argument error.
    #[inline]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ArrayError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a type mismatch error.
    #[inline]
    pub fn type_mismatch(expected: &'static str, found: &'static str) -> Self {
        ArrayError::TypeMismatch { expected, found }
    }

    /// Create an index out of bounds error.
    #[inline]
    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        ArrayError::IndexOutOfBounds { index, len }
    }

    /// Create an invalid pointer error.
    #[inline]
    pub fn invalid_pointer(pointer: impl Into<String>, reason: impl Into<String>) -> Self {
        ArrayError::InvalidPointer {
            pointer: pointer.into(),
            reason: reason.into(),
        }
    }
}

/// Get the type name of a JSON value.
#[inline]
pub fn value_type_name(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
