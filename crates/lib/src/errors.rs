//! Error types for store operations.
//!
//! Path grammar failures live in [`PathError`](crate::path::PathError); this
//! module covers structural failures found while walking or building a tree.

use thiserror::Error;

/// Structured error types for navigation and conversion.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An accessor or descent met a value of the wrong kind
    #[error("Type mismatch at '{path}': expected {expected}, found {actual}")]
    TypeMismatch {
        path: String,
        expected: String,
        actual: String,
    },

    /// A resolved list index is outside the list bounds on read
    #[error("Index {index} out of range at '{path}' (list length {len})")]
    IndexOutOfRange {
        path: String,
        index: usize,
        len: usize,
    },

    /// Input text is neither a JSON object nor a JSON array
    #[error("Malformed document: {reason}")]
    MalformedDocument { reason: String },

    /// An array mixes maps and non-map values
    #[error("Ambiguous array content: {reason}")]
    AmbiguousArrayContent { reason: String },
}

impl StoreError {
    /// Check if this error is a type mismatch
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, StoreError::TypeMismatch { .. })
    }

    /// Check if this error is an out-of-range list index
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, StoreError::IndexOutOfRange { .. })
    }

    /// Check if this error comes from document decoding or conversion
    pub fn is_document_error(&self) -> bool {
        matches!(
            self,
            StoreError::MalformedDocument { .. } | StoreError::AmbiguousArrayContent { .. }
        )
    }

    /// Get the path if this error was raised while navigating
    pub fn path(&self) -> Option<&str> {
        match self {
            StoreError::TypeMismatch { path, .. } | StoreError::IndexOutOfRange { path, .. } => {
                Some(path)
            }
            _ => None,
        }
    }
}

impl From<StoreError> for crate::Error {
    fn from(err: StoreError) -> Self {
        crate::Error::Store(err)
    }
}

impl From<crate::path::PathError> for crate::Error {
    fn from(err: crate::path::PathError) -> Self {
        crate::Error::Path(err)
    }
}
