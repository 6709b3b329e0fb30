//!
//! keypath: a nested key/value payload store addressed by string paths.
//!
//! A [`Store`] holds a tree of ordered maps ([`Node`]) and lists ([`List`])
//! that can be read and written through dotted, bracket-indexed key paths such
//! as `"card.number"`, `"list[2].name"` or `"items[]"`.
//!
//! ## Core Concepts
//!
//! * **Paths (`path`)**: the key path grammar, parsed into [`path::PathSegment`]s.
//! * **Nodes (`node::Node`)**: insertion-ordered maps whose key comparison is either
//!   exact or case-folded, fixed when the node is created.
//! * **Values (`value::Value`)**: scalars, nested nodes and lists.
//! * **Navigation (`navigator`)**: the put/get/contains/remove walks over a node tree.
//! * **JSON (`json`)**: conversion between JSON documents and node trees.
//!
//! ## Example
//!
//! ```
//! use keypath::Store;
//!
//! let mut store = Store::new(false);
//! store.put("card.number", "5555555555554444")?;
//! store.put("card.expMonth", 5)?;
//! store.put("items[].sku", "A-1")?;
//! store.put("items[].sku", "B-2")?;
//!
//! assert_eq!(store.get_as::<&str>("card.number")?, Some("5555555555554444"));
//! assert_eq!(store.get_as::<&str>("items[].sku")?, Some("B-2"));
//! assert!(store.contains("items[0].sku")?);
//! # Ok::<(), keypath::Error>(())
//! ```

pub mod errors;
pub mod json;
pub mod list;
pub mod navigator;
pub mod node;
pub mod path;
pub mod store;
pub mod value;

pub use errors::StoreError;
pub use list::List;
pub use node::Node;
pub use path::{Accessor, PathError, PathSegment};
pub use store::Store;
pub use value::Value;

/// Result type used throughout the keypath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the keypath library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured path grammar errors from the path module
    #[error(transparent)]
    Path(path::PathError),

    /// Structured navigation and conversion errors
    #[error(transparent)]
    Store(errors::StoreError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Path(_) => "path",
            Error::Store(_) => "store",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error is an unparseable key path.
    pub fn is_malformed_path(&self) -> bool {
        matches!(self, Error::Path(PathError::MalformedPath { .. }))
    }

    /// Check if this error indicates a value of the wrong kind.
    pub fn is_type_mismatch(&self) -> bool {
        match self {
            Error::Store(err) => err.is_type_mismatch(),
            _ => false,
        }
    }

    /// Check if this error indicates a list index outside its bounds.
    pub fn is_index_out_of_range(&self) -> bool {
        match self {
            Error::Store(err) => err.is_index_out_of_range(),
            _ => false,
        }
    }

    /// Check if this error comes from decoding or converting an input document.
    ///
    /// Serialization failures while exporting a store are not document errors.
    pub fn is_malformed_document(&self) -> bool {
        match self {
            Error::Store(err) => err.is_document_error(),
            _ => false,
        }
    }
}
