//! Key path parsing.
//!
//! A key path addresses a value inside a nested [`Node`](crate::Node) tree.
//! Paths are dot-separated segments, and each segment may carry a single
//! array accessor in brackets:
//!
//! - `card.number` - key `number` inside the map stored under `card`
//! - `items[2].name` - key `name` inside the third element of the list `items`
//! - `items[]` - append on write, last element on read
//!
//! Parsing is a pure function with no shared state.
//!
//! # Examples
//!
//! ```rust
//! use keypath::path::{Accessor, parse};
//!
//! let segments = parse("order.items[1].sku")?;
//! assert_eq!(segments.len(), 3);
//! assert_eq!(segments[1].name(), "items");
//! assert_eq!(segments[1].accessor(), Some(Accessor::Index(1)));
//! assert!(segments[2].is_terminal());
//! # Ok::<(), keypath::path::PathError>(())
//! ```

use std::fmt;

use thiserror::Error;

/// Error type for path parsing failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// The path text does not follow the key path grammar.
    #[error("Malformed path '{path}': {reason}")]
    MalformedPath { path: String, reason: String },
}

impl PathError {
    /// Returns the offending path text.
    pub fn path(&self) -> &str {
        match self {
            PathError::MalformedPath { path, .. } => path,
        }
    }
}

/// The `[...]` suffix of a path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accessor {
    /// `[]`: append when writing, last element when reading.
    Append,
    /// `[n]`: an explicit zero-based position.
    Index(usize),
}

impl fmt::Display for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::Append => write!(f, "[]"),
            Accessor::Index(n) => write!(f, "[{n}]"),
        }
    }
}

/// One dot-delimited component of a key path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathSegment {
    name: String,
    accessor: Option<Accessor>,
    is_terminal: bool,
}

impl PathSegment {
    /// Creates a plain key segment.
    pub fn key(name: impl Into<String>, is_terminal: bool) -> Self {
        Self {
            name: name.into(),
            accessor: None,
            is_terminal,
        }
    }

    /// Creates a segment carrying an array accessor.
    pub fn indexed(name: impl Into<String>, accessor: Accessor, is_terminal: bool) -> Self {
        Self {
            name: name.into(),
            accessor: Some(accessor),
            is_terminal,
        }
    }

    /// The key name, without any bracket suffix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The array accessor, if the segment had a `[...]` suffix.
    pub fn accessor(&self) -> Option<Accessor> {
        self.accessor
    }

    /// Returns true if this is the last segment of its path.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(accessor) = self.accessor {
            write!(f, "{accessor}")?;
        }
        Ok(())
    }
}

/// Parses a key path into its ordered segments.
///
/// Keys between dots may be empty, so `""` is a single segment addressing the
/// empty-string key.
///
/// # Errors
///
/// Returns [`PathError::MalformedPath`] when a bracket
/// is not closed at the end of its segment, or when the bracket content is
/// neither empty nor a non-negative integer.
pub fn parse(path: &str) -> Result<Vec<PathSegment>, PathError> {
    let tokens: Vec<&str> = path.split('.').collect();
    let last = tokens.len() - 1;

    tokens
        .into_iter()
        .enumerate()
        .map(|(i, token)| parse_segment(path, token, i == last))
        .collect()
}

fn parse_segment(path: &str, token: &str, is_terminal: bool) -> Result<PathSegment, PathError> {
    let Some(open) = token.find('[') else {
        return Ok(PathSegment::key(token, is_terminal));
    };

    let name = &token[..open];
    let rest = &token[open + 1..];
    let Some(content) = rest.strip_suffix(']') else {
        return Err(malformed(
            path,
            &format!("segment '{token}' must end with ']'"),
        ));
    };

    if content.is_empty() {
        return Ok(PathSegment::indexed(name, Accessor::Append, is_terminal));
    }

    if !content.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed(
            path,
            &format!("index '{content}' in segment '{token}' is not a non-negative integer"),
        ));
    }

    let index = content.parse::<usize>().map_err(|e| {
        malformed(
            path,
            &format!("index '{content}' in segment '{token}' is out of range: {e}"),
        )
    })?;

    Ok(PathSegment::indexed(
        name,
        Accessor::Index(index),
        is_terminal,
    ))
}

fn malformed(path: &str, reason: &str) -> PathError {
    PathError::MalformedPath {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}
