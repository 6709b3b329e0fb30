//! The path-addressable store.
//!
//! [`Store`] owns a root [`Node`] and exposes the key path operations used to
//! build outgoing payloads and read incoming ones.
//!
//! # Usage
//!
//! ```
//! use keypath::Store;
//!
//! let payload = Store::new(false)
//!     .with("card.number", "5555555555554444")?
//!     .with("card.cvc", "123")?
//!     .with("currency", "USD")?
//!     .with("amount", 1234)?;
//!
//! assert_eq!(payload.keys().collect::<Vec<_>>(), vec!["card", "currency", "amount"]);
//! assert_eq!(
//!     payload.to_json_string()?,
//!     r#"{"card":{"number":"5555555555554444","cvc":"123"},"currency":"USD","amount":1234}"#
//! );
//! # Ok::<(), keypath::Error>(())
//! ```

use std::fmt;

use serde::ser::{Serialize, Serializer};
use tracing::debug;

use crate::{Node, Result, StoreError, Value, json, navigator};

/// A tree of ordered maps and lists addressed by key paths.
///
/// The key comparison mode chosen at construction applies to the root and to
/// every map the store creates afterwards, whether by [`put`](Store::put) or
/// by document conversion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    root: Node,
}

impl Store {
    /// Creates an empty store
    pub fn new(case_insensitive: bool) -> Self {
        Self {
            root: Node::new(case_insensitive),
        }
    }

    /// Creates a store from an existing mapping.
    ///
    /// Each top-level key is applied with [`put`](Store::put), so keys are read
    /// as key paths and nested maps take the store's comparison mode.
    ///
    /// # Errors
    ///
    /// Fails with [`StoreError::AmbiguousArrayContent`] if a nested list mixes
    /// maps and other values, or with any error `put` can raise.
    pub fn from_mapping<I, K, V>(src: I, case_insensitive: bool) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut store = Self::new(case_insensitive);
        store.merge_all(src)?;
        Ok(store)
    }

    /// Creates a store from a JSON document.
    ///
    /// A top-level object provides the store's keys; a top-level array is
    /// stored under the key `"list"`.
    ///
    /// # Errors
    ///
    /// Fails with [`StoreError::MalformedDocument`] if the text is neither a
    /// JSON object nor a JSON array.
    pub fn from_json(text: &str, case_insensitive: bool) -> Result<Self> {
        let node = json::parse_document(text, case_insensitive)?;
        let mut store = Self::new(case_insensitive);
        store.merge_all(node)?;
        debug!(keys = store.len(), case_insensitive, "loaded store from JSON");
        Ok(store)
    }

    /// Creates a store from an already decoded JSON value.
    pub fn from_json_value(json: serde_json::Value, case_insensitive: bool) -> Result<Self> {
        let node = json::document_from_value(json, case_insensitive)?;
        let mut store = Self::new(case_insensitive);
        store.merge_all(node)?;
        Ok(store)
    }

    /// Returns true if keys are compared without regard to case
    pub fn is_case_insensitive(&self) -> bool {
        self.root.is_case_insensitive()
    }

    /// Sets `value` at `path`, creating intermediate maps and lists.
    ///
    /// Maps inside `value` are rebuilt with the store's comparison mode, and
    /// lists inside it must hold either only maps or no maps. See
    /// [`navigator::put`] for the walk rules.
    ///
    /// # Examples
    ///
    /// ```
    /// # use keypath::{Node, Store};
    /// let mut card = Node::new(false);
    /// card.insert("Number", "4444");
    ///
    /// let mut store = Store::new(true);
    /// store.put("Card", card)?;
    /// assert_eq!(store.get_as::<&str>("card.number")?, Some("4444"));
    /// # Ok::<(), keypath::Error>(())
    /// ```
    pub fn put(&mut self, path: &str, value: impl Into<Value>) -> Result<()> {
        let value = json::normalize(value.into(), self.is_case_insensitive())?;
        navigator::put(&mut self.root, path, value)
    }

    /// Builder method to put a value and return self
    pub fn with(mut self, path: &str, value: impl Into<Value>) -> Result<Self> {
        self.put(path, value)?;
        Ok(self)
    }

    /// Gets the value at `path`, or `None` if a key along the way is missing.
    pub fn get(&self, path: &str) -> Result<Option<&Value>> {
        navigator::get(&self.root, path)
    }

    /// Gets a mutable reference to the value at `path`.
    pub fn get_mut(&mut self, path: &str) -> Result<Option<&mut Value>> {
        navigator::get_mut(&mut self.root, path)
    }

    /// Gets the value at `path` converted to `T`.
    ///
    /// # Errors
    ///
    /// Besides the errors of [`get`](Store::get), fails with
    /// [`StoreError::TypeMismatch`] if the value cannot be converted.
    ///
    /// # Examples
    ///
    /// ```
    /// # use keypath::Store;
    /// let store = Store::from_json(r#"{"user":{"name":"andrea","age":41}}"#, false)?;
    /// assert_eq!(store.get_as::<&str>("user.name")?, Some("andrea"));
    /// assert_eq!(store.get_as::<i64>("user.age")?, Some(41));
    /// assert_eq!(store.get_as::<i64>("user.missing")?, None);
    /// assert!(store.get_as::<i64>("user.name").is_err());
    /// # Ok::<(), keypath::Error>(())
    /// ```
    pub fn get_as<'a, T>(&'a self, path: &str) -> Result<Option<T>>
    where
        T: TryFrom<&'a Value, Error = StoreError>,
    {
        match self.get(path)? {
            None => Ok(None),
            Some(value) => T::try_from(value)
                .map(Some)
                .map_err(|e| at_path(e, path).into()),
        }
    }

    /// Returns true if a value exists at `path`.
    pub fn contains(&self, path: &str) -> Result<bool> {
        navigator::contains(&self.root, path)
    }

    /// Removes the value at `path`, returning whether anything was removed.
    pub fn remove(&mut self, path: &str) -> Result<bool> {
        navigator::remove(&mut self.root, path)
    }

    /// Puts every top-level pair of `other` into this store.
    ///
    /// Keys are read as key paths, and nested maps take the store's
    /// comparison mode as in [`put`](Store::put).
    pub fn merge_all<I, K, V>(&mut self, other: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for (key, value) in other {
            self.put(&key.into(), value)?;
        }
        Ok(())
    }

    /// Returns the number of top-level keys
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Returns true if the store has no keys
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Removes every key
    pub fn clear(&mut self) {
        self.root.clear();
    }

    /// Returns an iterator over top-level key/value pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.root.iter()
    }

    /// Returns an iterator over top-level keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.root.keys()
    }

    /// Returns an iterator over top-level values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.root.values()
    }

    /// Returns the root node
    pub fn as_node(&self) -> &Node {
        &self.root
    }

    /// Consumes the store, returning its root node
    pub fn into_node(self) -> Node {
        self.root
    }

    /// Converts the store into a `serde_json` object
    pub fn to_json_value(&self) -> serde_json::Value {
        json::node_to_json(&self.root)
    }

    /// Serializes the store as compact JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.root)?)
    }

    /// Serializes the store as indented JSON
    pub fn to_json_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }
}

fn at_path(err: StoreError, path: &str) -> StoreError {
    match err {
        StoreError::TypeMismatch {
            expected, actual, ..
        } => StoreError::TypeMismatch {
            path: path.to_string(),
            expected,
            actual,
        },
        other => other,
    }
}

impl From<Node> for Store {
    /// Adopts `root` as-is, keeping its comparison mode
    fn from(root: Node) -> Self {
        Self { root }
    }
}

impl IntoIterator for Store {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.root.into_iter()
    }
}

impl fmt::Display for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}

impl Serialize for Store {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.root.serialize(serializer)
    }
}
