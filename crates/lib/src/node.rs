//! Ordered key/value nodes.
//!
//! A [`Node`] is the map primitive of a store tree. Keys keep their insertion
//! order for enumeration, and each node compares keys either exactly or
//! case-insensitively. The comparison mode is fixed when the node is created
//! and is handed down to every child node created through [`Node::child`].

use std::{borrow::Cow, fmt};

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::Value;

#[derive(Debug, Clone)]
struct Entry {
    /// Key as spelled when first inserted
    key: String,
    value: Value,
}

/// An insertion-ordered map from string keys to [`Value`]s.
///
/// With case folding enabled, `"Name"`, `"name"` and `"NAME"` address the same
/// entry. The entry keeps the spelling it was first inserted with.
///
/// # Examples
///
/// ```
/// # use keypath::{Node, Value};
/// let mut node = Node::new(true);
/// node.insert("Currency", "USD");
/// node.insert("currency", "EUR");
///
/// assert_eq!(node.len(), 1);
/// assert_eq!(node.get("CURRENCY"), Some(&Value::Text("EUR".into())));
/// assert_eq!(node.keys().collect::<Vec<_>>(), vec!["Currency"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Node {
    case_insensitive: bool,
    /// Entries indexed by their comparison key
    entries: IndexMap<String, Entry>,
}

impl Node {
    /// Creates a new empty node with the given key comparison mode
    pub fn new(case_insensitive: bool) -> Self {
        Self {
            case_insensitive,
            entries: IndexMap::new(),
        }
    }

    /// Creates an empty node sharing this node's comparison mode
    pub fn child(&self) -> Self {
        Self::new(self.case_insensitive)
    }

    /// Returns true if keys are compared without regard to case
    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Returns the number of keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the node has no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the node contains the given key
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(self.fold(key).as_ref())
    }

    /// Gets a value by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(self.fold(key).as_ref()).map(|e| &e.value)
    }

    /// Gets a mutable reference to a value by key
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        let folded = self.fold(key).into_owned();
        self.entries.get_mut(&folded).map(|e| &mut e.value)
    }

    /// Sets a value, returning the previous value if the key was present.
    ///
    /// Overwriting keeps the key's original position and spelling.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        let folded = self.fold(&key).into_owned();
        match self.entries.get_mut(&folded) {
            Some(entry) => Some(std::mem::replace(&mut entry.value, value)),
            None => {
                self.entries.insert(folded, Entry { key, value });
                None
            }
        }
    }

    /// Gets the value for `key`, inserting the result of `default` if absent
    pub fn get_or_insert_with(
        &mut self,
        key: &str,
        default: impl FnOnce() -> Value,
    ) -> &mut Value {
        let folded = self.fold(key).into_owned();
        &mut self
            .entries
            .entry(folded)
            .or_insert_with(|| Entry {
                key: key.to_string(),
                value: default(),
            })
            .value
    }

    /// Removes a key, preserving the order of the remaining keys
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let folded = self.fold(key).into_owned();
        self.entries.shift_remove(&folded).map(|e| e.value)
    }

    /// Removes all keys
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns an iterator over key/value pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.values().map(|e| (e.key.as_str(), &e.value))
    }

    /// Returns an iterator over keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(|e| e.key.as_str())
    }

    /// Returns an iterator over values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values().map(|e| &e.value)
    }

    fn fold<'k>(&self, key: &'k str) -> Cow<'k, str> {
        if self.case_insensitive {
            Cow::Owned(key.to_lowercase())
        } else {
            Cow::Borrowed(key)
        }
    }
}

impl PartialEq for Node {
    /// Nodes are equal when they hold the same keys with equal values.
    ///
    /// Insertion order does not take part in equality.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl IntoIterator for Node {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    /// Consumes the node, yielding pairs in insertion order
    fn into_iter(self) -> Self::IntoIter {
        self.entries
            .into_values()
            .map(|e| (e.key, e.value))
            .collect::<Vec<_>>()
            .into_iter()
    }
}
