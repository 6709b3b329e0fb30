//! Ordered list type for stores.
//!
//! A [`List`] is a plain ordered sequence of [`Value`]s. Removing an element
//! shifts every later element down by one.

use std::fmt;

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::Value;

/// An ordered collection of values.
///
/// # Examples
///
/// ```
/// # use keypath::{List, Value};
/// let mut list = List::new();
/// list.push("first");
/// list.push(2);
///
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.last(), Some(&Value::Int(2)));
/// assert_eq!(list.remove(0), Some(Value::Text("first".into())));
/// assert_eq!(list.get(0), Some(&Value::Int(2)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct List {
    items: Vec<Value>,
}

impl List {
    /// Creates a new empty list
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns the number of elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list has no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Gets the element at `index`
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Gets a mutable reference to the element at `index`
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    /// Gets the last element
    pub fn last(&self) -> Option<&Value> {
        self.items.last()
    }

    /// Appends a value and returns its index
    pub fn push(&mut self, value: impl Into<Value>) -> usize {
        self.items.push(value.into());
        self.items.len() - 1
    }

    /// Replaces the element at `index`, returning the previous value.
    ///
    /// Returns `None` and leaves the list untouched if `index` is out of bounds.
    pub fn set(&mut self, index: usize, value: impl Into<Value>) -> Option<Value> {
        let slot = self.items.get_mut(index)?;
        Some(std::mem::replace(slot, value.into()))
    }

    /// Removes the element at `index`, shifting later elements down
    pub fn remove(&mut self, index: usize) -> Option<Value> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Removes all elements
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns true if every element is a map.
    ///
    /// An empty list counts as a list of maps.
    pub fn is_map_list(&self) -> bool {
        self.items.iter().all(Value::is_map)
    }

    /// Returns an iterator over the elements
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Returns the elements as a slice
    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

impl Serialize for List {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.items.len()))?;
        for item in &self.items {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

impl FromIterator<Value> for List {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Value>> for List {
    fn from(items: Vec<Value>) -> Self {
        Self { items }
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
