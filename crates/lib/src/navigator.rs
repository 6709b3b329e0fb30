//! Path navigation over node trees.
//!
//! These functions implement the put/get/contains/remove walks that back the
//! [`Store`](crate::Store) API. Each call parses its path once and then walks
//! the tree segment by segment.
//!
//! # Walk rules
//!
//! - A plain segment descends into the [`Value::Map`] stored under its key.
//! - An array segment (`key[n]` or `key[]`) addresses an element of the
//!   [`Value::List`] stored under its key. `[]` appends on write and selects
//!   the last element on read.
//! - Writes create missing maps and lists on the way down, with the parent's
//!   key comparison mode. On write an index past the end of a list appends a
//!   new element instead of failing.
//! - Reads never create anything. A missing key reads as "not found".
//!
//! `get` reports every structural mismatch as an error. `contains` and
//! `remove` report "no map to descend into" as `false`, but an array accessor
//! used against an existing non-list value is an error for all operations.

use tracing::{debug, trace};

use crate::{
    List, Node, StoreError, Value,
    path::{self, Accessor, PathSegment},
};

/// How a read walk treats a missing intermediate map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Mismatches and bad indices are errors
    Strict,
    /// Anything that leaves no map to descend into means "not found"
    Lenient,
}

/// Sets `value` at `path`, creating intermediate maps and lists as needed.
///
/// # Errors
///
/// - [`PathError::MalformedPath`](crate::PathError::MalformedPath) if the path
///   does not parse.
/// - [`StoreError::TypeMismatch`] if an intermediate plain key holds a non-map,
///   if an array segment's key holds a non-list, or if an intermediate array
///   segment's list holds anything other than maps.
pub fn put(root: &mut Node, path: &str, value: impl Into<Value>) -> crate::Result<()> {
    let segments = path::parse(path)?;
    let value = value.into();
    let last = segments.len() - 1;

    let mut current = root;
    for i in 0..last {
        current = descend_or_create(current, &segments, i)?;
    }

    let segment = &segments[last];
    match segment.accessor() {
        None => {
            current.insert(segment.name(), value);
        }
        Some(accessor) => {
            let slot = current.get_or_insert_with(segment.name(), || {
                trace!(segment = %segment, "creating list");
                Value::List(List::new())
            });
            let list = match slot {
                Value::List(list) => list,
                other => return Err(mismatch(&segments, last, "list", other).into()),
            };
            match accessor {
                Accessor::Index(n) if n < list.len() => {
                    list.set(n, value);
                }
                _ => {
                    let index = list.push(value);
                    trace!(segment = %segment, index, "appended list element");
                }
            }
        }
    }

    Ok(())
}

/// Gets the value at `path`.
///
/// Returns `Ok(None)` when a key along the path does not exist.
///
/// # Errors
///
/// - [`PathError::MalformedPath`](crate::PathError::MalformedPath) if the path
///   does not parse.
/// - [`StoreError::TypeMismatch`] if the walk meets a value of the wrong kind.
/// - [`StoreError::IndexOutOfRange`] if a list index is outside the list, or
///   `[]` is used on an empty list.
pub fn get<'a>(root: &'a Node, path: &str) -> crate::Result<Option<&'a Value>> {
    let segments = path::parse(path)?;
    Ok(lookup(root, &segments, Mode::Strict)?)
}

/// Gets a mutable reference to the value at `path`.
///
/// Follows the same rules and errors as [`get`].
pub fn get_mut<'a>(root: &'a mut Node, path: &str) -> crate::Result<Option<&'a mut Value>> {
    let segments = path::parse(path)?;
    let last = segments.len() - 1;

    let mut current = root;
    for i in 0..last {
        current = match descend_mut(current, &segments, i, Mode::Strict)? {
            Some(child) => child,
            None => return Ok(None),
        };
    }

    let segment = &segments[last];
    let Some(accessor) = segment.accessor() else {
        return Ok(current.get_mut(segment.name()));
    };
    match current.get_mut(segment.name()) {
        None => Ok(None),
        Some(Value::List(list)) => match resolve(list, accessor) {
            Some(index) => Ok(list.get_mut(index)),
            None => Err(out_of_range(&segments, last, accessor, list.len()).into()),
        },
        Some(other) => Err(mismatch(&segments, last, "list", other).into()),
    }
}

/// Returns true if a value exists at `path`.
///
/// # Errors
///
/// - [`PathError::MalformedPath`](crate::PathError::MalformedPath) if the path
///   does not parse.
/// - [`StoreError::TypeMismatch`] if an array segment's key holds a non-list.
pub fn contains(root: &Node, path: &str) -> crate::Result<bool> {
    let segments = path::parse(path)?;
    Ok(lookup(root, &segments, Mode::Lenient)?.is_some())
}

/// Removes the value at `path`, returning whether anything was removed.
///
/// Removing a list element shifts every later element down by one.
///
/// # Errors
///
/// - [`PathError::MalformedPath`](crate::PathError::MalformedPath) if the path
///   does not parse.
/// - [`StoreError::TypeMismatch`] if an array segment's key holds a non-list.
pub fn remove(root: &mut Node, path: &str) -> crate::Result<bool> {
    let segments = path::parse(path)?;
    let last = segments.len() - 1;

    let mut current = root;
    for i in 0..last {
        current = match descend_mut(current, &segments, i, Mode::Lenient)? {
            Some(child) => child,
            None => return Ok(false),
        };
    }

    let segment = &segments[last];
    let removed = match segment.accessor() {
        None => current.remove(segment.name()).is_some(),
        Some(accessor) => match current.get_mut(segment.name()) {
            None => false,
            Some(Value::List(list)) => resolve(list, accessor)
                .and_then(|index| list.remove(index))
                .is_some(),
            Some(other) => return Err(mismatch(&segments, last, "list", other).into()),
        },
    };

    debug!(path, removed, "remove");
    Ok(removed)
}

/// Read walk shared by `get` and `contains`
fn lookup<'a>(
    root: &'a Node,
    segments: &[PathSegment],
    mode: Mode,
) -> Result<Option<&'a Value>, StoreError> {
    let last = segments.len() - 1;

    let mut current = root;
    for i in 0..last {
        current = match descend(current, segments, i, mode)? {
            Some(child) => child,
            None => return Ok(None),
        };
    }

    let segment = &segments[last];
    let Some(accessor) = segment.accessor() else {
        return Ok(current.get(segment.name()));
    };
    match current.get(segment.name()) {
        None => Ok(None),
        Some(Value::List(list)) => match resolve(list, accessor) {
            Some(index) => Ok(list.get(index)),
            None if mode == Mode::Lenient => Ok(None),
            None => Err(out_of_range(segments, last, accessor, list.len())),
        },
        Some(other) => Err(mismatch(segments, last, "list", other)),
    }
}

/// Steps from `node` into the map addressed by `segments[i]`
fn descend<'a>(
    node: &'a Node,
    segments: &[PathSegment],
    i: usize,
    mode: Mode,
) -> Result<Option<&'a Node>, StoreError> {
    let segment = &segments[i];
    let target = match segment.accessor() {
        None => node.get(segment.name()),
        Some(accessor) => match node.get(segment.name()) {
            None => None,
            Some(Value::List(list)) => match resolve(list, accessor) {
                Some(index) => list.get(index),
                None if mode == Mode::Lenient => None,
                None => return Err(out_of_range(segments, i, accessor, list.len())),
            },
            Some(other) => return Err(mismatch(segments, i, "list", other)),
        },
    };

    match target {
        None => Ok(None),
        Some(Value::Map(child)) => Ok(Some(child)),
        Some(_) if mode == Mode::Lenient => Ok(None),
        Some(other) => Err(mismatch(segments, i, "map", other)),
    }
}

/// Mutable counterpart of [`descend`]
fn descend_mut<'a>(
    node: &'a mut Node,
    segments: &[PathSegment],
    i: usize,
    mode: Mode,
) -> Result<Option<&'a mut Node>, StoreError> {
    let segment = &segments[i];
    let target = match segment.accessor() {
        None => node.get_mut(segment.name()),
        Some(accessor) => match node.get_mut(segment.name()) {
            None => None,
            Some(Value::List(list)) => match resolve(list, accessor) {
                Some(index) => list.get_mut(index),
                None if mode == Mode::Lenient => None,
                None => return Err(out_of_range(segments, i, accessor, list.len())),
            },
            Some(other) => return Err(mismatch(segments, i, "list", other)),
        },
    };

    match target {
        None => Ok(None),
        Some(Value::Map(child)) => Ok(Some(child)),
        Some(_) if mode == Mode::Lenient => Ok(None),
        Some(other) => Err(mismatch(segments, i, "map", other)),
    }
}

/// Write-side step: descends into `segments[i]`, creating what is missing
fn descend_or_create<'a>(
    node: &'a mut Node,
    segments: &[PathSegment],
    i: usize,
) -> Result<&'a mut Node, StoreError> {
    let segment = &segments[i];
    let fresh = node.child();

    let target = match segment.accessor() {
        None => node.get_or_insert_with(segment.name(), || {
            trace!(segment = %segment, "creating intermediate map");
            Value::Map(fresh)
        }),
        Some(accessor) => {
            let slot = node.get_or_insert_with(segment.name(), || {
                trace!(segment = %segment, "creating list");
                Value::List(List::new())
            });
            // Only a list of maps can be descended into
            if slot.as_list().is_some_and(|list| !list.is_map_list()) {
                return Err(mismatch(segments, i, "list of maps", slot));
            }
            let list = match slot {
                Value::List(list) => list,
                other => return Err(mismatch(segments, i, "list", other)),
            };
            let index = match accessor {
                Accessor::Index(n) if n < list.len() => n,
                _ => {
                    let index = list.push(fresh);
                    trace!(segment = %segment, index, "appended map to list");
                    index
                }
            };
            let len = list.len();
            match list.get_mut(index) {
                Some(element) => element,
                None => return Err(out_of_range(segments, i, accessor, len)),
            }
        }
    };

    match target {
        Value::Map(child) => Ok(child),
        other => Err(mismatch(segments, i, "map", other)),
    }
}

/// Resolves an accessor to a position inside `list`
fn resolve(list: &List, accessor: Accessor) -> Option<usize> {
    match accessor {
        Accessor::Index(n) if n < list.len() => Some(n),
        Accessor::Index(_) => None,
        Accessor::Append => list.len().checked_sub(1),
    }
}

/// Renders the path up to and including `segments[i]`
fn walked(segments: &[PathSegment], i: usize) -> String {
    segments[..=i]
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(".")
}

fn mismatch(segments: &[PathSegment], i: usize, expected: &str, found: &Value) -> StoreError {
    StoreError::TypeMismatch {
        path: walked(segments, i),
        expected: expected.to_string(),
        actual: found.type_name().to_string(),
    }
}

fn out_of_range(segments: &[PathSegment], i: usize, accessor: Accessor, len: usize) -> StoreError {
    let index = match accessor {
        Accessor::Index(n) => n,
        Accessor::Append => 0,
    };
    StoreError::IndexOutOfRange {
        path: walked(segments, i),
        index,
        len,
    }
}
