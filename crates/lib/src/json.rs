//! Conversion between JSON documents and node trees.
//!
//! Documents are decoded with `serde_json` and then converted eagerly and
//! recursively into [`Node`]s, [`List`]s and scalar [`Value`]s. Every node
//! created during a conversion uses the same key comparison mode.
//!
//! # Array typing
//!
//! The kind of an array is decided by its first element:
//!
//! - first element is an object: a list of maps. Every element must be an object.
//! - otherwise: a list of scalars. Nested arrays are converted with the same
//!   rule and no element may be an object.
//!
//! Arrays that break their first element's rule fail with
//! [`StoreError::AmbiguousArrayContent`].

use serde_json::{Map, Value as Json};
use tracing::{debug, warn};

use crate::{List, Node, StoreError, Value};

/// Key under which a top-level JSON array is stored.
pub const LIST_KEY: &str = "list";

/// Parses a JSON document into a node.
///
/// The text is decoded as an object first. If that fails it is decoded as an
/// array, which is wrapped into a node under the single key [`LIST_KEY`].
///
/// # Errors
///
/// - [`StoreError::MalformedDocument`] if the text is neither an object nor an array.
/// - [`StoreError::AmbiguousArrayContent`] if an array mixes objects and other values.
///
/// # Examples
///
/// ```
/// # use keypath::json::parse_document;
/// let node = parse_document(r#"[{"name":"andrea"}]"#, false)?;
/// assert!(node.contains_key("list"));
/// # Ok::<(), keypath::Error>(())
/// ```
pub fn parse_document(text: &str, case_insensitive: bool) -> crate::Result<Node> {
    let object_error = match serde_json::from_str::<Map<String, Json>>(text) {
        Ok(members) => {
            let node = convert_object(members, case_insensitive)?;
            debug!(keys = node.len(), "converted JSON object document");
            return Ok(node);
        }
        Err(e) => e,
    };

    debug!(error = %object_error, "document is not a JSON object, trying array");
    match serde_json::from_str::<Vec<Json>>(text) {
        Ok(items) => {
            let list = convert_array(items, case_insensitive)?;
            debug!(len = list.len(), "converted JSON array document");
            Ok(wrap_list(list, case_insensitive))
        }
        Err(_) => Err(StoreError::MalformedDocument {
            reason: object_error.to_string(),
        }
        .into()),
    }
}

/// Converts an already decoded JSON document into a node.
///
/// Objects convert directly and arrays are wrapped under [`LIST_KEY`], as in
/// [`parse_document`]. Scalars are rejected with
/// [`StoreError::MalformedDocument`].
pub fn document_from_value(json: Json, case_insensitive: bool) -> Result<Node, StoreError> {
    match json {
        Json::Object(members) => convert_object(members, case_insensitive),
        Json::Array(items) => Ok(wrap_list(
            convert_array(items, case_insensitive)?,
            case_insensitive,
        )),
        other => Err(StoreError::MalformedDocument {
            reason: format!(
                "expected a JSON object or array, found {}",
                json_kind(&other)
            ),
        }),
    }
}

/// Converts any JSON value.
pub fn convert_value(json: Json, case_insensitive: bool) -> Result<Value, StoreError> {
    match json {
        Json::Object(members) => convert_object(members, case_insensitive).map(Value::Map),
        Json::Array(items) => convert_array(items, case_insensitive).map(Value::List),
        scalar => Ok(convert_scalar(scalar)),
    }
}

/// Converts a JSON object into a node, recursing into every member.
pub fn convert_object(
    members: Map<String, Json>,
    case_insensitive: bool,
) -> Result<Node, StoreError> {
    let mut node = Node::new(case_insensitive);
    for (key, member) in members {
        let value = convert_value(member, case_insensitive)?;
        insert_folded(&mut node, key, value);
    }
    Ok(node)
}

/// Converts a JSON array into a list, typed by its first element.
pub fn convert_array(items: Vec<Json>, case_insensitive: bool) -> Result<List, StoreError> {
    let Some(first) = items.first() else {
        return Ok(List::new());
    };

    if first.is_object() {
        items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                Json::Object(members) => convert_object(members, case_insensitive).map(Value::Map),
                other => Err(ambiguous(i, "an object", json_kind(&other))),
            })
            .collect()
    } else {
        items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                Json::Object(_) => Err(ambiguous(i, "a non-object value", "object")),
                Json::Array(nested) => convert_array(nested, case_insensitive).map(Value::List),
                scalar => Ok(convert_scalar(scalar)),
            })
            .collect()
    }
}

/// Rebuilds a value so that every node in it uses `case_insensitive`.
///
/// Lists follow the same first-element rule as JSON arrays.
pub fn normalize(value: Value, case_insensitive: bool) -> Result<Value, StoreError> {
    match value {
        Value::Map(node) => normalize_node(node, case_insensitive).map(Value::Map),
        Value::List(list) => normalize_list(list, case_insensitive).map(Value::List),
        scalar => Ok(scalar),
    }
}

/// Rebuilds a node and its whole subtree with the given comparison mode.
pub fn normalize_node(node: Node, case_insensitive: bool) -> Result<Node, StoreError> {
    let mut rebuilt = Node::new(case_insensitive);
    for (key, value) in node {
        let value = normalize(value, case_insensitive)?;
        insert_folded(&mut rebuilt, key, value);
    }
    Ok(rebuilt)
}

fn normalize_list(list: List, case_insensitive: bool) -> Result<List, StoreError> {
    if list.is_empty() {
        return Ok(list);
    }

    let maps = list.get(0).is_some_and(Value::is_map);
    list.into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Map(node) if maps => normalize_node(node, case_insensitive).map(Value::Map),
            Value::Map(_) => Err(ambiguous(i, "a non-map value", "map")),
            other if maps => Err(ambiguous(i, "a map", other.type_name())),
            other => normalize(other, case_insensitive),
        })
        .collect()
}

/// Converts a value into a `serde_json` value.
///
/// Floats that JSON cannot represent (NaN, infinities) become `null`.
pub fn to_json_value(value: &Value) -> Json {
    match value {
        Value::Null => Json::Null,
        Value::Bool(b) => Json::Bool(*b),
        Value::Int(n) => Json::from(*n),
        Value::Float(n) => serde_json::Number::from_f64(*n).map_or(Json::Null, Json::Number),
        Value::Text(s) => Json::String(s.clone()),
        Value::Map(node) => node_to_json(node),
        Value::List(list) => Json::Array(list.iter().map(to_json_value).collect()),
    }
}

/// Converts a node into a JSON object, keeping insertion order.
pub fn node_to_json(node: &Node) -> Json {
    Json::Object(
        node.iter()
            .map(|(key, value)| (key.to_string(), to_json_value(value)))
            .collect(),
    )
}

fn convert_scalar(json: Json) -> Value {
    match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(b),
        Json::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => Value::Int(i),
            (None, Some(f)) => Value::Float(f),
            (None, None) => Value::Text(n.to_string()),
        },
        Json::String(s) => Value::Text(s),
        // Containers are handled by convert_value
        Json::Array(_) | Json::Object(_) => Value::Null,
    }
}

fn wrap_list(list: List, case_insensitive: bool) -> Node {
    let mut node = Node::new(case_insensitive);
    node.insert(LIST_KEY, list);
    node
}

fn insert_folded(node: &mut Node, key: String, value: Value) {
    if node.contains_key(&key) {
        warn!(key = %key, "key collides with an earlier key under case folding; later value wins");
    }
    node.insert(key, value);
}

fn ambiguous(index: usize, expected: &str, found: &str) -> StoreError {
    StoreError::AmbiguousArrayContent {
        reason: format!(
            "array typed by its first element expects {expected} at index {index}, found {found}"
        ),
    }
}

fn json_kind(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "bool",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}
