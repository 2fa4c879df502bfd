//! Nested value tree and dotted-path addressing.
//!
//! The tree itself is a [`serde_json::Value`]; this module adds a validated
//! [`ConfigPath`] and the pure operations the configuration store performs on
//! the tree: lookup, assignment and idempotent append.

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// The variant of a [`Value`], used to state type requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Map,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Map,
        }
    }

    pub fn matches(self, value: &Value) -> bool {
        Self::of(value) == self
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Map => "map",
        };
        f.write_str(name)
    }
}

/// Location inside a value tree, as an ordered list of map keys.
///
/// A path always has at least one segment and no segment is empty or
/// contains a dot, so `parse(path.to_string())` gives back the same path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigPath {
    segments: Vec<String>,
}

impl ConfigPath {
    /// Splits a dotted key such as `themes.demo.post-types`.
    pub fn parse(dotted: &str) -> Result<Self> {
        Self::from_segments(dotted.split('.'))
    }

    /// Builds a path from individual segments.
    ///
    /// # Errors
    /// * `Error::InvalidPath` if there are no segments, or one of them is
    ///   empty or contains a `.`
    pub fn from_segments<I, S>(segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Err(Error::InvalidPath("a path needs at least one segment".to_string()));
        }
        for segment in &segments {
            if segment.is_empty() {
                return Err(Error::InvalidPath(format!(
                    "empty segment in '{}'",
                    segments.join(".")
                )));
            }
            if segment.contains('.') {
                return Err(Error::InvalidPath(format!(
                    "segment '{segment}' contains a '.'"
                )));
            }
        }
        Ok(Self { segments })
    }

    /// Returns a new path with `segment` appended.
    pub fn child(&self, segment: impl Into<String>) -> Result<Self> {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self::from_segments(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for ConfigPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl FromStr for ConfigPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Resolves `path` one map lookup at a time.
///
/// Returns `None` when a segment is missing or an intermediate value is not a map.
pub fn lookup<'a>(tree: &'a Value, path: &ConfigPath) -> Option<&'a Value> {
    path.segments
        .iter()
        .try_fold(tree, |node, segment| node.as_object()?.get(segment))
}

/// Walks to the parent map of the last segment, creating empty maps on the
/// way, and returns it along with the last segment.
fn parent_map_mut<'a>(tree: &'a mut Value, path: &'a ConfigPath) -> (&'a mut Map<String, Value>, &'a str) {
    let (last, intermediates) = path
        .segments
        .split_last()
        .expect("ConfigPath always holds at least one segment");

    let mut node = tree;
    for segment in intermediates {
        if !node.is_object() {
            debug!("Replacing {} with an empty map at segment '{}'", ValueKind::of(node), segment);
            *node = Value::Object(Map::new());
        }
        node = match node {
            Value::Object(map) => map.entry(segment.as_str()).or_insert(Value::Null),
            _ => unreachable!(),
        };
    }
    if !node.is_object() {
        *node = Value::Object(Map::new());
    }
    match node {
        Value::Object(map) => (map, last.as_str()),
        _ => unreachable!(),
    }
}

/// Assigns `value` at `path`, replacing whatever was there.
///
/// Missing intermediate segments, and intermediates that hold something
/// other than a map, become empty maps.
pub fn assign(tree: &mut Value, path: &ConfigPath, value: Value) {
    let (map, key) = parent_map_mut(tree, path);
    map.insert(key.to_string(), value);
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

/// Appends `value` to the array at `path`.
///
/// An absent or null entry becomes an empty array first. Scalars already in
/// the array are not appended again; arrays and maps are always appended.
///
/// # Returns
/// * `Result<bool>` - whether the value was appended
///
/// # Errors
/// * `Error::ConfigType` if the path holds a value that is neither null nor an array
pub fn append(tree: &mut Value, path: &ConfigPath, value: Value) -> Result<bool> {
    let (map, key) = parent_map_mut(tree, path);
    let entry = map.entry(key.to_string()).or_insert(Value::Null);
    if entry.is_null() {
        *entry = Value::Array(Vec::new());
    }
    let items = match entry {
        Value::Array(items) => items,
        other => {
            return Err(Error::ConfigType {
                path: path.to_string(),
                found: ValueKind::of(other),
            })
        }
    };

    if is_scalar(&value) && items.contains(&value) {
        return Ok(false);
    }
    items.push(value);
    Ok(true)
}

/// Serializes a document pretty-printed with four-space indentation.
///
/// Forward slashes are left unescaped.
pub fn to_document_string(tree: &Value) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    tree.serialize(&mut serializer)?;
    buffer.push(b'\n');
    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
