//! The public path operations.
//!
//! Each operation takes a path argument that converts into a [`Path`]: a
//! path string, an index, a key list, or `()`/`None` for the whole value.

use crate::merge::deep_merge;
use crate::path::{normalize, Key, Path};
use crate::traverse::{assign, delete, has_at, read_at, take, write_at};
use crate::value::{emptied, Value};

/// Returns the value at `path`, or `None` when there is none.
///
/// The empty path returns `value` itself.
///
/// ```
/// use cowpath::{get, Value};
///
/// let value = Value::from(serde_json::json!({"a": [{"b": 1}]}));
/// assert_eq!(get("a[0].b", &value), Some(Value::Int(1)));
/// assert_eq!(get("a[1].b", &value), None);
/// ```
pub fn get(path: impl Into<Path>, value: &Value) -> Option<Value> {
    let path = normalize(path);
    find(&path, value).cloned()
}

/// Returns true if a value exists at `path`.
///
/// For the empty path this is the truthiness of `value`.
pub fn has(path: impl Into<Path>, value: &Value) -> bool {
    let path = normalize(path);
    if path.is_empty() {
        return value.is_truthy();
    }
    has_at(path.as_slice(), value)
}

/// Returns `value` with `new_value` stored at `path`, creating any missing
/// containers along the way.
///
/// The empty path returns `new_value` itself.
///
/// ```
/// use cowpath::{set, Value};
/// use serde_json::json;
///
/// let value = set("a.b[0]", "z", Value::empty_map());
/// assert_eq!(value, Value::from(json!({"a": {"b": ["z"]}})));
/// ```
pub fn set(path: impl Into<Path>, new_value: impl Into<Value>, value: Value) -> Value {
    let path = normalize(path);
    let new_value = new_value.into();
    if path.is_empty() {
        tracing::debug!("empty path, replacing the whole value");
        return new_value;
    }
    write_at(path.as_slice(), value, |container, key| {
        assign(container, key, new_value)
    })
}

/// Returns `value` without the entry at `path`. Removing a list entry
/// shifts the entries after it down by one.
///
/// When nothing exists at `path`, `value` is returned unchanged. The empty
/// path empties `value` itself, or yields an empty map for a
/// non-container.
pub fn remove(path: impl Into<Path>, value: Value) -> Value {
    let path = normalize(path);
    if path.is_empty() {
        return emptied(value);
    }
    if !has_at(path.as_slice(), &value) {
        tracing::debug!(%path, "nothing to remove");
        return value;
    }
    write_at(path.as_slice(), value, delete)
}

/// Returns `value` with `to_merge` deep-merged into the value at `path`.
///
/// When `value` is not a container, `to_merge` is returned as-is.
///
/// ```
/// use cowpath::{merge, Value};
/// use serde_json::json;
///
/// let value = Value::from(json!({"a": {"b": 1}}));
/// let merged = merge("a", Value::from(json!({"c": 2})), value);
/// assert_eq!(merged, Value::from(json!({"a": {"b": 1, "c": 2}})));
/// ```
pub fn merge(path: impl Into<Path>, to_merge: impl Into<Value>, value: Value) -> Value {
    let path = normalize(path);
    let to_merge = to_merge.into();
    if !value.is_cloneable() {
        tracing::debug!(found = value.type_name(), "merge base is not a container");
        return to_merge;
    }
    if path.is_empty() {
        return deep_merge(value, to_merge);
    }
    write_at(path.as_slice(), value, |container, key| {
        let existing = take(container, key);
        assign(container, key, deep_merge(existing, to_merge));
    })
}

/// Appends `new_value` to the list at `path`, or stores it at `path` when
/// no list is there.
///
/// ```
/// use cowpath::{add, Value};
/// use serde_json::json;
///
/// let value = add((), "value", Value::from(json!(["top", "level"])));
/// assert_eq!(value, Value::from(json!(["top", "level", "value"])));
/// ```
pub fn add(path: impl Into<Path>, new_value: impl Into<Value>, value: Value) -> Value {
    let path = normalize(path);
    let append_at = find(&path, &value)
        .and_then(Value::as_list)
        .map(Vec::len);
    let path = match append_at {
        Some(len) => path.with(Key::Index(len)),
        None => path,
    };
    set(path, new_value, value)
}

fn find<'a>(path: &Path, value: &'a Value) -> Option<&'a Value> {
    if path.is_empty() {
        return (!value.is_undefined()).then_some(value);
    }
    read_at(path.as_slice(), value)
}
