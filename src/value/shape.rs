//! Container shape classification.
//!
//! Decides which values may be cloned into and merged, and which container
//! a key implies when one has to be synthesized along a path.

use super::value::{Map, Value};
use crate::path::Key;
use std::sync::Arc;

/// Shape of a composite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Ordered, index-addressed.
    Sequence,
    /// String-keyed.
    Mapping,
}

impl Shape {
    /// Returns the shape of a cloneable value, or `None` for scalars and
    /// opaque values.
    pub fn of(value: &Value) -> Option<Shape> {
        match value {
            Value::List(_) => Some(Shape::Sequence),
            Value::Map(_) => Some(Shape::Mapping),
            _ => None,
        }
    }

    /// Returns a new, empty container of this shape.
    pub fn empty(self) -> Value {
        match self {
            Shape::Sequence => Value::empty_list(),
            Shape::Mapping => Value::empty_map(),
        }
    }
}

impl Key {
    /// Shape of the container this key addresses into.
    pub fn shape(&self) -> Shape {
        if self.is_sequence_key() {
            Shape::Sequence
        } else {
            Shape::Mapping
        }
    }
}

impl Value {
    /// Returns true for lists and maps. Scalars, `Timestamp` and `Pattern`
    /// are never cloned or merged into.
    pub fn is_cloneable(&self) -> bool {
        Shape::of(self).is_some()
    }
}

/// Returns an empty list for an index key, an empty map otherwise.
pub fn new_empty_container(key: &Key) -> Value {
    key.shape().empty()
}

/// Returns `value` when it is a container of the shape `next_key` implies,
/// or a fresh empty container of that shape.
pub fn ensured_container(value: Value, next_key: &Key) -> Value {
    let wanted = next_key.shape();
    if Shape::of(&value) == Some(wanted) {
        value
    } else {
        tracing::trace!(
            found = value.type_name(),
            shape = ?wanted,
            "synthesizing container"
        );
        wanted.empty()
    }
}

/// Makes `value`'s container exclusively owned, shallow-cloning it when any
/// other handle shares it. Children of a cloned container stay shared.
///
/// Returns true if a clone was made.
pub fn detach(value: &mut Value) -> bool {
    let shared = match value {
        Value::List(items) => Arc::get_mut(items).is_none(),
        Value::Map(map) => Arc::get_mut(map).is_none(),
        _ => return false,
    };
    if shared {
        match value {
            Value::List(items) => {
                Arc::make_mut(items);
            }
            Value::Map(map) => {
                Arc::make_mut(map);
            }
            _ => {}
        }
        tracing::trace!(kind = value.type_name(), "cloned shared container");
    }
    shared
}

/// Empties a container where it lives when exclusively owned. A shared
/// container is swapped for a new empty one of the same shape, and anything
/// that is not a container becomes an empty map.
pub fn emptied(value: Value) -> Value {
    match value {
        Value::List(mut items) => {
            match Arc::get_mut(&mut items) {
                Some(items) => items.clear(),
                None => items = Arc::new(Vec::new()),
            }
            Value::List(items)
        }
        Value::Map(mut map) => {
            match Arc::get_mut(&mut map) {
                Some(map) => map.clear(),
                None => map = Arc::new(Map::new()),
            }
            Value::Map(map)
        }
        _ => Value::empty_map(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_cloneable() {
        assert!(Value::empty_list().is_cloneable());
        assert!(Value::empty_map().is_cloneable());

        assert!(!Value::Undefined.is_cloneable());
        assert!(!Value::Null.is_cloneable());
        assert!(!Value::Int(3).is_cloneable());
        assert!(!Value::from("text").is_cloneable());
        assert!(!Value::Timestamp(0).is_cloneable());
        assert!(!Value::Pattern(crate::value::Pattern::new("x", "")).is_cloneable());
    }

    #[test]
    fn test_new_empty_container() {
        assert_eq!(new_empty_container(&Key::Index(0)), Value::empty_list());
        assert_eq!(new_empty_container(&Key::field("a")), Value::empty_map());
        // Quoted digits are still a field name.
        assert_eq!(new_empty_container(&Key::field("0")), Value::empty_map());
    }

    #[test]
    fn test_ensured_container_keeps_matching_shape() {
        let list = Value::from(json!([1, 2]));
        let ensured = ensured_container(list.clone(), &Key::Index(5));
        assert!(ensured.ptr_eq(&list));

        let map = Value::from(json!({"a": 1}));
        let ensured = ensured_container(map.clone(), &Key::field("b"));
        assert!(ensured.ptr_eq(&map));
    }

    #[test]
    fn test_ensured_container_replaces_mismatch() {
        let map = Value::from(json!({"a": 1}));
        assert_eq!(ensured_container(map, &Key::Index(0)), Value::empty_list());

        let list = Value::from(json!([1]));
        assert_eq!(ensured_container(list, &Key::field("a")), Value::empty_map());

        assert_eq!(ensured_container(Value::Int(0), &Key::field("a")), Value::empty_map());
        assert_eq!(ensured_container(Value::Timestamp(5), &Key::Index(0)), Value::empty_list());
    }

    #[test]
    fn test_detach_clones_only_shared() {
        let mut owned = Value::from(json!({"a": {"b": 1}}));
        assert!(!detach(&mut owned));

        let original = Value::from(json!({"a": {"b": 1}}));
        let mut copy = original.clone();
        assert!(detach(&mut copy));
        assert!(!copy.ptr_eq(&original));
        assert_eq!(copy, original);

        // One level deep: children are still shared.
        let child = copy.as_map().unwrap().get("a").unwrap();
        assert!(child.ptr_eq(original.as_map().unwrap().get("a").unwrap()));
    }

    #[test]
    fn test_emptied() {
        let list = Value::from(json!([1, 2, 3]));
        let before = match &list {
            Value::List(items) => Arc::as_ptr(items),
            _ => unreachable!(),
        };
        let after = emptied(list);
        assert_eq!(after, Value::empty_list());
        match &after {
            Value::List(items) => assert_eq!(Arc::as_ptr(items), before),
            _ => unreachable!(),
        }

        let shared = Value::from(json!({"a": 1}));
        let result = emptied(shared.clone());
        assert_eq!(result, Value::empty_map());
        assert_eq!(shared, Value::from(json!({"a": 1})));

        assert_eq!(emptied(Value::from("text")), Value::empty_map());
    }
}
