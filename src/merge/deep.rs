//! Deep merge of one value into another.

use crate::value::{Map, Value};
use std::sync::Arc;

/// Merges `source` into `target` and returns the result.
///
/// - Lists on both sides: `source`'s items are appended to `target`'s.
/// - Maps on both sides: every field of `source` is written onto `target`,
///   merging recursively where the incoming field is a container.
/// - A list on one side only: `source` wins as-is.
/// - A map `source` over a non-container `target`: the fields are merged
///   into a fresh map.
/// - Any other `source` (scalars, opaque values) replaces `target`.
///
/// `target` is updated where it lives when exclusively owned, and
/// shallow-cloned first otherwise.
pub fn deep_merge(target: Value, source: Value) -> Value {
    if target.is_list() != source.is_list() {
        return source;
    }

    match (target, source) {
        (Value::List(mut items), Value::List(extra)) => {
            Arc::make_mut(&mut items).extend(Arc::unwrap_or_clone(extra));
            Value::List(items)
        }
        (target, Value::Map(incoming)) => {
            let mut merged = match target {
                Value::Map(map) => map,
                _ => Arc::new(Map::new()),
            };
            let entries = Arc::make_mut(&mut merged);
            for (key, value) in Arc::unwrap_or_clone(incoming).fields {
                let value = if value.is_cloneable() {
                    let existing = entries.delete(&key).unwrap_or(Value::Undefined);
                    deep_merge(existing, value)
                } else {
                    value
                };
                entries.set(key, value);
            }
            Value::Map(merged)
        }
        (_, source) => source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn merged(target: serde_json::Value, source: serde_json::Value) -> Value {
        deep_merge(Value::from(target), Value::from(source))
    }

    #[test]
    fn test_lists_concatenate() {
        assert_eq!(merged(json!([1, 2]), json!([3])), Value::from(json!([1, 2, 3])));
        assert_eq!(merged(json!([1]), json!([1])), Value::from(json!([1, 1])));
    }

    #[test]
    fn test_maps_merge_recursively() {
        assert_eq!(
            merged(
                json!({"a": 1, "nested": {"keep": true, "list": [1]}}),
                json!({"b": 2, "nested": {"add": "x", "list": [2]}})
            ),
            Value::from(json!({
                "a": 1,
                "b": 2,
                "nested": {"keep": true, "add": "x", "list": [1, 2]}
            }))
        );
    }

    #[test]
    fn test_shape_mismatch_source_wins() {
        let source = Value::from(json!([1]));
        let result = deep_merge(Value::from(json!({"a": 1})), source.clone());
        assert!(result.ptr_eq(&source));

        let source = Value::from(json!({"a": 1}));
        let result = deep_merge(Value::from(json!([1])), source.clone());
        assert!(result.ptr_eq(&source));
    }

    #[test]
    fn test_scalar_source_overwrites() {
        assert_eq!(merged(json!({"a": {"b": 1}}), json!({"a": 2})), Value::from(json!({"a": 2})));
        assert_eq!(merged(json!({"a": 1}), json!("text")), Value::from("text"));
    }

    #[test]
    fn test_map_into_non_container_is_fresh_copy() {
        let source = Value::from(json!({"other": "x", "inner": {"deep": 1}}));
        let result = deep_merge(Value::from("overwritten"), source.clone());

        assert_eq!(result, source);
        assert!(!result.ptr_eq(&source));
        let inner = |v: &Value| v.as_map().unwrap().get("inner").unwrap().clone();
        assert!(!inner(&result).ptr_eq(&inner(&source)));
    }

    #[test]
    fn test_opaque_values_are_never_merged() {
        let target = Value::map([("when", Value::Timestamp(1))]);
        let source = Value::map([("when", Value::Timestamp(2))]);
        assert_eq!(deep_merge(target, source), Value::map([("when", Value::Timestamp(2))]));

        let result = deep_merge(Value::Timestamp(1), Value::from(json!({"a": 1})));
        assert_eq!(result, Value::from(json!({"a": 1})));
    }

    #[test]
    fn test_shared_target_is_not_mutated() {
        let target = Value::from(json!({"a": [1]}));
        let result = deep_merge(target.clone(), Value::from(json!({"a": [2], "b": 1})));

        assert_eq!(target, Value::from(json!({"a": [1]})));
        assert_eq!(result, Value::from(json!({"a": [1, 2], "b": 1})));
    }
}
