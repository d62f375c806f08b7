//! Key-addressed access to a single container level.

use crate::path::Key;
use crate::value::Value;
use std::sync::Arc;

/// Most `Undefined` holes a single write fills in ahead of its slot. Writes
/// reaching further past the end of a list are dropped.
pub const MAX_LIST_GAP: usize = 1 << 16;

/// Returns the child `key` addresses in `container`.
pub fn lookup<'a>(container: &'a Value, key: &Key) -> Option<&'a Value> {
    match container {
        Value::List(items) => key.as_index().and_then(|i| items.get(i)),
        Value::Map(map) => map.get(&key.as_field()),
        _ => None,
    }
}

/// Moves the child `key` addresses out of `container`, leaving `Null` in
/// its slot. Returns `Undefined` when there is no such child.
pub fn take(container: &mut Value, key: &Key) -> Value {
    match container {
        Value::List(items) => match key.as_index() {
            Some(i) if i < items.len() => std::mem::take(&mut Arc::make_mut(items)[i]),
            _ => Value::Undefined,
        },
        Value::Map(map) => {
            let field = key.as_field();
            if !map.has(&field) {
                return Value::Undefined;
            }
            Arc::make_mut(map)
                .get_mut(&field)
                .map_or(Value::Undefined, std::mem::take)
        }
        _ => Value::Undefined,
    }
}

/// Stores `value` under `key`. Lists grow as needed, with `Undefined`
/// filling a gap of up to [`MAX_LIST_GAP`] slots.
pub fn assign(container: &mut Value, key: &Key, value: Value) {
    match container {
        Value::List(items) => match key.as_index() {
            Some(i) if i > items.len().saturating_add(MAX_LIST_GAP) => {
                tracing::warn!(%key, len = items.len(), "ignoring write far past the end of a list")
            }
            Some(i) => {
                let items = Arc::make_mut(items);
                if i < items.len() {
                    items[i] = value;
                } else {
                    items.resize(i, Value::Undefined);
                    items.push(value);
                }
            }
            None => tracing::debug!(%key, "ignoring write of a named key into a list"),
        },
        Value::Map(map) => Arc::make_mut(map).set(key.as_field().into_owned(), value),
        other => tracing::debug!(%key, kind = other.type_name(), "ignoring write into a scalar"),
    }
}

/// Removes the child under `key`. List entries after it shift down by one.
pub fn delete(container: &mut Value, key: &Key) {
    match container {
        Value::List(items) => {
            if let Some(i) = key.as_index().filter(|i| *i < items.len()) {
                Arc::make_mut(items).remove(i);
            }
        }
        Value::Map(map) => {
            let field = key.as_field();
            if map.has(&field) {
                Arc::make_mut(map).delete(&field);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup() {
        let list = Value::from(json!(["a", "b"]));
        assert_eq!(lookup(&list, &Key::Index(1)), Some(&Value::from("b")));
        assert_eq!(lookup(&list, &Key::field("1")), Some(&Value::from("b")));
        assert_eq!(lookup(&list, &Key::Index(2)), None);
        assert_eq!(lookup(&list, &Key::field("length")), None);

        let map = Value::from(json!({"a": 1, "0": 2}));
        assert_eq!(lookup(&map, &Key::field("a")), Some(&Value::Int(1)));
        assert_eq!(lookup(&map, &Key::Index(0)), Some(&Value::Int(2)));

        assert_eq!(lookup(&Value::from("abc"), &Key::Index(0)), None);
    }

    #[test]
    fn test_take_and_assign() {
        let mut map = Value::from(json!({"a": [1]}));
        let child = take(&mut map, &Key::field("a"));
        assert_eq!(child, Value::from(json!([1])));
        assert_eq!(take(&mut map, &Key::field("missing")), Value::Undefined);

        assign(&mut map, &Key::field("a"), Value::Int(5));
        assert_eq!(map, Value::from(json!({"a": 5})));
    }

    #[test]
    fn test_assign_grows_list_with_holes() {
        let mut list = Value::from(json!(["a"]));
        assign(&mut list, &Key::Index(3), Value::from("d"));
        assert_eq!(
            list,
            Value::list([
                Value::from("a"),
                Value::Undefined,
                Value::Undefined,
                Value::from("d"),
            ])
        );
    }

    #[test]
    fn test_assign_caps_list_growth() {
        let mut list = Value::from(json!(["a"]));
        assign(&mut list, &Key::Index(1 + MAX_LIST_GAP), Value::from("last"));
        assert_eq!(list.as_list().map(Vec::len), Some(2 + MAX_LIST_GAP));

        let mut list = Value::from(json!(["a"]));
        assign(&mut list, &Key::Index(2 + MAX_LIST_GAP), Value::from("far"));
        assign(&mut list, &Key::Index(100_000_000_000_000), Value::from("farther"));
        assert_eq!(list, Value::from(json!(["a"])));
    }

    #[test]
    fn test_assign_named_key_on_list_is_ignored() {
        let mut list = Value::from(json!([1]));
        assign(&mut list, &Key::field("name"), Value::Int(2));
        assert_eq!(list, Value::from(json!([1])));
    }

    #[test]
    fn test_delete() {
        let mut list = Value::from(json!(["top", "middle", "level"]));
        delete(&mut list, &Key::Index(0));
        assert_eq!(list, Value::from(json!(["middle", "level"])));
        delete(&mut list, &Key::Index(9));
        assert_eq!(list, Value::from(json!(["middle", "level"])));

        let mut map = Value::from(json!({"a": 1, "b": 2}));
        delete(&mut map, &Key::field("a"));
        assert_eq!(map, Value::from(json!({"b": 2})));
    }
}
