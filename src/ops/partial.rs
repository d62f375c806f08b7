//! Partially applied operations.
//!
//! [`at`] fixes the path first and [`within`] fixes the value first, so an
//! operation can be prepared with whichever argument is known and finished
//! later:
//!
//! ```
//! use cowpath::{at, within, Value};
//! use serde_json::json;
//!
//! let bump = at("count").set(1);
//! let value = bump.apply(Value::empty_map());
//! assert_eq!(value, Value::from(json!({"count": 1})));
//!
//! let value = within(value).set("items[0]", "a").add("items", "b").into_value();
//! assert_eq!(value, Value::from(json!({"count": 1, "items": ["a", "b"]})));
//! ```

use super::operations::{add, get, has, merge, remove, set};
use crate::path::{normalize, Path};
use crate::value::Value;

/// Binds `path`, leaving the value (and operand, for writes) to come.
pub fn at(path: impl Into<Path>) -> At {
    At {
        path: normalize(path),
    }
}

/// Binds `value`, leaving the path (and operand, for writes) to come.
pub fn within(value: impl Into<Value>) -> Within {
    Within {
        value: value.into(),
    }
}

/// An operation with its path bound.
#[derive(Debug, Clone, PartialEq)]
pub struct At {
    path: Path,
}

impl At {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, value: &Value) -> Option<Value> {
        get(&self.path, value)
    }

    pub fn has(&self, value: &Value) -> bool {
        has(&self.path, value)
    }

    pub fn remove(&self, value: Value) -> Value {
        remove(&self.path, value)
    }

    /// Binds the value to store, see [`set`].
    pub fn set(&self, new_value: impl Into<Value>) -> Pending {
        self.pending(Write::Set, new_value.into())
    }

    /// Binds the value to merge in, see [`merge`].
    pub fn merge(&self, to_merge: impl Into<Value>) -> Pending {
        self.pending(Write::Merge, to_merge.into())
    }

    /// Binds the value to append, see [`add`].
    pub fn add(&self, new_value: impl Into<Value>) -> Pending {
        self.pending(Write::Add, new_value.into())
    }

    /// Returns a closure reading this path from any value.
    pub fn getter(&self) -> impl Fn(&Value) -> Option<Value> {
        let path = self.path.clone();
        move |value: &Value| get(&path, value)
    }

    /// Returns a closure storing `new_value` at this path in any value.
    pub fn setter(&self, new_value: impl Into<Value>) -> impl Fn(Value) -> Value {
        let pending = self.set(new_value);
        move |value: Value| pending.apply(value)
    }

    fn pending(&self, write: Write, operand: Value) -> Pending {
        Pending {
            write,
            path: self.path.clone(),
            operand,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Write {
    Set,
    Merge,
    Add,
}

/// A write with its path and operand bound, awaiting the value.
///
/// A `Pending` can be applied any number of times.
#[derive(Debug, Clone, PartialEq)]
pub struct Pending {
    write: Write,
    path: Path,
    operand: Value,
}

impl Pending {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn operand(&self) -> &Value {
        &self.operand
    }

    pub fn apply(&self, value: Value) -> Value {
        let operand = self.operand.clone();
        match self.write {
            Write::Set => set(&self.path, operand, value),
            Write::Merge => merge(&self.path, operand, value),
            Write::Add => add(&self.path, operand, value),
        }
    }
}

/// A value awaiting paths. Writes consume and return the builder so they
/// chain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Within {
    value: Value,
}

impl Within {
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    pub fn get(&self, path: impl Into<Path>) -> Option<Value> {
        get(path, &self.value)
    }

    pub fn has(&self, path: impl Into<Path>) -> bool {
        has(path, &self.value)
    }

    pub fn set(self, path: impl Into<Path>, new_value: impl Into<Value>) -> Within {
        within(set(path, new_value, self.value))
    }

    pub fn remove(self, path: impl Into<Path>) -> Within {
        within(remove(path, self.value))
    }

    pub fn merge(self, path: impl Into<Path>, to_merge: impl Into<Value>) -> Within {
        within(merge(path, to_merge, self.value))
    }

    pub fn add(self, path: impl Into<Path>, new_value: impl Into<Value>) -> Within {
        within(add(path, new_value, self.value))
    }
}

impl From<Within> for Value {
    fn from(within: Within) -> Self {
        within.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_at_matches_full_calls() {
        let value = Value::from(json!({"a": {"b": [1, 2]}}));
        let path = at("a.b");

        assert_eq!(path.get(&value), get("a.b", &value));
        assert_eq!(path.has(&value), has("a.b", &value));
        assert_eq!(path.remove(value.clone()), remove("a.b", value.clone()));
        assert_eq!(path.set(0).apply(value.clone()), set("a.b", 0, value.clone()));
        assert_eq!(path.add(3).apply(value.clone()), add("a.b", 3, value.clone()));
        assert_eq!(
            path.merge(Value::from(json!([3]))).apply(value.clone()),
            merge("a.b", Value::from(json!([3])), value)
        );
    }

    #[test]
    fn test_pending_is_reusable() {
        let append = at("list").add("x");
        let once = append.apply(Value::from(json!({"list": []})));
        let twice = append.apply(once);
        assert_eq!(twice, Value::from(json!({"list": ["x", "x"]})));
        assert_eq!(append.operand(), &Value::from("x"));
    }

    #[test]
    fn test_getter_and_setter_closures() {
        let values = vec![
            Value::from(json!({"name": "a"})),
            Value::from(json!({"other": 1})),
            Value::from(json!({"name": "c"})),
        ];

        let names: Vec<_> = values.iter().filter_map(at("name").getter()).collect();
        assert_eq!(names, vec![Value::from("a"), Value::from("c")]);

        let stamped: Vec<_> = values.into_iter().map(at("seen").setter(true)).collect();
        assert!(stamped.iter().all(|v| has("seen", v)));
    }

    #[test]
    fn test_within_chains_writes() {
        let value = within(Value::empty_map())
            .set("user.name", "ada")
            .set("user.tags[0]", "admin")
            .add("user.tags", "ops")
            .merge("user", Value::from(json!({"active": true})))
            .remove("user.tags[0]")
            .into_value();

        assert_eq!(
            value,
            Value::from(json!({"user": {"name": "ada", "tags": ["ops"], "active": true}}))
        );
    }

    #[test]
    fn test_within_reads() {
        let doc = within(Value::from(json!({"a": [1]})));
        assert_eq!(doc.get("a[0]"), Some(Value::Int(1)));
        assert!(doc.has("a"));
        assert!(!doc.has("b"));
        assert_eq!(doc.get(()), Some(doc.value().clone()));
    }
}
