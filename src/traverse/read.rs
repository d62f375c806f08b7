//! Read traversal.

use super::slot::lookup;
use crate::path::Key;
use crate::value::Value;

/// Returns the value at `keys` inside `root`, or `None` when nothing is
/// there.
///
/// Every intermediate value must be truthy for the walk to continue, and a
/// slot holding `Undefined` reads as absent. An empty key list reads
/// nothing; callers handle the whole-value case themselves.
pub fn read_at<'a>(keys: &[Key], root: &'a Value) -> Option<&'a Value> {
    if let [key] = keys {
        return if root.is_truthy() {
            defined(lookup(root, key))
        } else {
            None
        };
    }

    let (parent, key) = resolve_parent(keys, root)?;
    defined(lookup(parent, key))
}

/// Returns true if [`read_at`] finds a value.
pub fn has_at(keys: &[Key], root: &Value) -> bool {
    read_at(keys, root).is_some()
}

/// Walks all but the last key, returning the container the last key
/// addresses into together with that key.
fn resolve_parent<'a, 'k>(keys: &'k [Key], root: &'a Value) -> Option<(&'a Value, &'k Key)> {
    let (last, init) = keys.split_last()?;
    if !root.is_truthy() {
        return None;
    }

    let mut current = root;
    for (depth, key) in init.iter().enumerate() {
        match lookup(current, key).filter(|child| child.is_truthy()) {
            Some(child) => current = child,
            None => {
                tracing::trace!(depth, %key, "read traversal found no match");
                return None;
            }
        }
    }
    Some((current, last))
}

fn defined(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_undefined())
}
