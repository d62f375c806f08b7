//! Copy-on-write traversal.

use crate::path::Key;
use crate::value::{detach, ensured_container, new_empty_container, Value};

use super::slot::{assign, take};

/// Applies `on_match` to the container the last key addresses into and
/// returns the updated root.
///
/// Only containers on the path are touched. Each of them that is shared
/// with another handle is shallow-cloned before it changes, so whoever holds
/// the previous value keeps seeing it unchanged, and every subtree off the
/// path stays shared between the old and new value. Missing or mismatched
/// intermediate values are replaced with an empty container of the shape
/// the following key implies. A root that is not a container, or a list
/// root addressed by a key with no list position, is replaced the same
/// way.
///
/// An empty key list returns `root` unchanged.
pub fn write_at<F>(keys: &[Key], root: Value, on_match: F) -> Value
where
    F: FnOnce(&mut Value, &Key),
{
    let Some(first) = keys.first() else {
        return root;
    };

    let mut top = if holds_slot(&root, first) {
        root
    } else {
        tracing::trace!(found = root.type_name(), key = %first, "replacing root");
        new_empty_container(first)
    };

    tracing::trace!(depth = keys.len(), "write traversal");
    visit(&mut top, keys, on_match);
    top
}

/// Lists have no named slots, so only keys with a list position reach into
/// them.
fn holds_slot(container: &Value, key: &Key) -> bool {
    match container {
        Value::List(_) => key.as_index().is_some(),
        Value::Map(_) => true,
        _ => false,
    }
}

fn visit<F>(current: &mut Value, keys: &[Key], on_match: F)
where
    F: FnOnce(&mut Value, &Key),
{
    detach(current);

    match keys {
        [] => {}
        [key] => on_match(current, key),
        [key, rest @ ..] => {
            let mut child = ensured_container(take(current, key), &rest[0]);
            visit(&mut child, rest, on_match);
            assign(current, key, child);
        }
    }
}
