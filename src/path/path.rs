//! Path type.

use super::key::Key;
use super::parse::{parse_keys, PathError};
use std::str::FromStr;

/// Path represents a complete path to a nested value.
///
/// The empty path addresses the whole value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path {
    keys: Vec<Key>,
}

impl Path {
    /// Creates a new empty path.
    pub fn new() -> Self {
        Path { keys: Vec::new() }
    }

    /// Creates a path from a vector of keys, as-is.
    pub fn from_keys(keys: Vec<Key>) -> Self {
        Path { keys }
    }

    /// Parses a path string such as `a[0].b` or `a["b c"]`.
    ///
    /// Parsing is lenient: an unterminated quote takes the rest of the input
    /// and stray brackets act as separators. Use [`str::parse`] to reject
    /// such input instead.
    pub fn parse(input: &str) -> Self {
        // Lenient parsing cannot fail.
        Path {
            keys: parse_keys(input, false).unwrap_or_default(),
        }
    }

    /// Returns the number of keys in the path.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the path is empty, i.e. addresses the whole value.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns an iterator over the keys.
    pub fn iter(&self) -> impl Iterator<Item = &Key> {
        self.keys.iter()
    }

    /// Appends a key.
    pub fn push(&mut self, key: Key) {
        self.keys.push(key);
    }

    /// Removes and returns the last key.
    pub fn pop(&mut self) -> Option<Key> {
        self.keys.pop()
    }

    /// Returns the last key.
    pub fn last(&self) -> Option<&Key> {
        self.keys.last()
    }

    /// Creates a new path with the given key appended.
    pub fn with(&self, key: Key) -> Self {
        let mut new_path = self.clone();
        new_path.push(key);
        new_path
    }

    /// Returns a slice of the keys.
    pub fn as_slice(&self) -> &[Key] {
        &self.keys
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_keys(s, true).map(Path::from_keys)
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Path::parse(s)
    }
}

impl From<String> for Path {
    fn from(s: String) -> Self {
        Path::parse(&s)
    }
}

impl From<&String> for Path {
    fn from(s: &String) -> Self {
        Path::parse(s)
    }
}

impl From<usize> for Path {
    fn from(i: usize) -> Self {
        Path::from_keys(vec![Key::Index(i)])
    }
}

impl From<Key> for Path {
    fn from(key: Key) -> Self {
        Path::from_keys(vec![key])
    }
}

impl From<Vec<Key>> for Path {
    fn from(keys: Vec<Key>) -> Self {
        Path::from_keys(keys)
    }
}

impl From<&[Key]> for Path {
    fn from(keys: &[Key]) -> Self {
        Path::from_keys(keys.to_vec())
    }
}

impl<const N: usize> From<[Key; N]> for Path {
    fn from(keys: [Key; N]) -> Self {
        Path::from_keys(keys.into())
    }
}

impl From<&Path> for Path {
    fn from(path: &Path) -> Self {
        path.clone()
    }
}

impl From<()> for Path {
    fn from(_: ()) -> Self {
        Path::new()
    }
}

impl<T: Into<Path>> From<Option<T>> for Path {
    fn from(path: Option<T>) -> Self {
        path.map_or_else(Path::new, Into::into)
    }
}

impl FromIterator<Key> for Path {
    fn from_iter<T: IntoIterator<Item = Key>>(iter: T) -> Self {
        Path {
            keys: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Path {
    type Item = Key;
    type IntoIter = std::vec::IntoIter<Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Key;
    type IntoIter = std::slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 && !key.is_bracketed() {
                write!(f, ".")?;
            }
            write!(f, "{}", key)?;
        }
        Ok(())
    }
}
