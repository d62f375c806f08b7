//! Path keys.

use std::borrow::Cow;
use std::fmt;

/// Largest list position a digit token or a numeric field name addresses.
/// Larger numbers stay field names.
pub const MAX_INDEX: usize = 4_294_967_294;

/// Key represents one level of path navigation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Position in a list. Implies a list when a container is synthesized.
    Index(usize),
    /// Name of a map field, including quoted names that look numeric.
    /// Implies a map when a container is synthesized.
    Field(String),
}

impl Key {
    /// Creates a new index key.
    pub fn index(i: usize) -> Self {
        Key::Index(i)
    }

    /// Creates a new field key.
    pub fn field(name: impl Into<String>) -> Self {
        Key::Field(name.into())
    }

    /// Returns true if this key addresses a list slot.
    pub fn is_sequence_key(&self) -> bool {
        matches!(self, Key::Index(_))
    }

    /// Returns the list position this key addresses.
    ///
    /// Field names in canonical decimal form (`"0"`, `"12"`, not `"01"`)
    /// address a position as well.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(i) => Some(*i),
            Key::Field(name) => canonical_index(name),
        }
    }

    /// Returns the map field name this key addresses. Indexes address the
    /// field named by their decimal form.
    pub fn as_field(&self) -> Cow<'_, str> {
        match self {
            Key::Index(i) => Cow::Owned(i.to_string()),
            Key::Field(name) => Cow::Borrowed(name),
        }
    }

    /// Returns true if the key displays in brackets rather than as a bare
    /// field name.
    pub(crate) fn is_bracketed(&self) -> bool {
        match self {
            Key::Index(_) => true,
            Key::Field(name) => !is_bare(name),
        }
    }

    /// Classifies an unquoted path token.
    pub(crate) fn from_token(token: String) -> Key {
        if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
            if let Some(i) = token.parse::<usize>().ok().filter(|i| *i <= MAX_INDEX) {
                return Key::Index(i);
            }
        }
        Key::Field(token)
    }
}

fn canonical_index(name: &str) -> Option<usize> {
    let bytes = name.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    name.parse::<usize>().ok().filter(|i| *i <= MAX_INDEX)
}

impl From<usize> for Key {
    fn from(i: usize) -> Self {
        Key::Index(i)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Field(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Field(name)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "[{}]", i),
            Key::Field(name) if is_bare(name) => write!(f, "{}", name),
            Key::Field(name) => {
                let quote = ['"', '\'', '`']
                    .into_iter()
                    .find(|q| !name.contains(*q))
                    .unwrap_or('"');
                write!(f, "[{}", quote)?;
                for c in name.chars() {
                    if c == quote || c == '\\' {
                        write!(f, "\\")?;
                    }
                    write!(f, "{}", c)?;
                }
                write!(f, "{}]", quote)
            }
        }
    }
}

/// A field name that re-parses to itself without quoting.
fn is_bare(name: &str) -> bool {
    !name.is_empty()
        && !name.bytes().all(|b| b.is_ascii_digit())
        && !name.contains(['.', '[', ']', '"', '\'', '`'])
}
