//! Path module - Keys and paths addressing nested values.
//!
//! A path is either given as a key list, used as-is, or as a string parsed
//! with [`Path::parse`].

mod key;
mod parse;
mod path;

pub use key::*;
pub use parse::PathError;
pub use path::*;

/// Turns any path argument into a [`Path`].
///
/// `()`, `None`, `""` and empty key lists all normalize to the empty path,
/// which callers treat as "the whole value".
pub fn normalize(path: impl Into<Path>) -> Path {
    path.into()
}
