//! Traverse module - Walking values along a path.
//!
//! Reads follow the path without cloning anything. Writes rebuild only the
//! containers on the path and share everything else with the input.

mod read;
mod slot;
mod write;

pub use read::*;
pub use slot::{assign, delete, lookup, take};
pub use write::*;
