//! Value module - In-memory representation of JSON/YAML-like values.
//!
//! This module provides the value model and the shape rules the traversal
//! engine relies on.

mod shape;
mod value;

pub use shape::*;
pub use value::*;
