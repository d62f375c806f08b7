//! Merge module - Deep merging of values.

mod deep;

pub use deep::*;
