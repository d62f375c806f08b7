//! Ops module - The public get/has/set/remove/merge/add operations.
//!
//! Writes take the value by ownership and return the updated value. Handing
//! over the only handle lets the root be updated where it lives; keeping a
//! clone keeps that clone exactly as it was.

mod operations;
mod partial;


pub use operations::*;
pub use partial::*;
