//! # cowpath
//!
//! Path-addressed reads and copy-on-write updates for nested JSON-like
//! values.
//!
//! Every update takes the value it works on and returns the updated value.
//! Only the containers along the addressed path are copied, and only when
//! something else still holds them; everything off the path is shared with
//! the input. A handle kept from before the update never observes a change.
//!
//! ```
//! use cowpath::{get, set, Value};
//! use serde_json::json;
//!
//! let before = Value::from(json!({"user": {"name": "ada"}, "tags": ["a"]}));
//! let after = set("user.email", "ada@example.com", before.clone());
//!
//! assert_eq!(get("user.email", &after), Some(Value::from("ada@example.com")));
//! assert_eq!(get("user.email", &before), None);
//! assert!(get("tags", &after).unwrap().ptr_eq(&get("tags", &before).unwrap()));
//! ```
//!
//! ## Modules
//!
//! - [`value`] - The value model and the container shape rules
//! - [`path`] - Keys, paths and the path string parser
//! - [`traverse`] - Reading along a path and copy-on-write writing along it
//! - [`merge`] - Deep merge of two values
//! - [`ops`] - The public operations and their partially applied forms

pub mod error;
pub mod merge;
pub mod ops;
pub mod path;
pub mod traverse;
pub mod value;

pub use error::{Error, Result};
pub use merge::deep_merge;
pub use ops::{add, at, get, has, merge, remove, set, within, At, Pending, Within};
pub use path::{normalize, Key, Path, PathError};
pub use value::{Map, Pattern, Shape, Value};
