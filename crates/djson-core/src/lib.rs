//! # djson-core
//!
//! A dynamically-typed in-memory JSON document plus a dotted-path navigator for
//! reading, overwriting and removing deeply nested values in place.
//!
//! Paths are plain dot-separated segments. A segment selects an array element
//! when the current node is an array (`"items.0"`) and an object member when it
//! is an object (`"user.name"`).
//!
//! ## Quick start
//!
//! ```rust
//! use djson_core::{decode_str, encode, Value};
//!
//! let mut doc = decode_str(r#"{"a":{"b":[1,2,3]},"c":"x"}"#).unwrap();
//!
//! assert_eq!(doc.get_path("a.b.1").unwrap(), &Value::from(2));
//!
//! doc.set_path("a.b.1", Value::from(99)).unwrap();
//! doc.delete_path("a.b.0").unwrap();
//!
//! assert_eq!(encode(&doc), br#"{"a":{"b":[99,3]},"c":"x"}"#.to_vec());
//! ```
//!
//! ## Modules
//!
//! - [`value`]: `Value` tagged union, `Kind`, typed accessors
//! - [`map`]: insertion-ordered `Map` used for object payloads
//! - [`path`]: dotted path splitting and array index parsing
//! - [`navigator`]: `get` / `set` / `delete` and the `Slot` location handle
//! - [`codec`]: bytes ↔ `Value` through serde_json
//! - [`error`]: `DjsonError` and the crate `Result` alias

pub mod codec;
pub mod error;
pub mod map;
pub mod navigator;
pub mod path;
pub mod value;

pub use codec::{decode, decode_str, encode, encode_pretty, encode_with, EncodeStyle};
pub use error::{DjsonError, Result};
pub use map::Map;
pub use navigator::{delete, get, get_mut, set, slot, Slot};
pub use path::Path;
pub use value::{Kind, Value};
