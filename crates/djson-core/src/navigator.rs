//! Path resolution and in-place mutation.
//!
//! Every operation walks the path from the root, one segment at a time:
//!
//! 1. The current node must be an array or an object, otherwise the walk fails
//!    with [`DjsonError::LeafNode`].
//! 2. Arrays parse the segment as an index, objects look it up as a key.
//! 3. After the last segment the located value is returned (`get`) or its
//!    parent container is mutated (`set`, `delete`).
//!
//! `set` and `delete` split the path at its last `.` and resolve the parent
//! first, producing a [`Slot`]: a mutable borrow of the parent container plus
//! the terminal segment. Writing through the slot writes into the document
//! itself. Nothing is mutated until the terminal step has resolved, so a failed
//! call leaves the document exactly as it was.
//!
//! The borrow checker enforces the invalidation rule for location handles: a
//! `&mut Value` or `Slot` obtained from a document must be released before any
//! other path can be resolved against it.

use crate::error::{DjsonError, Result};
use crate::path::{parse_index, parse_removal_index, Path};
use crate::value::Value;

impl Value {
    /// Resolve one segment against this node.
    pub fn child(&self, segment: &str) -> Result<&Value> {
        match self {
            Value::Array(items) => {
                let index = parse_index(segment)?;
                items.get(index).ok_or(DjsonError::IndexOutOfRange {
                    index,
                    len: items.len(),
                })
            }
            Value::Object(map) => map.get(segment).ok_or_else(|| key_not_found(segment)),
            leaf => Err(leaf_node(leaf, segment)),
        }
    }

    /// Resolve one segment against this node, mutably.
    pub fn child_mut(&mut self, segment: &str) -> Result<&mut Value> {
        match self {
            Value::Array(items) => {
                let index = parse_index(segment)?;
                let len = items.len();
                items
                    .get_mut(index)
                    .ok_or(DjsonError::IndexOutOfRange { index, len })
            }
            Value::Object(map) => map.get_mut(segment).ok_or_else(|| key_not_found(segment)),
            leaf => Err(leaf_node(leaf, segment)),
        }
    }

    /// See [`get`].
    pub fn get_path(&self, path: &str) -> Result<&Value> {
        get(self, path)
    }

    /// See [`get_mut`].
    pub fn get_path_mut(&mut self, path: &str) -> Result<&mut Value> {
        get_mut(self, path)
    }

    /// See [`set`].
    pub fn set_path(&mut self, path: &str, value: impl Into<Value>) -> Result<Value> {
        set(self, path, value.into())
    }

    /// See [`delete`].
    pub fn delete_path(&mut self, path: &str) -> Result<Value> {
        delete(self, path)
    }
}

fn key_not_found(key: &str) -> DjsonError {
    DjsonError::KeyNotFound {
        key: key.to_owned(),
    }
}

fn leaf_node(leaf: &Value, segment: &str) -> DjsonError {
    DjsonError::LeafNode {
        segment: segment.to_owned(),
        kind: leaf.kind(),
    }
}

/// Look up the value at `path`.
///
/// # Errors
///
/// - [`DjsonError::LeafNode`] if a segment would descend into a scalar
/// - [`DjsonError::IndexParse`] if an array segment is not an index
/// - [`DjsonError::IndexOutOfRange`] if an array index is past the end
/// - [`DjsonError::KeyNotFound`] if an object has no such key
///
/// # Examples
///
/// ```
/// use djson_core::{decode_str, get, Value};
///
/// let doc = decode_str(r#"{"a":{"b":[1,2,3]}}"#).unwrap();
/// assert_eq!(get(&doc, "a.b.1").unwrap(), &Value::from(2));
/// ```
pub fn get<'v>(root: &'v Value, path: &str) -> Result<&'v Value> {
    let mut node = root;
    for segment in Path::parse(path).segments() {
        node = node.child(segment)?;
        log::trace!("resolved '{}' -> {}", segment, node.kind());
    }
    Ok(node)
}

/// Look up the value at `path` and return a mutable handle into the document.
///
/// Writes through the returned reference are visible from `root`. Fails the
/// same way as [`get`].
pub fn get_mut<'v>(root: &'v mut Value, path: &str) -> Result<&'v mut Value> {
    let mut node = root;
    for segment in Path::parse(path).segments() {
        node = node.child_mut(segment)?;
        log::trace!("resolved '{}' -> {}", segment, node.kind());
    }
    Ok(node)
}

/// Resolve the parent of `path` and return a [`Slot`] for its terminal segment.
///
/// Fails with the errors of [`get`] if the parent path does not resolve, and
/// with [`DjsonError::LeafNode`] if the parent is not a container. The
/// terminal segment itself is only checked when the slot is used.
pub fn slot<'v, 'p>(root: &'v mut Value, path: &'p str) -> Result<Slot<'v, 'p>> {
    let (parent_path, terminal) = Path::parse(path).split_last();
    let parent = match parent_path {
        Some(parent_path) => get_mut(root, parent_path.as_str())?,
        None => root,
    };
    Slot::new(parent, terminal)
}

/// Overwrite the existing value at `path`, returning the value it replaced.
///
/// Object keys are never created: a missing key fails with
/// [`DjsonError::KeyNotFound`]. Array indices must be in bounds, otherwise the
/// call fails with [`DjsonError::IndexOutOfRange`].
///
/// # Examples
///
/// ```
/// use djson_core::{decode_str, set, DjsonError, Value};
///
/// let mut doc = decode_str(r#"{"a":1}"#).unwrap();
/// set(&mut doc, "a", Value::from("one")).unwrap();
/// assert_eq!(doc.to_string(), r#"{"a":"one"}"#);
///
/// let err = set(&mut doc, "b", Value::Null).unwrap_err();
/// assert!(matches!(err, DjsonError::KeyNotFound { .. }));
/// ```
pub fn set(root: &mut Value, path: &str, value: Value) -> Result<Value> {
    let old = slot(root, path)?.replace(value)?;
    log::debug!("set '{}' (replaced {})", path, old.kind());
    Ok(old)
}

/// Remove the value at `path` from its parent container and return it.
///
/// Removing an array element shifts every later element one position left.
/// Removing the last member of a container leaves it empty.
///
/// # Examples
///
/// ```
/// use djson_core::{decode_str, delete};
///
/// let mut doc = decode_str("[1,2,3]").unwrap();
/// delete(&mut doc, "0").unwrap();
/// assert_eq!(doc.to_string(), "[2,3]");
/// ```
pub fn delete(root: &mut Value, path: &str) -> Result<Value> {
    let removed = slot(root, path)?.remove()?;
    log::debug!("deleted '{}' ({})", path, removed.kind());
    Ok(removed)
}

/// A location inside a document: its parent container plus the terminal
/// segment that selects the child.
///
/// The slot mutably borrows the parent, so no other handle into the same
/// document can be used while it is alive.
#[derive(Debug)]
pub struct Slot<'v, 'p> {
    parent: &'v mut Value,
    segment: &'p str,
}

impl<'v, 'p> Slot<'v, 'p> {
    fn new(parent: &'v mut Value, segment: &'p str) -> Result<Self> {
        if !parent.is_container() {
            return Err(leaf_node(parent, segment));
        }
        Ok(Self { parent, segment })
    }

    pub fn segment(&self) -> &'p str {
        self.segment
    }

    pub fn parent(&self) -> &Value {
        &*self.parent
    }

    /// The value currently at this location.
    pub fn get(&self) -> Result<&Value> {
        self.parent.child(self.segment)
    }

    pub fn get_mut(&mut self) -> Result<&mut Value> {
        self.parent.child_mut(self.segment)
    }

    /// Overwrite the existing child in place and return the old value.
    pub fn replace(self, value: Value) -> Result<Value> {
        let target = self.parent.child_mut(self.segment)?;
        Ok(std::mem::replace(target, value))
    }

    /// Remove the child from the parent and return it.
    pub fn remove(self) -> Result<Value> {
        match self.parent {
            Value::Array(items) => {
                let index = parse_removal_index(self.segment)?;
                if index >= items.len() {
                    return Err(DjsonError::IndexOutOfRange {
                        index,
                        len: items.len(),
                    });
                }
                Ok(items.remove(index))
            }
            Value::Object(map) => map
                .remove(self.segment)
                .ok_or_else(|| key_not_found(self.segment)),
            leaf => Err(leaf_node(leaf, self.segment)),
        }
    }
}
