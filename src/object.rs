use crate::node::NodeRef;
use indexmap::IndexMap;

/// Ordered key/child table held by an object node.
///
/// Keys are unique and entries keep their insertion order, which is also the
/// order they serialize in. Replacing a key's child keeps the key's original
/// position; removing a key shifts the survivors up without reordering them.
#[derive(Debug, Clone, Default)]
pub struct Object {
  entries: IndexMap<String, NodeRef>,
}

impl Object {
  pub fn new() -> Object {
    Object::default()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn contains_key(&self, key: &str) -> bool {
    self.entries.contains_key(key)
  }

  /// Stores `child` under `key`, taking ownership of the caller's handle.
  /// Accepts a bare `Node` as well as a shared `NodeRef`.
  ///
  /// Returns the child the key previously mapped to, if any; dropping that
  /// handle releases it.
  pub fn set(&mut self, key: impl Into<String>, child: impl Into<NodeRef>) -> Option<NodeRef> {
    self.entries.insert(key.into(), child.into())
  }

  /// Borrows the child for `key`. Absent keys are a normal `None`; a key
  /// mapped to `Node::Null` is present. Clone the returned handle to retain
  /// the child.
  pub fn get(&self, key: &str) -> Option<&NodeRef> {
    self.entries.get(key)
  }

  /// Removes `key`, handing its child back to the caller.
  pub fn remove(&mut self, key: &str) -> Option<NodeRef> {
    self.entries.shift_remove(key)
  }

  /// Entries in insertion order.
  pub fn iter(&self) -> impl Iterator<Item = (&str, &NodeRef)> {
    self.entries.iter().map(|(key, child)| (key.as_str(), child))
  }
}

impl PartialEq for Object {
  fn eq(&self, other: &Object) -> bool {
    self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
  }
}
