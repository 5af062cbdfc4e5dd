use crate::object::Object;
use std::rc::Rc;

/// Shared handle to a node. Cloning a handle retains the node, dropping one
/// releases it; the node and everything it owns are destroyed when the last
/// handle drops.
pub type NodeRef = Rc<Node>;

/// A single value in a document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
  Null,
  Bool(bool),
  Number(f64),
  String(String),
  Array(Vec<NodeRef>),
  Object(Object),
}

impl Node {
  /// New node holding an empty key/child table.
  pub fn object() -> Node {
    Node::Object(Object::new())
  }

  /// New node owning a copy of `text`.
  pub fn string(text: impl Into<String>) -> Node {
    Node::String(text.into())
  }
}
