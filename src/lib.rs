//! In-memory JSON document trees built from reference-counted nodes.
//!
//! A document is a tree of [`Node`]s. Object nodes own an insertion-ordered
//! [`Object`] table of children, and every child is held through the shared
//! [`NodeRef`] handle: cloning a handle retains a node, dropping the last
//! handle releases it and cascades through everything the node owns.
//!
//! ```
//! use jsontree::Node;
//!
//! let mut root = Node::object();
//! let table = root.as_object_mut().unwrap();
//! table.set("Name", Node::string("John Doe"));
//! table.set("City", Node::string("New York"));
//!
//! assert_eq!(root.find_str("Name"), Ok(Some("John Doe")));
//! assert_eq!(root.find_str("Other"), Ok(None));
//!
//! let text = root.serialize(4).unwrap();
//! assert!(text.starts_with("{\n    \"Name\": \"John Doe\""));
//! ```

mod error;
mod format;
mod node;
mod object;
mod query;

pub use error::{Error, Result};
pub use node::{Node, NodeRef};
pub use object::Object;
