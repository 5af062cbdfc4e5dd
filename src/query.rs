use crate::error::{Error, Result};
use crate::node::Node::{self, Array, Bool, Null, Number, Object, String};
use crate::node::NodeRef;
use crate::object;

impl Node {
  pub fn type_name(&self) -> &'static str {
    match self {
      Null => "null",
      Bool(_) => "boolean",
      Number(_) => "number",
      String(_) => "string",
      Array(_) => "array",
      Object(_) => "object",
    }
  }

  pub fn as_bool(&self) -> Option<bool> {
    match self {
      Bool(b) => Some(*b),
      _ => None,
    }
  }

  pub fn as_number(&self) -> Option<f64> {
    match self {
      Number(n) => Some(*n),
      _ => None,
    }
  }

  pub fn as_str(&self) -> Option<&str> {
    match self {
      String(s) => Some(s),
      _ => None,
    }
  }

  pub fn as_array(&self) -> Option<&[NodeRef]> {
    match self {
      Array(children) => Some(children),
      _ => None,
    }
  }

  pub fn as_object(&self) -> Option<&object::Object> {
    match self {
      Object(table) => Some(table),
      _ => None,
    }
  }

  pub fn as_object_mut(&mut self) -> Option<&mut object::Object> {
    match self {
      Object(table) => Some(table),
      _ => None,
    }
  }

  /// Looks up the string value stored under `key`.
  ///
  /// Absence is not an error: a missing key comes back as `Ok(None)`. An
  /// error means this node is not an object, or the key holds a non-string.
  pub fn find_str(&self, key: &str) -> Result<Option<&str>> {
    let table = match self {
      Object(table) => table,
      other => {
        return Err(Error::TypeMismatch {
          expected: "object",
          found: other.type_name(),
        })
      }
    };

    match table.get(key) {
      None => Ok(None),
      Some(child) => match child.as_ref() {
        String(s) => Ok(Some(s)),
        other => Err(Error::TypeMismatch {
          expected: "string",
          found: other.type_name(),
        }),
      },
    }
  }
}
