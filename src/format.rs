use crate::error::{Error, Result};
use crate::node::Node;

impl Node {
  /// Renders the tree as JSON text.
  ///
  /// `indent` is the number of spaces per nesting level; 0 renders the
  /// single-line form. Rendering borrows the tree unchanged, so identical
  /// trees always produce identical text. The only failure is a non-finite
  /// number somewhere in the tree, which yields no text at all.
  pub fn serialize(&self, indent: usize) -> Result<String> {
    let mut buf = String::new();
    self.format(&mut buf, indent, 0)?;
    Ok(buf)
  }

  fn format(&self, buf: &mut String, indent: usize, level: usize) -> Result<()> {
    let print_indent =
      |level: usize, buf: &mut String| (0..indent * level).for_each(|_| buf.push(' '));

    match self {
      Node::Null => buf.push_str("null"),
      Node::Bool(true) => buf.push_str("true"),
      Node::Bool(false) => buf.push_str("false"),
      Node::Number(n) if !n.is_finite() => return Err(Error::NonFiniteNumber(*n)),
      Node::Number(n) => buf.push_str(&n.to_string()),
      Node::String(s) => push_quoted(buf, s),

      Node::Array(children) if children.is_empty() => buf.push_str("[]"),
      Node::Array(children) => {
        buf.push('[');
        for (i, child) in children.iter().enumerate() {
          if indent == 0 {
            if i > 0 {
              buf.push_str(", ");
            }
          } else {
            if i > 0 {
              buf.push(',');
            }
            buf.push('\n');
            print_indent(level + 1, buf);
          }
          child.format(buf, indent, level + 1)?;
        }
        if indent > 0 {
          buf.push('\n');
          print_indent(level, buf);
        }
        buf.push(']');
      }

      Node::Object(table) if table.is_empty() => buf.push_str("{}"),
      Node::Object(table) => {
        buf.push('{');
        for (i, (key, child)) in table.iter().enumerate() {
          if indent == 0 {
            if i > 0 {
              buf.push_str(", ");
            }
          } else {
            if i > 0 {
              buf.push(',');
            }
            buf.push('\n');
            print_indent(level + 1, buf);
          }
          push_quoted(buf, key);
          buf.push_str(": ");
          child.format(buf, indent, level + 1)?;
        }
        if indent > 0 {
          buf.push('\n');
          print_indent(level, buf);
        }
        buf.push('}');
      }
    }

    Ok(())
  }
}

fn push_quoted(buf: &mut String, text: &str) {
  buf.push('"');
  for ch in text.chars() {
    match ch {
      '"' => buf.push_str("\\\""),
      '\\' => buf.push_str("\\\\"),
      '\x08' => buf.push_str("\\b"),
      '\x0c' => buf.push_str("\\f"),
      '\n' => buf.push_str("\\n"),
      '\r' => buf.push_str("\\r"),
      '\t' => buf.push_str("\\t"),
      c if c < '\x20' => buf.push_str(&format!("\\u{:04x}", c as u32)),
      c => buf.push(c),
    }
  }
  buf.push('"');
}

#[cfg(test)]
mod tests {
  use crate::error::Error;
  use crate::node::{Node, NodeRef};
  use crate::object::Object;

  fn shared(node: Node) -> NodeRef {
    NodeRef::from(node)
  }

  fn record() -> Node {
    let mut table = Object::new();
    table.set("Name", Node::string("John Doe"));
    table.set("City", Node::string("New York"));
    Node::Object(table)
  }

  #[test]
  fn scalars() {
    let tests = vec![
      (Node::Null, "null"),
      (Node::Bool(true), "true"),
      (Node::Bool(false), "false"),
      (Node::Number(1.0), "1"),
      (Node::Number(-2.5), "-2.5"),
      (Node::Number(0.0), "0"),
      (Node::string("hello"), r#""hello""#),
      (Node::string(""), r#""""#),
    ];

    for (node, expected) in tests {
      assert_eq!(node.serialize(4).as_deref(), Ok(expected), "node: {:?}", node);
    }
  }

  #[test]
  fn strings_escape_quotes_backslashes_and_controls() {
    let tests = vec![
      ("say \"hi\"", r#""say \"hi\"""#),
      ("back\\slash", r#""back\\slash""#),
      ("line\nbreak", r#""line\nbreak""#),
      ("tab\there", r#""tab\there""#),
      ("ret\rurn", r#""ret\rurn""#),
      ("\x08\x0c", r#""\b\f""#),
      ("\x01\x1f", r#""\u0001\u001f""#),
      ("ünïcødé ok", r#""ünïcødé ok""#),
    ];

    for (text, expected) in tests {
      assert_eq!(Node::string(text).serialize(0).as_deref(), Ok(expected));
    }
  }

  #[test]
  fn empty_containers() {
    assert_eq!(Node::object().serialize(4).as_deref(), Ok("{}"));
    assert_eq!(Node::object().serialize(0).as_deref(), Ok("{}"));
    assert_eq!(Node::Array(vec![]).serialize(4).as_deref(), Ok("[]"));
    assert_eq!(Node::Array(vec![]).serialize(0).as_deref(), Ok("[]"));
  }

  #[test]
  fn record_pretty_printed_with_indent_4() {
    assert_eq!(
      record().serialize(4).as_deref(),
      Ok(
        r#"{
    "Name": "John Doe",
    "City": "New York"
}"#
      )
    );
  }

  #[test]
  fn record_single_line_with_indent_0() {
    assert_eq!(
      record().serialize(0).as_deref(),
      Ok(r#"{"Name": "John Doe", "City": "New York"}"#)
    );
  }

  #[test]
  fn nested_containers_indent_2() {
    let mut table = Object::new();
    table.set("a", Node::string("hello"));
    table.set(
      "b",
      Node::Array(vec![
        shared(Node::Number(1.0)),
        shared(Node::Number(2.0)),
        shared(Node::Bool(false)),
      ]),
    );
    let node = Node::Object(table);

    assert_eq!(
      node.serialize(2).as_deref(),
      Ok(
        r#"{
  "a": "hello",
  "b": [
    1,
    2,
    false
  ]
}"#
      )
    );

    assert_eq!(
      node.serialize(0).as_deref(),
      Ok(r#"{"a": "hello", "b": [1, 2, false]}"#)
    );
  }

  #[test]
  fn array_root_indent_2() {
    let mut inner = Object::new();
    inner.set("i", Node::string("x"));
    let node = Node::Array(vec![
      shared(Node::string("a")),
      shared(Node::Null),
      shared(Node::Object(inner)),
      shared(Node::Number(-1.5)),
    ]);

    assert_eq!(
      node.serialize(2).as_deref(),
      Ok(
        r#"[
  "a",
  null,
  {
    "i": "x"
  },
  -1.5
]"#
      )
    );
  }

  #[test]
  fn keys_are_escaped_like_values() {
    let mut table = Object::new();
    table.set("needs \"quotes\"", Node::Null);
    assert_eq!(
      Node::Object(table).serialize(0).as_deref(),
      Ok(r#"{"needs \"quotes\"": null}"#)
    );
  }

  #[test]
  fn rendering_is_deterministic() {
    let root = NodeRef::from(record());
    assert_eq!(root.serialize(4), root.serialize(4));
    assert_eq!(root.serialize(0), root.serialize(0));
  }

  #[test]
  fn non_finite_numbers_fail_with_no_text() {
    let err = Node::Number(f64::NAN).serialize(4).unwrap_err();
    assert!(matches!(err, Error::NonFiniteNumber(n) if n.is_nan()));

    let mut table = Object::new();
    table.set("ok", Node::string("fine"));
    table.set("bad", Node::Number(f64::INFINITY));
    assert_eq!(
      Node::Object(table).serialize(4),
      Err(Error::NonFiniteNumber(f64::INFINITY))
    );
  }
}
