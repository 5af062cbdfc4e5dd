use clap::Parser;
use jsontree::{Node, NodeRef, Object};
use std::{fs, io, process::exit};

/// Build and print a small JSON record
#[derive(Debug, Parser, PartialEq)]
#[command(version)]
struct Args {
  /// Spaces per indent level, 0 prints a single line
  #[arg(long, default_value_t = 4)]
  indent: usize,

  /// Write the rendered record to FILE instead of stdout
  #[arg(long, value_name = "FILE")]
  output: Option<String>,
}

fn main() -> io::Result<()> {
  run(Args::parse())
}

fn run(args: Args) -> io::Result<()> {
  let root = create_record();

  for key in ["Name", "City", "Other"] {
    match root.find_str(key) {
      Ok(Some(value)) => println!("Key: {} | Value: {}", key, value),
      Ok(None) => println!("Key: {} | no value", key),
      Err(e) => {
        eprintln!("{}", e);
        exit(1);
      }
    }
  }

  match root.serialize(args.indent) {
    Ok(text) => {
      let output = text + "\n";
      if let Some(path) = args.output.as_ref() {
        fs::write(path, output)?;
      } else {
        println!("-------- JSON structure --------");
        print!("{}", output);
      }
    }
    Err(e) => {
      eprintln!("{}", e);
      exit(1);
    }
  }

  Ok(())
}

fn create_record() -> NodeRef {
  let mut record = Object::new();
  record.set("Name", Node::string("John Doe"));
  record.set("City", Node::string("New York"));
  NodeRef::from(Node::Object(record))
}
