use std::fmt;

/// Error type for document operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
  /// Expected a node of one type but found another.
  TypeMismatch {
    expected: &'static str,
    found: &'static str,
  },
  /// Number is NaN or infinite and has no JSON text form.
  NonFiniteNumber(f64),
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Error::TypeMismatch { expected, found } => {
        write!(f, "expected {expected}, found {found}")
      }
      Error::NonFiniteNumber(n) => write!(f, "cannot render non-finite number {n}"),
    }
  }
}

impl std::error::Error for Error {}

/// Result type alias for document operations.
pub type Result<T> = std::result::Result<T, Error>;
