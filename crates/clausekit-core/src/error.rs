//! Error types for clausekit.

use std::fmt;

/// The main error type for clausekit operations.
#[derive(Debug)]
pub enum Error {
    /// Serialized filter text is not a well-formed clause list
    Decode(serde_json::Error),

    /// Clause log could not be encoded
    Encode(serde_json::Error),

    /// A decoded clause names an operation outside the known set.
    ///
    /// Only raised under `UnknownOperationPolicy::Reject`; the default
    /// policy skips such clauses.
    UnknownOperation(String),

    /// Input rejected by a configured limit
    InvalidInput(String),

    /// Logging subscriber could not be installed
    Logging(String),

    /// I/O error
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Decode(e) => write!(f, "Decode error: {}", e),
            Error::Encode(e) => write!(f, "Encode error: {}", e),
            Error::UnknownOperation(name) => write!(f, "Unknown operation: {}", name),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Error::Logging(msg) => write!(f, "Logging error: {}", msg),
            Error::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Decode(e) | Error::Encode(e) => Some(e),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

/// A specialized `Result` type for clausekit operations.
pub type Result<T> = std::result::Result<T, Error>;
