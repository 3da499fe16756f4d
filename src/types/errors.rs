//! Error types used across Mountyard.
use thiserror::Error;

use crate::constants::MIN_FIELDS;

/// High-level error categories for resource reading and parsing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("io error")]
    Io,
    #[error("scan error")]
    Scan,
    #[error("malformed entry")]
    Malformed,
}

/// Structured error with a kind and human message.
#[derive(Debug, Error)]
#[error("{kind}: {msg}")]
pub struct Error {
    pub kind: ErrorKind,
    pub msg: String,
}

impl Error {
    pub(crate) fn io(path: &std::path::Path, e: &std::io::Error) -> Self {
        Self {
            kind: ErrorKind::Io,
            msg: format!("{}: {e}", path.display()),
        }
    }

    pub(crate) fn scan(path: &std::path::Path, e: &std::io::Error) -> Self {
        Self {
            kind: ErrorKind::Scan,
            msg: format!("{}: {e}", path.display()),
        }
    }

    pub(crate) fn malformed(lineno: usize, line: &str, found: usize) -> Self {
        Self {
            kind: ErrorKind::Malformed,
            msg: format!(
                "line {lineno}: expected at least {MIN_FIELDS} fields, found {found}: {line:?}"
            ),
        }
    }
}

/// Convenient alias for results returning a `types::Error`.
pub type Result<T> = std::result::Result<T, Error>;
