use thiserror::Error;

use crate::types::{ActiveMount, ErrorKind, MountError};

pub mod map;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("mount table unavailable: {0}")]
    TableUnavailable(String),
    #[error("scan failed: {0}")]
    ScanFailed(String),
    #[error("malformed entry: {0}")]
    MalformedEntry(String),
    #[error("active mounts unavailable: {0}")]
    ShowUnavailable(String),
    /// Reading the active-mounts listing stopped part-way; `mounts` were read before it.
    #[error("scan failed: {msg}")]
    PartialListing { mounts: Vec<ActiveMount>, msg: String },
    #[error(transparent)]
    Mount(#[from] MountError),
    #[error("{0:?}: unexpected")]
    Unexpected(Vec<String>),
}

impl ApiError {
    /// Stable identifier for this error.
    #[must_use]
    pub const fn id(&self) -> ErrorId {
        match self {
            ApiError::TableUnavailable(_) => ErrorId::E_TABLE,
            ApiError::ScanFailed(_) => ErrorId::E_SCAN,
            ApiError::MalformedEntry(_) => ErrorId::E_MALFORMED,
            ApiError::ShowUnavailable(_) => ErrorId::E_SHOW,
            ApiError::PartialListing { .. } => ErrorId::E_SCAN,
            ApiError::Mount(e) => map::map_mount_error(e),
            ApiError::Unexpected(_) => ErrorId::E_USAGE,
        }
    }
}

impl From<crate::types::errors::Error> for ApiError {
    fn from(e: crate::types::errors::Error) -> Self {
        match e.kind {
            ErrorKind::Io => ApiError::TableUnavailable(e.msg),
            ErrorKind::Scan => ApiError::ScanFailed(e.msg),
            ErrorKind::Malformed => ApiError::MalformedEntry(e.msg),
        }
    }
}

// Stable identifiers emitted in facts and mapped to exit codes.
// We intentionally keep SCREAMING_SNAKE_CASE to match emitted IDs.
#[allow(non_camel_case_types, reason = "Error IDs are emitted verbatim")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorId {
    E_USAGE,
    E_TABLE,
    E_SCAN,
    E_MALFORMED,
    E_SHOW,
    E_MOUNT,
    E_NO_CANDIDATES,
    E_GENERIC,
}

#[must_use]
pub const fn id_str(id: ErrorId) -> &'static str {
    match id {
        ErrorId::E_USAGE => "E_USAGE",
        ErrorId::E_TABLE => "E_TABLE",
        ErrorId::E_SCAN => "E_SCAN",
        ErrorId::E_MALFORMED => "E_MALFORMED",
        ErrorId::E_SHOW => "E_SHOW",
        ErrorId::E_MOUNT => "E_MOUNT",
        ErrorId::E_NO_CANDIDATES => "E_NO_CANDIDATES",
        ErrorId::E_GENERIC => "E_GENERIC",
    }
}

/// Exit codes follow mount(8): 1 usage, 2 system error, 32 mount failure.
#[must_use]
pub const fn exit_code_for(id: ErrorId) -> i32 {
    match id {
        ErrorId::E_USAGE | ErrorId::E_GENERIC => 1,
        ErrorId::E_TABLE | ErrorId::E_SCAN | ErrorId::E_MALFORMED | ErrorId::E_SHOW => 2,
        ErrorId::E_MOUNT | ErrorId::E_NO_CANDIDATES => 32,
    }
}
