use serde::Serialize;

use super::fstab::ActiveMount;

/// Result of a single mount invocation that did not fail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MountOutcome {
    Mounted {
        device: String,
        target: String,
        fstype: String,
    },
    /// Dry run; nothing reached the kernel. `fstype` is the requested type.
    WouldMount {
        device: String,
        target: String,
        fstype: String,
    },
}

/// Final outcome of resolving a directive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Mounts performed (or described in dry-run), in order.
    Mounted(Vec<MountOutcome>),
    /// Table-lookup mode found no entry with that device or mount point.
    NotInTable(String),
    /// Show mode listing.
    Shown(Vec<ActiveMount>),
}

impl Resolution {
    #[must_use]
    pub fn outcomes(&self) -> &[MountOutcome] {
        match self {
            Resolution::Mounted(v) => v,
            _ => &[],
        }
    }
}
