//! Mount table and active-mount records.

use serde::Serialize;
use std::fmt;

/// One parsed line of the static mount table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FstabEntry {
    /// Device, label or pseudo-source (`fs_spec`)
    pub fs_spec: String,
    /// Mount point (`fs_file`)
    pub fs_file: String,
    /// Filesystem type (`fs_vfstype`)
    pub fs_type: String,
    /// Comma-separated mount options (`fs_mntops`)
    pub mnt_opts: String,
}

impl FstabEntry {
    /// Whether `name` names this entry by device or by mount point.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.fs_spec == name || self.fs_file == name
    }
}

/// One line of the kernel's active-mounts listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ActiveMount {
    pub device: String,
    pub mount_point: String,
    pub fs_type: String,
    pub options: String,
}

impl fmt::Display for ActiveMount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {} type {}({})",
            self.device, self.mount_point, self.fs_type, self.options
        )
    }
}
