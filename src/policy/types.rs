use std::path::PathBuf;

use crate::constants::{COMMENT_CHAR, FSTAB_PATH, PROC_FILESYSTEMS, PROC_MOUNTS};

/// Which mount table lines count as comments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CommentRule {
    /// A `#` anywhere on the line comments out the whole line.
    #[default]
    Anywhere,
    /// Only lines whose first non-blank character is `#`.
    Leading,
}

impl CommentRule {
    #[must_use]
    pub fn is_comment(self, line: &str) -> bool {
        match self {
            CommentRule::Anywhere => line.contains(COMMENT_CHAR),
            CommentRule::Leading => line.trim_start().starts_with(COMMENT_CHAR),
        }
    }
}

/// Locations of the three line-oriented resources the resolver reads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Paths {
    pub fstab: PathBuf,
    pub filesystems: PathBuf,
    pub mounts: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            fstab: PathBuf::from(FSTAB_PATH),
            filesystems: PathBuf::from(PROC_FILESYSTEMS),
            mounts: PathBuf::from(PROC_MOUNTS),
        }
    }
}
