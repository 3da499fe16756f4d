use std::path::PathBuf;

use crate::constants::{AUTO_FSTYPE, ENV_FILESYSTEMS, ENV_FSTAB, ENV_MOUNTS};

use super::types::{CommentRule, Paths};

/// Policy governs where Mountyard reads its resources and how it parses them.
#[derive(Clone, Debug)]
pub struct Policy {
    pub paths: Paths,
    pub comments: CommentRule,
    /// Type used when a request or table entry leaves the type empty.
    pub default_fstype: String,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            paths: Paths::default(),
            comments: CommentRule::Anywhere,
            default_fstype: AUTO_FSTYPE.to_string(),
        }
    }
}

impl Policy {
    /// Construct a Policy from the defaults, overridden by `MOUNTYARD_FSTAB`,
    /// `MOUNTYARD_FILESYSTEMS` and `MOUNTYARD_MOUNTS` when set and non-empty.
    ///
    /// # Example
    /// ```rust
    /// use mountyard::policy::Policy;
    /// let policy = Policy::from_env();
    /// # let _ = policy;
    /// ```
    #[must_use]
    pub fn from_env() -> Self {
        let mut p = Self::default();
        p.apply_env();
        p
    }

    /// Mutate this Policy with any environment overrides; see `from_env()`.
    pub fn apply_env(&mut self) -> &mut Self {
        if let Some(v) = env_path(ENV_FSTAB) {
            self.paths.fstab = v;
        }
        if let Some(v) = env_path(ENV_FILESYSTEMS) {
            self.paths.filesystems = v;
        }
        if let Some(v) = env_path(ENV_MOUNTS) {
            self.paths.mounts = v;
        }
        self
    }

    /// Construct a Policy that reads all three resources from under `root`
    /// (`etc/fstab`, `proc/filesystems`, `proc/mounts`).
    #[must_use]
    pub fn rooted_at(root: &std::path::Path) -> Self {
        Self {
            paths: Paths {
                fstab: root.join("etc/fstab"),
                filesystems: root.join("proc/filesystems"),
                mounts: root.join("proc/mounts"),
            },
            ..Self::default()
        }
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
