//! Shared crate-wide constants for Mountyard.
//!
//! Centralizes well-known paths and magic tokens used across modules.
//! Adjusting these here will propagate through the crate.

/// Static mount table consulted by table-lookup and all modes.
pub const FSTAB_PATH: &str = "/etc/fstab";

/// Kernel listing of the filesystem types it can currently mount.
pub const PROC_FILESYSTEMS: &str = "/proc/filesystems";

/// Kernel listing of currently active mounts, read by show mode.
pub const PROC_MOUNTS: &str = "/proc/mounts";

/// Filesystem type that requests auto-detection across the `auto` catalog.
pub const AUTO_FSTYPE: &str = "auto";

/// Marker prefixed to `/proc/filesystems` lines for types that do not need a backing device.
pub const NODEV_MARKER: &str = "nodev";

/// Comment character for the mount table.
pub const COMMENT_CHAR: char = '#';

/// Minimum number of whitespace-separated fields in a mount table or active-mounts line.
pub const MIN_FIELDS: usize = 4;

/// Environment overrides honoured by `Policy::from_env()`.
pub const ENV_FSTAB: &str = "MOUNTYARD_FSTAB";
pub const ENV_FILESYSTEMS: &str = "MOUNTYARD_FILESYSTEMS";
pub const ENV_MOUNTS: &str = "MOUNTYARD_MOUNTS";

/// Subsystem label attached to every emitted fact.
pub const FACTS_SUBSYSTEM: &str = "mountyard";
