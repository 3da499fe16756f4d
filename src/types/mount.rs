//! Data-only mount types used across the crate.

use std::fmt;

/// Raw kernel mount-flag bitmask (`MS_*` bits) handed to `mount(2)`.
/// Centralized under `crate::types` for cross-layer reuse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MountFlags(u64);

impl MountFlags {
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn contains(self, bits: u64) -> bool {
        self.0 & bits == bits
    }

    pub fn set(&mut self, bits: u64) {
        self.0 |= bits;
    }

    pub fn clear(&mut self, bits: u64) {
        self.0 &= !bits;
    }
}

impl fmt::Display for MountFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// A mount request with every input fixed, including the final bitmask.
/// Built once per invocation and reused unchanged for every candidate type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMount<'a> {
    /// Requested type: a single type, a comma-separated list, or `auto`.
    pub fstype: &'a str,
    pub device: &'a str,
    pub target: &'a str,
    pub flags: MountFlags,
    pub data: &'a str,
    pub verbose: bool,
    pub dry_run: bool,
}

/// Error types for mount operations.
/// Centralized under `crate::types` for cross-layer reuse.
#[derive(Debug, thiserror::Error)]
pub enum MountError {
    /// The kernel rejected the last candidate type tried.
    #[error("{device}: {source}")]
    Syscall {
        device: String,
        fstype: String,
        #[source]
        source: std::io::Error,
    },
    /// Auto-detection had nothing to try.
    #[error("{device}: no filesystem type candidates")]
    NoCandidates { device: String },
}
