pub mod syscall;

use crate::types::MountFlags;

/// Seam over the kernel mount operation.
pub trait Mounter {
    /// Attach `source` at `target` as `fstype` with `flags` and opaque `data`.
    /// # Errors
    /// Returns the kernel-reported error for this single attempt.
    fn mount(
        &self,
        source: &str,
        target: &str,
        fstype: &str,
        flags: MountFlags,
        data: &str,
    ) -> std::io::Result<()>;
}
