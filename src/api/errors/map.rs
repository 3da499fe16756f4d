use super::ErrorId;
use crate::types::MountError;

/// Map a single mount attempt's OS error to a stable reason tag for facts.
#[must_use]
pub fn map_mount_errno(e: &std::io::Error) -> &'static str {
    match e.raw_os_error() {
        Some(libc::ENODEV) => "unknown_fstype",
        Some(libc::EBUSY) => "busy",
        Some(libc::EPERM | libc::EACCES) => "permission",
        Some(libc::ENOENT | libc::ENXIO | libc::ENOTBLK) => "no_device",
        Some(libc::ENOTDIR) => "bad_target",
        Some(libc::EINVAL) => "invalid",
        _ => "other",
    }
}

/// Map a mount failure to its stable `ErrorId`.
#[must_use]
pub const fn map_mount_error(e: &MountError) -> ErrorId {
    match e {
        MountError::Syscall { .. } => ErrorId::E_MOUNT,
        MountError::NoCandidates { .. } => ErrorId::E_NO_CANDIDATES,
    }
}
