use rustix::io::Errno;
use rustix::mount::MountFlags as SysMountFlags;

use super::Mounter;
use crate::types::MountFlags;

fn errno_to_io(e: Errno) -> std::io::Error {
    std::io::Error::from_raw_os_error(e.raw_os_error())
}

/// Production mounter: `mount(2)` through rustix.
#[derive(Copy, Clone, Debug, Default)]
pub struct SyscallMounter;

impl Mounter for SyscallMounter {
    fn mount(
        &self,
        source: &str,
        target: &str,
        fstype: &str,
        flags: MountFlags,
        data: &str,
    ) -> std::io::Result<()> {
        let bits = u32::try_from(flags.bits()).map_err(|_| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("mount flags {flags} exceed 32 bits"),
            )
        })?;
        rustix::mount::mount(
            source,
            target,
            fstype,
            SysMountFlags::from_bits_retain(bits),
            data,
        )
        .map_err(errno_to_io)
    }
}
