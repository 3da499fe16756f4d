pub mod mounter;

pub use mounter::syscall::SyscallMounter;
pub use mounter::Mounter;
