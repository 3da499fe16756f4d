pub mod filesystems;
pub mod fstab;
pub mod mount;

pub use filesystems::{CatalogKind, FsCatalog};
pub use fstab::load_fstab;
pub use mount::{read_active_mounts, ActiveMounts};
