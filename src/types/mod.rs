pub mod directive;
pub mod errors;
pub mod fstab;
pub mod mount;
pub mod options;
pub mod report;

pub use directive::*;
pub use errors::*;
pub use fstab::*;
pub use mount::*;
pub use options::*;
pub use report::*;
