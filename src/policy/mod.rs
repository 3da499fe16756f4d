//! Policy configuration for directive resolution.
//!
//! The `policy` module centralizes the resource locations and parsing knobs
//! used by the mount table loader, the filesystem type catalog and show mode.
//! Consumers typically construct a [`Policy`](crate::policy::Policy) via
//! `Policy::default()` or `Policy::from_env()` and then customize fields before
//! creating a [`Mountyard`](crate::Mountyard) instance.
//!
//! Submodules:
//! - `config`: policy struct and presets
//! - `types`: grouped policy fields

pub mod config;
pub mod types;

pub use config::Policy;
pub use types::{CommentRule, Paths};
