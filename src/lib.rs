#![forbid(unsafe_code)]
//! Mountyard: resolve mount directives into `mount(2)` calls.
//!
//! Model highlights:
//! - Named options fold into one kernel bitmask through a fixed, ordered translation table;
//!   the bitmask is final before the first mount attempt.
//! - The mount table is re-read on every resolution; the filesystem type catalog is read once
//!   per `Mountyard` instance and memoized.
//! - Auto-detection tries each candidate type in order and surfaces only the last failure.
//! - This crate forbids `unsafe` and uses `rustix` for syscalls.

pub mod constants;
pub mod adapters;
pub mod api;
pub mod flags;
pub mod fs;
pub mod logging;
pub mod policy;
pub mod types;

pub use api::*;
