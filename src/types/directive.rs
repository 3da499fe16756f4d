//! Parsed command intent consumed by the directive resolver.

use serde::Serialize;

use super::options::OptionSet;
use crate::constants::AUTO_FSTYPE;

/// A mount directive: what the caller asked for, before any table lookup.
#[derive(Clone, Debug, Serialize)]
pub struct Directive {
    /// Positional arguments (`[DEVICE] [DIR]`); validated by `target()`.
    pub args: Vec<String>,
    /// Mount every table entry.
    pub all: bool,
    /// Describe, never call the kernel.
    pub fake: bool,
    pub verbose: bool,
    /// `defaults` meta-option: rw, suid, dev, exec, auto, nouser, async.
    pub defaults: bool,
    /// Requested type or comma-separated type list; `auto` triggers detection.
    pub fstype: String,
    /// Opaque filesystem-specific data passed through to the kernel.
    pub data: String,
    /// All-mode filter: only entries whose type is listed. Empty means no filter.
    pub match_types: Vec<String>,
    pub options: OptionSet,
}

impl Default for Directive {
    fn default() -> Self {
        Self {
            args: Vec::new(),
            all: false,
            fake: false,
            verbose: false,
            defaults: false,
            fstype: AUTO_FSTYPE.to_string(),
            data: String::new(),
            match_types: Vec::new(),
            options: OptionSet::default(),
        }
    }
}

/// Resolution mode selected by the `all` switch and positional argument count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target<'a> {
    All,
    Show,
    Lookup(&'a str),
    Explicit { device: &'a str, dir: &'a str },
    /// More than two positional arguments; carries the surplus.
    Unexpected(&'a [String]),
}

impl Directive {
    #[must_use]
    pub fn target(&self) -> Target<'_> {
        if self.all {
            return Target::All;
        }
        match self.args.as_slice() {
            [] => Target::Show,
            [name] => Target::Lookup(name),
            [device, dir] => Target::Explicit { device, dir },
            [_, _, rest @ ..] => Target::Unexpected(rest),
        }
    }

    /// Whether an all-mode entry of type `fs_type` passes the `match` filter.
    #[must_use]
    pub fn matches_type(&self, fs_type: &str) -> bool {
        self.match_types.is_empty() || self.match_types.iter().any(|t| t == fs_type)
    }
}
