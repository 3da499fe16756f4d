//! Filesystem type catalog backed by `/proc/filesystems`.
//!
//! Each catalog instance reads the listing at most once and memoizes the result.
//! Read failures degrade to an empty (or partial) list and are only logged: type
//! auto-detection is allowed to run out of candidates, it is not allowed to abort
//! the caller.

use std::cell::OnceCell;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::constants::NODEV_MARKER;

/// Which view of the kernel listing a catalog exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogKind {
    /// Every registered type, `nodev` marker stripped.
    All,
    /// Types eligible for auto-detection: those not marked `nodev`.
    Auto,
}

impl CatalogKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CatalogKind::All => "all",
            CatalogKind::Auto => "auto",
        }
    }
}

/// Lazily computed, memoized list of filesystem type names.
#[derive(Debug)]
pub struct FsCatalog {
    kind: CatalogKind,
    source: PathBuf,
    list: OnceCell<Vec<String>>,
}

impl FsCatalog {
    #[must_use]
    pub fn new(kind: CatalogKind, source: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            source: source.into(),
            list: OnceCell::new(),
        }
    }

    /// Type names in listing order. The first call reads the source; later calls
    /// return the same slice even if the source has since changed.
    pub fn list(&self) -> &[String] {
        self.list.get_or_init(|| read_catalog(&self.source, self.kind))
    }

    /// Whether the listing has been read yet.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.list.get().is_some()
    }
}

fn read_catalog(path: &Path, kind: CatalogKind) -> Vec<String> {
    let f = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            log::debug!("{}: {e}; no {} filesystem types", path.display(), kind.as_str());
            return Vec::new();
        }
    };
    let (names, err) = parse_filesystems(BufReader::new(f), kind);
    if let Some(e) = err {
        log::warn!("scan: {}: {e}", path.display());
    }
    names
}

/// Parse a capability listing, returning the names gathered and the scan error
/// that stopped it, if any.
pub(crate) fn parse_filesystems<R: BufRead>(
    reader: R,
    kind: CatalogKind,
) -> (Vec<String>, Option<std::io::Error>) {
    let mut names = Vec::new();
    for line in reader.lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => return (names, Some(e)),
        };
        let name = match line.strip_prefix(NODEV_MARKER) {
            Some(_) if kind == CatalogKind::Auto => continue,
            Some(rest) => rest.trim(),
            None => line.trim(),
        };
        if name.is_empty() {
            continue;
        }
        names.push(name.to_string());
    }
    (names, None)
}
