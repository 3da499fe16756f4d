//! Active-mounts listing (`/proc/mounts`).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::types::{ActiveMount, Error, Result};

/// Listing of active mounts with the lines that could not be parsed.
#[derive(Debug, Default)]
pub struct ActiveMounts {
    pub mounts: Vec<ActiveMount>,
    /// One `ErrorKind::Malformed` per skipped line.
    pub skipped: Vec<Error>,
    /// `ErrorKind::Scan` if reading stopped part-way; `mounts` holds what was read before it.
    pub interrupted: Option<Error>,
}

/// Read the active-mounts listing at `path`.
///
/// A line with fewer than four fields is skipped and recorded in `skipped`;
/// it does not stop the listing.
///
/// A read failure part-way is recorded in `interrupted` and keeps the lines
/// already parsed.
///
/// # Errors
///
/// Returns `ErrorKind::Io` if the listing cannot be opened.
pub fn read_active_mounts(path: &Path) -> Result<ActiveMounts> {
    let f = File::open(path).map_err(|e| Error::io(path, &e))?;
    let (mut listing, err) = parse_active_mounts(BufReader::new(f));
    listing.interrupted = err.map(|e| Error::scan(path, &e));
    Ok(listing)
}

/// Parse the listing, returning what was gathered and the scan error that
/// stopped it, if any.
pub(crate) fn parse_active_mounts<R: BufRead>(
    reader: R,
) -> (ActiveMounts, Option<std::io::Error>) {
    let mut out = ActiveMounts::default();
    for (idx, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => return (out, Some(e)),
        };
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts[..] {
            [device, mount_point, fs_type, options, ..] => out.mounts.push(ActiveMount {
                device: device.to_string(),
                mount_point: mount_point.to_string(),
                fs_type: fs_type.to_string(),
                options: options.to_string(),
            }),
            _ => {
                let e = Error::malformed(idx + 1, &line, parts.len());
                log::warn!("{e}");
                out.skipped.push(e);
            }
        }
    }
    (out, None)
}
