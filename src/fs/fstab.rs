//! Mount table loading.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::policy::CommentRule;
use crate::types::{Error, FstabEntry, Result};

/// Open and parse the mount table at `path`.
///
/// # Errors
///
/// Returns `ErrorKind::Io` if the table cannot be opened, `ErrorKind::Scan` if reading
/// fails part-way, and `ErrorKind::Malformed` for a non-comment line with fewer than four fields.
pub fn load_fstab(path: &Path, comments: CommentRule) -> Result<Vec<FstabEntry>> {
    let f = File::open(path).map_err(|e| Error::io(path, &e))?;
    parse_fstab(BufReader::new(f), comments).map_err(|e| match e {
        ParseError::Scan(io) => Error::scan(path, &io),
        ParseError::Entry(err) => err,
    })
}

#[derive(Debug)]
pub(crate) enum ParseError {
    Scan(std::io::Error),
    Entry(Error),
}

/// Parse mount table lines in order. Comment and blank lines are skipped;
/// fields past the fourth (dump, pass) are ignored.
pub(crate) fn parse_fstab<R: BufRead>(
    reader: R,
    comments: CommentRule,
) -> std::result::Result<Vec<FstabEntry>, ParseError> {
    let mut out = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(ParseError::Scan)?;
        if comments.is_comment(&line) {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        let [fs_spec, fs_file, fs_type, mnt_opts, ..] = fields[..] else {
            return Err(ParseError::Entry(Error::malformed(idx + 1, &line, fields.len())));
        };
        out.push(FstabEntry {
            fs_spec: fs_spec.to_string(),
            fs_file: fs_file.to_string(),
            fs_type: fs_type.to_string(),
            mnt_opts: mnt_opts.to_string(),
        });
    }
    Ok(out)
}
