//! Destination snapshot, change detection, and publishing.
//!
//! The destination file is the only durable artifact of a run. Before any
//! mutation the existing file is checked to contain nothing but raw IP
//! address lines, so the tool can never clobber an unrelated file. Writes go
//! through a temp-file-and-rename so the destination is never left partially
//! written.

use sha2::{Digest, Sha256};
use std::io::{self, Write};
use std::net::IpAddr;
use std::path::Path;

use crate::error::UpdateError;

/// Read and validate the prior content of the destination file.
///
/// Returns `None` when the file does not exist. Empty lines are skipped;
/// every remaining line, with any `/prefix` suffix stripped, must parse as an
/// IP address. Any other content aborts the run with `DestinationInvalid`,
/// regardless of `--force`.
pub fn read_snapshot(path: &Path) -> Result<Option<Vec<String>>, UpdateError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(UpdateError::Write {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let mut lines = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let addr_part = line.split('/').next().unwrap_or(line);
        if addr_part.parse::<IpAddr>().is_err() {
            return Err(UpdateError::DestinationInvalid {
                path: path.to_path_buf(),
                line: line.to_string(),
            });
        }
        lines.push(line.to_string());
    }

    Ok(Some(lines))
}

/// Serialize an address set: newline-joined entries with a single trailing
/// newline.
pub fn serialize(entries: &[String]) -> String {
    let mut out = entries.join("\n");
    out.push('\n');
    out
}

/// Content fingerprint of a serialized list. Used only for change detection,
/// not for any security property.
pub fn fingerprint(data: &str) -> [u8; 32] {
    Sha256::digest(data.as_bytes()).into()
}

/// Decide whether the new list must be written.
///
/// `force` always publishes. A missing prior snapshot always publishes.
/// Otherwise the fingerprints of the old and new serializations decide:
/// equal means skip publish and reload entirely.
pub fn needs_publish(snapshot: Option<&[String]>, new_serialized: &str, force: bool) -> bool {
    if force {
        return true;
    }
    match snapshot {
        None => true,
        Some(old) => fingerprint(&serialize(old)) != fingerprint(new_serialized),
    }
}

/// Replace the destination file with the serialized list.
///
/// Writes to a temporary file in the destination's directory and renames it
/// into place. Any failure (permissions, disk full, invalid path) is fatal
/// and names the destination path.
pub fn publish(path: &Path, data: &str) -> Result<(), UpdateError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let write = || -> io::Result<()> {
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(data.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    };

    write().map_err(|source| UpdateError::Write {
        path: path.to_path_buf(),
        source,
    })
}
