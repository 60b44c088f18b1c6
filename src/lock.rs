//! File-based locking to prevent concurrent update runs.
//!
//! Uses flock-style advisory locking so at most one instance writes to the
//! destination at a time. The lock is released automatically when the guard
//! is dropped, including on panic or early error return.

use anyhow::{Context, Result};
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

const LOCK_FILE: &str = "/var/run/bogonup.lock";

/// A guard holding an exclusive lock on the bogonup lock file.
pub struct LockGuard {
    _file: File,
}

impl LockGuard {
    /// Acquire the default system-wide lock.
    pub fn acquire() -> Result<Self> {
        Self::acquire_at(Path::new(LOCK_FILE))
    }

    /// Acquire an exclusive lock at `path`.
    ///
    /// Fails immediately (non-blocking) when another instance holds the
    /// lock. The file is opened with create+read+write rather than truncate
    /// to avoid a TOCTOU race between creation and lock acquisition.
    pub fn acquire_at(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).ok();
        }

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .with_context(|| format!("Failed to open lock file: {}", path.display()))?;

        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .context("Failed to set lock file permissions")?;

        file.try_lock_exclusive().map_err(|_| {
            anyhow::anyhow!(
                "Another instance of bogonup is already running (lock file: {})",
                path.display()
            )
        })?;

        Ok(Self { _file: file })
    }
}
