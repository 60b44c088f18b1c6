//! Run configuration for bogonup.
//!
//! All tunables live in an immutable [`UpdateConfig`] constructed once from
//! the CLI inputs and passed by reference into each pipeline stage.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::UpdateError;

/// Default sources configuration string.
pub const DEFAULT_SOURCES: &str = "spamhaus cymru";

/// Bounds the download timeout is clamped to (seconds).
const MIN_TIMEOUT_SECS: u64 = 5;
const MAX_TIMEOUT_SECS: u64 = 300;

/// Settings for one update run.
#[derive(Debug, Clone)]
pub struct UpdateConfig {
    /// Destination file the merged list is published to.
    pub output: PathBuf,

    /// Whitespace-separated source keywords and/or URLs.
    pub sources: String,

    /// Per-request download timeout.
    pub timeout: Duration,

    /// Whether TLS certificates are verified.
    pub verify_certs: bool,

    /// Publish even when no change is detected.
    pub force: bool,

    /// Fetch and merge but skip publish and reload.
    pub dry_run: bool,

    /// Reload command, present only when a reload was requested.
    pub reload_command: Option<String>,
}

impl UpdateConfig {
    /// Build a validated configuration from CLI inputs.
    ///
    /// The timeout is clamped to a meaningful range (5-300 seconds).
    /// Requesting a reload without providing a reload command is a
    /// configuration error.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        output: PathBuf,
        sources: String,
        timeout_secs: u64,
        verify_certs: bool,
        force: bool,
        dry_run: bool,
        reload: bool,
        command: Option<String>,
    ) -> Result<Self, UpdateError> {
        let reload_command = match (reload, command) {
            (false, _) => None,
            (true, Some(cmd)) if !cmd.trim().is_empty() => Some(cmd),
            (true, _) => {
                return Err(UpdateError::Config(
                    "Reload requested but reload command is not set".to_string(),
                ))
            }
        };

        Ok(Self {
            output,
            sources,
            timeout: Duration::from_secs(timeout_secs.clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS)),
            verify_certs,
            force,
            dry_run,
            reload_command,
        })
    }
}
