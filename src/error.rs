//! Error types for bogonup.
//!
//! Every variant is fatal for the current run: nothing is retried and nothing
//! is downgraded to a warning. A partially correct blocklist is strictly worse
//! than a hard failure that leaves the previous good list untouched, so each
//! pipeline stage returns the typed error up and the binary's top level is the
//! only place that formats a message and exits non-zero.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpdateError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Download failed: {url}: {reason}")]
    Download { url: String, reason: String },

    #[error("Downloaded IP list is not valid ({url})")]
    InvalidSourceData { url: String },

    #[error("Output file {} can only contain raw IP addresses (found {line:?})", path.display())]
    DestinationInvalid { path: PathBuf, line: String },

    #[error("Output file {} could not be written: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Reload command failed ({reason}): {command}")]
    Reload { command: String, reason: String },
}
