//! # bogonup - Bogon IP list updater
//!
//! A single-shot command-line tool that downloads bogon (invalid, reserved,
//! or unallocated) IP address lists from one or more remote sources, merges
//! and deduplicates them, and publishes the result to a local file for
//! consumption by firewall or routing software, optionally triggering a
//! reload of that consumer when the list changed.
//!
//! Designed to run from cron or a systemd timer; a file lock prevents
//! overlapping runs. The pipeline is deliberately fail-fast: a failed
//! download, a garbage source, or an unexpected destination file aborts the
//! run and leaves the previous good list untouched, because a silently
//! shrunken blocklist is worse than a stale one.
//!
//! ## Example Usage
//!
//! ```no_run
//! use bogonup::config::{UpdateConfig, DEFAULT_SOURCES};
//! use std::path::PathBuf;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = UpdateConfig::new(
//!         PathBuf::from("/etc/bogon-ip-list.txt"),
//!         DEFAULT_SOURCES.to_string(),
//!         30,    // timeout seconds
//!         true,  // verify certificates
//!         false, // force
//!         false, // dry run
//!         false, // reload
//!         None,  // reload command
//!     )?;
//!     bogonup::commands::update::run(&config).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`cli`] - Command-line interface definitions
//! - [`commands`] - CLI command implementations
//! - [`config`] - Immutable run configuration
//! - [`error`] - Fatal error taxonomy for the pipeline
//! - [`fetcher`] - HTTP client for downloading lists
//! - [`lock`] - File locking for concurrent execution prevention
//! - [`merge`] - Order-preserving deduplication across sources
//! - [`parser`] - Comment stripping and entry validation
//! - [`publish`] - Change detection and atomic destination writes
//! - [`reload`] - Consumer reload command execution
//! - [`sources`] - Keyword-to-URL source resolution
//! - [`utils`] - Common formatting helpers

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod lock;
pub mod merge;
pub mod parser;
pub mod publish;
pub mod reload;
pub mod sources;
pub mod utils;

pub use cli::{Cli, Commands};
pub use config::UpdateConfig;
pub use error::UpdateError;
