//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_SOURCES;

#[derive(Parser)]
#[command(name = "bogonup")]
#[command(author, version, about = "Bogon IP list updater")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (for cron/systemd timer)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug output)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download bogon IP lists, merge by removing duplicates and write to the output file
    Update {
        /// Write the IP list as a raw text file (old file will be overwritten)
        #[arg(short, long)]
        output: PathBuf,

        /// Download sources: "spamhaus"/"cymru" keywords or URLs, space separated
        #[arg(short, long, default_value = DEFAULT_SOURCES)]
        sources: String,

        /// Force update even when no change is detected
        #[arg(short, long)]
        force: bool,

        /// Trigger the reload command on list update
        #[arg(short, long)]
        reload: bool,

        /// Related service reload command
        #[arg(short, long)]
        command: Option<String>,

        /// Download timeout in seconds (clamped to 5-300)
        #[arg(short, long, default_value_t = 30)]
        timeout: u64,

        /// Skip TLS certificate verification
        #[arg(short = 'n', long)]
        no_cert_check: bool,

        /// Fetch and merge but do not write or reload
        #[arg(long)]
        dry_run: bool,
    },

    /// Show version
    Version,
}
