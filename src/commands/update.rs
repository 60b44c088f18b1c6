//! Update command: the fetch, validate, merge, change-detect, publish
//! pipeline.
//!
//! One run walks a fixed sequence: resolve sources, fetch each source in
//! order, validate per source, merge across sources, validate the existing
//! destination, detect change, then publish and optionally reload. Any
//! failure ends the run immediately; there is no retry and no rollback.

use tracing::info;

use crate::config::UpdateConfig;
use crate::error::UpdateError;
use crate::fetcher::Fetcher;
use crate::merge::merge;
use crate::parser::parse_entries;
use crate::publish::{needs_publish, publish, read_snapshot, serialize};
use crate::reload::{run_reload, SystemShell};
use crate::sources::resolve_sources;
use crate::utils::format_count;

/// Terminal state of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Fingerprints matched; destination and consumer untouched.
    Unchanged,
    /// Destination rewritten; no reload was requested.
    Published,
    /// Destination rewritten and the consumer reloaded.
    Reloaded,
    /// Dry run: a write was needed but nothing was touched.
    DryRun,
}

/// Run one update pass.
pub async fn run(config: &UpdateConfig) -> Result<Outcome, UpdateError> {
    let urls = resolve_sources(&config.sources)?;
    let fetcher = Fetcher::new(config.timeout, config.verify_certs)?;

    // Sequential fetches, in resolver order. A single failed or garbage
    // source fails the run before anything is written.
    let mut lists = Vec::with_capacity(urls.len());
    for url in &urls {
        info!("Downloading: {}", url);
        let body = fetcher.fetch(url).await?;
        lists.push(parse_entries(&body, url)?);
    }

    let merged = merge(lists);
    if merged.duplicates > 0 {
        info!(
            "Removed {} duplicate entries",
            format_count(merged.duplicates)
        );
    }

    // Validated before any mutation; aborts even under --force when the
    // destination holds anything but raw IP address lines.
    let snapshot = read_snapshot(&config.output)?;
    let data = serialize(&merged.entries);

    if !needs_publish(snapshot.as_deref(), &data, config.force) {
        info!("No changes detected, IP list is up to date");
        return Ok(Outcome::Unchanged);
    }

    if config.dry_run {
        info!(
            "Dry run: {} entries would be written to {}",
            format_count(merged.entries.len()),
            config.output.display()
        );
        return Ok(Outcome::DryRun);
    }

    publish(&config.output, &data)?;
    info!(
        "{} total IP addresses/netmasks written to {}",
        format_count(merged.entries.len()),
        config.output.display()
    );

    match &config.reload_command {
        Some(command) => {
            run_reload(&SystemShell, command)?;
            Ok(Outcome::Reloaded)
        }
        None => Ok(Outcome::Published),
    }
}
