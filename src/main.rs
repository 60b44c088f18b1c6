//! bogonup - Bogon IP list updater.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use bogonup::cli::{Cli, Commands};
use bogonup::config::UpdateConfig;
use bogonup::lock::LockGuard;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let log_level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Update {
            output,
            sources,
            force,
            reload,
            command,
            timeout,
            no_cert_check,
            dry_run,
        } => {
            let config = UpdateConfig::new(
                output,
                sources,
                timeout,
                !no_cert_check,
                force,
                dry_run,
                reload,
                command,
            )?;
            let _lock = LockGuard::acquire()?;
            bogonup::commands::update::run(&config).await?;
            Ok(())
        }
        Commands::Version => {
            println!("bogonup {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
