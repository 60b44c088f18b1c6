//! Reload trigger: run the consumer's reload command after a publish.
//!
//! Shell execution sits behind a trait so tests can mock it without running
//! real commands.

use std::process::Command;
use tracing::info;

use crate::error::UpdateError;

#[cfg(test)]
use mockall::automock;

/// Trait over shell command execution, allowing dependency injection for
/// testing.
#[cfg_attr(test, automock)]
pub trait ShellExecutor: Send + Sync {
    /// Run `command` through the platform shell with stdout/stderr passed
    /// through to our own. Returns the exit code, or `None` when the command
    /// was terminated by a signal.
    fn run(&self, command: &str) -> std::io::Result<Option<i32>>;
}

/// Shell executor backed by `sh -c`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemShell;

impl ShellExecutor for SystemShell {
    fn run(&self, command: &str) -> std::io::Result<Option<i32>> {
        let status = Command::new("sh").arg("-c").arg(command).status()?;
        Ok(status.code())
    }
}

/// Run the reload command and require a zero exit status.
///
/// The destination file has already been published when this runs. A failing
/// reload is surfaced as an error rather than swallowed: the caller must know
/// the consumer may still be using the previous list.
pub fn run_reload(shell: &dyn ShellExecutor, command: &str) -> Result<(), UpdateError> {
    info!("Running reload command: {}", command);

    let fail = |reason: String| UpdateError::Reload {
        command: command.to_string(),
        reason,
    };

    match shell.run(command) {
        Ok(Some(0)) => {
            info!("Reload command successful");
            Ok(())
        }
        Ok(Some(code)) => Err(fail(format!("exit status {code}"))),
        Ok(None) => Err(fail("terminated by signal".to_string())),
        Err(e) => Err(fail(e.to_string())),
    }
}
