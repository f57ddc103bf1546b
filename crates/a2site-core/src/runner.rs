//! External command execution
//!
//! The toggler never goes through a shell: the site name is a single argv
//! element, so no quoting or escaping is applied to it.

use crate::error::Result;
use crate::models::CommandOutcome;
use crate::validation::display_command;
use std::path::Path;
use std::process::Command;

/// Runs an external program to completion and captures its output
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, blocking until it exits.
    ///
    /// A non-zero exit is not an error here; only failing to spawn is.
    fn run(&self, program: &Path, args: &[&str]) -> Result<CommandOutcome>;
}

/// Runner backed by `std::process::Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new SystemRunner
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &Path, args: &[&str]) -> Result<CommandOutcome> {
        tracing::debug!(
            command = %display_command(&program.to_string_lossy(), args),
            "running command"
        );

        let output = Command::new(program).args(args).output()?;

        let outcome = CommandOutcome {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };

        tracing::debug!(exit_code = outcome.exit_code, "command finished");

        Ok(outcome)
    }
}
