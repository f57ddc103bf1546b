//! Output formatting utilities for the CLI

use owo_colors::OwoColorize;
use serde::Serialize;

/// Context for output formatting
#[derive(Debug, Clone)]
pub struct OutputContext {
    pub json: bool,
    pub no_color: bool,
    pub quiet: bool,
}

impl OutputContext {
    pub fn new(json: bool, no_color: bool, quiet: bool) -> Self {
        // Disable colors if NO_COLOR is set or --no-color flag is used
        let no_color = no_color || std::env::var("NO_COLOR").is_ok();

        Self {
            json,
            no_color,
            quiet,
        }
    }

    /// Print a success message
    pub fn success(&self, msg: &str) {
        if self.quiet {
            return;
        }

        if self.no_color {
            println!("✓ {}", msg);
        } else {
            println!("{} {}", "✓".green(), msg);
        }
    }

    /// Print an error message
    pub fn error(&self, msg: &str) {
        if self.no_color {
            eprintln!("✗ {}", msg);
        } else {
            eprintln!("{} {}", "✗".red(), msg);
        }
    }

    /// Print an info message
    pub fn info(&self, msg: &str) {
        if self.quiet {
            return;
        }

        println!("  {}", msg);
    }

    /// Print JSON output
    pub fn json<T: Serialize>(&self, value: &T) -> anyhow::Result<()> {
        let output = serde_json::to_string_pretty(value)?;
        println!("{}", output);
        Ok(())
    }

    /// Format a found/missing indicator
    pub fn found_indicator(&self, found: bool) -> String {
        match (found, self.no_color) {
            (true, true) => "✓".to_string(),
            (true, false) => "✓".green().to_string(),
            (false, true) => "✗".to_string(),
            (false, false) => "✗".red().to_string(),
        }
    }
}
