//! Enabling and disabling Apache2 sites
//!
//! Each call resolves one binary, runs it once with the site name, and
//! classifies the result. Nothing is retried and nothing is rolled back; the
//! binary owns the actual symlink change.

use crate::classify::classify;
use crate::config::Settings;
use crate::error::{Result, SiteError};
use crate::locator::BinaryLocator;
use crate::models::{SiteAction, SiteRequest, SiteState, ToggleResult};
use crate::runner::{CommandRunner, SystemRunner};
use crate::validation::validate_request;
use std::path::PathBuf;

/// Toggles site enablement through a2ensite/a2dissite
#[derive(Debug, Clone)]
pub struct SiteToggler<R = SystemRunner> {
    locator: BinaryLocator,
    runner: R,
    enable_binary: String,
    disable_binary: String,
}

impl SiteToggler<SystemRunner> {
    /// Create a toggler that runs real processes, configured from settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_runner(settings, BinaryLocator::from_settings(settings), SystemRunner::new())
    }
}

impl<R: CommandRunner> SiteToggler<R> {
    /// Create a toggler with an explicit locator and runner
    pub fn with_runner(settings: &Settings, locator: BinaryLocator, runner: R) -> Self {
        Self {
            locator,
            runner,
            enable_binary: settings.enable_binary.clone(),
            disable_binary: settings.disable_binary.clone(),
        }
    }

    fn binary_name(&self, action: SiteAction) -> &str {
        match action {
            SiteAction::Enable => &self.enable_binary,
            SiteAction::Disable => &self.disable_binary,
        }
    }

    /// Resolve the binary performing `action` to an absolute path
    pub fn resolve_binary(&self, action: SiteAction) -> Result<PathBuf> {
        self.locator.resolve(self.binary_name(action))
    }

    /// Bring the site into the requested state
    pub fn apply(&self, request: &SiteRequest) -> Result<ToggleResult> {
        match request.state {
            SiteState::Present => self.enable_site(request),
            SiteState::Absent => self.disable_site(request),
        }
    }

    /// Enable the site with a2ensite
    pub fn enable_site(&self, request: &SiteRequest) -> Result<ToggleResult> {
        self.toggle(SiteAction::Enable, request)
    }

    /// Disable the site with a2dissite
    pub fn disable_site(&self, request: &SiteRequest) -> Result<ToggleResult> {
        self.toggle(SiteAction::Disable, request)
    }

    fn toggle(&self, action: SiteAction, request: &SiteRequest) -> Result<ToggleResult> {
        validate_request(request)?;

        let binary = self.resolve_binary(action)?;
        let outcome = self.runner.run(&binary, &[request.name.as_str()])?;

        match classify(action, &request.name, &outcome) {
            Ok(result) => {
                tracing::info!(
                    site = %request.name,
                    action = action.verb(),
                    changed = result.changed,
                    "site toggled"
                );
                Ok(result)
            }
            Err(err @ SiteError::CommandFailed { .. }) => {
                tracing::warn!(
                    site = %request.name,
                    exit_code = outcome.exit_code,
                    stderr = %outcome.stderr.trim(),
                    "{} failed",
                    binary.display()
                );
                Err(err)
            }
            Err(err) => Err(err),
        }
    }
}
