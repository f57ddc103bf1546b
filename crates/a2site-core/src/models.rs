//! Data models for a2site

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Desired enablement state of a site
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SiteState {
    /// The site should be enabled (default)
    #[default]
    Present,
    /// The site should be disabled
    Absent,
}

impl SiteState {
    /// The action that brings a site into this state
    pub fn action(self) -> SiteAction {
        match self {
            SiteState::Present => SiteAction::Enable,
            SiteState::Absent => SiteAction::Disable,
        }
    }
}

impl std::fmt::Display for SiteState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteState::Present => write!(f, "present"),
            SiteState::Absent => write!(f, "absent"),
        }
    }
}

impl std::str::FromStr for SiteState {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "present" => Ok(SiteState::Present),
            "absent" => Ok(SiteState::Absent),
            _ => Err(ValidationError::InvalidState(s.to_string())),
        }
    }
}

/// Direction of a toggle, tied to the binary that performs it
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SiteAction {
    Enable,
    Disable,
}

impl SiteAction {
    /// Default name of the binary performing this action
    pub fn default_binary(self) -> &'static str {
        match self {
            SiteAction::Enable => "a2ensite",
            SiteAction::Disable => "a2dissite",
        }
    }

    /// Verb used in failure messages
    pub fn verb(self) -> &'static str {
        match self {
            SiteAction::Enable => "enable",
            SiteAction::Disable => "disable",
        }
    }

    /// Phrase the tools print after the site name when nothing needs doing
    pub fn already_phrase(self) -> &'static str {
        match self {
            SiteAction::Enable => "already enabled",
            SiteAction::Disable => "already disabled",
        }
    }

    /// Status reported when the action changed the system
    pub fn changed_status(self) -> ToggleStatus {
        match self {
            SiteAction::Enable => ToggleStatus::Enabled,
            SiteAction::Disable => ToggleStatus::Disabled,
        }
    }
}

/// A request to bring a site into a desired state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteRequest {
    /// Site configuration name, passed verbatim to the management binary
    pub name: String,
    /// Desired state
    #[serde(default)]
    pub state: SiteState,
}

impl SiteRequest {
    /// Create a new request
    pub fn new(name: impl Into<String>, state: SiteState) -> Self {
        Self {
            name: name.into(),
            state,
        }
    }

    /// Shorthand for a request to enable a site
    pub fn present(name: impl Into<String>) -> Self {
        Self::new(name, SiteState::Present)
    }

    /// Shorthand for a request to disable a site
    pub fn absent(name: impl Into<String>) -> Self {
        Self::new(name, SiteState::Absent)
    }
}

/// Captured result of one external command invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Exit code, or -1 when the process was terminated by a signal
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutcome {
    pub fn new(exit_code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Textual summary of a successful toggle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ToggleStatus {
    /// The site was enabled by this invocation
    Enabled,
    /// The site was disabled by this invocation
    Disabled,
    /// The site was already in the desired state
    Success,
}

impl std::fmt::Display for ToggleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToggleStatus::Enabled => write!(f, "Enabled"),
            ToggleStatus::Disabled => write!(f, "Disabled"),
            ToggleStatus::Success => write!(f, "Success"),
        }
    }
}

/// Outcome of a successful toggle, in orchestration-framework shape
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToggleResult {
    /// Whether the invocation altered system state
    pub changed: bool,
    pub result: ToggleStatus,
}

impl ToggleResult {
    /// The site was already in the desired state
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            result: ToggleStatus::Success,
        }
    }

    /// The action changed the site's state
    pub fn changed(action: SiteAction) -> Self {
        Self {
            changed: true,
            result: action.changed_status(),
        }
    }
}
