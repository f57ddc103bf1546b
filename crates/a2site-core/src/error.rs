//! Error types for a2site

use crate::models::SiteAction;
use thiserror::Error;

/// Main error type for a2site-core operations
#[derive(Error, Debug)]
pub enum SiteError {
    /// The management binary could not be located
    #[error("{0} is not found. Perhaps this system does not use a2ensite/a2dissite to manage Apache")]
    BinaryNotFound(String),

    /// The management binary ran but reported a failure
    #[error("Failed to {} site {name}: {stdout}", .action.verb())]
    CommandFailed {
        action: SiteAction,
        name: String,
        stdout: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The already-state pattern could not be compiled for this site name
    #[error("Cannot match output for this site name: {0}")]
    Pattern(#[from] regex::Error),

    /// IO error (e.g. the binary exists but cannot be spawned)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Validation errors for request input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Empty input where non-empty is required
    #[error("Site name cannot be empty")]
    EmptyInput,

    /// Input contains null byte
    #[error("Input contains null byte")]
    NullByteInInput,

    /// State is not one of the accepted choices
    #[error("Invalid state '{0}': expected one of present, absent")]
    InvalidState(String),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to determine config directory
    #[error("Could not determine config directory")]
    NoConfigDirectory,

    /// Failed to parse config file
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),

    /// IO error during config operations
    #[error("Config IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for a2site-core operations
pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_not_found_display() {
        let err = SiteError::BinaryNotFound("a2ensite".to_string());
        let msg = err.to_string();
        assert!(msg.starts_with("a2ensite is not found"));
        assert!(msg.contains("does not use a2ensite/a2dissite"));
    }

    #[test]
    fn test_command_failed_display() {
        let err = SiteError::CommandFailed {
            action: SiteAction::Disable,
            name: "mysite".to_string(),
            stdout: "ERROR: site mysite does not exist".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to disable site mysite: ERROR: site mysite does not exist"
        );
    }

    #[test]
    fn test_validation_error_display() {
        let err = SiteError::Validation(ValidationError::InvalidState("latest".to_string()));
        assert!(err.to_string().contains("latest"));
        assert!(err.to_string().contains("present, absent"));

        let err = ValidationError::NullByteInInput;
        assert!(err.to_string().contains("null"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: SiteError = io_err.into();
        assert!(matches!(err, SiteError::Io(_)));
    }
}
