//! Configuration management for a2site
//!
//! Settings are read from a JSON file in a platform-specific config
//! directory. A missing file means defaults.

use crate::error::ConfigError;
use crate::models::SiteAction;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overriding the config directory
pub const CONFIG_HOME_ENV: &str = "A2SITE_CONFIG_HOME";

/// Directories where Apache management tools usually live on Debian-style
/// systems, searched after `PATH`.
pub const SYSTEM_SEARCH_PATHS: &[&str] = &["/usr/local/sbin", "/usr/sbin", "/sbin"];

fn default_true() -> bool {
    true
}

fn default_enable_binary() -> String {
    SiteAction::Enable.default_binary().to_string()
}

fn default_disable_binary() -> String {
    SiteAction::Disable.default_binary().to_string()
}

/// Tool settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Extra directories to search for the management binaries
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub search_paths: Vec<PathBuf>,
    /// Also search the sbin directories
    #[serde(default = "default_true")]
    pub include_system_paths: bool,
    /// Binary used to enable sites
    #[serde(default = "default_enable_binary")]
    pub enable_binary: String,
    /// Binary used to disable sites
    #[serde(default = "default_disable_binary")]
    pub disable_binary: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            search_paths: Vec::new(),
            include_system_paths: true,
            enable_binary: default_enable_binary(),
            disable_binary: default_disable_binary(),
        }
    }
}

impl Settings {
    /// Binary name configured for an action
    pub fn binary_for(&self, action: SiteAction) -> &str {
        match action {
            SiteAction::Enable => &self.enable_binary,
            SiteAction::Disable => &self.disable_binary,
        }
    }
}

/// Locates and loads the settings file
#[derive(Debug, Clone)]
pub struct ConfigManager {
    /// Directory where config file is stored
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Create a new ConfigManager with an explicit directory.
    pub fn new(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Create a ConfigManager using the platform-specific default directory.
    ///
    /// - Linux: $XDG_CONFIG_HOME/a2site/
    /// - macOS: ~/Library/Application Support/a2site/
    ///
    /// `A2SITE_CONFIG_HOME` overrides both.
    pub fn with_defaults() -> Result<Self, ConfigError> {
        if let Ok(override_path) = std::env::var(CONFIG_HOME_ENV) {
            return Ok(Self::new(PathBuf::from(override_path)));
        }

        let project_dirs =
            ProjectDirs::from("", "", "a2site").ok_or(ConfigError::NoConfigDirectory)?;

        Ok(Self::new(project_dirs.config_dir().to_path_buf()))
    }

    /// Get the path to the config file
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// Get the config directory
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Load the settings from disk.
    ///
    /// If the config file doesn't exist, returns the defaults.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config_path = self.config_path();

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Settings::default());
        }

        let contents = fs::read_to_string(&config_path)?;
        let settings: Settings = serde_json::from_str(&contents)?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_config_manager() -> (ConfigManager, TempDir) {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::new(temp.path().join("config"));
        (manager, temp)
    }

    #[test]
    fn test_load_nonexistent_returns_default() {
        let (manager, _temp) = test_config_manager();

        let settings = manager.load().unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.include_system_paths);
        assert_eq!(settings.enable_binary, "a2ensite");
        assert_eq!(settings.disable_binary, "a2dissite");
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let (manager, _temp) = test_config_manager();
        fs::create_dir_all(manager.config_dir()).unwrap();
        fs::write(
            manager.config_path(),
            r#"{"search_paths": ["/opt/apache/bin"], "include_system_paths": false}"#,
        )
        .unwrap();

        let settings = manager.load().unwrap();
        assert_eq!(settings.search_paths, vec![PathBuf::from("/opt/apache/bin")]);
        assert!(!settings.include_system_paths);
        assert_eq!(settings.binary_for(SiteAction::Enable), "a2ensite");
        assert_eq!(settings.binary_for(SiteAction::Disable), "a2dissite");
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let (manager, _temp) = test_config_manager();
        fs::create_dir_all(manager.config_dir()).unwrap();
        fs::write(manager.config_path(), "{ not json").unwrap();

        let result = manager.load();
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_config_path() {
        let manager = ConfigManager::new(PathBuf::from("/etc/a2site"));
        assert_eq!(manager.config_path(), PathBuf::from("/etc/a2site/config.json"));
    }
}
