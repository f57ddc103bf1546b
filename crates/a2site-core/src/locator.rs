//! Lookup of the site management binaries

use crate::config::{Settings, SYSTEM_SEARCH_PATHS};
use crate::error::{Result, SiteError};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Finds executables by searching an ordered list of directories
#[derive(Debug, Clone, Default)]
pub struct BinaryLocator {
    search_paths: Vec<PathBuf>,
}

impl BinaryLocator {
    /// Search exactly the given directories, in order.
    pub fn new(search_paths: Vec<PathBuf>) -> Self {
        Self { search_paths }
    }

    /// Search `PATH`, then the configured extra directories, then the sbin
    /// directories unless disabled.
    pub fn from_settings(settings: &Settings) -> Self {
        let mut search_paths: Vec<PathBuf> = std::env::var_os("PATH")
            .map(|path| std::env::split_paths(&path).collect())
            .unwrap_or_default();

        search_paths.extend(settings.search_paths.iter().cloned());

        if settings.include_system_paths {
            search_paths.extend(SYSTEM_SEARCH_PATHS.iter().map(PathBuf::from));
        }

        let mut seen = std::collections::HashSet::new();
        search_paths.retain(|p| !p.as_os_str().is_empty() && seen.insert(p.clone()));

        Self { search_paths }
    }

    /// Directories searched, in order
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Resolve `name` to the absolute path of an executable.
    ///
    /// An absolute `name` is accepted as-is if it is executable.
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        let candidate = Path::new(name);
        if candidate.is_absolute() {
            return which::which(candidate)
                .map_err(|_| SiteError::BinaryNotFound(name.to_string()));
        }

        if self.search_paths.is_empty() {
            return Err(SiteError::BinaryNotFound(name.to_string()));
        }

        let joined = self.joined_paths()?;
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));

        match which::which_in(name, Some(joined), cwd) {
            Ok(path) => {
                tracing::debug!(binary = name, path = %path.display(), "resolved binary");
                Ok(path)
            }
            Err(e) => {
                tracing::debug!(binary = name, error = %e, "binary lookup failed");
                Err(SiteError::BinaryNotFound(name.to_string()))
            }
        }
    }

    fn joined_paths(&self) -> Result<OsString> {
        std::env::join_paths(&self.search_paths).map_err(|e| {
            SiteError::Io(std::io::Error::new(std::io::ErrorKind::InvalidInput, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn write_executable(dir: &Path, name: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join(name);
        std::fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn test_missing_binary() {
        let temp = TempDir::new().unwrap();
        let locator = BinaryLocator::new(vec![temp.path().to_path_buf()]);

        let err = locator.resolve("a2ensite").unwrap_err();
        assert!(matches!(err, SiteError::BinaryNotFound(ref b) if b == "a2ensite"));
    }

    #[test]
    fn test_empty_search_path_finds_nothing() {
        let locator = BinaryLocator::new(Vec::new());
        assert!(locator.resolve("a2dissite").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_resolves_in_order() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write_executable(second.path(), "a2ensite");
        let expected = write_executable(first.path(), "a2ensite");

        let locator =
            BinaryLocator::new(vec![first.path().to_path_buf(), second.path().to_path_buf()]);

        assert_eq!(locator.resolve("a2ensite").unwrap(), expected);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_executable_is_skipped() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("a2ensite"), "not a program").unwrap();

        let locator = BinaryLocator::new(vec![temp.path().to_path_buf()]);
        assert!(locator.resolve("a2ensite").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_absolute_name() {
        let temp = TempDir::new().unwrap();
        let path = write_executable(temp.path(), "custom-ensite");

        let locator = BinaryLocator::new(Vec::new());
        assert_eq!(locator.resolve(path.to_str().unwrap()).unwrap(), path);
        assert!(locator
            .resolve(temp.path().join("missing").to_str().unwrap())
            .is_err());
    }

    #[test]
    fn test_from_settings_appends_extra_and_system_paths() {
        let settings = Settings {
            search_paths: vec![PathBuf::from("/opt/apache/sbin")],
            ..Settings::default()
        };
        let locator = BinaryLocator::from_settings(&settings);
        let paths = locator.search_paths();

        assert!(paths.contains(&PathBuf::from("/opt/apache/sbin")));
        assert!(paths.contains(&PathBuf::from("/usr/sbin")));
        assert!(paths.contains(&PathBuf::from("/sbin")));
    }

    #[test]
    fn test_from_settings_without_system_paths() {
        let settings = Settings {
            search_paths: vec![PathBuf::from("/opt/apache/sbin")],
            include_system_paths: false,
            ..Settings::default()
        };
        let locator = BinaryLocator::from_settings(&settings);
        assert!(locator.search_paths().contains(&PathBuf::from("/opt/apache/sbin")));
    }
}
