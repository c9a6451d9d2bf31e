//! Path management for roster-cli
//!
//! Provides XDG-compliant path resolution for configuration, data, and the
//! event log.
//!
//! ## Path Resolution Order
//!
//! 1. `ROSTER_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/roster-cli` or `~/.config/roster-cli`
//! 3. Windows: `%APPDATA%\roster-cli`

use std::path::PathBuf;

use crate::error::RosterError;

/// Manages all paths used by roster-cli
#[derive(Debug, Clone)]
pub struct RosterPaths {
    /// Base directory for all roster-cli data
    base_dir: PathBuf,
}

impl RosterPaths {
    /// Create a new RosterPaths instance
    ///
    /// Path resolution:
    /// 1. `ROSTER_CLI_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/roster-cli` or `~/.config/roster-cli`
    /// 3. Windows: `%APPDATA%\roster-cli`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, RosterError> {
        let base_dir = if let Ok(custom) = std::env::var("ROSTER_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create RosterPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/roster-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the event log
    pub fn event_log(&self) -> PathBuf {
        self.base_dir.join("log.txt")
    }

    /// Get the path to the CSV data file for a configured file name
    pub fn data_file(&self, file_name: &str) -> PathBuf {
        self.base_dir.join(file_name)
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), RosterError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| RosterError::Io(format!("Failed to create base directory: {}", e)))?;

        Ok(())
    }

    /// Check if roster-cli has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, RosterError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("roster-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, RosterError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| RosterError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("roster-cli"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RosterPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(
            paths.data_file("cadastro.csv"),
            temp_dir.path().join("cadastro.csv")
        );
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        // Set the env var
        env::set_var("ROSTER_CLI_DATA_DIR", custom_path);

        let paths = RosterPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        // Clean up
        env::remove_var("ROSTER_CLI_DATA_DIR");
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested");
        let paths = RosterPaths::with_base_dir(base.clone());

        paths.ensure_directories().unwrap();
        assert!(base.exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RosterPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.event_log(), temp_dir.path().join("log.txt"));
        assert!(!paths.is_initialized());
    }
}
