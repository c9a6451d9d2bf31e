//! User settings for roster-cli
//!
//! Manages user preferences including the data file names and the default
//! storage format.

use serde::{Deserialize, Serialize};

use super::paths::RosterPaths;
use crate::error::RosterError;
use crate::storage::StorageFormat;

/// User settings for roster-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// File name of the CSV data file, relative to the base directory
    #[serde(default = "default_csv_file")]
    pub data_file_csv: String,

    /// File name of the JSON data file, relative to the base directory
    #[serde(default = "default_json_file")]
    pub data_file_json: String,

    /// Storage format used when none is given on the command line
    #[serde(default)]
    pub default_format: StorageFormat,
}

fn default_schema_version() -> u32 {
    1
}

fn default_csv_file() -> String {
    "cadastro.csv".to_string()
}

fn default_json_file() -> String {
    "cadastro.json".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            data_file_csv: default_csv_file(),
            data_file_json: default_json_file(),
            default_format: StorageFormat::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &RosterPaths) -> Result<Self, RosterError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| RosterError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| RosterError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &RosterPaths) -> Result<(), RosterError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| RosterError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| RosterError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Resolve the data file path for a storage format
    pub fn data_file(&self, paths: &RosterPaths, format: StorageFormat) -> std::path::PathBuf {
        match format {
            StorageFormat::Csv => paths.data_file(&self.data_file_csv),
            StorageFormat::Json => paths.data_file(&self.data_file_json),
        }
    }
}
