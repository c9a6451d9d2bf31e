//! Storage layer for roster-cli
//!
//! Provides flat-file persistence for the user registry with atomic writes.
//! Two on-disk formats are supported: a comma-delimited table and a
//! pretty-printed JSON document.

pub mod file_io;
pub mod users;

pub use file_io::{read_csv, read_json, write_csv_atomic, write_json_atomic};
pub use users::UserStore;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// On-disk format of the registry data file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageFormat {
    /// Comma-delimited table with a `Name,Email` header row (default)
    #[default]
    Csv,
    /// JSON array of objects with `Name` and `Email` fields
    Json,
}

impl std::fmt::Display for StorageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
        }
    }
}
