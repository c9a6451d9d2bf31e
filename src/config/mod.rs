//! Configuration module for roster-cli
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Storage format preferences

pub mod paths;
pub mod settings;

pub use paths::RosterPaths;
pub use settings::Settings;
