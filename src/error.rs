//! Custom error types for roster-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for roster-cli operations
#[derive(Error, Debug)]
pub enum RosterError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV serialization/deserialization errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Rejected user name (empty or whitespace-only)
    #[error("Invalid name: the name cannot be empty")]
    InvalidName,

    /// Rejected email address
    #[error("Invalid email: '{0}' is not a valid address")]
    InvalidEmail(String),

    /// A user with the given email is already registered
    #[error("A user with email '{0}' is already registered")]
    DuplicateEmail(String),

    /// No user matched the given identifier
    #[error("No user found with '{0}'")]
    NotFound(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl RosterError {
    /// Create a "not found" error from any identifier
    pub fn not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound(identifier.into())
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if this is a validation error (name or email)
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidName | Self::InvalidEmail(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for RosterError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for RosterError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for roster-cli operations
pub type RosterResult<T> = Result<T, RosterError>;
