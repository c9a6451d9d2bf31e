//! roster-cli - Terminal-based user registry application
//!
//! This library provides the core functionality for the roster-cli user
//! registry. It stores a small set of user records (name, email) with
//! validation, persistence to a flat file (CSV or JSON), and an append-only
//! event log, driven either by CLI subcommands or an interactive menu.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The user record and its validation rules
//! - `storage`: Flat-file storage layer (CSV and JSON)
//! - `audit`: Append-only event log
//! - `services`: Business logic layer (registry operations)
//! - `display`: Terminal table formatting
//! - `cli`: Subcommand handlers and the interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use roster::config::{paths::RosterPaths, settings::Settings};
//!
//! let paths = RosterPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{RosterError, RosterResult};
