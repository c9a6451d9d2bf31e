//! Display formatting for terminal output
//!
//! Provides utilities for formatting user records for terminal display.

pub mod user;

pub use user::{format_search_results, format_user_list};
