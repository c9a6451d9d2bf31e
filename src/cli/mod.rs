//! CLI command handlers
//!
//! This module contains the implementation of CLI commands and the
//! interactive menu, bridging clap argument parsing and free-text prompts
//! with the service layer.

pub mod menu;
pub mod user;

pub use menu::{run_menu, MenuAction};
pub use user::{handle_user_command, UserCommands};
