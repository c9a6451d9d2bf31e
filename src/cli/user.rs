//! User CLI commands
//!
//! Implements the direct (non-interactive) registry commands.

use clap::Subcommand;

use crate::display::{format_search_results, format_user_list};
use crate::error::{RosterError, RosterResult};
use crate::services::RegistryService;

/// Registry subcommands
#[derive(Subcommand)]
pub enum UserCommands {
    /// Register a new user
    Add {
        /// Display name
        name: String,
        /// Email address (unique)
        email: String,
    },
    /// List all registered users
    List,
    /// Remove a user by email
    Delete {
        /// Email of the user to remove (exact match)
        email: String,
    },
    /// Search users by name or email
    Search {
        /// Case-insensitive substring to look for
        query: String,
    },
    /// Update a user's name and/or email
    Update {
        /// Email of the user to update (exact match)
        email: String,
        /// New display name
        #[arg(short, long)]
        name: Option<String>,
        /// New email address
        #[arg(short = 'e', long = "email")]
        new_email: Option<String>,
    },
    /// Register randomly generated users
    Generate {
        /// How many users to generate
        #[arg(short, long, default_value_t = 1)]
        count: u32,
    },
}

/// Handle a registry command
pub fn handle_user_command(service: &mut RegistryService, cmd: UserCommands) -> RosterResult<()> {
    match cmd {
        UserCommands::Add { name, email } => {
            let user = service.create(&name, &email)?;
            println!("Success: User '{}' registered!", user.name);
        }

        UserCommands::List => {
            print!("{}", with_trailing_newline(format_user_list(service.users())));
        }

        UserCommands::Delete { email } => {
            service.delete(&email)?;
            println!("Success: User with email '{}' removed!", email);
        }

        UserCommands::Search { query } => {
            let matches = service.search(&query);
            if matches.is_empty() {
                return Err(RosterError::not_found(&query));
            }
            print!("{}", format_search_results(&query, &matches));
        }

        UserCommands::Update {
            email,
            name,
            new_email,
        } => {
            service.update(&email, name.as_deref(), new_email.as_deref())?;
            println!("Success: User with email '{}' updated!", email);
        }

        UserCommands::Generate { count } => {
            for _ in 0..count {
                let user = service.generate_random()?;
                println!("Success: User '{}' <{}> registered!", user.name, user.email);
            }
        }
    }

    Ok(())
}

fn with_trailing_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
