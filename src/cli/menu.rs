//! Interactive menu
//!
//! The numbered menu from the terminal session. Options form a closed enum
//! so dispatch is exhaustive; anything else is an invalid choice. The loop
//! is generic over its reader and writer so tests can drive it with
//! buffers.

use std::io::{BufRead, Write};

use crate::display::{format_search_results, format_user_list};
use crate::error::{RosterError, RosterResult};
use crate::services::RegistryService;

/// One selectable menu option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Register,
    List,
    Delete,
    Search,
    Update,
    GenerateRandom,
    Exit,
}

impl MenuAction {
    /// All options, in menu order
    pub const ALL: [MenuAction; 7] = [
        MenuAction::Register,
        MenuAction::List,
        MenuAction::Delete,
        MenuAction::Search,
        MenuAction::Update,
        MenuAction::GenerateRandom,
        MenuAction::Exit,
    ];

    /// Parse a menu choice
    pub fn from_choice(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Register),
            "2" => Some(Self::List),
            "3" => Some(Self::Delete),
            "4" => Some(Self::Search),
            "5" => Some(Self::Update),
            "6" => Some(Self::GenerateRandom),
            "7" => Some(Self::Exit),
            _ => None,
        }
    }

    /// Menu label for this option
    pub fn label(&self) -> &'static str {
        match self {
            Self::Register => "Register user",
            Self::List => "List users",
            Self::Delete => "Delete user",
            Self::Search => "Search users",
            Self::Update => "Update user",
            Self::GenerateRandom => "Generate a random user",
            Self::Exit => "Exit",
        }
    }
}

/// Run the interactive menu until the user exits (or input ends)
pub fn run_menu<R, W>(service: &mut RegistryService, input: &mut R, out: &mut W) -> RosterResult<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(out)?;
        writeln!(out, "=== User Registry ===")?;
        for (number, action) in (1..).zip(MenuAction::ALL.iter()) {
            writeln!(out, "{}. {}", number, action.label())?;
        }

        let choice = match prompt(input, out, "Choose an option: ")? {
            Some(line) => line,
            None => break,
        };

        match MenuAction::from_choice(&choice) {
            Some(MenuAction::Exit) => {
                writeln!(out, "Leaving the registry...")?;
                break;
            }
            Some(action) => run_action(service, action, input, out)?,
            None => writeln!(out, "Error: Invalid option! Try again.")?,
        }
    }

    Ok(())
}

/// Execute one non-exit action, reporting service errors without ending
/// the loop
fn run_action<R, W>(
    service: &mut RegistryService,
    action: MenuAction,
    input: &mut R,
    out: &mut W,
) -> RosterResult<()>
where
    R: BufRead,
    W: Write,
{
    match action {
        MenuAction::Register => {
            let name = prompt_or_default(input, out, "Enter the name: ")?;
            let email = prompt_or_default(input, out, "Enter the email: ")?;

            match service.create(&name, &email) {
                Ok(user) => writeln!(out, "Success: User '{}' registered!", user.name)?,
                Err(e) => writeln!(out, "Error: {}", e)?,
            }
        }

        MenuAction::List => {
            // The menu reloads from disk before listing
            if let Err(e) = service.load() {
                writeln!(out, "Error: {}", e)?;
            }
            writeln!(out, "{}", format_user_list(service.users()).trim_end())?;
        }

        MenuAction::Delete => {
            let email = prompt_or_default(input, out, "Enter the email of the user to remove: ")?;

            match service.delete(&email) {
                Ok(_) => writeln!(out, "Success: User with email '{}' removed!", email)?,
                Err(e) => writeln!(out, "Error: {}", e)?,
            }
        }

        MenuAction::Search => {
            let criterion =
                prompt_or_default(input, out, "Enter a name or email to search for: ")?;

            let matches = service.search(&criterion);
            if matches.is_empty() {
                writeln!(out, "Error: {}", RosterError::not_found(&criterion))?;
            } else {
                writeln!(out, "{}", format_search_results(&criterion, &matches).trim_end())?;
            }
        }

        MenuAction::Update => {
            let email = prompt_or_default(input, out, "Enter the email of the user to update: ")?;
            let new_name =
                prompt_or_default(input, out, "Enter the new name (blank to keep): ")?;
            let new_email =
                prompt_or_default(input, out, "Enter the new email (blank to keep): ")?;

            let new_name = non_blank(&new_name);
            let new_email = non_blank(&new_email);

            match service.update(&email, new_name, new_email) {
                Ok(_) => writeln!(out, "Success: User with email '{}' updated!", email)?,
                Err(e) => writeln!(out, "Error: {}", e)?,
            }
        }

        MenuAction::GenerateRandom => match service.generate_random() {
            Ok(user) => writeln!(
                out,
                "Success: User '{}' <{}> registered!",
                user.name, user.email
            )?,
            Err(e) => writeln!(out, "Error: {}", e)?,
        },

        // Exit is handled by the loop itself
        MenuAction::Exit => {}
    }

    Ok(())
}

/// Write a prompt and read one line; `None` on end of input
fn prompt<R, W>(input: &mut R, out: &mut W, message: &str) -> RosterResult<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{}", message)?;
    out.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| RosterError::Io(format!("Failed to read input: {}", e)))?;

    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Like `prompt`, but end of input counts as an empty answer
fn prompt_or_default<R, W>(input: &mut R, out: &mut W, message: &str) -> RosterResult<String>
where
    R: BufRead,
    W: Write,
{
    Ok(prompt(input, out, message)?.unwrap_or_default())
}

/// Trimmed input, with blank meaning "not provided"
fn non_blank(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
