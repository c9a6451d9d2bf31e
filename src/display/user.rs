//! User display formatting
//!
//! Formats the registry for terminal output as a fixed-width two-column
//! table, plus a compact form for search results.

use crate::models::User;

/// Format the full registry as a two-column table
pub fn format_user_list(users: &[User]) -> String {
    if users.is_empty() {
        return "No users registered.".to_string();
    }

    // Calculate column widths
    let name_width = users
        .iter()
        .map(|u| u.name.len())
        .max()
        .unwrap_or(4)
        .max("Name".len());

    let email_width = users
        .iter()
        .map(|u| u.email.len())
        .max()
        .unwrap_or(5)
        .max("Email".len());

    let mut output = String::new();
    output.push_str("=== Registered Users ===\n");
    output.push_str(&format!(
        "{:<name_width$} | {:<email_width$}\n",
        "Name",
        "Email",
        name_width = name_width,
        email_width = email_width,
    ));
    output.push_str(&"-".repeat(name_width + email_width + 3));
    output.push('\n');

    for user in users {
        output.push_str(&format!(
            "{:<name_width$} | {:<email_width$}\n",
            user.name,
            user.email,
            name_width = name_width,
            email_width = email_width,
        ));
    }

    output
}

/// Format search matches, one line per user
pub fn format_search_results(criterion: &str, matches: &[&User]) -> String {
    let mut output = String::new();
    output.push_str(&format!("=== Search results for '{}' ===\n", criterion));

    for user in matches {
        output.push_str(&format!(
            "Found user: Name: {}, Email: {}\n",
            user.name, user.email
        ));
    }

    output
}
