//! User model
//!
//! A registered user is a (name, email) pair. The email doubles as the
//! record's key: no two records in a store may share one.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name, stored verbatim (leading/trailing whitespace kept)
    #[serde(rename = "Name")]
    pub name: String,

    /// Email address, unique within a store
    #[serde(rename = "Email")]
    pub email: String,
}

impl User {
    /// Create a new user record
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Check whether a criterion matches this user's name or email
    /// (case-insensitive substring match)
    pub fn matches(&self, criterion: &str) -> bool {
        let criterion = criterion.to_lowercase();
        self.name.to_lowercase().contains(&criterion)
            || self.email.to_lowercase().contains(&criterion)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// Check that a name is non-empty after trimming surrounding whitespace
pub fn valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
            .expect("email pattern is a valid regex")
    })
}

/// Check that an email matches `local-part@domain.tld`
///
/// The local part is one-or-more of `[A-Za-z0-9._%+-]`, the domain
/// one-or-more of `[A-Za-z0-9.-]`, and the final label two-or-more ASCII
/// letters. The whole string must match; no deliverability check is made.
pub fn valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}
