//! User store backed by a flat file
//!
//! Holds the full registry in memory as an ordered sequence and mirrors it
//! to disk on demand. Insertion order is preserved and meaningful for
//! listing output.

use std::path::PathBuf;

use crate::error::RosterResult;
use crate::models::User;

use super::file_io::{read_csv, read_json, write_csv_atomic, write_json_atomic};
use super::StorageFormat;

/// In-memory ordered sequence of user records with flat-file persistence
#[derive(Debug)]
pub struct UserStore {
    csv_path: PathBuf,
    json_path: PathBuf,
    users: Vec<User>,
}

impl UserStore {
    /// Create an empty store backed by the given data files
    pub fn new(csv_path: PathBuf, json_path: PathBuf) -> Self {
        Self {
            csv_path,
            json_path,
            users: Vec::new(),
        }
    }

    /// Load the full record set from disk, replacing the in-memory sequence
    ///
    /// A missing file yields an empty store. On a read or parse failure the
    /// store is reset to empty and the error is returned for the caller to
    /// report; it is not fatal.
    pub fn load(&mut self, format: StorageFormat) -> RosterResult<()> {
        self.users.clear();

        let loaded = match format {
            StorageFormat::Csv => read_csv(&self.csv_path)?,
            StorageFormat::Json => read_json(&self.json_path)?,
        };

        self.users = loaded;
        Ok(())
    }

    /// Save the full record set to disk, overwriting the target file
    pub fn save(&self, format: StorageFormat) -> RosterResult<()> {
        match format {
            StorageFormat::Csv => write_csv_atomic(&self.csv_path, &self.users),
            StorageFormat::Json => write_json_atomic(&self.json_path, &self.users),
        }
    }

    /// All records in insertion order
    pub fn all(&self) -> &[User] {
        &self.users
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Whether any record has exactly this email
    pub fn contains_email(&self, email: &str) -> bool {
        self.users.iter().any(|u| u.email == email)
    }

    /// First record with exactly this email
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    /// Mutable access to the first record with exactly this email
    pub fn find_by_email_mut(&mut self, email: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.email == email)
    }

    /// Append a record, preserving insertion order
    pub fn push(&mut self, user: User) {
        self.users.push(user);
    }

    /// Remove the first record with exactly this email
    pub fn remove_by_email(&mut self, email: &str) -> Option<User> {
        let index = self.users.iter().position(|u| u.email == email)?;
        Some(self.users.remove(index))
    }

    /// Records whose name or email contains the criterion, case-insensitively
    pub fn search(&self, criterion: &str) -> Vec<&User> {
        self.users.iter().filter(|u| u.matches(criterion)).collect()
    }
}
