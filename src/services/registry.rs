//! Registry service
//!
//! Owns the user store for the lifetime of the process and implements the
//! registry operations: create, delete, search, update, and random
//! generation. Every mutation is persisted to disk immediately and logged
//! to the injected event sink.

use crate::audit::EventSink;
use crate::error::{RosterError, RosterResult};
use crate::models::{valid_email, valid_name, User};
use crate::storage::{StorageFormat, UserStore};

use super::generator;

/// Service for user registry operations
pub struct RegistryService {
    store: UserStore,
    events: Box<dyn EventSink>,
    format: StorageFormat,
}

impl RegistryService {
    /// Create a new registry service
    pub fn new(store: UserStore, events: Box<dyn EventSink>, format: StorageFormat) -> Self {
        Self {
            store,
            events,
            format,
        }
    }

    /// The storage format mutations are persisted in
    pub fn format(&self) -> StorageFormat {
        self.format
    }

    /// All registered users in insertion order
    pub fn users(&self) -> &[User] {
        self.store.all()
    }

    /// Number of registered users
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Load the registry from disk, replacing the in-memory state
    ///
    /// On failure the store is left empty and the error is returned after
    /// being logged; callers report it as a warning and continue.
    pub fn load(&mut self) -> RosterResult<()> {
        if let Err(e) = self.store.load(self.format) {
            self.log_event(&format!("Failed to load users: {}", e));
            return Err(e);
        }
        Ok(())
    }

    /// Register a new user
    ///
    /// Fails without mutating state if the name is empty, the email is
    /// malformed, or the email is already registered.
    pub fn create(&mut self, name: &str, email: &str) -> RosterResult<User> {
        if !valid_name(name) {
            return Err(RosterError::InvalidName);
        }

        if !valid_email(email) {
            return Err(RosterError::InvalidEmail(email.to_string()));
        }

        if self.store.contains_email(email) {
            return Err(RosterError::DuplicateEmail(email.to_string()));
        }

        let user = User::new(name, email);
        self.store.push(user.clone());

        let saved = self.persist();
        self.log_event(&format!(
            "User '{}' with email '{}' registered.",
            user.name, user.email
        ));
        saved?;

        Ok(user)
    }

    /// Remove the user with exactly this email
    pub fn delete(&mut self, email: &str) -> RosterResult<User> {
        let removed = self
            .store
            .remove_by_email(email)
            .ok_or_else(|| RosterError::not_found(email))?;

        let saved = self.persist();
        self.log_event(&format!("User with email '{}' removed.", email));
        saved?;

        Ok(removed)
    }

    /// Find users whose name or email contains the criterion
    /// (case-insensitive). Read-only; nothing is persisted.
    pub fn search(&self, criterion: &str) -> Vec<&User> {
        self.store.search(criterion)
    }

    /// Update the user with exactly this email
    ///
    /// A new name is adopted only if it passes validation; a new email only
    /// if it passes validation and is not held by a different user. Invalid
    /// sub-fields are silently kept at their old values, and the operation
    /// still persists, logs, and reports success.
    pub fn update(
        &mut self,
        email: &str,
        new_name: Option<&str>,
        new_email: Option<&str>,
    ) -> RosterResult<User> {
        let accepted_name = new_name.filter(|n| valid_name(n)).map(str::to_string);
        let accepted_email = new_email
            .filter(|e| valid_email(e))
            .filter(|e| *e == email || !self.store.contains_email(e))
            .map(str::to_string);

        let user = self
            .store
            .find_by_email_mut(email)
            .ok_or_else(|| RosterError::not_found(email))?;

        if let Some(name) = accepted_name {
            user.name = name;
        }
        if let Some(new_email) = accepted_email {
            user.email = new_email;
        }
        let updated = user.clone();

        let saved = self.persist();
        self.log_event(&format!(
            "User with email '{}' updated to name '{}' and email '{}'.",
            email, updated.name, updated.email
        ));
        saved?;

        Ok(updated)
    }

    /// Register a random user
    ///
    /// The email's domain label is re-randomized until it does not collide
    /// with any registered email, then the record goes through `create`.
    pub fn generate_random(&mut self) -> RosterResult<User> {
        let mut rng = rand::thread_rng();

        let name = generator::random_name(&mut rng);
        let mut email = generator::random_email(&mut rng, &name);
        while self.store.contains_email(&email) {
            email = generator::random_email(&mut rng, &name);
        }

        self.create(&name, &email)
    }

    /// Persist the full store, keeping the in-memory state on failure
    ///
    /// A later successful save recovers durability, so the error is logged
    /// and handed back without rolling anything back.
    fn persist(&mut self) -> RosterResult<()> {
        if let Err(e) = self.store.save(self.format) {
            self.log_event(&format!("Failed to save users: {}", e));
            return Err(e);
        }
        Ok(())
    }

    /// Append an event line; a failed log write never fails the operation
    fn log_event(&self, message: &str) {
        let _ = self.events.append(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::MemorySink;
    use tempfile::TempDir;

    fn create_test_service(format: StorageFormat) -> (TempDir, MemorySink, RegistryService) {
        let temp_dir = TempDir::new().unwrap();
        let store = UserStore::new(
            temp_dir.path().join("cadastro.csv"),
            temp_dir.path().join("cadastro.json"),
        );
        let sink = MemorySink::new();
        let service = RegistryService::new(store, Box::new(sink.clone()), format);
        (temp_dir, sink, service)
    }

    #[test]
    fn test_create_registers_and_logs() {
        let (_temp, sink, mut service) = create_test_service(StorageFormat::Csv);

        let user = service.create("Ana Silva", "ana@example.com").unwrap();
        assert_eq!(user.name, "Ana Silva");
        assert_eq!(service.len(), 1);

        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert!(events[0].contains("ana@example.com"));
    }

    #[test]
    fn test_create_rejects_invalid_name() {
        let (_temp, sink, mut service) = create_test_service(StorageFormat::Csv);

        let err = service.create("   ", "ana@example.com").unwrap_err();
        assert!(matches!(err, RosterError::InvalidName));
        assert!(service.is_empty());
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_create_rejects_invalid_email() {
        let (_temp, _sink, mut service) = create_test_service(StorageFormat::Csv);

        let err = service.create("Ana", "not-an-email").unwrap_err();
        assert!(matches!(err, RosterError::InvalidEmail(_)));
        assert!(service.is_empty());
    }

    #[test]
    fn test_create_rejects_duplicate_email() {
        let (_temp, _sink, mut service) = create_test_service(StorageFormat::Csv);

        service.create("Ana Silva", "ana@example.com").unwrap();
        let err = service.create("Outro", "ana@example.com").unwrap_err();

        assert!(matches!(err, RosterError::DuplicateEmail(_)));
        assert_eq!(service.len(), 1);
    }

    #[test]
    fn test_create_persists_immediately() {
        let (temp, _sink, mut service) = create_test_service(StorageFormat::Csv);

        service.create("Ana", "ana@example.com").unwrap();
        assert!(temp.path().join("cadastro.csv").exists());

        let mut store = UserStore::new(
            temp.path().join("cadastro.csv"),
            temp.path().join("cadastro.json"),
        );
        store.load(StorageFormat::Csv).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_removes_and_logs() {
        let (_temp, sink, mut service) = create_test_service(StorageFormat::Json);

        service.create("Ana", "ana@example.com").unwrap();
        service.create("Pedro", "pedro@example.com").unwrap();

        let removed = service.delete("ana@example.com").unwrap();
        assert_eq!(removed.name, "Ana");
        assert_eq!(service.len(), 1);
        assert!(sink.events().iter().any(|e| e.contains("removed")));
    }

    #[test]
    fn test_delete_missing_email_is_not_found() {
        let (_temp, _sink, mut service) = create_test_service(StorageFormat::Csv);

        service.create("Ana", "ana@example.com").unwrap();
        let err = service.delete("nobody@example.com").unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(service.len(), 1);
    }

    #[test]
    fn test_delete_matches_email_case_sensitively() {
        let (_temp, _sink, mut service) = create_test_service(StorageFormat::Csv);

        service.create("Ana", "Ana@Example.com").unwrap();
        assert!(service.delete("ana@example.com").is_err());
        assert_eq!(service.len(), 1);
    }

    #[test]
    fn test_search_is_case_insensitive_and_read_only() {
        let (temp, _sink, mut service) = create_test_service(StorageFormat::Csv);

        service.create("Ana Silva", "Ana@Example.com").unwrap();
        let data_file = temp.path().join("cadastro.csv");
        let before = std::fs::metadata(&data_file).unwrap().modified().unwrap();

        let matches = service.search("ana");
        assert_eq!(matches.len(), 1);

        assert!(service.search("nobody").is_empty());
        let after = std::fs::metadata(&data_file).unwrap().modified().unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_update_both_fields() {
        let (_temp, _sink, mut service) = create_test_service(StorageFormat::Json);

        service.create("Ana", "ana@example.com").unwrap();
        let updated = service
            .update("ana@example.com", Some("Ana Maria"), Some("am@example.com"))
            .unwrap();

        assert_eq!(updated.name, "Ana Maria");
        assert_eq!(updated.email, "am@example.com");
        assert!(service.search("ana@example.com").is_empty());
    }

    #[test]
    fn test_update_blank_name_keeps_old_value() {
        let (_temp, _sink, mut service) = create_test_service(StorageFormat::Csv);

        service.create("Ana", "ana@example.com").unwrap();
        let updated = service
            .update("ana@example.com", Some(""), Some("novo@x.com"))
            .unwrap();

        // Only the email changes; the blank name is silently dropped
        assert_eq!(updated.name, "Ana");
        assert_eq!(updated.email, "novo@x.com");
    }

    #[test]
    fn test_update_invalid_email_keeps_old_value_but_succeeds() {
        let (_temp, sink, mut service) = create_test_service(StorageFormat::Csv);

        service.create("Ana", "ana@example.com").unwrap();
        let updated = service
            .update("ana@example.com", None, Some("broken"))
            .unwrap();

        assert_eq!(updated.email, "ana@example.com");
        assert!(sink.events().iter().any(|e| e.contains("updated")));
    }

    #[test]
    fn test_update_missing_user_is_not_found() {
        let (_temp, _sink, mut service) = create_test_service(StorageFormat::Csv);

        let err = service
            .update("nobody@example.com", Some("X"), None)
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_update_refuses_email_owned_by_another_user() {
        let (_temp, _sink, mut service) = create_test_service(StorageFormat::Csv);

        service.create("Ana", "ana@example.com").unwrap();
        service.create("Pedro", "pedro@example.com").unwrap();

        let updated = service
            .update("pedro@example.com", None, Some("ana@example.com"))
            .unwrap();

        // The colliding email is silently kept at its old value
        assert_eq!(updated.email, "pedro@example.com");
        assert_eq!(
            service
                .users()
                .iter()
                .filter(|u| u.email == "ana@example.com")
                .count(),
            1
        );
    }

    #[test]
    fn test_update_can_keep_own_email() {
        let (_temp, _sink, mut service) = create_test_service(StorageFormat::Csv);

        service.create("Ana", "ana@example.com").unwrap();
        let updated = service
            .update("ana@example.com", Some("Ana Maria"), Some("ana@example.com"))
            .unwrap();

        assert_eq!(updated.name, "Ana Maria");
        assert_eq!(updated.email, "ana@example.com");
    }

    #[test]
    fn test_generate_random_never_collides() {
        let (_temp, _sink, mut service) = create_test_service(StorageFormat::Json);

        for _ in 0..20 {
            service.generate_random().unwrap();
        }

        let mut emails: Vec<_> = service.users().iter().map(|u| u.email.clone()).collect();
        let total = emails.len();
        emails.sort();
        emails.dedup();

        assert_eq!(total, 20);
        assert_eq!(emails.len(), 20);
    }

    #[test]
    fn test_load_failure_leaves_empty_store_and_logs() {
        let (temp, sink, mut service) = create_test_service(StorageFormat::Json);

        std::fs::write(temp.path().join("cadastro.json"), "{{broken").unwrap();

        let result = service.load();
        assert!(result.is_err());
        assert!(service.is_empty());
        assert!(sink.events().iter().any(|e| e.contains("Failed to load")));
    }

    #[test]
    fn test_save_failure_keeps_memory_state() {
        let temp_dir = TempDir::new().unwrap();
        // Point the CSV target at an existing directory so the final rename
        // cannot succeed
        let blocked = temp_dir.path().join("cadastro.csv");
        std::fs::create_dir(&blocked).unwrap();

        let store = UserStore::new(blocked, temp_dir.path().join("cadastro.json"));
        let sink = MemorySink::new();
        let mut service =
            RegistryService::new(store, Box::new(sink.clone()), StorageFormat::Csv);

        let result = service.create("Ana", "ana@example.com");
        assert!(result.is_err());

        // The record is retained in memory and the failure was logged
        assert_eq!(service.len(), 1);
        assert!(sink.events().iter().any(|e| e.contains("Failed to save")));
    }
}
