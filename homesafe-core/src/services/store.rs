//! User store - authentication, registration, and snapshot persistence
//!
//! Holds the full user collection in memory and mirrors it to the JSON
//! snapshot after every mutation. Exactly one session mutates the store at
//! a time, so no locking is involved; a future multi-session design would
//! need the check-then-append-then-persist sequence in `register` to become
//! a single critical section.

use crate::adapters::JsonSnapshot;
use crate::domain::result::{LoadError, RegistrationError, SaveError};
use crate::domain::User;
use crate::ports::CredentialVerifier;

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LEN: usize = 6;

/// The in-memory + persisted collection of all registered users
pub struct UserStore {
    snapshot: JsonSnapshot,
    verifier: Box<dyn CredentialVerifier>,
    users: Vec<User>,
}

impl UserStore {
    /// Create an empty store backed by the given snapshot and verifier
    pub fn new(snapshot: JsonSnapshot, verifier: Box<dyn CredentialVerifier>) -> Self {
        Self {
            snapshot,
            verifier,
            users: Vec::new(),
        }
    }

    /// Load the persisted snapshot into memory
    ///
    /// An absent snapshot leaves the collection empty and is not an error.
    /// A corrupt snapshot is surfaced to the caller and leaves the
    /// collection at its prior state. Idempotent for an unchanged backing
    /// file.
    pub fn load(&mut self) -> Result<(), LoadError> {
        match self.snapshot.read() {
            Ok(users) => {
                self.users = users;
                Ok(())
            }
            Err(LoadError::NotFound { .. }) => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Persist the full in-memory collection
    pub fn save(&self) -> Result<(), SaveError> {
        self.snapshot.write(&self.users)
    }

    /// Find the first user matching the credentials, or None
    ///
    /// Linear scan in collection order; the username match is exact and
    /// case-sensitive, the credential check is delegated to the configured
    /// verifier. An authentication miss is a legitimate result, not an
    /// error.
    pub fn authenticate(&self, username: &str, password: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|user| user.username == username && self.verifier.verify(password, &user.password))
    }

    /// Register a new user and persist immediately
    ///
    /// Never loops or retries internally - on any failure the store is
    /// unchanged and the caller decides whether to re-prompt. If the
    /// snapshot write fails, the append is rolled back before the error is
    /// returned.
    pub fn register(&mut self, username: &str, password: &str) -> Result<&User, RegistrationError> {
        if self.users.iter().any(|user| user.username == username) {
            return Err(RegistrationError::DuplicateUsername);
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(RegistrationError::PasswordTooShort {
                minimum: MIN_PASSWORD_LEN,
            });
        }

        self.users.push(User::new(username, password));
        if let Err(e) = self.save() {
            self.users.pop();
            return Err(RegistrationError::Save(e));
        }

        Ok(self.users.last().expect("user was just appended"))
    }

    /// All users in collection order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Mutable access to a user for the session boundary
    pub fn user_mut(&mut self, username: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|user| user.username == username)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::PlaintextVerifier;
    use tempfile::tempdir;

    fn store_in(dir: &std::path::Path) -> UserStore {
        UserStore::new(
            JsonSnapshot::new(dir.join("users.json")),
            Box::new(PlaintextVerifier),
        )
    }

    #[test]
    fn test_register_then_authenticate() {
        let dir = tempdir().unwrap();
        let mut store = store_in(dir.path());

        store.register("ana", "hunter22").unwrap();

        let user = store.authenticate("ana", "hunter22").unwrap();
        assert_eq!(user.username, "ana");
    }

    #[test]
    fn test_authenticate_wrong_password_is_none() {
        let dir = tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.register("ana", "hunter22").unwrap();

        assert!(store.authenticate("ana", "wrong").is_none());
        assert!(store.authenticate("Ana", "hunter22").is_none());
    }

    #[test]
    fn test_authenticate_empty_store_is_none() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());

        assert!(store.authenticate("ana", "hunter22").is_none());
    }

    #[test]
    fn test_duplicate_username_rejected_and_count_unchanged() {
        let dir = tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.register("ana", "hunter22").unwrap();

        let err = store.register("ana", "different").unwrap_err();
        assert!(matches!(err, RegistrationError::DuplicateUsername));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_username_uniqueness_is_case_sensitive() {
        let dir = tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.register("ana", "hunter22").unwrap();

        // "Ana" is a different username; this must succeed
        store.register("Ana", "hunter22").unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_short_password_rejected() {
        let dir = tempdir().unwrap();
        let mut store = store_in(dir.path());

        for short in ["", "a", "12345"] {
            let err = store.register("ana", short).unwrap_err();
            assert!(matches!(err, RegistrationError::PasswordTooShort { minimum: 6 }));
        }
        assert!(store.is_empty());

        // Exactly the minimum is accepted
        store.register("ana", "123456").unwrap();
    }

    #[test]
    fn test_register_persists_immediately() {
        let dir = tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.register("ana", "hunter22").unwrap();

        let mut fresh = store_in(dir.path());
        fresh.load().unwrap();
        assert_eq!(fresh.len(), 1);
    }

    #[test]
    fn test_load_missing_snapshot_leaves_store_empty() {
        let dir = tempdir().unwrap();
        let mut store = store_in(dir.path());

        store.load().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_corrupt_snapshot_keeps_prior_state() {
        let dir = tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.register("ana", "hunter22").unwrap();

        std::fs::write(dir.path().join("users.json"), "{broken").unwrap();

        assert!(matches!(store.load(), Err(LoadError::Corrupt { .. })));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_load_is_idempotent() {
        let dir = tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.register("ana", "hunter22").unwrap();
        store.register("bruno", "secret99").unwrap();

        let mut fresh = store_in(dir.path());
        fresh.load().unwrap();
        let first = fresh.users().to_vec();
        fresh.load().unwrap();
        assert_eq!(fresh.users(), first.as_slice());
    }

    #[test]
    fn test_first_match_wins_on_duplicate_usernames() {
        // A hand-edited snapshot can violate uniqueness; authentication
        // returns the first match in collection order.
        let dir = tempdir().unwrap();
        let snapshot = JsonSnapshot::new(dir.path().join("users.json"));
        let mut first = User::new("ana", "hunter22");
        first.incidents.push(crate::domain::Incident::new("Fire", "first"));
        let second = User::new("ana", "hunter22");
        snapshot.write(&[first, second]).unwrap();

        let mut store = store_in(dir.path());
        store.load().unwrap();

        let user = store.authenticate("ana", "hunter22").unwrap();
        assert_eq!(user.incidents.len(), 1);
    }

    #[test]
    fn test_user_mut_finds_registered_user() {
        let dir = tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.register("ana", "hunter22").unwrap();

        let user = store.user_mut("ana").unwrap();
        user.checklist[0].completed = true;
        store.save().unwrap();

        let mut fresh = store_in(dir.path());
        fresh.load().unwrap();
        assert!(fresh.users()[0].checklist[0].completed);
    }
}
