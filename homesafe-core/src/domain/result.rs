//! Result and error types for the core library
//!
//! Store failures are returned as explicit result values and never cross the
//! store/derivation boundary as panics. None of these are fatal to the
//! session - the CLI presents them and decides retry vs. continue.

use std::path::PathBuf;

use thiserror::Error;

/// Failure reading the persisted snapshot
#[derive(Error, Debug)]
pub enum LoadError {
    /// The snapshot file does not exist yet. `UserStore::load` absorbs this
    /// (an absent snapshot is a legitimate empty store); it only surfaces
    /// from the snapshot adapter itself.
    #[error("snapshot not found: {path}")]
    NotFound { path: PathBuf },

    /// The snapshot exists but does not deserialize into the expected shape.
    /// The in-memory collection is left unchanged.
    #[error("snapshot is corrupt: {source}")]
    Corrupt {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure writing the persisted snapshot
#[derive(Error, Debug)]
pub enum SaveError {
    #[error("failed to write snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize users: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Failure registering a new user
///
/// Every variant leaves the store's user count unchanged, so the caller can
/// always re-prompt and retry.
#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("username is already taken")]
    DuplicateUsername,

    #[error("password must be at least {minimum} characters")]
    PasswordTooShort { minimum: usize },

    /// The new user could not be persisted; the append was rolled back.
    #[error("failed to persist new user")]
    Save(#[source] SaveError),
}
