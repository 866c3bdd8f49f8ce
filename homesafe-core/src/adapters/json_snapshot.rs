//! JSON snapshot persistence
//!
//! The whole user collection lives in one flat JSON file, rewritten
//! wholesale on every save. Compatible with the existing `users.json`
//! layout: a pretty-printed array of user objects; unknown fields are
//! ignored on read.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::result::{LoadError, SaveError};
use crate::domain::User;

/// Flat-file JSON persistence for the user collection
pub struct JsonSnapshot {
    path: PathBuf,
}

impl JsonSnapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full user collection from disk
    ///
    /// Distinguishes an absent snapshot (`LoadError::NotFound`) from one
    /// that exists but fails to deserialize (`LoadError::Corrupt`) so the
    /// store can treat the former as a legitimate empty state.
    pub fn read(&self) -> Result<Vec<User>, LoadError> {
        if !self.path.exists() {
            return Err(LoadError::NotFound {
                path: self.path.clone(),
            });
        }

        let content = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|source| LoadError::Corrupt { source })
    }

    /// Replace the snapshot with the given collection
    ///
    /// Writes to a temp file in the same directory and renames it over the
    /// snapshot, so a crash mid-save leaves the previous snapshot intact.
    pub fn write(&self, users: &[User]) -> Result<(), SaveError> {
        let json = serde_json::to_string_pretty(users)?;

        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(&self.path).map_err(|e| SaveError::Io(e.error))?;

        Ok(())
    }
}
