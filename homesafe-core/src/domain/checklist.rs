//! Checklist domain model

use serde::{Deserialize, Serialize};

/// A preparedness task with a completion flag
///
/// Owned by a user and mutated in place (the flag is flipped); items are
/// never deleted. Serialized with the `isCompleted` key for compatibility
/// with existing snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub description: String,
    #[serde(rename = "isCompleted", default)]
    pub completed: bool,
}

impl ChecklistItem {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            completed: false,
        }
    }
}
