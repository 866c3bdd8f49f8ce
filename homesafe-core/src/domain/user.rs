//! User domain model

use serde::{Deserialize, Serialize};

use super::{ChecklistItem, Incident};

/// A registered user with their incident history and preparedness checklist
///
/// Snapshot key order is the struct field order: `username`, `password`,
/// `incidents`, `checklist`. The password is stored as-is - see the
/// `CredentialVerifier` port for the substitution seam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique within the store (enforced at registration)
    pub username: String,
    pub password: String,
    /// Append-only in normal use; insertion order is chronological
    #[serde(default)]
    pub incidents: Vec<Incident>,
    /// A record without a `checklist` key gets the default seed items
    #[serde(default = "default_checklist")]
    pub checklist: Vec<ChecklistItem>,
}

/// Seed items every new user starts with
fn default_checklist() -> Vec<ChecklistItem> {
    vec![
        ChecklistItem::new("Flashlight charged"),
        ChecklistItem::new("Fire extinguisher accessible"),
        ChecklistItem::new("Keep candles away from curtains"),
    ]
}

impl User {
    /// Create a new user with the default checklist and no incidents
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            incidents: Vec::new(),
            checklist: default_checklist(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_gets_seed_checklist() {
        let user = User::new("ana", "hunter22");
        assert_eq!(user.checklist.len(), 3);
        assert_eq!(user.checklist[0].description, "Flashlight charged");
        assert!(user.checklist.iter().all(|item| !item.completed));
        assert!(user.incidents.is_empty());
    }

    #[test]
    fn test_missing_checklist_key_defaults_to_seed_items() {
        let json = r#"{"username": "ana", "password": "hunter22"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.checklist.len(), 3);
        assert!(user.incidents.is_empty());
    }

    #[test]
    fn test_snapshot_key_order_is_stable() {
        let user = User::new("ana", "hunter22");
        let json = serde_json::to_string(&user).unwrap();
        let username_at = json.find("\"username\"").unwrap();
        let password_at = json.find("\"password\"").unwrap();
        let incidents_at = json.find("\"incidents\"").unwrap();
        let checklist_at = json.find("\"checklist\"").unwrap();
        assert!(username_at < password_at);
        assert!(password_at < incidents_at);
        assert!(incidents_at < checklist_at);
    }
}
