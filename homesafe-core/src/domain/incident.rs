//! Incident domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single logged household-safety event
///
/// Incidents are immutable once created and owned exclusively by the user
/// that logged them. The snapshot format serializes the type label under the
/// `type` key for compatibility with existing `users.json` files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
    /// When the incident occurred (ISO-8601 in the snapshot)
    pub date: DateTime<Utc>,
    /// Short type label (e.g. "Fire", "Fall")
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-text description
    pub description: String,
}

impl Incident {
    /// Create a new incident stamped with the current time
    pub fn new(kind: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            date: Utc::now(),
            kind: kind.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incident_creation() {
        let incident = Incident::new("Fire", "Candle tipped over in the kitchen");
        assert_eq!(incident.kind, "Fire");
        assert_eq!(incident.description, "Candle tipped over in the kitchen");
    }

    #[test]
    fn test_type_label_serialized_under_type_key() {
        let incident = Incident::new("Fall", "Slipped on the stairs");
        let json = serde_json::to_value(&incident).unwrap();
        assert_eq!(json["type"], "Fall");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_unknown_fields_tolerated_on_read() {
        let json = r#"{
            "date": "2025-01-15T10:30:00Z",
            "type": "Fire",
            "description": "Toaster caught fire",
            "severity": "high"
        }"#;
        let incident: Incident = serde_json::from_str(json).unwrap();
        assert_eq!(incident.kind, "Fire");
    }
}
