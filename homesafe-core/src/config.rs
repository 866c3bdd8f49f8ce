//! Configuration management
//!
//! Compatible with the deployment `settings.json` format:
//! ```json
//! {
//!   "app": { "snapshotFile": "users.json", ... }
//! }
//! ```
//! The snapshot filename is the only managed setting; everything else in
//! the file is preserved when saving.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Default filename for the user snapshot
pub const DEFAULT_SNAPSHOT_FILE: &str = "users.json";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default)]
    snapshot_file: Option<String>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// HomeSafe configuration (simplified view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    pub snapshot_file: String,
    // Keep the raw settings for preservation when saving
    _raw_settings: SettingsFile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot_file: DEFAULT_SNAPSHOT_FILE.to_string(),
            _raw_settings: SettingsFile::default(),
        }
    }
}

impl Config {
    /// Load config from the data directory
    ///
    /// A missing or unparseable settings file falls back to defaults.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let settings_path = data_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        let snapshot_file = raw
            .app
            .snapshot_file
            .clone()
            .unwrap_or_else(|| DEFAULT_SNAPSHOT_FILE.to_string());

        Ok(Self {
            snapshot_file,
            _raw_settings: raw,
        })
    }

    /// Save config to the data directory
    ///
    /// Preserves settings keys this tool doesn't manage.
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let settings_path = data_dir.join("settings.json");

        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        settings.app.snapshot_file = Some(self.snapshot_file.clone());

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_settings_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.snapshot_file, "users.json");
    }

    #[test]
    fn test_unparseable_settings_uses_defaults() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{oops").unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.snapshot_file, "users.json");
    }

    #[test]
    fn test_snapshot_file_override() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"app": {"snapshotFile": "household.json"}}"#,
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.snapshot_file, "household.json");
    }

    #[test]
    fn test_save_preserves_unmanaged_keys() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"app": {"theme": "dark"}}"#,
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        config.save(dir.path()).unwrap();

        let content = std::fs::read_to_string(dir.path().join("settings.json")).unwrap();
        assert!(content.contains("theme"));
        assert!(content.contains("snapshotFile"));
    }
}
