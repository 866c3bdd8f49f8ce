//! Backup service - snapshot backup management
//!
//! Creates ZIP archives containing the user snapshot and the settings file,
//! so a damaged or hand-edited `users.json` can be rolled back.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

use crate::domain::BackupMetadata;

/// Settings file included in backups when present
const SETTINGS_FILE: &str = "settings.json";

/// Backup service for snapshot backup management
pub struct BackupService {
    data_dir: PathBuf,
    snapshot_filename: String,
}

impl BackupService {
    pub fn new(data_dir: PathBuf, snapshot_filename: String) -> Self {
        Self {
            data_dir,
            snapshot_filename,
        }
    }

    fn backups_dir(&self) -> PathBuf {
        self.data_dir.join("backups")
    }

    /// Create a backup of the snapshot and settings as a ZIP archive
    pub fn create(&self, max_backups: Option<usize>) -> Result<BackupMetadata> {
        let backups_dir = self.backups_dir();
        fs::create_dir_all(&backups_dir)?;

        let snapshot_path = self.data_dir.join(&self.snapshot_filename);
        if !snapshot_path.exists() {
            anyhow::bail!("Snapshot file not found");
        }

        let backup_name = Self::backup_name("homesafe");
        let backup_path = backups_dir.join(&backup_name);
        self.write_archive(&backup_path)?;

        let size_bytes = fs::metadata(&backup_path)?.len();

        if let Some(max) = max_backups {
            self.apply_retention(max)?;
        }

        Ok(BackupMetadata {
            name: backup_name,
            created_at: Utc::now(),
            size_bytes,
        })
    }

    /// List all backups, newest first
    pub fn list(&self) -> Result<Vec<BackupMetadata>> {
        let backups_dir = self.backups_dir();
        if !backups_dir.exists() {
            return Ok(Vec::new());
        }

        let mut backups = Vec::new();
        for entry in fs::read_dir(&backups_dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.extension().and_then(|e| e.to_str()) != Some("zip") {
                continue;
            }

            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("")
                .to_string();

            if !name.starts_with("homesafe-") {
                continue;
            }

            let size_bytes = fs::metadata(&path)?.len();
            let created_at = Self::parse_backup_time(&name);

            backups.push(BackupMetadata {
                name,
                created_at,
                size_bytes,
            });
        }

        backups.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(backups)
    }

    /// Restore the snapshot and settings from a backup
    ///
    /// The current snapshot is archived first, so a mistaken restore can
    /// itself be rolled back.
    pub fn restore(&self, backup_name: &str) -> Result<()> {
        let backup_path = self.backups_dir().join(backup_name);
        if !backup_path.exists() {
            anyhow::bail!("Backup not found: {}", backup_name);
        }

        let snapshot_path = self.data_dir.join(&self.snapshot_filename);
        if snapshot_path.exists() {
            let pre_restore_path = self
                .backups_dir()
                .join(Self::backup_name("homesafe-pre-restore"));
            self.write_archive(&pre_restore_path)?;
        }

        let file = File::open(&backup_path)?;
        let mut archive = ZipArchive::new(file)?;

        for i in 0..archive.len() {
            let mut entry = archive.by_index(i)?;
            let name = entry.name().to_string();

            // Settings restore by name; anything else is a user snapshot and
            // lands at the currently configured snapshot filename.
            let target_path = if name == SETTINGS_FILE {
                self.data_dir.join(SETTINGS_FILE)
            } else {
                self.data_dir.join(&self.snapshot_filename)
            };

            let mut outfile = File::create(&target_path)?;
            std::io::copy(&mut entry, &mut outfile)?;
        }

        Ok(())
    }

    /// Clear all backups
    pub fn clear(&self) -> Result<ClearResult> {
        let backups = self.list()?;
        let deleted = backups.len() as i64;

        for backup in &backups {
            fs::remove_file(self.backups_dir().join(&backup.name))?;
        }

        Ok(ClearResult { deleted })
    }

    fn write_archive(&self, backup_path: &Path) -> Result<()> {
        let file = File::create(backup_path).context("Failed to create backup file")?;
        let mut zip = ZipWriter::new(file);
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        let mut buffer = Vec::new();

        let snapshot_path = self.data_dir.join(&self.snapshot_filename);
        zip.start_file(&self.snapshot_filename, options)?;
        File::open(&snapshot_path)?.read_to_end(&mut buffer)?;
        zip.write_all(&buffer)?;

        let settings_path = self.data_dir.join(SETTINGS_FILE);
        if settings_path.exists() {
            zip.start_file(SETTINGS_FILE, options)?;
            buffer.clear();
            File::open(&settings_path)?.read_to_end(&mut buffer)?;
            zip.write_all(&buffer)?;
        }

        zip.finish()?;
        Ok(())
    }

    fn backup_name(prefix: &str) -> String {
        let now = Utc::now();
        let timestamp = now.format("%Y-%m-%dT%H-%M-%S");
        let micros = now.timestamp_subsec_micros();
        format!("{}-{}-{:06}.zip", prefix, timestamp, micros)
    }

    /// Parse creation time from a backup filename
    fn parse_backup_time(backup_name: &str) -> chrono::DateTime<Utc> {
        let ts = backup_name
            .strip_prefix("homesafe-pre-restore-")
            .or_else(|| backup_name.strip_prefix("homesafe-"))
            .and_then(|s| s.strip_suffix(".zip"));

        if let Some(ts) = ts {
            chrono::NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H-%M-%S-%f")
                .or_else(|_| chrono::NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H-%M-%S"))
                .map(|dt| dt.and_utc())
                .unwrap_or_else(|_| Utc::now())
        } else {
            Utc::now()
        }
    }

    fn apply_retention(&self, max_backups: usize) -> Result<()> {
        let mut backups = self.list()?;

        while backups.len() > max_backups {
            if let Some(oldest) = backups.pop() {
                fs::remove_file(self.backups_dir().join(&oldest.name))?;
            }
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct ClearResult {
    pub deleted: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn service_with_snapshot(dir: &Path) -> BackupService {
        fs::write(dir.join("users.json"), "[]").unwrap();
        BackupService::new(dir.to_path_buf(), "users.json".to_string())
    }

    #[test]
    fn test_create_and_list() {
        let dir = tempdir().unwrap();
        let service = service_with_snapshot(dir.path());

        let meta = service.create(None).unwrap();
        assert!(meta.name.starts_with("homesafe-"));
        assert!(meta.size_bytes > 0);

        let backups = service.list().unwrap();
        assert_eq!(backups.len(), 1);
        assert_eq!(backups[0].name, meta.name);
    }

    #[test]
    fn test_create_without_snapshot_fails() {
        let dir = tempdir().unwrap();
        let service = BackupService::new(dir.path().to_path_buf(), "users.json".to_string());

        assert!(service.create(None).is_err());
    }

    #[test]
    fn test_restore_round_trips_snapshot() {
        let dir = tempdir().unwrap();
        let service = service_with_snapshot(dir.path());
        fs::write(dir.path().join("users.json"), r#"[{"username":"ana","password":"hunter22"}]"#)
            .unwrap();

        let meta = service.create(None).unwrap();
        fs::write(dir.path().join("users.json"), "[]").unwrap();

        service.restore(&meta.name).unwrap();

        let content = fs::read_to_string(dir.path().join("users.json")).unwrap();
        assert!(content.contains("ana"));

        // The restore itself left a pre-restore safety archive behind
        let names: Vec<String> = service.list().unwrap().into_iter().map(|b| b.name).collect();
        assert!(names.iter().any(|n| n.starts_with("homesafe-pre-restore-")));
    }

    #[test]
    fn test_retention_prunes_oldest() {
        let dir = tempdir().unwrap();
        let service = service_with_snapshot(dir.path());

        for _ in 0..4 {
            service.create(Some(2)).unwrap();
        }

        assert_eq!(service.list().unwrap().len(), 2);
    }

    #[test]
    fn test_clear_removes_all() {
        let dir = tempdir().unwrap();
        let service = service_with_snapshot(dir.path());
        service.create(None).unwrap();
        service.create(None).unwrap();

        let result = service.clear().unwrap();
        assert_eq!(result.deleted, 2);
        assert!(service.list().unwrap().is_empty());
    }
}
