//! HomeSafe Core - Business logic for household-safety tracking
//!
//! This crate implements the core domain logic following hexagonal
//! architecture:
//!
//! - **domain**: Core business entities (User, Incident, ChecklistItem)
//! - **ports**: Trait definitions for external dependencies (CredentialVerifier)
//! - **services**: Business logic orchestration and pure derivation
//! - **adapters**: Concrete implementations (JSON snapshot, credential schemes)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;

use anyhow::Result;

use adapters::{JsonSnapshot, PlaintextVerifier};
use config::Config;
use services::{BackupService, UserStore};

// Re-export commonly used types at crate root
pub use domain::result::{LoadError, RegistrationError, SaveError};
pub use domain::{BackupMetadata, ChecklistItem, Incident, User};
pub use services::{RiskLevel, TypeCount};

/// Main context for HomeSafe operations
///
/// This is the primary entry point for all business logic. It holds the
/// user store, configuration, and services. The session boundary calls
/// `store.load()` exactly once before any other store operation.
pub struct HomesafeContext {
    pub config: Config,
    pub store: UserStore,
    pub backup_service: BackupService,
}

impl HomesafeContext {
    /// Create a new HomeSafe context
    pub fn new(data_dir: &Path) -> Result<Self> {
        let config = Config::load(data_dir)?;

        let snapshot = JsonSnapshot::new(data_dir.join(&config.snapshot_file));
        let store = UserStore::new(snapshot, Box::new(PlaintextVerifier));
        let backup_service =
            BackupService::new(data_dir.to_path_buf(), config.snapshot_file.clone());

        Ok(Self {
            config,
            store,
            backup_service,
        })
    }
}
