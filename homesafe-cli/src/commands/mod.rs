//! CLI command implementations

pub mod backup;
pub mod checklist;
pub mod incident;
pub mod report;
pub mod session;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use homesafe_core::services::{LogEvent, LoggingService};
use homesafe_core::HomesafeContext;

/// Get the logging service for CLI operations
///
/// Returns None if the data directory cannot be created (logging shouldn't
/// block operations)
pub fn get_logger(data_dir: &Path) -> Option<LoggingService> {
    std::fs::create_dir_all(data_dir).ok()?;
    Some(LoggingService::new(data_dir, env!("CARGO_PKG_VERSION")))
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Get the data directory from the flag, environment, or default
pub fn get_data_dir(flag: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = flag {
        dir
    } else if let Ok(dir) = std::env::var("HOMESAFE_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .map(|home| home.join(".homesafe"))
            .unwrap_or_else(|| PathBuf::from(".homesafe"))
    }
}

/// Get or create the HomeSafe context
pub fn get_context(data_dir: &Path) -> Result<HomesafeContext> {
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {:?}", data_dir))?;

    HomesafeContext::new(data_dir).context("Failed to initialize HomeSafe context")
}

/// Input validator: re-ask until the field is non-empty
pub fn required(input: &String) -> Result<(), &'static str> {
    if input.trim().is_empty() {
        Err("This field is required")
    } else {
        Ok(())
    }
}
