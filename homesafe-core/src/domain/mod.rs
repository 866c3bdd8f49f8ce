//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures -
//! no I/O or external dependencies. Validation is the caller's responsibility.

mod backup;
mod checklist;
mod incident;
mod user;
pub mod result;

pub use backup::BackupMetadata;
pub use checklist::ChecklistItem;
pub use incident::Incident;
pub use user::User;
