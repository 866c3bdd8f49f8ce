//! Concrete adapter implementations
//!
//! - **plaintext**: direct credential comparison (current behavior)
//! - **argon2**: salted-hash credential verification
//! - **json_snapshot**: flat-file JSON persistence of the user collection

mod argon2;
mod json_snapshot;
mod plaintext;

pub use self::argon2::{hash_password, Argon2Verifier};
pub use self::json_snapshot::JsonSnapshot;
pub use self::plaintext::PlaintextVerifier;
