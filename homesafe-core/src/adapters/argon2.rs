//! Argon2 credential verification
//!
//! The salted-hash scheme that substitutes for `PlaintextVerifier` without
//! touching `UserStore` control flow. A store using this verifier holds PHC
//! hash strings (produced by `hash_password`) in the `password` field
//! instead of the password itself.

use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, SaltString};
use argon2::{Argon2, PasswordVerifier};
use anyhow::{anyhow, Result};

use crate::ports::CredentialVerifier;

/// Verifies a claimed password against a stored PHC hash string
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2Verifier;

impl CredentialVerifier for Argon2Verifier {
    fn verify(&self, claimed: &str, stored: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(stored) else {
            // Not a PHC string - e.g. a legacy plaintext snapshot
            return false;
        };
        Argon2::default()
            .verify_password(claimed.as_bytes(), &parsed)
            .is_ok()
    }
}

/// Hash a password into a PHC string suitable for the `password` field
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow!("failed to hash password: {}", e))?;
    Ok(hash.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hash = hash_password("correct horse").unwrap();
        let verifier = Argon2Verifier;
        assert!(verifier.verify("correct horse", &hash));
        assert!(!verifier.verify("wrong horse", &hash));
    }

    #[test]
    fn test_rejects_non_phc_stored_credential() {
        let verifier = Argon2Verifier;
        assert!(!verifier.verify("hunter22", "hunter22"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("hunter22").unwrap();
        let b = hash_password("hunter22").unwrap();
        assert_ne!(a, b);
    }
}
