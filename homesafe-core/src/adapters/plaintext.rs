//! Plaintext credential verification
//!
//! The stored credential is the password itself and verification is an
//! exact, case-sensitive comparison. Existing snapshots authenticate only
//! through this verifier; `Argon2Verifier` is the substitution path.

use crate::ports::CredentialVerifier;

/// Direct comparison against a plaintext stored credential
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaintextVerifier;

impl CredentialVerifier for PlaintextVerifier {
    fn verify(&self, claimed: &str, stored: &str) -> bool {
        claimed == stored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_only() {
        let verifier = PlaintextVerifier;
        assert!(verifier.verify("hunter22", "hunter22"));
        assert!(!verifier.verify("Hunter22", "hunter22"));
        assert!(!verifier.verify("hunter22 ", "hunter22"));
        assert!(!verifier.verify("", "hunter22"));
    }
}
