//! Credential verification port

/// Verifies a claimed secret against a stored credential
///
/// `UserStore` is written against this trait so the stored-credential scheme
/// can change (e.g. to a salted hash) without touching the store's control
/// flow. The default implementation is `adapters::PlaintextVerifier`;
/// existing snapshots hold plaintext passwords and authenticate only
/// through it.
pub trait CredentialVerifier: Send + Sync {
    /// Return true when `claimed` matches the `stored` credential
    fn verify(&self, claimed: &str, stored: &str) -> bool;
}
