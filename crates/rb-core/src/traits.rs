//! # Core Traits (Ports)
//!
//! Any plugin must implement these traits to be used by the binary.

use crate::models::Credentials;

/// Credential check against the external account store.
///
/// Called only with credentials that already passed validation.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait CredentialVerifier: Send + Sync {
    /// Returns `true` when the pair matches a known account.
    fn verify(&self, credentials: &Credentials) -> bool;
}
