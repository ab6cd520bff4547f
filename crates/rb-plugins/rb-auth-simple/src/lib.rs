//! # rb-auth-simple
//!
//! Argon2-based implementation of `CredentialVerifier`.
//! Recognizes exactly one account whose password is kept as a PHC hash.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rb_core::error::{AppError, Result};
use rb_core::models::Credentials;
use rb_core::traits::CredentialVerifier;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

/// Account of the reference fixture.
pub const FIXTURE_USERNAME: &str = "admin";
pub const FIXTURE_PASSWORD: &str = "admin123";

pub struct SimpleCredentialVerifier {
    username: String,
    /// PHC string, e.g. `$argon2id$v=19$...`
    password_hash: String,
}

impl SimpleCredentialVerifier {
    /// Accepts a pre-computed Argon2 PHC hash (e.g., from configuration).
    pub fn new(username: &str, password_hash: &str) -> Result<Self> {
        PasswordHash::new(password_hash)
            .map_err(|e| AppError::Internal(format!("invalid password hash: {e}")))?;
        Ok(Self {
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        })
    }

    /// Hashes `password` with a fresh random salt.
    pub fn from_plaintext(username: &str, password: &SecretString) -> Result<Self> {
        let password_hash = hash_password(password)?;
        Ok(Self {
            username: username.to_string(),
            password_hash,
        })
    }

    /// The `admin`/`admin123` account.
    pub fn fixture() -> Result<Self> {
        Self::from_plaintext(FIXTURE_USERNAME, &SecretString::from(FIXTURE_PASSWORD.to_string()))
    }
}

/// Produces a PHC-formatted Argon2id hash.
pub fn hash_password(password: &SecretString) -> Result<String> {
    let mut salt_bytes = [0u8; 16];
    getrandom::getrandom(&mut salt_bytes)
        .map_err(|e| AppError::Internal(format!("salt generation failed: {e}")))?;
    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| AppError::Internal(format!("salt encoding failed: {e}")))?;

    Argon2::default()
        .hash_password(password.expose_secret().as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))
}

impl CredentialVerifier for SimpleCredentialVerifier {
    /// Username must match exactly; the password is checked against the hash.
    fn verify(&self, credentials: &Credentials) -> bool {
        if credentials.username != self.username {
            debug!(username = %credentials.username, "unknown account");
            return false;
        }
        let parsed_hash = match PasswordHash::new(&self.password_hash) {
            Ok(p) => p,
            Err(_) => return false,
        };
        Argon2::default()
            .verify_password(credentials.password.expose_secret().as_bytes(), &parsed_hash)
            .is_ok()
    }
}
