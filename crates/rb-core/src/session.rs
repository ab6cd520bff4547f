//! # Session Manager
//!
//! Two-state machine: `LoggedOut` (initial) and `LoggedIn(user)`.
//! Only `attempt_login` and `logout` move between them; there is no expiry.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::{AppError, Result};
use crate::models::Session;
use crate::traits::CredentialVerifier;
use crate::validator::validate_login;

pub struct SessionManager {
    session: Session,
    verifier: Arc<dyn CredentialVerifier>,
}

impl SessionManager {
    /// Starts logged out.
    pub fn new(verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self {
            session: Session::LoggedOut,
            verifier,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Validates the form, then checks the credentials.
    ///
    /// Any failure leaves the session `LoggedOut`, including a failed attempt
    /// made while someone was already logged in.
    pub fn attempt_login(&mut self, username: &str, password: &str) -> Result<&Session> {
        let credentials = match validate_login(username, password) {
            Ok(credentials) => credentials,
            Err(err) => {
                debug!(error = %err, "login form rejected");
                self.session = Session::LoggedOut;
                return Err(err);
            }
        };

        if !self.verifier.verify(&credentials) {
            warn!(username = %credentials.username, "invalid credentials");
            self.session = Session::LoggedOut;
            return Err(AppError::InvalidCredentials);
        }

        info!(username = %credentials.username, "logged in");
        self.session = Session::LoggedIn {
            user: credentials.username,
        };
        Ok(&self.session)
    }

    /// Idempotent.
    pub fn logout(&mut self) -> &Session {
        if let Some(user) = self.session.user() {
            info!(username = %user, "logged out");
        }
        self.session = Session::LoggedOut;
        &self.session
    }
}
