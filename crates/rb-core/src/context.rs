//! # Blog Context
//!
//! One client's explicit state: its session, the content store it writes
//! to, and the single current error message. Every operation goes through
//! here instead of through globals, so independent contexts never interfere.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{Comment, Post, Session};
use crate::session::SessionManager;
use crate::store::ContentStore;
use crate::traits::CredentialVerifier;
use crate::view::UiCapabilities;

/// Author recorded for comments made while logged out.
pub const GUEST_AUTHOR: &str = "Guest";

pub struct BlogContext {
    sessions: SessionManager,
    store: ContentStore,
    last_error: Option<AppError>,
}

impl BlogContext {
    pub fn new(verifier: Arc<dyn CredentialVerifier>, store: ContentStore) -> Self {
        Self {
            sessions: SessionManager::new(verifier),
            store,
            last_error: None,
        }
    }

    pub fn session(&self) -> &Session {
        self.sessions.session()
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    pub fn capabilities(&self) -> UiCapabilities {
        UiCapabilities::for_session(self.sessions.session())
    }

    /// Message of the most recent failed operation, cleared by the next success.
    pub fn error_message(&self) -> Option<String> {
        self.last_error.as_ref().map(ToString::to_string)
    }

    pub fn login(&mut self, username: &str, password: &str) -> Result<UiCapabilities> {
        let outcome = self.sessions.attempt_login(username, password).map(|_| ());
        self.record(outcome)?;
        Ok(self.capabilities())
    }

    pub fn logout(&mut self) -> UiCapabilities {
        self.sessions.logout();
        self.last_error = None;
        self.capabilities()
    }

    pub fn list_posts(&self) -> &[Post] {
        self.store.list_posts()
    }

    pub fn get_post(&mut self, post_id: Uuid) -> Result<&Post> {
        let outcome = self.store.get_post(post_id).map(|_| ());
        self.record(outcome)?;
        self.store.get_post(post_id)
    }

    pub fn create_post(&mut self, title: &str, content: &str) -> Result<&Post> {
        let outcome = self
            .store
            .create_post(self.sessions.session(), title, content)
            .map(|post| post.id);
        let id = self.record(outcome)?;
        self.store.get_post(id)
    }

    /// Comments as the logged-in user, or as [`GUEST_AUTHOR`].
    pub fn add_comment(&mut self, post_id: Uuid, text: &str) -> Result<&Comment> {
        let author = self
            .sessions
            .session()
            .user()
            .unwrap_or(GUEST_AUTHOR)
            .to_string();
        let outcome = self
            .store
            .add_comment(post_id, &author, text)
            .map(|comment| comment.id);
        let comment_id = self.record(outcome)?;

        let post = self.store.get_post(post_id)?;
        post.comments
            .iter()
            .find(|c| c.id == comment_id)
            .ok_or_else(|| AppError::NotFound("Comment".to_string(), comment_id.to_string()))
    }

    fn record<T>(&mut self, outcome: Result<T>) -> Result<T> {
        match &outcome {
            Ok(_) => self.last_error = None,
            Err(err) => self.last_error = Some(err.clone()),
        }
        outcome
    }
}
