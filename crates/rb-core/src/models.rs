//! # Domain Models
//!
//! These structs represent the core entities of Rusty-Blog.
//! We use UUID v7 for time-ordered, globally unique identification.

use std::fmt;

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A well-formed username/password pair, produced by the validator.
///
/// Never persisted. The password stays wrapped so it cannot leak through
/// `Debug` output or log fields.
#[derive(Debug)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }
}

/// Authentication state of the single client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn { user: String },
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::LoggedIn { .. })
    }

    /// The logged-in username, present iff authenticated.
    pub fn user(&self) -> Option<&str> {
        match self {
            Session::LoggedIn { user } => Some(user),
            Session::LoggedOut => None,
        }
    }
}

/// A titled blog entry with its thread of comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Insertion order; append-only.
    pub comments: Vec<Comment>,
}

/// An author-attributed reply to a Post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Renders as `author: text`. Consumers split on the first `:`.
impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.author, self.text)
    }
}
