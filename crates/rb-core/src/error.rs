//! # AppError
//!
//! Centralized error handling for the Rusty-Blog core.
//! Every variant renders to exactly one user-facing message; the rendering
//! layer displays it verbatim.

use std::fmt;

use thiserror::Error;

/// A login form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Password,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Username => f.write_str("username"),
            Field::Password => f.write_str("password"),
        }
    }
}

fn required_message(field: &Field) -> &'static str {
    match field {
        Field::Username => "Username field is required!",
        Field::Password => "Password field is required!",
    }
}

// The two wordings differ in more than the field name, so they are spelled out.
fn too_short_message(field: &Field, min: &usize) -> String {
    match field {
        Field::Username => format!("Username field must be at least {min} characters"),
        Field::Password => format!("Password must be at least {min} characters long!"),
    }
}

/// The primary error type for all rb-core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// A login field was left blank.
    #[error("{}", required_message(.0))]
    FieldRequired(Field),

    /// A login field is shorter than its minimum length (in characters).
    #[error("{}", too_short_message(.0, .1))]
    FieldTooShort(Field, usize),

    /// Well-formed credentials that match no known account.
    #[error("Invalid Credentials")]
    InvalidCredentials,

    /// A write that requires an authenticated session.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Post title/content or comment text was blank.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// Resource not found (e.g., Post)
    #[error("{0} not found with ID {1}")]
    NotFound(String, String),

    /// Infrastructure failure outside the gate (e.g., credential hashing)
    #[error("internal service error: {0}")]
    Internal(String),
}

/// A specialized Result type for Rusty-Blog logic.
pub type Result<T> = std::result::Result<T, AppError>;
