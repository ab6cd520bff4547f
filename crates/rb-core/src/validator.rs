//! # Login Validator
//!
//! Decides whether submitted login fields are well-formed, independent of
//! whether they match an account. Rules run in a fixed order and the first
//! failure is the only one reported: username rules always fire before any
//! password rule.

use crate::error::{AppError, Field, Result};
use crate::models::Credentials;

pub const USERNAME_MIN_CHARS: usize = 3;
pub const PASSWORD_MIN_CHARS: usize = 8;

/// One check against one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginRule {
    Required(Field),
    MinChars(Field, usize),
}

/// Evaluation order of the login form. Earlier entries take precedence.
pub const LOGIN_RULES: [LoginRule; 4] = [
    LoginRule::Required(Field::Username),
    LoginRule::MinChars(Field::Username, USERNAME_MIN_CHARS),
    LoginRule::Required(Field::Password),
    LoginRule::MinChars(Field::Password, PASSWORD_MIN_CHARS),
];

impl LoginRule {
    /// Checks the rule against the raw form values.
    pub fn check(&self, username: &str, password: &str) -> Result<()> {
        let value = |field: Field| match field {
            Field::Username => username,
            Field::Password => password,
        };

        match *self {
            LoginRule::Required(field) if value(field).is_empty() => {
                Err(AppError::FieldRequired(field))
            }
            LoginRule::MinChars(field, min) if value(field).chars().count() < min => {
                Err(AppError::FieldTooShort(field, min))
            }
            _ => Ok(()),
        }
    }
}

/// Runs [`LOGIN_RULES`] in order and returns the credentials on success.
pub fn validate_login(username: &str, password: &str) -> Result<Credentials> {
    LOGIN_RULES
        .iter()
        .try_for_each(|rule| rule.check(username, password))?;

    Ok(Credentials::new(username, password))
}
