//! Error types for the Contacts API.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::{ContactId, ValidationError};
use thiserror::Error;

/// Errors that can occur while serving a contact request.
#[derive(Error, Debug)]
pub enum ContactError {
    /// Request input broke a contact invariant
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Email or phone already belongs to another contact
    #[error("Contact with this email or phone already exists")]
    Conflict,

    /// No contact with the given id
    #[error("Contact not found")]
    NotFound(Option<ContactId>),

    /// The collection holds no contacts
    #[error("No contacts found")]
    NoContacts,

    /// Request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Storage engine failure
    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl ContactError {
    /// HTTP status code this error maps to at the request boundary.
    pub fn status_code(&self) -> u16 {
        match self {
            ContactError::Validation(_) => 400,
            ContactError::NotFound(_) | ContactError::NoContacts => 404,
            ContactError::Timeout => 408,
            ContactError::Conflict => 409,
            ContactError::Database(_) => 500,
        }
    }

    /// Message safe to return to the client.
    pub fn public_message(&self) -> String {
        match self {
            ContactError::Database(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<sqlx::Error> for ContactError {
    fn from(err: sqlx::Error) -> Self {
        // UNIQUE(email) / UNIQUE(phone) are the authoritative guard against
        // concurrent creates racing past the pre-check.
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => ContactError::Conflict,
            _ => ContactError::Database(err),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
