//! Domain validation errors.

use std::fmt;

/// Errors raised when request input violates the contact invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more of name, email and phone is absent or empty on create.
    MissingRequiredFields,

    /// A field supplied on update was the empty string.
    EmptyField(&'static str),

    /// The identifier is not a positive integer.
    InvalidId(i64),

    /// The request body could not be read as a contact payload.
    MalformedBody(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequiredFields => write!(f, "Name, email, and phone are required"),
            Self::EmptyField(field) => write!(f, "Field '{}' cannot be empty", field),
            Self::InvalidId(id) => write!(f, "Invalid contact id: {}", id),
            Self::MalformedBody(reason) => write!(f, "Invalid request body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}
