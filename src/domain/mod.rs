//! Domain value objects and types.
//!
//! This module contains the type-safe contact identifier and the validation
//! errors raised when request input breaks the contact invariants.

pub mod contact_id;
pub mod errors;

pub use contact_id::ContactId;
pub use errors::ValidationError;
