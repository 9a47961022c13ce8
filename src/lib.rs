//! Contacts API - a REST service for managing a contact list.
//!
//! Contacts (name, email, phone) live in a single SQLite table and are
//! exposed under `/api/v1/contacts` with create, read, full/partial update
//! and delete operations.
//!
//! # Architecture
//!
//! - **models**: Contact data and request payloads
//! - **domain**: Contact id value object and validation errors
//! - **error**: Error types and their HTTP status mapping
//! - **config**: Configuration management from environment variables
//! - **repositories**: Contact store trait and its SQLite implementation
//! - **services**: Validation and uniqueness rules
//! - **server**: axum router, handlers and request middleware

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;

pub use config::Config;
pub use domain::{ContactId, ValidationError};
pub use error::{ConfigError, ContactError, ContactResult};
pub use models::{Contact, ContactChanges, ContactPayload, NewContact};
pub use repositories::{ContactRepository, SqliteContactRepository};
pub use server::ContactsServer;
pub use services::{ContactService, ContactServiceImpl};
