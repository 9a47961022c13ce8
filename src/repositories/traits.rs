use crate::domain::ContactId;
use crate::error::ContactResult;
use crate::models::{Contact, ContactChanges, NewContact};
use async_trait::async_trait;

/// Repository for managing contacts.
///
/// Provides abstraction over contact storage and retrieval,
/// enabling different implementations (SQLite, in-memory mock).
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Retrieve every contact in insertion order.
    async fn list_all(&self) -> ContactResult<Vec<Contact>>;

    /// Retrieve a single contact by ID.
    ///
    /// Returns `ContactError::NotFound` if no contact has this ID.
    async fn get(&self, id: ContactId) -> ContactResult<Contact>;

    /// Find a contact using either the given email or the given phone.
    async fn find_by_email_or_phone(
        &self,
        email: &str,
        phone: &str,
    ) -> ContactResult<Option<Contact>>;

    /// Create a new contact and return it with its assigned ID.
    ///
    /// Returns `ContactError::Conflict` if the email or phone is taken.
    async fn create(&self, contact: &NewContact) -> ContactResult<Contact>;

    /// Replace the supplied fields of an existing contact.
    ///
    /// Returns `ContactError::NotFound` if the ID is absent and
    /// `ContactError::Conflict` if the new email or phone is taken.
    async fn update(&self, id: ContactId, changes: ContactChanges) -> ContactResult<Contact>;

    /// Delete a contact.
    ///
    /// Returns `ContactError::NotFound` if the ID is absent.
    async fn delete(&self, id: ContactId) -> ContactResult<()>;
}
