//! Contact service layer.
//!
//! Business rules for the contact resource: presence validation, the
//! uniqueness pre-check, and the ordering between "not found" and
//! "invalid input".

use crate::domain::{ContactId, ValidationError};
use crate::error::{ContactError, ContactResult};
use crate::models::{Contact, ContactChanges, ContactPayload, NewContact};
use crate::repositories::ContactRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// List every contact.
    async fn list_contacts(&self) -> ContactResult<Vec<Contact>>;

    /// Get a single contact.
    async fn get_contact(&self, id: ContactId) -> ContactResult<Contact>;

    /// Create a contact from a raw payload.
    ///
    /// Presence of name, email and phone is checked before uniqueness.
    async fn create_contact(&self, payload: ContactPayload) -> ContactResult<Contact>;

    /// Update a contact. Fields missing from the payload keep their value.
    ///
    /// An unknown id is reported as not found even when the payload is
    /// also invalid.
    async fn update_contact(&self, id: ContactId, payload: ContactPayload)
        -> ContactResult<Contact>;

    /// Report why a request body was unusable, giving precedence to an
    /// unknown id.
    async fn reject_payload(&self, id: ContactId, error: ValidationError) -> ContactError;

    /// Delete a contact.
    async fn delete_contact(&self, id: ContactId) -> ContactResult<()>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    repository: Arc<dyn ContactRepository>,
}

impl ContactServiceImpl {
    /// Create a new contact service.
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn list_contacts(&self) -> ContactResult<Vec<Contact>> {
        self.repository.list_all().await
    }

    async fn get_contact(&self, id: ContactId) -> ContactResult<Contact> {
        self.repository.get(id).await
    }

    async fn create_contact(&self, payload: ContactPayload) -> ContactResult<Contact> {
        let new_contact = NewContact::try_from(payload)?;

        // Best-effort pre-check; the table's UNIQUE constraints settle races.
        if let Some(existing) = self
            .repository
            .find_by_email_or_phone(&new_contact.email, &new_contact.phone)
            .await?
        {
            debug!(existing_id = %existing.id, "Rejected duplicate email or phone");
            return Err(ContactError::Conflict);
        }

        let contact = self.repository.create(&new_contact).await?;
        info!(contact_id = %contact.id, "Contact created");
        Ok(contact)
    }

    async fn update_contact(
        &self,
        id: ContactId,
        payload: ContactPayload,
    ) -> ContactResult<Contact> {
        let changes = ContactChanges::from(payload);

        if let Err(e) = changes.validate() {
            return Err(self.reject_payload(id, e).await);
        }

        let contact = self.repository.update(id, changes).await?;
        info!(contact_id = %contact.id, "Contact updated");
        Ok(contact)
    }

    async fn reject_payload(&self, id: ContactId, error: ValidationError) -> ContactError {
        match self.repository.get(id).await {
            Ok(_) => ContactError::Validation(error),
            Err(e) => e,
        }
    }

    async fn delete_contact(&self, id: ContactId) -> ContactResult<()> {
        self.repository.delete(id).await?;
        info!(contact_id = %id, "Contact deleted");
        Ok(())
    }
}
