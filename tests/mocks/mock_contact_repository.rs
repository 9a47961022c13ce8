use async_trait::async_trait;
use contacts_api::domain::ContactId;
use contacts_api::error::{ContactError, ContactResult};
use contacts_api::models::{Contact, ContactChanges, NewContact};
use contacts_api::repositories::ContactRepository;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that enforces
/// the same uniqueness rules as the SQLite table and tracks method calls for
/// verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<BTreeMap<i64, Contact>>>,
    next_id: Arc<Mutex<i64>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(BTreeMap::new())),
            next_id: Arc::new(Mutex::new(1)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.contacts.lock().unwrap().len()
    }

    /// Snapshot of a stored contact, bypassing call tracking.
    pub fn peek(&self, id: i64) -> Option<Contact> {
        self.contacts.lock().unwrap().get(&id).cloned()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn collides(
        contacts: &BTreeMap<i64, Contact>,
        skip: Option<i64>,
        email: &str,
        phone: &str,
    ) -> bool {
        contacts
            .values()
            .filter(|c| Some(c.id.get()) != skip)
            .any(|c| c.email == email || c.phone == phone)
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn list_all(&self) -> ContactResult<Vec<Contact>> {
        self.track_call("list_all");

        let contacts = self.contacts.lock().unwrap();
        Ok(contacts.values().cloned().collect())
    }

    async fn get(&self, id: ContactId) -> ContactResult<Contact> {
        self.track_call("get");

        let contacts = self.contacts.lock().unwrap();
        contacts
            .get(&id.get())
            .cloned()
            .ok_or(ContactError::NotFound(Some(id)))
    }

    async fn find_by_email_or_phone(
        &self,
        email: &str,
        phone: &str,
    ) -> ContactResult<Option<Contact>> {
        self.track_call("find_by_email_or_phone");

        let contacts = self.contacts.lock().unwrap();
        Ok(contacts
            .values()
            .find(|c| c.email == email || c.phone == phone)
            .cloned())
    }

    async fn create(&self, contact: &NewContact) -> ContactResult<Contact> {
        self.track_call("create");

        let mut contacts = self.contacts.lock().unwrap();
        if Self::collides(&contacts, None, &contact.email, &contact.phone) {
            return Err(ContactError::Conflict);
        }

        let mut next_id = self.next_id.lock().unwrap();
        let id = ContactId::new(*next_id)?;
        *next_id += 1;

        let created = Contact {
            id,
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
        };
        contacts.insert(id.get(), created.clone());
        Ok(created)
    }

    async fn update(&self, id: ContactId, changes: ContactChanges) -> ContactResult<Contact> {
        self.track_call("update");

        let mut contacts = self.contacts.lock().unwrap();
        let current = contacts
            .get(&id.get())
            .cloned()
            .ok_or(ContactError::NotFound(Some(id)))?;

        let updated = current.merged(changes);
        if Self::collides(&contacts, Some(id.get()), &updated.email, &updated.phone) {
            return Err(ContactError::Conflict);
        }

        contacts.insert(id.get(), updated.clone());
        Ok(updated)
    }

    async fn delete(&self, id: ContactId) -> ContactResult<()> {
        self.track_call("delete");

        let mut contacts = self.contacts.lock().unwrap();
        contacts
            .remove(&id.get())
            .map(|_| ())
            .ok_or(ContactError::NotFound(Some(id)))
    }
}
