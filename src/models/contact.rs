//! Contact model representing a single entry in the contact list.

use crate::domain::{ContactId, ValidationError};
use serde::{Deserialize, Serialize};

/// A persisted contact.
///
/// The struct is plain data; its JSON form (`id`, `name`, `email`, `phone`)
/// comes from the `Serialize` derive.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Contact {
    /// Store-assigned identifier, immutable after creation
    pub id: ContactId,

    /// Display name
    pub name: String,

    /// Email address, unique across all contacts
    pub email: String,

    /// Phone number, unique across all contacts
    pub phone: String,
}

impl Contact {
    /// Apply `changes` on top of this contact. Fields left as `None` keep
    /// their current value and the id never changes.
    pub fn merged(mut self, changes: ContactChanges) -> Self {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(phone) = changes.phone {
            self.phone = phone;
        }
        self
    }
}

/// Raw request body for create and update.
///
/// Every field is optional here; presence rules differ between create and
/// update and are applied when converting into [`NewContact`] or
/// [`ContactChanges`]. A JSON `null` reads the same as an absent key.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContactPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Validated input for creating a contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl TryFrom<ContactPayload> for NewContact {
    type Error = ValidationError;

    /// All three fields must be present and non-empty. No format checks are
    /// applied to email or phone.
    fn try_from(payload: ContactPayload) -> Result<Self, Self::Error> {
        match (
            non_empty(payload.name),
            non_empty(payload.email),
            non_empty(payload.phone),
        ) {
            (Some(name), Some(email), Some(phone)) => Ok(Self { name, email, phone }),
            _ => Err(ValidationError::MissingRequiredFields),
        }
    }
}

/// Field replacements for an existing contact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ContactChanges {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }

    /// Reject supplied fields that are the empty string.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
        ];
        for (field, value) in fields {
            if value.as_deref() == Some("") {
                return Err(ValidationError::EmptyField(field));
            }
        }
        Ok(())
    }
}

impl From<ContactPayload> for ContactChanges {
    fn from(payload: ContactPayload) -> Self {
        Self {
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_contact() -> Contact {
        Contact {
            id: ContactId::new(1).unwrap(),
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            phone: "111".to_string(),
        }
    }

    #[test]
    fn test_contact_serialization() {
        let json = serde_json::to_value(sample_contact()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Ann", "email": "a@x.com", "phone": "111"})
        );
    }

    #[test]
    fn test_merged_keeps_unspecified_fields() {
        let changes = ContactChanges {
            phone: Some("999".to_string()),
            ..Default::default()
        };
        let updated = sample_contact().merged(changes);
        assert_eq!(updated.id.get(), 1);
        assert_eq!(updated.name, "Ann");
        assert_eq!(updated.email, "a@x.com");
        assert_eq!(updated.phone, "999");
    }

    #[test]
    fn test_new_contact_requires_all_fields() {
        let payload = ContactPayload {
            name: Some("Ann".to_string()),
            email: Some("a@x.com".to_string()),
            phone: None,
        };
        assert_eq!(
            NewContact::try_from(payload),
            Err(ValidationError::MissingRequiredFields)
        );
    }

    #[test]
    fn test_new_contact_rejects_empty_strings() {
        let payload = ContactPayload {
            name: Some(String::new()),
            email: Some("a@x.com".to_string()),
            phone: Some("111".to_string()),
        };
        assert!(NewContact::try_from(payload).is_err());
    }

    #[test]
    fn test_new_contact_accepts_any_format() {
        let payload = ContactPayload {
            name: Some("Ann".to_string()),
            email: Some("not-an-email".to_string()),
            phone: Some("call me".to_string()),
        };
        let contact = NewContact::try_from(payload).unwrap();
        assert_eq!(contact.email, "not-an-email");
    }

    #[test]
    fn test_payload_null_reads_as_absent() {
        let payload: ContactPayload =
            serde_json::from_str(r#"{"name": null, "phone": "999"}"#).unwrap();
        assert_eq!(payload.name, None);
        assert_eq!(payload.email, None);
        assert_eq!(payload.phone.as_deref(), Some("999"));
    }

    #[test]
    fn test_payload_rejects_non_string_fields() {
        let result: Result<ContactPayload, _> = serde_json::from_str(r#"{"phone": 999}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_changes_validate() {
        assert!(ContactChanges::default().validate().is_ok());
        assert!(ContactChanges::default().is_empty());

        let changes = ContactChanges {
            email: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(changes.validate(), Err(ValidationError::EmptyField("email")));
    }
}
