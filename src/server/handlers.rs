//! HTTP handlers for the contact resource.
//!
//! Each handler parses its input, calls the contact service and wraps the
//! result in the JSON envelope the API promises. Errors are converted to
//! `{"message": ...}` bodies by the `IntoResponse` impl for `ContactError`.

use crate::domain::{ContactId, ValidationError};
use crate::error::{ContactError, ContactResult};
use crate::models::{Contact, ContactPayload};
use crate::services::ContactService;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub contact_service: Arc<dyn ContactService>,
}

type ContactPath = Result<Path<ContactId>, PathRejection>;
type ContactBody = Result<Json<ContactPayload>, JsonRejection>;

#[derive(Debug, Serialize)]
struct MessageBody {
    message: String,
}

#[derive(Debug, Serialize)]
struct ContactEnvelope {
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
    contact: Contact,
}

#[derive(Debug, Serialize)]
struct ContactList {
    contacts: Vec<Contact>,
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        match &self {
            ContactError::Database(e) => error!(error = %e, "Database operation failed"),
            ContactError::NotFound(Some(id)) => debug!(contact_id = %id, "Contact not found"),
            _ => {}
        }

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = MessageBody {
            message: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}

// Non-integer ids never name a contact, so they read as an unknown resource.
fn contact_id(path: ContactPath) -> ContactResult<ContactId> {
    path.map(|Path(id)| id)
        .map_err(|_| ContactError::NotFound(None))
}

fn malformed(rejection: JsonRejection) -> ValidationError {
    ValidationError::MalformedBody(rejection.body_text())
}

fn with_message(status: StatusCode, message: &'static str, contact: Contact) -> Response {
    let body = ContactEnvelope {
        message: Some(message),
        contact,
    };
    (status, Json(body)).into_response()
}

/// `GET /api/v1/contacts/`. An empty collection answers 404.
pub async fn list_contacts(State(state): State<AppState>) -> ContactResult<Response> {
    let contacts = state.contact_service.list_contacts().await?;
    if contacts.is_empty() {
        return Err(ContactError::NoContacts);
    }
    Ok((StatusCode::OK, Json(ContactList { contacts })).into_response())
}

/// `GET /api/v1/contacts/{id}`
pub async fn get_contact(
    State(state): State<AppState>,
    path: ContactPath,
) -> ContactResult<Response> {
    let id = contact_id(path)?;
    let contact = state.contact_service.get_contact(id).await?;
    let body = ContactEnvelope {
        message: None,
        contact,
    };
    Ok((StatusCode::OK, Json(body)).into_response())
}

/// `POST /api/v1/contacts/`
pub async fn create_contact(
    State(state): State<AppState>,
    body: ContactBody,
) -> ContactResult<Response> {
    let Json(payload) = body.map_err(malformed)?;
    let contact = state.contact_service.create_contact(payload).await?;
    Ok(with_message(
        StatusCode::CREATED,
        "Contact added successfully",
        contact,
    ))
}

/// `PUT /api/v1/contacts/{id}`
pub async fn update_contact(
    State(state): State<AppState>,
    path: ContactPath,
    body: ContactBody,
) -> ContactResult<Response> {
    let contact = apply_update(&state, path, body).await?;
    Ok(with_message(
        StatusCode::OK,
        "Contact updated successfully",
        contact,
    ))
}

/// `PATCH /api/v1/contacts/{id}`
pub async fn partial_update_contact(
    State(state): State<AppState>,
    path: ContactPath,
    body: ContactBody,
) -> ContactResult<Response> {
    let contact = apply_update(&state, path, body).await?;
    Ok(with_message(
        StatusCode::OK,
        "Contact partially updated successfully",
        contact,
    ))
}

// PUT and PATCH share semantics: absent fields keep their prior value.
async fn apply_update(
    state: &AppState,
    path: ContactPath,
    body: ContactBody,
) -> ContactResult<Contact> {
    let id = contact_id(path)?;
    match body {
        Ok(Json(payload)) => state.contact_service.update_contact(id, payload).await,
        Err(rejection) => Err(state
            .contact_service
            .reject_payload(id, malformed(rejection))
            .await),
    }
}

/// `DELETE /api/v1/contacts/{id}`
pub async fn delete_contact(
    State(state): State<AppState>,
    path: ContactPath,
) -> ContactResult<Response> {
    let id = contact_id(path)?;
    state.contact_service.delete_contact(id).await?;
    let body = MessageBody {
        message: "Contact deleted successfully".to_string(),
    };
    Ok((StatusCode::OK, Json(body)).into_response())
}

/// Fallback for routes outside the contact resource.
pub async fn not_found() -> Response {
    let body = MessageBody {
        message: "Not found".to_string(),
    };
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}
