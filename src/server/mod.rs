//! HTTP server for the contact resource.
//!
//! This module wires the handlers into an axum router under
//! `/api/v1/contacts` and runs it on a TCP listener.

pub mod handlers;
pub mod middleware;

pub use handlers::AppState;

use crate::repositories::ContactRepository;
use crate::services::{ContactService, ContactServiceImpl};
use anyhow::Result;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Base path of the contact resource.
pub const CONTACTS_PATH: &str = "/api/v1/contacts";

/// The contacts HTTP server: handler state plus transport settings.
#[derive(Clone)]
pub struct ContactsServer {
    state: AppState,
    request_timeout: Duration,
}

impl ContactsServer {
    /// Create a new server over the given repository.
    pub fn new(contact_repo: Arc<dyn ContactRepository>, request_timeout: Duration) -> Self {
        let contact_service =
            Arc::new(ContactServiceImpl::new(contact_repo)) as Arc<dyn ContactService>;

        Self {
            state: AppState { contact_service },
            request_timeout,
        }
    }

    /// Build the axum router.
    ///
    /// The collection route answers both with and without a trailing slash.
    pub fn router(&self) -> Router {
        let collection = get(handlers::list_contacts).post(handlers::create_contact);
        let item = get(handlers::get_contact)
            .put(handlers::update_contact)
            .patch(handlers::partial_update_contact)
            .delete(handlers::delete_contact);

        Router::new()
            .route(CONTACTS_PATH, collection.clone())
            .route(&format!("{CONTACTS_PATH}/"), collection)
            .route(&format!("{CONTACTS_PATH}/{{id}}"), item)
            .fallback(handlers::not_found)
            .layer(axum::middleware::from_fn_with_state(
                self.request_timeout,
                middleware::enforce_timeout,
            ))
            .layer(axum::middleware::from_fn(middleware::log_request))
            .with_state(self.state.clone())
    }
}

/// Run the contacts server on `addr` until Ctrl-C.
///
/// # Arguments
/// * `server` - The configured ContactsServer instance
/// * `addr` - Socket address to bind
///
/// # Returns
/// An error if the listener cannot be bound or the server fails
pub async fn run_server(server: ContactsServer, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, server.router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
