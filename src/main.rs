//! Contacts API - Main entry point
//!
//! Loads configuration, opens the contact store and serves the REST API.

use anyhow::Result;
use contacts_api::repositories::{ContactRepository, SqliteContactRepository};
use contacts_api::{Config, ContactsServer};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration comes first since it decides the default log level
    let config = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Configuration loaded successfully");
    if config.debug {
        info!("Debug mode enabled");
    }

    let contact_repo = match SqliteContactRepository::connect(
        &config.database_url,
        config.max_connections,
    )
    .await
    {
        Ok(repo) => Arc::new(repo) as Arc<dyn ContactRepository>,
        Err(e) => {
            error!("Failed to open contact store: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Contact store ready (pool size {})",
        config.max_connections
    );

    let server = ContactsServer::new(contact_repo, Duration::from_secs(config.request_timeout));

    info!(
        "Request timeout: {} seconds",
        config.request_timeout
    );

    contacts_api::server::run_server(server, config.bind_addr).await?;

    info!("Contacts API shutdown complete");
    Ok(())
}
