//! # Infrastructure Layer
//!
//! Concrete implementations of the core crate's ports for the NewsFeed
//! client: the reqwest-based REST API client and the session store
//! backends.
//!
//! ## Architecture
//!
//! - **HTTP**: [`http::HttpApiClient`] implements `AuthApi` and `NewsApi`
//! - **Storage**: [`storage::FileSessionStore`] and
//!   [`storage::MemorySessionStore`] implement `SessionStore`
//!
//! [`initialize`] wires both into a ready [`ClientContext`].

use std::sync::Arc;

use nf_core::errors::DomainError;
use nf_core::repositories::SessionStore;
use nf_core::services::{SessionConfig, SessionContext};
use nf_shared::{ClientConfig, StoreBackend};

/// HTTP module - REST API client
pub mod http;

/// Storage module - Session store backends
pub mod storage;

pub use http::HttpApiClient;
pub use storage::{FileSessionStore, MemorySessionStore};

/// Session context as assembled by [`initialize`]
pub type ClientContext = SessionContext<HttpApiClient, dyn SessionStore>;

/// Build the session store, API client and session context from configuration
///
/// The API client reads the access token from the same store the session
/// writes to.
pub fn initialize(config: &ClientConfig) -> Result<ClientContext, InfrastructureError> {
    config.validate().map_err(InfrastructureError::Config)?;

    let store = create_session_store(config);
    let client = HttpApiClient::new(&config.api)?.with_session_store(Arc::clone(&store));

    tracing::info!(
        environment = %config.environment,
        base_url = %client.base_url(),
        store = store.backend_name(),
        event = "client_initialized",
        "NewsFeed client initialized"
    );

    Ok(SessionContext::new(
        Arc::new(client),
        store,
        SessionConfig::from(&config.query),
    ))
}

/// Session store selected by `config.session`
pub fn create_session_store(config: &ClientConfig) -> Arc<dyn SessionStore> {
    match config.session.backend {
        StoreBackend::File => Arc::new(FileSessionStore::new(config.session.resolved_path())),
        StoreBackend::Memory => Arc::new(MemorySessionStore::new()),
    }
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP client construction or transport error
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Session file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Session file content is not valid JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::Storage {
            message: err.to_string(),
        }
    }
}
