//! Configuration module with client-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `api` - REST endpoint base URL and request timeout
//! - `session` - Where session tokens are persisted
//! - `query` - Query cache and mutation behaviour
//! - `environment` - Environment detection and logging configuration

pub mod api;
pub mod environment;
pub mod query;
pub mod session;

use serde::{Deserialize, Serialize};

pub use api::ApiConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use query::QueryConfig;
pub use session::{SessionStoreConfig, StoreBackend};

/// Complete client configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Environment configuration
    pub environment: Environment,

    /// REST API configuration
    pub api: ApiConfig,

    /// Session token storage configuration
    #[serde(default)]
    pub session: SessionStoreConfig,

    /// Query cache configuration
    #[serde(default)]
    pub query: QueryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            api: ApiConfig::default(),
            session: SessionStoreConfig::default(),
            query: QueryConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// Callers are expected to have loaded any `.env` file beforehand.
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            api: ApiConfig::from_env(),
            session: SessionStoreConfig::from_env(),
            query: QueryConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
        }
    }

    /// Validate the parts of the configuration that can be wrong
    pub fn validate(&self) -> Result<(), String> {
        self.api.validate()?;
        self.session.validate()
    }
}
