//! Shared utilities and common types for the NewsFeed client
//!
//! This crate provides functionality used across all client crates:
//! - Configuration types loaded from the environment
//! - Logging configuration
//! - Validation and log-masking helpers

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    ApiConfig, ClientConfig, Environment, LogFormat, LoggingConfig, QueryConfig,
    SessionStoreConfig, StoreBackend,
};
pub use utils::{masking, validation};
