//! # NewsFeed Core
//!
//! Client-side session logic for the NewsFeed REST API.
//! This crate contains the domain entities, the session store interface,
//! the API client contract, and the services that bind auth operations
//! and news fetching to the query cache.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
