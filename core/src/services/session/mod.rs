//! Auth session service
//!
//! Runs the auth mutations through the query cache policy and answers the
//! "who is logged in" question from the identity entry.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::SessionConfig;
pub use service::AuthSession;
