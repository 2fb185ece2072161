//! Auth operations module
//!
//! Typed wrappers around the API client for signup, login, logout,
//! current-user lookup and token refresh. Failures are translated into
//! domain errors carrying user-facing messages.

mod operations;

#[cfg(test)]
pub(crate) mod tests;

pub use operations::AuthOperations;
