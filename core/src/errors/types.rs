//! Error types for API calls, auth operations and input validation
//!
//! Transport failures are normalized into [`ApiFailure`] by the API client.
//! Auth operations wrap them into [`OperationError`], whose message is chosen
//! by [`display_message`] from the server's text or a per-operation fallback.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message used by the API client when the server supplied none
pub const GENERIC_FAILURE_MESSAGE: &str = "request failed";

/// Normalized failure returned by the API client
///
/// Every way an HTTP call can go wrong collapses into one of these three
/// variants. Only `Status` can carry a server-reported message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiFailure {
    #[error("network error: {message}")]
    Network { message: String },

    #[error("server responded with status {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },

    #[error("unexpected response: {message}")]
    Decode { message: String },
}

impl ApiFailure {
    /// The message reported by the server, if any and not blank
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiFailure::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message.as_str()),
            _ => None,
        }
    }

    /// Server message, or the generic fallback
    pub fn message(&self) -> &str {
        self.server_message().unwrap_or(GENERIC_FAILURE_MESSAGE)
    }

    /// HTTP status, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiFailure::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Operations exposed over the REST API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Signup,
    Login,
    Logout,
    CurrentUser,
    RefreshToken,
    FetchNews,
}

impl Operation {
    /// Display message used when the server gives no usable reason
    pub fn fallback_message(self) -> &'static str {
        match self {
            Operation::Signup => "signup failed",
            Operation::Login => "login failed",
            Operation::Logout => "logout failed",
            Operation::CurrentUser => "failed to fetch current user",
            Operation::RefreshToken => "token refresh failed",
            Operation::FetchNews => "failed to fetch news",
        }
    }

    /// Stable name used in logs
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Signup => "signup",
            Operation::Login => "login",
            Operation::Logout => "logout",
            Operation::CurrentUser => "current_user",
            Operation::RefreshToken => "refresh_token",
            Operation::FetchNews => "fetch_news",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the message shown to the user for a failed operation
///
/// A non-blank server message wins; otherwise the operation's fallback.
pub fn display_message(operation: Operation, server_message: Option<&str>) -> String {
    match server_message.map(str::trim) {
        Some(message) if !message.is_empty() => message.to_string(),
        _ => operation.fallback_message().to_string(),
    }
}

/// Failure of one auth or news operation, ready for display
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct OperationError {
    /// Which operation failed
    pub operation: Operation,
    /// Message for the user
    pub message: String,
    /// Normalized transport failure behind it
    #[source]
    pub cause: Option<ApiFailure>,
}

impl OperationError {
    /// Wrap an API failure for `operation`
    pub fn from_api(operation: Operation, failure: ApiFailure) -> Self {
        Self {
            operation,
            message: display_message(operation, failure.server_message()),
            cause: Some(failure),
        }
    }

    /// Failure that did not come from the transport
    pub fn new(operation: Operation, message: impl Into<String>) -> Self {
        Self {
            operation,
            message: message.into(),
            cause: None,
        }
    }

    /// HTTP status of the underlying failure, if any
    pub fn status(&self) -> Option<u16> {
        self.cause.as_ref().and_then(ApiFailure::status)
    }
}

/// Input validation errors raised before anything is sent
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Field {field} must be at least {min} characters (got {actual})")]
    TooShort {
        field: String,
        min: usize,
        actual: usize,
    },

    #[error("Invalid format for field: {field}")]
    InvalidFormat { field: String },
}
