//! Domain-specific error types and error handling.

mod types;


// Re-export all error types and utilities
pub use types::{
    display_message, ApiFailure, Operation, OperationError, ValidationError,
    GENERIC_FAILURE_MESSAGE,
};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Session storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    /// Message suitable for showing to the user
    pub fn user_message(&self) -> String {
        match self {
            DomainError::Operation(err) => err.message.clone(),
            other => other.to_string(),
        }
    }

    /// The operation failure, if this error came from the API
    pub fn as_operation(&self) -> Option<&OperationError> {
        match self {
            DomainError::Operation(err) => Some(err),
            _ => None,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
