//! Credential payloads submitted to the auth endpoints.
//!
//! Credentials are input-only: they are validated, serialized into one
//! request body, and never stored.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::errors::ValidationError;

/// Minimum password length accepted at signup
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Minimum display name length accepted at signup
pub const MIN_NAME_LENGTH: usize = 2;

/// Body of `POST /auth/signup`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    #[validate(length(min = 2))]
    pub name: String,
}

impl SignupRequest {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
        }
    }

    /// Check the form constraints, reporting the first violated field
    ///
    /// Fields are checked in form order: email, password, name.
    pub fn check(&self) -> Result<(), ValidationError> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };
        if has_field(&errors, "email") {
            return Err(ValidationError::InvalidEmail);
        }
        if has_field(&errors, "password") {
            return Err(too_short("password", MIN_PASSWORD_LENGTH, &self.password));
        }
        if has_field(&errors, "name") {
            return Err(too_short("name", MIN_NAME_LENGTH, &self.name));
        }
        Err(ValidationError::InvalidFormat {
            field: "signup".to_string(),
        })
    }
}

impl std::fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .finish()
    }
}

/// Body of `POST /auth/login`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Check the email is well-formed and a password was given
    pub fn check(&self) -> Result<(), ValidationError> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };
        if has_field(&errors, "email") {
            return Err(ValidationError::InvalidEmail);
        }
        Err(ValidationError::RequiredField {
            field: "password".to_string(),
        })
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn has_field(errors: &ValidationErrors, field: &str) -> bool {
    errors.field_errors().contains_key(field)
}

fn too_short(field: &str, min: usize, value: &str) -> ValidationError {
    ValidationError::TooShort {
        field: field.to_string(),
        min,
        actual: value.chars().count(),
    }
}
