//! Typed auth operations over the API client

use serde_json::Value;
use std::sync::Arc;

use nf_shared::masking::{mask_email, mask_token};
use nf_shared::validation::validators;

use crate::domain::entities::{AuthResponse, LoginRequest, RefreshResponse, SignupRequest, User};
use crate::errors::{ApiFailure, DomainError, DomainResult, Operation, OperationError, ValidationError};
use crate::services::api::AuthApi;

/// Auth operations with input validation and per-operation error messages
///
/// Every method either resolves with the complete payload or fails with a
/// [`DomainError`]; transport failures arrive as [`DomainError::Operation`]
/// carrying the display message. No method touches the session store or
/// the cache.
pub struct AuthOperations<A: AuthApi> {
    api: Arc<A>,
}

impl<A: AuthApi> Clone for AuthOperations<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}

impl<A: AuthApi> AuthOperations<A> {
    /// Create the operations over an API client
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// The underlying API client
    pub fn api(&self) -> &Arc<A> {
        &self.api
    }

    /// Register a new account
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - Optional token pair plus the new user
    /// * `Err(DomainError::ValidationErr)` - Credentials rejected before sending
    /// * `Err(DomainError::Operation)` - Server or transport failure
    pub async fn signup(&self, request: &SignupRequest) -> DomainResult<AuthResponse> {
        request.check()?;
        tracing::debug!(
            email = %mask_email(&request.email),
            event = "signup_requested",
            "Submitting signup"
        );
        self.api
            .signup(request)
            .await
            .map_err(|failure| operation_failed(Operation::Signup, failure))
    }

    /// Log in with email and password
    pub async fn login(&self, request: &LoginRequest) -> DomainResult<AuthResponse> {
        request.check()?;
        tracing::debug!(
            email = %mask_email(&request.email),
            event = "login_requested",
            "Submitting login"
        );
        self.api
            .login(request)
            .await
            .map_err(|failure| operation_failed(Operation::Login, failure))
    }

    /// End the server-side session; the acknowledgement is opaque
    pub async fn logout(&self) -> DomainResult<Value> {
        tracing::debug!(event = "logout_requested", "Submitting logout");
        self.api
            .logout()
            .await
            .map_err(|failure| operation_failed(Operation::Logout, failure))
    }

    /// Fetch the user behind the ambient session
    pub async fn get_current_user(&self) -> DomainResult<User> {
        self.api
            .current_user()
            .await
            .map_err(|failure| operation_failed(Operation::CurrentUser, failure))
    }

    /// Exchange a refresh token for a new token pair
    pub async fn refresh_token(&self, refresh_token: &str) -> DomainResult<RefreshResponse> {
        if !validators::not_empty(refresh_token) {
            return Err(ValidationError::RequiredField {
                field: "refreshToken".to_string(),
            }
            .into());
        }
        tracing::debug!(
            refresh_token = %mask_token(refresh_token),
            event = "refresh_requested",
            "Submitting token refresh"
        );
        self.api
            .refresh(refresh_token)
            .await
            .map_err(|failure| operation_failed(Operation::RefreshToken, failure))
    }
}

fn operation_failed(operation: Operation, failure: ApiFailure) -> DomainError {
    tracing::warn!(
        operation = operation.as_str(),
        status = failure.status(),
        error = %failure,
        event = "operation_failed",
        "API operation failed"
    );
    OperationError::from_api(operation, failure).into()
}
