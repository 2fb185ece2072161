//! Traits for API client integration

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::entities::{
    AuthResponse, LoginRequest, NewsList, RefreshResponse, SignupRequest, User,
};
use crate::errors::ApiFailure;

/// Auth endpoints of the REST API
///
/// Implementations perform exactly one HTTP call per method, never retry,
/// and normalize every failure into an [`ApiFailure`].
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /auth/signup`
    async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ApiFailure>;
    /// `POST /auth/login`
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiFailure>;
    /// `POST /auth/logout`, returning the opaque acknowledgement
    async fn logout(&self) -> Result<Value, ApiFailure>;
    /// `GET /auth/me` using the ambient session
    async fn current_user(&self) -> Result<User, ApiFailure>;
    /// `POST /auth/refresh`
    async fn refresh(&self, refresh_token: &str) -> Result<RefreshResponse, ApiFailure>;
}

/// News endpoint of the REST API
#[async_trait]
pub trait NewsApi: Send + Sync {
    /// `GET /news`
    async fn fetch_news(&self) -> Result<NewsList, ApiFailure>;
}
