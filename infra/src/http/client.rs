//! reqwest-based implementation of the API contract

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

use nf_core::domain::entities::{
    AuthResponse, LoginRequest, NewsList, RefreshRequest, RefreshResponse, SignupRequest,
    TokenKind, User,
};
use nf_core::errors::ApiFailure;
use nf_core::repositories::SessionStore;
use nf_core::services::{AuthApi, Endpoint, HttpMethod, NewsApi};
use nf_shared::ApiConfig;

use super::response::{decode_body, extract_server_message};
use crate::InfrastructureError;

/// HTTP client for the NewsFeed REST API
///
/// One request per call, no retries. When a session store is attached the
/// stored access token is sent as a bearer token.
pub struct HttpApiClient {
    client: Client,
    base_url: String,
    session_store: Option<Arc<dyn SessionStore>>,
}

impl HttpApiClient {
    /// Create a client for `config.base_url`
    pub fn new(config: &ApiConfig) -> Result<Self, InfrastructureError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            base_url: config.normalized_base_url().to_string(),
            session_store: None,
        })
    }

    /// Attach the store holding the access token
    pub fn with_session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.session_store = Some(store);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    async fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let Some(store) = &self.session_store else {
            return request;
        };
        match store.get(TokenKind::Access).await {
            Ok(Some(token)) => request.bearer_auth(token),
            Ok(None) => request,
            Err(err) => {
                tracing::warn!(error = %err, event = "token_read_failed", "Sending request without access token");
                request
            }
        }
    }

    async fn send<B, T>(&self, endpoint: Endpoint, body: Option<&B>) -> Result<T, ApiFailure>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(endpoint);
        let request = match endpoint.method() {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        };
        let mut request = self.authorize(request).await;
        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!(endpoint = %endpoint, event = "api_request", "Sending API request");
        let response = request.send().await.map_err(network_failure)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(network_failure)?;

        if !status.is_success() {
            tracing::debug!(
                endpoint = %endpoint,
                status = status.as_u16(),
                event = "api_error_status",
                "API responded with an error status"
            );
            return Err(ApiFailure::Status {
                status: status.as_u16(),
                message: extract_server_message(&bytes),
            });
        }

        decode_body(&bytes)
    }
}

fn network_failure(err: reqwest::Error) -> ApiFailure {
    ApiFailure::Network {
        message: err.to_string(),
    }
}

#[async_trait]
impl AuthApi for HttpApiClient {
    async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ApiFailure> {
        self.send(Endpoint::Signup, Some(request)).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiFailure> {
        self.send(Endpoint::Login, Some(request)).await
    }

    async fn logout(&self) -> Result<Value, ApiFailure> {
        self.send(Endpoint::Logout, Some(&json!({}))).await
    }

    async fn current_user(&self) -> Result<User, ApiFailure> {
        self.send::<Value, _>(Endpoint::CurrentUser, None).await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<RefreshResponse, ApiFailure> {
        let body = RefreshRequest {
            refresh_token: refresh_token.to_string(),
        };
        self.send(Endpoint::Refresh, Some(&body)).await
    }
}

#[async_trait]
impl NewsApi for HttpApiClient {
    async fn fetch_news(&self) -> Result<NewsList, ApiFailure> {
        self.send::<Value, _>(Endpoint::News, None).await
    }
}
