//! Scripted API client for service tests

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use crate::domain::entities::{
    AuthResponse, LoginRequest, NewsItem, NewsList, RefreshResponse, SignupRequest, User,
};
use crate::errors::ApiFailure;
use crate::services::api::{AuthApi, Endpoint, NewsApi};

type Scripted = (Option<Duration>, Result<Value, ApiFailure>);

/// API client answering from per-endpoint scripts
///
/// `respond` sets the answer repeated for every call; `respond_once` queues
/// answers consumed before the repeated one. An endpoint with no script
/// fails with a network error.
pub struct MockApi {
    queued: Mutex<HashMap<Endpoint, VecDeque<Scripted>>>,
    repeated: Mutex<HashMap<Endpoint, Scripted>>,
    calls: Mutex<Vec<Endpoint>>,
    refresh_tokens: Mutex<Vec<String>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            queued: Mutex::new(HashMap::new()),
            repeated: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            refresh_tokens: Mutex::new(Vec::new()),
        }
    }

    pub fn respond(&self, endpoint: Endpoint, response: Result<Value, ApiFailure>) -> &Self {
        self.repeated
            .lock()
            .unwrap()
            .insert(endpoint, (None, response));
        self
    }

    pub fn respond_once(&self, endpoint: Endpoint, response: Result<Value, ApiFailure>) -> &Self {
        self.respond_once_after(endpoint, Duration::ZERO, response)
    }

    /// Queue an answer delivered after `delay`
    pub fn respond_once_after(
        &self,
        endpoint: Endpoint,
        delay: Duration,
        response: Result<Value, ApiFailure>,
    ) -> &Self {
        let delay = (!delay.is_zero()).then_some(delay);
        self.queued
            .lock()
            .unwrap()
            .entry(endpoint)
            .or_default()
            .push_back((delay, response));
        self
    }

    /// Number of calls made to `endpoint`
    pub fn calls(&self, endpoint: Endpoint) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|called| **called == endpoint)
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Refresh tokens sent to `POST /auth/refresh`, in order
    pub fn refresh_tokens_sent(&self) -> Vec<String> {
        self.refresh_tokens.lock().unwrap().clone()
    }

    fn next(&self, endpoint: Endpoint) -> Scripted {
        self.calls.lock().unwrap().push(endpoint);
        if let Some(scripted) = self
            .queued
            .lock()
            .unwrap()
            .get_mut(&endpoint)
            .and_then(VecDeque::pop_front)
        {
            return scripted;
        }
        self.repeated
            .lock()
            .unwrap()
            .get(&endpoint)
            .cloned()
            .unwrap_or_else(|| {
                (
                    None,
                    Err(ApiFailure::Network {
                        message: format!("no response scripted for {endpoint}"),
                    }),
                )
            })
    }

    async fn reply<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, ApiFailure> {
        let (delay, response) = self.next(endpoint);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        serde_json::from_value(response?).map_err(|err| ApiFailure::Decode {
            message: err.to_string(),
        })
    }
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthApi for MockApi {
    async fn signup(&self, _request: &SignupRequest) -> Result<AuthResponse, ApiFailure> {
        self.reply(Endpoint::Signup).await
    }

    async fn login(&self, _request: &LoginRequest) -> Result<AuthResponse, ApiFailure> {
        self.reply(Endpoint::Login).await
    }

    async fn logout(&self) -> Result<Value, ApiFailure> {
        self.reply(Endpoint::Logout).await
    }

    async fn current_user(&self) -> Result<User, ApiFailure> {
        self.reply(Endpoint::CurrentUser).await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<RefreshResponse, ApiFailure> {
        self.refresh_tokens
            .lock()
            .unwrap()
            .push(refresh_token.to_string());
        self.reply(Endpoint::Refresh).await
    }
}

#[async_trait]
impl NewsApi for MockApi {
    async fn fetch_news(&self) -> Result<NewsList, ApiFailure> {
        self.reply(Endpoint::News).await
    }
}

pub fn user_json(id: &str, name: &str) -> Value {
    json!({ "id": id, "name": name, "email": format!("{id}@example.com") })
}

pub fn auth_json(access: &str, refresh: &str, user_id: &str) -> Value {
    json!({
        "accessToken": access,
        "refreshToken": refresh,
        "user": user_json(user_id, "Ann"),
    })
}

pub fn news_json(ids: &[&str]) -> Value {
    let items: Vec<NewsItem> = ids
        .iter()
        .map(|id| NewsItem {
            id: id.to_string(),
            title: format!("Title {id}"),
            summary: format!("Summary {id}"),
            image: format!("https://img.example.com/{id}.png"),
        })
        .collect();
    json!({ "items": items })
}

pub fn status_failure(status: u16, message: Option<&str>) -> ApiFailure {
    ApiFailure::Status {
        status,
        message: message.map(str::to_string),
    }
}

pub fn network_failure() -> ApiFailure {
    ApiFailure::Network {
        message: "connection refused".to_string(),
    }
}
