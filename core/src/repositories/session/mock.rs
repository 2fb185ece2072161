//! Mock implementation of SessionStore for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

use crate::domain::entities::token::{SessionTokens, TokenKind};
use crate::errors::DomainError;

use super::r#trait::SessionStore;

/// Mock session store for testing
pub struct MockSessionStore {
    tokens: Arc<RwLock<HashMap<TokenKind, String>>>,
    fail_writes: AtomicBool,
    fail_kind: Mutex<Option<TokenKind>>,
    writes: AtomicUsize,
}

impl MockSessionStore {
    /// Create an empty mock store
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
            fail_writes: AtomicBool::new(false),
            fail_kind: Mutex::new(None),
            writes: AtomicUsize::new(0),
        }
    }

    /// Create a mock store already holding a token pair
    pub fn with_tokens(access: &str, refresh: &str) -> Self {
        let mut tokens = HashMap::new();
        tokens.insert(TokenKind::Access, access.to_string());
        tokens.insert(TokenKind::Refresh, refresh.to_string());
        Self {
            tokens: Arc::new(RwLock::new(tokens)),
            fail_writes: AtomicBool::new(false),
            fail_kind: Mutex::new(None),
            writes: AtomicUsize::new(0),
        }
    }

    /// Make every subsequent set/remove fail
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent set/remove calls for `kind` fail; `None` lifts it
    pub fn fail_writes_for(&self, kind: Option<TokenKind>) {
        *self.fail_kind.lock().unwrap() = kind;
    }

    /// Number of successful set/remove calls
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Current contents, read without going through the trait
    pub async fn tokens(&self) -> SessionTokens {
        let tokens = self.tokens.read().await;
        SessionTokens {
            access_token: tokens.get(&TokenKind::Access).cloned(),
            refresh_token: tokens.get(&TokenKind::Refresh).cloned(),
        }
    }

    fn check_writable(&self, kind: TokenKind) -> Result<(), DomainError> {
        let kind_blocked = *self.fail_kind.lock().unwrap() == Some(kind);
        if self.fail_writes.load(Ordering::SeqCst) || kind_blocked {
            return Err(DomainError::Storage {
                message: "mock store is read-only".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for MockSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for MockSessionStore {
    async fn get(&self, kind: TokenKind) -> Result<Option<String>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.get(&kind).cloned())
    }

    async fn set(&self, kind: TokenKind, value: &str) -> Result<(), DomainError> {
        self.check_writable(kind)?;
        self.tokens.write().await.insert(kind, value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn remove(&self, kind: TokenKind) -> Result<(), DomainError> {
        self.check_writable(kind)?;
        self.tokens.write().await.remove(&kind);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}
