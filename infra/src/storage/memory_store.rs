//! Process-local session store

use async_trait::async_trait;
use tokio::sync::RwLock;

use nf_core::domain::entities::{SessionTokens, TokenKind};
use nf_core::errors::DomainError;
use nf_core::repositories::SessionStore;

/// Session store that forgets everything when the process exits
#[derive(Default)]
pub struct MemorySessionStore {
    tokens: RwLock<SessionTokens>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `tokens`
    pub fn with_tokens(tokens: SessionTokens) -> Self {
        Self {
            tokens: RwLock::new(tokens),
        }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, kind: TokenKind) -> Result<Option<String>, DomainError> {
        Ok(self.tokens.read().await.get(kind).map(str::to_string))
    }

    async fn set(&self, kind: TokenKind, value: &str) -> Result<(), DomainError> {
        self.tokens.write().await.set(kind, Some(value.to_string()));
        Ok(())
    }

    async fn remove(&self, kind: TokenKind) -> Result<(), DomainError> {
        self.tokens.write().await.set(kind, None);
        Ok(())
    }

    async fn write(&self, tokens: &SessionTokens) -> Result<(), DomainError> {
        let mut stored = self.tokens.write().await;
        for kind in TokenKind::ALL {
            if let Some(value) = tokens.get(kind) {
                stored.set(kind, Some(value.to_string()));
            }
        }
        Ok(())
    }

    async fn snapshot(&self) -> Result<SessionTokens, DomainError> {
        Ok(self.tokens.read().await.clone())
    }

    fn backend_name(&self) -> &str {
        "memory"
    }
}
