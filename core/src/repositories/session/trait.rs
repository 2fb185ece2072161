//! Session store trait defining the interface for token persistence.

use async_trait::async_trait;

use crate::domain::entities::token::{SessionTokens, TokenKind};
use crate::errors::DomainError;

/// Durable storage for the current access and refresh tokens
///
/// The store holds at most one value per [`TokenKind`]. Writing a token
/// overwrites the previous one; no history is kept. Stores do not encrypt
/// and do not track expiry: an expired token only shows up as a failed API
/// call later on.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read a token
    ///
    /// # Returns
    /// * `Ok(Some(token))` - Token present
    /// * `Ok(None)` - Nothing stored for this kind
    /// * `Err(DomainError)` - Backend could not be read
    async fn get(&self, kind: TokenKind) -> Result<Option<String>, DomainError>;

    /// Store a token, replacing any previous value
    async fn set(&self, kind: TokenKind, value: &str) -> Result<(), DomainError>;

    /// Remove a token; removing an absent token succeeds
    async fn remove(&self, kind: TokenKind) -> Result<(), DomainError>;

    /// Read both tokens
    async fn snapshot(&self) -> Result<SessionTokens, DomainError> {
        Ok(SessionTokens {
            access_token: self.get(TokenKind::Access).await?,
            refresh_token: self.get(TokenKind::Refresh).await?,
        })
    }

    /// Overwrite the tokens present in `tokens`; absent ones keep their value
    ///
    /// Either every present token is stored or the store is left as it was.
    /// The default writes one kind at a time and puts back the previous
    /// values of the kinds already written when a later write fails.
    async fn write(&self, tokens: &SessionTokens) -> Result<(), DomainError> {
        let previous = self.snapshot().await?;
        let mut written = Vec::with_capacity(TokenKind::ALL.len());

        for kind in TokenKind::ALL {
            let Some(value) = tokens.get(kind) else {
                continue;
            };
            if let Err(err) = self.set(kind, value).await {
                for done in written {
                    let restored = match previous.get(done) {
                        Some(old) => self.set(done, old).await,
                        None => self.remove(done).await,
                    };
                    if let Err(rollback) = restored {
                        tracing::error!(
                            key = done.storage_key(),
                            error = %rollback,
                            event = "token_rollback_failed",
                            "Could not restore previous token"
                        );
                    }
                }
                return Err(err);
            }
            written.push(kind);
        }
        Ok(())
    }

    /// Remove both tokens
    async fn clear(&self) -> Result<(), DomainError> {
        for kind in TokenKind::ALL {
            self.remove(kind).await?;
        }
        Ok(())
    }

    /// Short backend name for logs
    fn backend_name(&self) -> &str;
}
