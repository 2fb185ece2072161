//! Session store persisted as a JSON file

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use nf_core::domain::entities::{SessionTokens, TokenKind};
use nf_core::errors::DomainError;
use nf_core::repositories::SessionStore;

use crate::InfrastructureError;

/// Session store backed by a JSON file
///
/// The file holds `{"accessToken": ..., "refreshToken": ...}` and is
/// created with mode `0600` on unix. A missing file is an empty session.
/// Every operation reads the file again, so a token written by another
/// process is picked up on the next call.
///
/// Writes go to a sibling staging file that is then renamed over the
/// session file, so a failed write leaves the previous tokens in place.
pub struct FileSessionStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file a write goes through before replacing [`path`](Self::path)
    pub fn staging_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "session".to_string());
        self.path.with_file_name(format!(".{name}.tmp"))
    }

    async fn load(&self) -> Result<SessionTokens, InfrastructureError> {
        match tokio::fs::read(&self.path).await {
            Ok(contents) if contents.iter().all(u8::is_ascii_whitespace) => {
                Ok(SessionTokens::default())
            }
            Ok(contents) => Ok(serde_json::from_slice(&contents)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(SessionTokens::default()),
            Err(err) => Err(err.into()),
        }
    }

    async fn save(&self, tokens: &SessionTokens) -> Result<(), InfrastructureError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let contents = serde_json::to_vec_pretty(tokens)?;
        let staging = self.staging_path();

        if let Err(err) = write_private(&staging, &contents).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(err.into());
        }
        tokio::fs::rename(&staging, &self.path).await?;
        Ok(())
    }

    async fn update(
        &self,
        change: impl FnOnce(&mut SessionTokens),
    ) -> Result<(), InfrastructureError> {
        let _guard = self.lock.lock().await;
        let mut tokens = self.load().await?;
        change(&mut tokens);
        self.save(&tokens).await
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn get(&self, kind: TokenKind) -> Result<Option<String>, DomainError> {
        let _guard = self.lock.lock().await;
        let tokens = self.load().await?;
        Ok(tokens.get(kind).map(str::to_string))
    }

    async fn set(&self, kind: TokenKind, value: &str) -> Result<(), DomainError> {
        self.update(|tokens| tokens.set(kind, Some(value.to_string())))
            .await?;
        tracing::debug!(key = kind.storage_key(), event = "token_stored", "Token stored");
        Ok(())
    }

    async fn remove(&self, kind: TokenKind) -> Result<(), DomainError> {
        self.update(|tokens| tokens.set(kind, None)).await?;
        tracing::debug!(key = kind.storage_key(), event = "token_removed", "Token removed");
        Ok(())
    }

    async fn write(&self, tokens: &SessionTokens) -> Result<(), DomainError> {
        self.update(|stored| {
            for kind in TokenKind::ALL {
                if let Some(value) = tokens.get(kind) {
                    stored.set(kind, Some(value.to_string()));
                }
            }
        })
        .await?;
        tracing::debug!(event = "tokens_stored", "Token pair stored");
        Ok(())
    }

    async fn snapshot(&self) -> Result<SessionTokens, DomainError> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?)
    }

    async fn clear(&self) -> Result<(), DomainError> {
        let _guard = self.lock.lock().await;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(InfrastructureError::from(err).into()),
        }
    }

    fn backend_name(&self) -> &str {
        "file"
    }
}

async fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut options = tokio::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o600);

    let mut file = options.open(path).await?;
    file.write_all(contents).await?;
    file.sync_all().await
}
