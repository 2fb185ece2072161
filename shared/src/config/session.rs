//! Session token storage configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory created under the platform data directory
const APP_DIR: &str = "newsfeed";

/// File name of the persisted token pair
const SESSION_FILE: &str = "session.json";

/// Where session tokens live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// JSON file that survives restarts
    File,
    /// Process-local only
    Memory,
}

impl std::str::FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "file" | "disk" => Ok(StoreBackend::File),
            "memory" | "mem" | "ephemeral" => Ok(StoreBackend::Memory),
            _ => Err(format!("Invalid session store backend: {}", s)),
        }
    }
}

/// Session store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionStoreConfig {
    /// Storage backend
    pub backend: StoreBackend,

    /// Path of the session file (file backend only)
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Default for SessionStoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::File,
            path: None,
        }
    }
}

impl SessionStoreConfig {
    /// In-memory store configuration
    pub fn memory() -> Self {
        Self {
            backend: StoreBackend::Memory,
            path: None,
        }
    }

    /// File store at an explicit path
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            backend: StoreBackend::File,
            path: Some(path.into()),
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let backend = lookup("SESSION_STORE")
            .and_then(|v| v.parse().ok())
            .unwrap_or(StoreBackend::File);
        let path = lookup("SESSION_FILE").map(PathBuf::from);
        Self { backend, path }
    }

    /// Resolved session file path
    ///
    /// Falls back to `<data dir>/newsfeed/session.json`, then to the
    /// working directory when the platform has no data directory.
    pub fn resolved_path(&self) -> PathBuf {
        if let Some(path) = &self.path {
            return path.clone();
        }
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR).join(SESSION_FILE))
            .unwrap_or_else(|| PathBuf::from(SESSION_FILE))
    }

    /// Reject an explicitly empty path
    pub fn validate(&self) -> Result<(), String> {
        match &self.path {
            Some(path) if path.as_os_str().is_empty() => {
                Err("SESSION_FILE must not be empty".to_string())
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_parsing() {
        assert_eq!("file".parse::<StoreBackend>(), Ok(StoreBackend::File));
        assert_eq!("Memory".parse::<StoreBackend>(), Ok(StoreBackend::Memory));
        assert!("redis".parse::<StoreBackend>().is_err());
    }

    #[test]
    fn test_explicit_path_wins() {
        let config = SessionStoreConfig::file("/tmp/tokens.json");
        assert_eq!(config.resolved_path(), PathBuf::from("/tmp/tokens.json"));
    }

    #[test]
    fn test_default_path_ends_with_session_file() {
        let config = SessionStoreConfig::default();
        assert!(config.resolved_path().ends_with(SESSION_FILE));
    }

    #[test]
    fn test_from_lookup() {
        let config = SessionStoreConfig::from_lookup(|key| match key {
            "SESSION_STORE" => Some("memory".to_string()),
            _ => None,
        });
        assert_eq!(config.backend, StoreBackend::Memory);
        assert!(config.path.is_none());
    }
}
