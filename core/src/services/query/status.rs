//! Authentication status derived from the identity entry

use crate::domain::entities::User;
use crate::errors::OperationError;

use super::cache::{CacheEntry, QueryStatus};

/// What the UI needs to render the session
#[derive(Debug, Clone, PartialEq)]
pub struct AuthStatus {
    pub is_loading: bool,
    pub is_authenticated: bool,
    pub user: Option<User>,
    pub error: Option<OperationError>,
}

impl AuthStatus {
    /// Derive the status from the `["auth", "me"]` entry
    ///
    /// An absent entry, or one still pending without data, is loading. A
    /// settled entry is authenticated only when it holds a user and its last
    /// fetch did not fail.
    pub fn from_entry(entry: Option<&CacheEntry>) -> Self {
        let Some(entry) = entry else {
            return Self::loading();
        };

        match entry.status {
            QueryStatus::Pending => Self::loading(),
            QueryStatus::Error => Self {
                is_loading: false,
                is_authenticated: false,
                user: None,
                error: entry.error.clone(),
            },
            QueryStatus::Success => {
                let user = entry
                    .data
                    .as_ref()
                    .and_then(|value| value.as_identity())
                    .flatten()
                    .cloned();
                Self {
                    is_loading: false,
                    is_authenticated: user.is_some(),
                    user,
                    error: None,
                }
            }
        }
    }

    fn loading() -> Self {
        Self {
            is_loading: true,
            is_authenticated: false,
            user: None,
            error: None,
        }
    }
}
