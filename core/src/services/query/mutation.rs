//! Mutation kinds, their lifecycle and their declared side effects

use crate::domain::entities::{AuthResponse, RefreshResponse, SessionTokens, User};
use crate::errors::{DomainResult, Operation};
use crate::repositories::SessionStore;

use super::cache::{CachedValue, QueryCache};
use super::key::QueryKey;

/// Session-changing operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutation {
    Signup,
    Login,
    Logout,
    RefreshToken,
}

impl Mutation {
    pub const ALL: [Mutation; 4] = [
        Mutation::Signup,
        Mutation::Login,
        Mutation::Logout,
        Mutation::RefreshToken,
    ];

    pub fn operation(self) -> Operation {
        match self {
            Mutation::Signup => Operation::Signup,
            Mutation::Login => Operation::Login,
            Mutation::Logout => Operation::Logout,
            Mutation::RefreshToken => Operation::RefreshToken,
        }
    }

    /// Cache keys written on success
    pub fn writes(self) -> Vec<QueryKey> {
        match self {
            Mutation::Signup | Mutation::Login | Mutation::Logout => {
                vec![QueryKey::current_user()]
            }
            Mutation::RefreshToken => Vec::new(),
        }
    }

    /// Cache prefixes marked stale on success
    pub fn invalidates(self) -> Vec<QueryKey> {
        match self {
            Mutation::Logout => vec![QueryKey::auth_namespace()],
            _ => Vec::new(),
        }
    }

    pub fn as_str(self) -> &'static str {
        self.operation().as_str()
    }
}

impl std::fmt::Display for Mutation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Observable state of the latest call of one mutation kind
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MutationPhase {
    #[default]
    Idle,
    Pending,
    Succeeded,
    /// Failed with the display message
    Failed(String),
}

impl MutationPhase {
    pub fn is_pending(&self) -> bool {
        matches!(self, MutationPhase::Pending)
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, MutationPhase::Succeeded | MutationPhase::Failed(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            MutationPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// What a successful mutation does to the identity entry
#[derive(Debug, Clone, PartialEq, Default)]
pub enum IdentityWrite {
    #[default]
    Unchanged,
    Set(User),
    /// Store the explicit "no identity" value
    Cleared,
}

/// Side effects of one successful mutation
///
/// Built from the mutation's response and applied in a fixed order: token
/// removal, token writes, identity write, invalidation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MutationEffects {
    pub persist_access: Option<String>,
    pub persist_refresh: Option<String>,
    pub clear_tokens: bool,
    pub identity: IdentityWrite,
    pub invalidate: Vec<QueryKey>,
}

impl MutationEffects {
    /// No effects, as for any failed mutation
    pub fn none() -> Self {
        Self::default()
    }

    /// Signup or login: persist the tokens that are present, set the identity
    pub fn for_auth_response(mutation: Mutation, response: &AuthResponse) -> Self {
        Self {
            persist_access: response.access_token.clone(),
            persist_refresh: response.refresh_token.clone(),
            clear_tokens: false,
            identity: IdentityWrite::Set(response.user.clone()),
            invalidate: mutation.invalidates(),
        }
    }

    /// Logout: drop both tokens, clear the identity, mark auth keys stale
    pub fn for_logout() -> Self {
        Self {
            persist_access: None,
            persist_refresh: None,
            clear_tokens: true,
            identity: IdentityWrite::Cleared,
            invalidate: Mutation::Logout.invalidates(),
        }
    }

    /// Refresh: overwrite the tokens that are present
    pub fn for_refresh(response: &RefreshResponse) -> Self {
        Self {
            persist_access: response.access_token.clone(),
            persist_refresh: response.refresh_token.clone(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply to the store, then to the cache
    pub async fn apply<S>(&self, store: &S, cache: &QueryCache) -> DomainResult<()>
    where
        S: SessionStore + ?Sized,
    {
        if self.clear_tokens {
            store.clear().await?;
        }
        let tokens = SessionTokens {
            access_token: self.persist_access.clone(),
            refresh_token: self.persist_refresh.clone(),
        };
        if !tokens.is_empty() {
            store.write(&tokens).await?;
        }

        match &self.identity {
            IdentityWrite::Unchanged => {}
            IdentityWrite::Set(user) => {
                cache
                    .set_data(QueryKey::current_user(), CachedValue::Identity(Some(user.clone())))
                    .await
            }
            IdentityWrite::Cleared => {
                cache
                    .set_data(QueryKey::current_user(), CachedValue::Identity(None))
                    .await
            }
        }

        for prefix in &self.invalidate {
            cache.invalidate(prefix).await;
        }
        Ok(())
    }
}
