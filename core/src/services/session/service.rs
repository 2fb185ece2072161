//! Auth session service implementation

use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{watch, Mutex};

use crate::domain::entities::{
    AuthResponse, LoginRequest, RefreshResponse, SignupRequest, TokenKind, User,
};
use crate::errors::{DomainResult, Operation, OperationError};
use crate::repositories::SessionStore;
use crate::services::api::AuthApi;
use crate::services::auth::AuthOperations;
use crate::services::query::{
    AuthStatus, CachedValue, Mutation, MutationEffects, MutationPhase, QueryCache, QueryKey,
};

use super::config::SessionConfig;

/// In-flight guard and observable phase of one mutation kind
struct MutationSlot {
    guard: Mutex<()>,
    phase: watch::Sender<MutationPhase>,
}

impl MutationSlot {
    fn new() -> Self {
        let (phase, _) = watch::channel(MutationPhase::Idle);
        Self {
            guard: Mutex::new(()),
            phase,
        }
    }
}

struct MutationSlots {
    signup: MutationSlot,
    login: MutationSlot,
    logout: MutationSlot,
    refresh: MutationSlot,
}

impl MutationSlots {
    fn new() -> Self {
        Self {
            signup: MutationSlot::new(),
            login: MutationSlot::new(),
            logout: MutationSlot::new(),
            refresh: MutationSlot::new(),
        }
    }

    fn get(&self, mutation: Mutation) -> &MutationSlot {
        match mutation {
            Mutation::Signup => &self.signup,
            Mutation::Login => &self.login,
            Mutation::Logout => &self.logout,
            Mutation::RefreshToken => &self.refresh,
        }
    }
}

/// Auth session bound to one session store and one query cache
///
/// Mutations persist tokens and update the identity entry before they
/// return. The identity itself is read lazily through [`current_user`]
/// and never refetched in the background.
///
/// [`current_user`]: AuthSession::current_user
pub struct AuthSession<A, S>
where
    A: AuthApi,
    S: SessionStore + ?Sized,
{
    operations: AuthOperations<A>,
    store: Arc<S>,
    cache: Arc<QueryCache>,
    slots: MutationSlots,
    config: SessionConfig,
}

impl<A, S> AuthSession<A, S>
where
    A: AuthApi,
    S: SessionStore + ?Sized,
{
    /// Create a new auth session
    ///
    /// # Arguments
    ///
    /// * `api` - API client for the auth endpoints
    /// * `store` - Where tokens are persisted
    /// * `cache` - Query cache shared with the other services
    /// * `config` - Service configuration
    pub fn new(api: Arc<A>, store: Arc<S>, cache: Arc<QueryCache>, config: SessionConfig) -> Self {
        Self {
            operations: AuthOperations::new(api),
            store,
            cache,
            slots: MutationSlots::new(),
            config,
        }
    }

    pub fn operations(&self) -> &AuthOperations<A> {
        &self.operations
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn cache(&self) -> &Arc<QueryCache> {
        &self.cache
    }

    /// Register, persist the returned tokens and cache the new identity
    pub async fn signup(&self, request: &SignupRequest) -> DomainResult<AuthResponse> {
        self.run_mutation(
            Mutation::Signup,
            || self.operations.signup(request),
            |response| MutationEffects::for_auth_response(Mutation::Signup, response),
        )
        .await
    }

    /// Log in, persist the returned tokens and cache the identity
    pub async fn login(&self, request: &LoginRequest) -> DomainResult<AuthResponse> {
        self.run_mutation(
            Mutation::Login,
            || self.operations.login(request),
            |response| MutationEffects::for_auth_response(Mutation::Login, response),
        )
        .await
    }

    /// Log out, drop both tokens and clear the identity
    ///
    /// Any acknowledgement payload counts as success. Logging out again
    /// leaves the session in the same state.
    pub async fn logout(&self) -> DomainResult<Value> {
        self.run_mutation(
            Mutation::Logout,
            || self.operations.logout(),
            |_| MutationEffects::for_logout(),
        )
        .await
    }

    /// Exchange `refresh_token` for new tokens and persist those returned
    pub async fn refresh_token(&self, refresh_token: &str) -> DomainResult<RefreshResponse> {
        self.run_mutation(
            Mutation::RefreshToken,
            || self.operations.refresh_token(refresh_token),
            MutationEffects::for_refresh,
        )
        .await
    }

    /// Refresh using the stored refresh token
    ///
    /// Without a stored token this fails validation and sends nothing.
    pub async fn refresh_session(&self) -> DomainResult<RefreshResponse> {
        let refresh_token = self
            .store
            .get(TokenKind::Refresh)
            .await?
            .unwrap_or_default();
        self.refresh_token(&refresh_token).await
    }

    /// Current identity, fetched when unknown or stale
    ///
    /// # Returns
    ///
    /// * `Ok(Some(user))` - Logged in
    /// * `Ok(None)` - Explicitly logged out
    /// * `Err(DomainError)` - The fetch failed; [`auth_status`] now reports
    ///   not authenticated and carries the error
    ///
    /// [`auth_status`]: AuthSession::auth_status
    pub async fn current_user(&self) -> DomainResult<Option<User>> {
        let key = QueryKey::current_user();
        if let Some(entry) = self.cache.get(&key).await.filter(|entry| entry.is_fresh()) {
            return Ok(identity_of(entry.data));
        }
        self.fetch_current_user().await
    }

    /// Fetch the identity regardless of what is cached
    pub async fn refetch_current_user(&self) -> DomainResult<Option<User>> {
        self.fetch_current_user().await
    }

    /// Status derived from the identity entry
    pub async fn auth_status(&self) -> AuthStatus {
        let entry = self.cache.get(&QueryKey::current_user()).await;
        AuthStatus::from_entry(entry.as_ref())
    }

    /// Phase of the latest call of `mutation`
    pub fn mutation_phase(&self, mutation: Mutation) -> MutationPhase {
        self.slots.get(mutation).phase.borrow().clone()
    }

    /// Watch the phase of `mutation`
    pub fn subscribe_phase(&self, mutation: Mutation) -> watch::Receiver<MutationPhase> {
        self.slots.get(mutation).phase.subscribe()
    }

    async fn fetch_current_user(&self) -> DomainResult<Option<User>> {
        let key = QueryKey::current_user();
        let ticket = self.cache.begin_fetch(&key).await;

        match self.operations.get_current_user().await {
            Ok(user) => {
                let applied = self
                    .cache
                    .settle_fetch(ticket, Ok(CachedValue::Identity(Some(user.clone()))))
                    .await;
                if applied {
                    tracing::debug!(user_id = %user.id, event = "identity_fetched", "Current user fetched");
                    Ok(Some(user))
                } else {
                    // Overwritten while in flight; the direct write wins.
                    Ok(identity_of(self.cache.data(&key).await))
                }
            }
            Err(err) => {
                let failure = match err.as_operation() {
                    Some(op) => op.clone(),
                    None => OperationError::new(Operation::CurrentUser, err.user_message()),
                };
                self.cache.settle_fetch(ticket, Err(failure)).await;
                Err(err)
            }
        }
    }

    async fn run_mutation<T, F, Fut, E>(
        &self,
        mutation: Mutation,
        call: F,
        effects: E,
    ) -> DomainResult<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = DomainResult<T>>,
        E: FnOnce(&T) -> MutationEffects,
    {
        let slot = self.slots.get(mutation);
        let _in_flight = if self.config.serialize_mutations {
            Some(slot.guard.lock().await)
        } else {
            None
        };

        slot.phase.send_replace(MutationPhase::Pending);
        tracing::info!(
            mutation = mutation.as_str(),
            store = self.store.backend_name(),
            event = "mutation_started",
            "Mutation started"
        );

        let result = match call().await {
            Ok(value) => effects(&value)
                .apply(self.store.as_ref(), &self.cache)
                .await
                .map(|()| value),
            Err(err) => Err(err),
        };

        match &result {
            Ok(_) => {
                tracing::info!(
                    mutation = mutation.as_str(),
                    event = "mutation_succeeded",
                    "Mutation succeeded"
                );
                slot.phase.send_replace(MutationPhase::Succeeded);
            }
            Err(err) => {
                tracing::warn!(
                    mutation = mutation.as_str(),
                    error = %err,
                    event = "mutation_failed",
                    "Mutation failed"
                );
                slot.phase
                    .send_replace(MutationPhase::Failed(err.user_message()));
            }
        }
        result
    }
}

fn identity_of(value: Option<CachedValue>) -> Option<User> {
    match value {
        Some(CachedValue::Identity(user)) => user,
        _ => None,
    }
}
