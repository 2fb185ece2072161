//! Owning handle for the session services

use std::sync::Arc;

use crate::errors::DomainResult;
use crate::repositories::SessionStore;
use crate::services::api::{AuthApi, NewsApi};
use crate::services::news::NewsFeed;
use crate::services::query::QueryCache;
use crate::services::session::{AuthSession, SessionConfig};

/// The single session instance of a running client
///
/// Built once at start-up and passed to whatever needs the session. The
/// auth session and the news feed share one query cache; the auth session
/// owns the token store.
pub struct SessionContext<C, S>
where
    C: AuthApi + NewsApi,
    S: SessionStore + ?Sized,
{
    auth: AuthSession<C, S>,
    news: NewsFeed<C>,
    cache: Arc<QueryCache>,
    store: Arc<S>,
}

impl<C, S> SessionContext<C, S>
where
    C: AuthApi + NewsApi,
    S: SessionStore + ?Sized,
{
    pub fn new(client: Arc<C>, store: Arc<S>, config: SessionConfig) -> Self {
        let cache = Arc::new(QueryCache::new());
        Self {
            auth: AuthSession::new(
                Arc::clone(&client),
                Arc::clone(&store),
                Arc::clone(&cache),
                config,
            ),
            news: NewsFeed::new(client, Arc::clone(&cache)),
            cache,
            store,
        }
    }

    pub fn auth(&self) -> &AuthSession<C, S> {
        &self.auth
    }

    pub fn news(&self) -> &NewsFeed<C> {
        &self.news
    }

    pub fn cache(&self) -> &Arc<QueryCache> {
        &self.cache
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Forget everything: drop both tokens and every cache entry
    pub async fn reset(&self) -> DomainResult<()> {
        self.store.clear().await?;
        self.cache.clear().await;
        tracing::info!(
            store = self.store.backend_name(),
            event = "session_reset",
            "Session reset"
        );
        Ok(())
    }
}
