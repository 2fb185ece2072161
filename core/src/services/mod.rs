//! Client services binding the API contract to the session store and cache.

pub mod api;
pub mod auth;
pub mod context;
pub mod news;
pub mod query;
pub mod session;

// Re-export commonly used types
pub use api::{AuthApi, Endpoint, HttpMethod, NewsApi};
pub use auth::AuthOperations;
pub use context::SessionContext;
pub use news::{NewsFeed, NewsQueryOptions, NewsSubscription};
pub use query::{
    AuthStatus, CacheEntry, CachedValue, FetchTicket, IdentityWrite, Mutation, MutationEffects,
    MutationPhase, QueryCache, QueryKey, QueryStatus,
};
pub use session::{AuthSession, SessionConfig};
