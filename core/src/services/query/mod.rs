//! Query cache layer
//!
//! A keyed in-memory cache of server state plus the policy that decides,
//! per mutation, which tokens to persist and which cache keys to write or
//! mark stale. Reads are lazy: a missing or stale entry is fetched by the
//! owning service, bracketed by [`QueryCache::begin_fetch`] and
//! [`QueryCache::settle_fetch`].

mod cache;
mod key;
mod mutation;
mod status;

#[cfg(test)]
mod tests;

pub use cache::{CacheEntry, CachedValue, FetchTicket, QueryCache, QueryStatus};
pub use key::QueryKey;
pub use mutation::{IdentityWrite, Mutation, MutationEffects, MutationPhase};
pub use status::AuthStatus;
