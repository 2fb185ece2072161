//! Keyed in-memory cache of server state

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{NewsList, User};
use crate::errors::OperationError;

use super::key::QueryKey;

/// Value held by a cache entry
#[derive(Debug, Clone, PartialEq)]
pub enum CachedValue {
    /// Current identity; `None` is the explicit "no identity" value
    Identity(Option<User>),
    News(NewsList),
}

impl CachedValue {
    /// The identity, if this is an identity value
    pub fn as_identity(&self) -> Option<Option<&User>> {
        match self {
            CachedValue::Identity(user) => Some(user.as_ref()),
            _ => None,
        }
    }

    pub fn as_news(&self) -> Option<&NewsList> {
        match self {
            CachedValue::News(news) => Some(news),
            _ => None,
        }
    }
}

/// Lifecycle of a cache entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    /// Never settled
    Pending,
    Success,
    /// Last fetch failed
    Error,
}

/// One cached query
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    /// Last successful value; kept across failed refetches
    pub data: Option<CachedValue>,
    pub status: QueryStatus,
    /// A fetch is in flight
    pub fetching: bool,
    /// Must be refetched on next read
    pub stale: bool,
    pub error: Option<OperationError>,
    pub updated_at: Option<DateTime<Utc>>,
    generation: u64,
}

impl CacheEntry {
    fn pending(generation: u64) -> Self {
        Self {
            data: None,
            status: QueryStatus::Pending,
            fetching: false,
            stale: false,
            error: None,
            updated_at: None,
            generation,
        }
    }

    /// True when the entry holds a value that can be served without fetching
    pub fn is_fresh(&self) -> bool {
        self.status == QueryStatus::Success && !self.stale && self.data.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Proof that a fetch was started against a given entry generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    key: QueryKey,
    generation: u64,
}

impl FetchTicket {
    pub fn key(&self) -> &QueryKey {
        &self.key
    }
}

#[derive(Default)]
struct CacheState {
    entries: HashMap<QueryKey, CacheEntry>,
    next_generation: u64,
}

impl CacheState {
    fn bump(&mut self) -> u64 {
        self.next_generation += 1;
        self.next_generation
    }
}

/// In-memory query cache shared by the session and news services
///
/// Direct writes (`set_data`, `remove`, `clear`) start a new generation for
/// the key. A fetch settles only if its ticket still matches the entry's
/// generation, so a response that was in flight across a direct write is
/// dropped.
#[derive(Default)]
pub struct QueryCache {
    state: RwLock<CacheState>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the entry under `key`
    pub async fn get(&self, key: &QueryKey) -> Option<CacheEntry> {
        self.state.read().await.entries.get(key).cloned()
    }

    /// Cached value under `key`, stale or not
    pub async fn data(&self, key: &QueryKey) -> Option<CachedValue> {
        self.state
            .read()
            .await
            .entries
            .get(key)
            .and_then(|entry| entry.data.clone())
    }

    /// Write a value directly, as a successful and fresh entry
    pub async fn set_data(&self, key: QueryKey, value: CachedValue) {
        let mut state = self.state.write().await;
        let generation = state.bump();
        tracing::debug!(key = %key, event = "cache_set", "Cache entry written");
        state.entries.insert(
            key,
            CacheEntry {
                data: Some(value),
                status: QueryStatus::Success,
                fetching: false,
                stale: false,
                error: None,
                updated_at: Some(Utc::now()),
                generation,
            },
        );
    }

    /// Mark a fetch in flight, creating a pending entry when absent
    pub async fn begin_fetch(&self, key: &QueryKey) -> FetchTicket {
        let mut state = self.state.write().await;
        let pending_generation = state.bump();
        let entry = state
            .entries
            .entry(key.clone())
            .or_insert_with(|| CacheEntry::pending(pending_generation));
        entry.fetching = true;
        let generation = entry.generation;
        FetchTicket {
            key: key.clone(),
            generation,
        }
    }

    /// Record the outcome of a fetch
    ///
    /// Returns `false` when the ticket is outdated and the outcome was
    /// discarded. A failure keeps the previous data and records the error.
    pub async fn settle_fetch(
        &self,
        ticket: FetchTicket,
        outcome: Result<CachedValue, OperationError>,
    ) -> bool {
        let mut state = self.state.write().await;
        let Some(entry) = state
            .entries
            .get_mut(&ticket.key)
            .filter(|entry| entry.generation == ticket.generation)
        else {
            tracing::debug!(
                key = %ticket.key,
                event = "cache_fetch_discarded",
                "Discarding outdated fetch result"
            );
            return false;
        };

        entry.fetching = false;
        entry.stale = false;
        entry.updated_at = Some(Utc::now());
        match outcome {
            Ok(value) => {
                entry.data = Some(value);
                entry.status = QueryStatus::Success;
                entry.error = None;
            }
            Err(error) => {
                entry.status = QueryStatus::Error;
                entry.error = Some(error);
            }
        }
        true
    }

    /// Mark every entry under `prefix` stale; returns how many were marked
    pub async fn invalidate(&self, prefix: &QueryKey) -> usize {
        let mut state = self.state.write().await;
        let mut marked = 0;
        for (key, entry) in state.entries.iter_mut() {
            if key.starts_with(prefix) {
                entry.stale = true;
                marked += 1;
            }
        }
        tracing::debug!(prefix = %prefix, marked, event = "cache_invalidated", "Cache keys invalidated");
        marked
    }

    pub async fn remove(&self, key: &QueryKey) -> Option<CacheEntry> {
        self.state.write().await.entries.remove(key)
    }

    /// Drop every entry
    pub async fn clear(&self) {
        self.state.write().await.entries.clear();
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.entries.is_empty()
    }
}
