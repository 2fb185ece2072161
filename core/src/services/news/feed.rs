//! News query service

use std::sync::Arc;

use crate::domain::entities::{NewsItem, NewsList};
use crate::errors::{DomainResult, Operation, OperationError};
use crate::services::api::NewsApi;
use crate::services::query::{CachedValue, QueryCache, QueryKey};

use super::options::NewsQueryOptions;
use super::subscription::NewsSubscription;

/// Reads the news list through the query cache
pub struct NewsFeed<N: NewsApi> {
    api: Arc<N>,
    cache: Arc<QueryCache>,
}

impl<N: NewsApi> Clone for NewsFeed<N> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            cache: Arc::clone(&self.cache),
        }
    }
}

impl<N: NewsApi> NewsFeed<N> {
    pub fn new(api: Arc<N>, cache: Arc<QueryCache>) -> Self {
        Self { api, cache }
    }

    pub fn cache(&self) -> &Arc<QueryCache> {
        &self.cache
    }

    /// Fetch the list from the server and cache it
    pub async fn fetch_news(&self) -> DomainResult<NewsList> {
        let key = QueryKey::news();
        let ticket = self.cache.begin_fetch(&key).await;

        match self.api.fetch_news().await {
            Ok(news) => {
                tracing::debug!(items = news.len(), event = "news_fetched", "News fetched");
                self.cache
                    .settle_fetch(ticket, Ok(CachedValue::News(news.clone())))
                    .await;
                Ok(news)
            }
            Err(failure) => {
                tracing::warn!(
                    status = failure.status(),
                    error = %failure,
                    event = "news_fetch_failed",
                    "Fetching news failed"
                );
                let error = OperationError::from_api(Operation::FetchNews, failure);
                self.cache.settle_fetch(ticket, Err(error.clone())).await;
                Err(error.into())
            }
        }
    }

    /// Cached list, without fetching
    pub async fn cached(&self) -> Option<NewsList> {
        self.cache
            .data(&QueryKey::news())
            .await
            .and_then(|value| value.as_news().cloned())
    }

    /// Read the list according to `options`
    ///
    /// A disabled query only returns what is cached. An enabled one serves
    /// a fresh entry or fetches.
    pub async fn news(&self, options: &NewsQueryOptions) -> DomainResult<Option<NewsList>> {
        if !options.enabled {
            return Ok(self.cached().await);
        }
        let fresh = self
            .cache
            .get(&QueryKey::news())
            .await
            .filter(|entry| entry.is_fresh())
            .and_then(|entry| entry.data)
            .and_then(|value| value.as_news().cloned());
        match fresh {
            Some(news) => Ok(Some(news)),
            None => self.fetch_news().await.map(Some),
        }
    }

    /// One item of the list, by id
    pub async fn news_item(
        &self,
        id: &str,
        options: &NewsQueryOptions,
    ) -> DomainResult<Option<NewsItem>> {
        Ok(self
            .news(options)
            .await?
            .and_then(|news| news.find(id).cloned()))
    }
}

impl<N: NewsApi + 'static> NewsFeed<N> {
    /// Start a subscription that fetches while enabled
    pub fn subscribe(&self, options: NewsQueryOptions) -> NewsSubscription {
        NewsSubscription::spawn(self.clone(), options)
    }
}
