//! Background polling of the news query

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::domain::entities::NewsList;
use crate::services::api::NewsApi;

use super::feed::NewsFeed;
use super::options::NewsQueryOptions;

/// Live news query
///
/// Fetches as soon as it is enabled, then again every `refetch_interval`
/// while enabled. Disabling stops fetching without dropping cached data.
/// Dropping the subscription stops the polling task.
pub struct NewsSubscription {
    enabled: watch::Sender<bool>,
    updates: watch::Receiver<Option<NewsList>>,
    task: JoinHandle<()>,
}

impl NewsSubscription {
    pub(super) fn spawn<N: NewsApi + 'static>(feed: NewsFeed<N>, options: NewsQueryOptions) -> Self {
        let (enabled, enabled_rx) = watch::channel(options.enabled);
        let (updates_tx, updates) = watch::channel(None);
        let task = tokio::spawn(poll(feed, options, enabled_rx, updates_tx));
        Self {
            enabled,
            updates,
            task,
        }
    }

    /// Toggle the gate; enabling triggers an immediate fetch
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.send_if_modified(|current| {
            let changed = *current != enabled;
            *current = enabled;
            changed
        });
    }

    pub fn is_enabled(&self) -> bool {
        *self.enabled.borrow()
    }

    /// Most recent list fetched by this subscription
    pub fn latest(&self) -> Option<NewsList> {
        self.updates.borrow().clone()
    }

    /// Wait for the next successful fetch
    ///
    /// Returns `None` once the polling task has stopped.
    pub async fn next(&mut self) -> Option<NewsList> {
        self.updates.changed().await.ok()?;
        self.updates.borrow_and_update().clone()
    }
}

impl Drop for NewsSubscription {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn poll<N: NewsApi>(
    feed: NewsFeed<N>,
    options: NewsQueryOptions,
    mut enabled: watch::Receiver<bool>,
    updates: watch::Sender<Option<NewsList>>,
) {
    loop {
        loop {
            let is_enabled = *enabled.borrow_and_update();
            if is_enabled {
                break;
            }
            if enabled.changed().await.is_err() {
                return;
            }
        }

        match feed.fetch_news().await {
            Ok(news) => {
                updates.send_replace(Some(news));
            }
            Err(err) => {
                tracing::warn!(error = %err, event = "news_poll_failed", "News poll failed");
            }
        }

        let changed = match options.refetch_interval {
            Some(period) => tokio::select! {
                _ = tokio::time::sleep(period) => Ok(()),
                changed = enabled.changed() => changed,
            },
            None => enabled.changed().await,
        };
        if changed.is_err() {
            return;
        }
    }
}
