//! News feed
//!
//! The `["news"]` query: fetched on demand, optionally polled on a fixed
//! interval by a [`NewsSubscription`], and gated by an enabled flag.

mod feed;
mod options;
mod subscription;

#[cfg(test)]
mod tests;

pub use feed::NewsFeed;
pub use options::NewsQueryOptions;
pub use subscription::NewsSubscription;
