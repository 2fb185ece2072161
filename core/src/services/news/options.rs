use nf_shared::QueryConfig;
use std::time::Duration;

/// How the news query is read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsQueryOptions {
    /// When false, reads never touch the network
    pub enabled: bool,
    /// Poll period for subscriptions; `None` fetches once per enable
    pub refetch_interval: Option<Duration>,
}

impl Default for NewsQueryOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            refetch_interval: None,
        }
    }
}

impl NewsQueryOptions {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.refetch_interval = Some(interval).filter(|period| !period.is_zero());
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Enabled, polling at the configured interval if any
    pub fn from_config(config: &QueryConfig) -> Self {
        Self {
            enabled: true,
            refetch_interval: config.news_refetch_interval(),
        }
    }
}
