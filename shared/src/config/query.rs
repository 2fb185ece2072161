//! Query cache and mutation configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Query cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    /// Automatic news refetch interval in seconds (none = on demand only)
    #[serde(default)]
    pub news_refetch_interval_secs: Option<u64>,

    /// Queue concurrent submissions of the same mutation instead of racing them
    #[serde(default = "default_serialize_mutations")]
    pub serialize_mutations: bool,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            news_refetch_interval_secs: None,
            serialize_mutations: default_serialize_mutations(),
        }
    }
}

impl QueryConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let news_refetch_interval_secs = lookup("NEWS_REFETCH_INTERVAL_SECS")
            .and_then(|v| v.parse().ok())
            .filter(|secs| *secs > 0);
        let serialize_mutations = lookup("SERIALIZE_MUTATIONS")
            .and_then(|v| parse_bool(&v))
            .unwrap_or_else(default_serialize_mutations);

        Self {
            news_refetch_interval_secs,
            serialize_mutations,
        }
    }

    /// News refetch interval as a `Duration`
    pub fn news_refetch_interval(&self) -> Option<Duration> {
        self.news_refetch_interval_secs.map(Duration::from_secs)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn default_serialize_mutations() -> bool {
    true
}
