//! Cache keys

use serde::{Deserialize, Serialize};

/// Hierarchical cache key, compared segment by segment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// `["auth", "me"]`, the current identity
    pub fn current_user() -> Self {
        Self::new(["auth", "me"])
    }

    /// `["news"]`, the news list
    pub fn news() -> Self {
        Self::new(["news"])
    }

    /// `["auth"]`, prefix of every auth-related key
    pub fn auth_namespace() -> Self {
        Self::new(["auth"])
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// True when `prefix` matches the leading segments of this key
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}
