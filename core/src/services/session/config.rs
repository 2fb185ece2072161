//! Configuration for the auth session service

use nf_shared::QueryConfig;

/// Configuration for the auth session service
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Run calls of the same mutation kind one at a time, in call order
    pub serialize_mutations: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            serialize_mutations: true,
        }
    }
}

impl From<&QueryConfig> for SessionConfig {
    fn from(config: &QueryConfig) -> Self {
        Self {
            serialize_mutations: config.serialize_mutations,
        }
    }
}
