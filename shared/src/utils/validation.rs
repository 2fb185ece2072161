//! Common validation utilities

/// Common validation functions
pub mod validators {
    /// Check if a string is not empty after trimming
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if a URL is an absolute HTTP(S) URL with a host part
    pub fn is_valid_url(url: &str) -> bool {
        let rest = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"));
        matches!(rest, Some(host) if !host.is_empty() && !host.starts_with('/'))
    }
}
