//! Tests for response body handling
