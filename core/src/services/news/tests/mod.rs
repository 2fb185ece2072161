//! Tests for the news feed
