//! Tests for the auth session service
