//! Tests for the query cache layer
