//! Tests for auth operations

pub(crate) mod mocks;
