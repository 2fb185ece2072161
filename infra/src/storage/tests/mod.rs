//! Tests for session store backends
