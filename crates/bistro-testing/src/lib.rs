//! Test utilities for Bistro services.
//!
//! Provides `MockAuth` for signing bearer tokens in router tests.
//! Import from `[dev-dependencies]` only, never in production code.

pub mod auth;

/// Secret shared by `MockAuth` and the router state built in tests.
pub const TEST_JWT_SECRET: &str = "bistro-test-secret-do-not-deploy";
