//! Shared HTTP plumbing for Bistro services.
//!
//! Configuration loading, the response envelope, health probes, request ids
//! and tracing setup. Domain-free: nothing here knows about parties or bills.

pub mod config;
pub mod envelope;
pub mod error;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
