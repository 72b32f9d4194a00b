//! Auth types shared across Bistro services.
//!
//! Provides JWT claims, token validation (and issuance for the auth service)
//! and the `BearerIdentity` extractor guarding back-office routes.

pub mod identity;
pub mod token;
