//! Bistro auth service: signup, password login, and OTP-based verification
//! and password reset.

pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod infra;
pub mod router;
pub mod state;
pub mod usecase;
