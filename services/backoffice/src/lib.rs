//! Bistro back-office service: parties, purchases, estimates, sales, table
//! orders, the product catalogue, and bill totals.

pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod infra;
pub mod router;
pub mod state;
pub mod usecase;
