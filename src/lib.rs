//! VisionVault terminal browser library
//!
//! Exposes the HTTP client, the pure model and the business logic for testing

pub mod api;
pub mod logic;
pub mod model;
