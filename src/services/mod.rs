//! External Services
//!
//! This module contains services that interact with external systems:
//! - api: background request worker for the VisionVault backend and clipboard

pub mod api;

pub use api::{ApiResponse, ApiService};
