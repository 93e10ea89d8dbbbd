//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - api: results from the background service
//! - keyboard: user keyboard input
//! - paste: bracketed paste from the terminal

pub mod api;
pub mod keyboard;
pub mod paste;

// Re-export for convenience
pub use api::handle_api_response;
pub use keyboard::handle_key;
pub use paste::handle_paste;
