//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - clipboard: Image detection for pasted clipboard content
//! - edit: Edit form defaults and normalization
//! - errors: Error classification and formatting
//! - item_type: Display type derivation from file extensions
//! - layout: Card grid sizing and scrolling
//! - navigation: Selection movement in lists and the card grid
//! - path: Path normalization and URL encoding
//! - ui: UI state transitions and timing

pub mod clipboard;
pub mod edit;
pub mod errors;
pub mod item_type;
pub mod layout;
pub mod navigation;
pub mod path;
pub mod ui;
