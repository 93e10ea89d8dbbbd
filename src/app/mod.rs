//! App Orchestration Methods
//!
//! App implementation methods grouped by domain. Each submodule orchestrates
//! between the pure model (visionvault::model) and the background service.

pub(crate) mod paste;
pub(crate) mod preview;
