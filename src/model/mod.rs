//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the browser.
//! The Model is organized into focused sub-models:
//!
//! - **NavigationModel**: Folder tree, current folder, grid, breadcrumbs, selection
//! - **UiModel**: Preferences, edit modal, search input, toasts
//!
//! Controller operations (`controller`) are methods on `Model` that take the
//! state plus an input and return the backend `Request` to perform. All I/O
//! lives in the binary's services.

pub mod controller;
pub mod navigation;
pub mod types;
pub mod ui;

pub use navigation::NavigationModel;
pub use types::*;
pub use ui::UiModel;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Navigation state (tree, grid, breadcrumbs, focus)
    pub navigation: NavigationModel,

    /// UI preferences and popups
    pub ui: UiModel,

    /// Last request id handed out
    next_request_id: u64,
}

impl Model {
    pub fn new(tree: Vec<TreeEntry>, vim_mode: bool) -> Self {
        Self {
            navigation: NavigationModel::new(tree),
            ui: UiModel::new(vim_mode),
            next_request_id: 0,
        }
    }

    /// Hand out a fresh, monotonically increasing request id
    pub(crate) fn next_request_id(&mut self) -> u64 {
        self.next_request_id += 1;
        self.next_request_id
    }

    /// Folder the navigator most recently rendered
    pub fn current_folder(&self) -> Option<&str> {
        self.navigation.current_folder.as_deref()
    }
}
