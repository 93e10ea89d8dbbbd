//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! preferences, the edit modal, search input and toasts.

use std::time::Instant;

use super::types::{EditModalState, Toast, ToastLevel};

/// UI preferences and popups
#[derive(Clone, Debug)]
pub struct UiModel {
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Edit modal (None when hidden)
    pub edit_modal: Option<EditModalState>,

    /// Toast message
    pub toast: Option<Toast>,

    /// Whether search input is active (receiving keystrokes)
    pub search_mode: bool,

    /// Current search query
    pub search_query: String,

    /// Card columns in the last rendered grid (for row-wise movement)
    pub grid_columns: usize,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            vim_mode,
            edit_modal: None,
            toast: None,
            search_mode: false,
            search_query: String::new(),
            grid_columns: 1,
            should_quit: false,
        }
    }

    fn toast(&mut self, message: String, level: ToastLevel) {
        self.toast = Some(Toast {
            message,
            level,
            shown_at: Instant::now(),
        });
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast(message.into(), ToastLevel::Info);
    }

    pub fn show_warning(&mut self, message: impl Into<String>) {
        self.toast(message.into(), ToastLevel::Warning);
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.toast(message.into(), ToastLevel::Error);
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        self.toast.as_ref().is_some_and(|toast| {
            crate::logic::ui::should_dismiss_toast(toast.shown_at.elapsed().as_millis())
        })
    }

    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_model_creation() {
        let model = UiModel::new(false);
        assert!(!model.vim_mode);
        assert!(!model.should_quit);
        assert!(model.edit_modal.is_none());
        assert!(!model.search_mode);
    }

    #[test]
    fn test_toast_levels() {
        let mut model = UiModel::new(false);
        assert!(model.toast.is_none());

        model.show_warning("Please enter a search query.");
        assert_eq!(model.toast.as_ref().map(|t| t.level), Some(ToastLevel::Warning));
        assert!(!model.should_dismiss_toast());

        model.dismiss_toast();
        assert!(model.toast.is_none());
    }
}
