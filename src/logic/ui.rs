//! UI state transition logic
//!
//! Pure functions for UI state cycling and timing.

use crate::model::Pane;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 2500;

/// Whether a toast shown `elapsed_ms` ago should be dismissed
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}

/// Cycle pane focus: Tree → Breadcrumbs → Grid → Tree
///
/// The tree pane is skipped when no folder tree is configured.
///
/// # Examples
/// ```
/// use visionvault::logic::ui::cycle_focus;
/// use visionvault::model::Pane;
///
/// assert_eq!(cycle_focus(Pane::Grid, true), Pane::Tree);
/// assert_eq!(cycle_focus(Pane::Grid, false), Pane::Breadcrumbs);
/// ```
pub fn cycle_focus(current: Pane, has_tree: bool) -> Pane {
    match current {
        Pane::Tree => Pane::Breadcrumbs,
        Pane::Breadcrumbs => Pane::Grid,
        Pane::Grid if has_tree => Pane::Tree,
        Pane::Grid => Pane::Breadcrumbs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_dismissal() {
        assert!(!should_dismiss_toast(0));
        assert!(!should_dismiss_toast(TOAST_DURATION_MS - 1));
        assert!(should_dismiss_toast(TOAST_DURATION_MS));
    }

    #[test]
    fn test_cycle_focus_with_tree() {
        assert_eq!(cycle_focus(Pane::Tree, true), Pane::Breadcrumbs);
        assert_eq!(cycle_focus(Pane::Breadcrumbs, true), Pane::Grid);
        assert_eq!(cycle_focus(Pane::Grid, true), Pane::Tree);
    }

    #[test]
    fn test_cycle_focus_without_tree() {
        assert_eq!(cycle_focus(Pane::Breadcrumbs, false), Pane::Grid);
        assert_eq!(cycle_focus(Pane::Grid, false), Pane::Breadcrumbs);
    }
}
