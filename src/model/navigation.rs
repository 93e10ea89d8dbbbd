//! Navigation Model
//!
//! This sub-model contains all state related to navigation:
//! folder tree, current folder, grid and breadcrumb regions, focus and selection.

use super::types::{BreadcrumbBar, Card, GridView, Pane, TreeEntry};
use crate::logic::navigation::{next_selection, prev_selection, row_down, row_up};

/// Message shown before any folder has been chosen
pub const NO_FOLDER_SELECTED: &str = "No folder selected";

/// Navigation state (tree, grid, breadcrumbs, focus, selection)
#[derive(Clone, Debug)]
pub struct NavigationModel {
    /// Configured root folders
    pub tree: Vec<TreeEntry>,

    /// Selected entry in the folder tree
    pub tree_selection: Option<usize>,

    /// Folder the navigator most recently rendered
    pub current_folder: Option<String>,

    /// Item grid region
    pub grid: GridView,

    /// Breadcrumb bar region
    pub breadcrumbs: BreadcrumbBar,

    /// Selected card in the grid
    pub grid_selection: Option<usize>,

    /// Selected crumb in the breadcrumb bar
    pub crumb_selection: Option<usize>,

    /// Focused pane
    pub focus: Pane,

    /// Id of the latest navigate/search request; older responses are stale
    pub latest_view_request: u64,
}

impl NavigationModel {
    pub fn new(tree: Vec<TreeEntry>) -> Self {
        let focus = if tree.is_empty() { Pane::Grid } else { Pane::Tree };
        let tree_selection = if tree.is_empty() { None } else { Some(0) };

        Self {
            tree,
            tree_selection,
            current_folder: None,
            grid: GridView::Placeholder(NO_FOLDER_SELECTED.to_string()),
            breadcrumbs: BreadcrumbBar::Empty,
            grid_selection: None,
            crumb_selection: None,
            focus,
            latest_view_request: 0,
        }
    }

    pub fn selected_card(&self) -> Option<&Card> {
        self.grid_selection
            .and_then(|idx| self.grid.cards().get(idx))
    }

    pub fn selected_tree_entry(&self) -> Option<&TreeEntry> {
        self.tree_selection.and_then(|idx| self.tree.get(idx))
    }

    /// Replace the grid, resetting the card selection
    pub fn set_grid(&mut self, grid: GridView) {
        self.grid_selection = if grid.cards().is_empty() { None } else { Some(0) };
        self.grid = grid;
    }

    /// Replace the breadcrumb bar, selecting the current (last) crumb
    pub fn set_breadcrumbs(&mut self, breadcrumbs: BreadcrumbBar) {
        self.crumb_selection = breadcrumbs.crumbs().len().checked_sub(1);
        self.breadcrumbs = breadcrumbs;
    }

    /// Move selection in the focused pane
    pub fn move_down(&mut self, columns: usize) {
        match self.focus {
            Pane::Tree => {
                self.tree_selection = next_selection(self.tree_selection, self.tree.len())
            }
            Pane::Breadcrumbs => {}
            Pane::Grid => {
                self.grid_selection = row_down(self.grid_selection, self.grid.cards().len(), columns)
            }
        }
    }

    pub fn move_up(&mut self, columns: usize) {
        match self.focus {
            Pane::Tree => {
                self.tree_selection = prev_selection(self.tree_selection, self.tree.len())
            }
            Pane::Breadcrumbs => {}
            Pane::Grid => {
                self.grid_selection = row_up(self.grid_selection, self.grid.cards().len(), columns)
            }
        }
    }

    pub fn move_right(&mut self) {
        match self.focus {
            Pane::Tree => {}
            Pane::Breadcrumbs => {
                let len = self.breadcrumbs.crumbs().len();
                self.crumb_selection = next_selection(self.crumb_selection, len);
            }
            Pane::Grid => {
                let len = self.grid.cards().len();
                self.grid_selection = next_selection(self.grid_selection, len);
            }
        }
    }

    pub fn move_left(&mut self) {
        match self.focus {
            Pane::Tree => {}
            Pane::Breadcrumbs => {
                let len = self.breadcrumbs.crumbs().len();
                self.crumb_selection = prev_selection(self.crumb_selection, len);
            }
            Pane::Grid => {
                let len = self.grid.cards().len();
                self.grid_selection = prev_selection(self.grid_selection, len);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Breadcrumb;

    fn crumb(name: &str) -> Breadcrumb {
        Breadcrumb {
            name: name.to_string(),
            path: name.to_string(),
        }
    }

    #[test]
    fn test_navigation_model_creation() {
        let model = NavigationModel::new(vec![]);
        assert_eq!(model.focus, Pane::Grid);
        assert!(model.current_folder.is_none());
        assert_eq!(
            model.grid,
            GridView::Placeholder(NO_FOLDER_SELECTED.to_string())
        );
        assert_eq!(model.breadcrumbs, BreadcrumbBar::Empty);
    }

    #[test]
    fn test_tree_focus_when_configured() {
        let model = NavigationModel::new(vec![TreeEntry {
            name: "Photos".to_string(),
            path: "photos".to_string(),
        }]);
        assert_eq!(model.focus, Pane::Tree);
        assert_eq!(model.selected_tree_entry().map(|e| e.path.as_str()), Some("photos"));
    }

    #[test]
    fn test_set_breadcrumbs_selects_current() {
        let mut model = NavigationModel::new(vec![]);
        model.set_breadcrumbs(BreadcrumbBar::Trail(vec![crumb("root"), crumb("sub")]));
        assert_eq!(model.crumb_selection, Some(1));

        model.set_breadcrumbs(BreadcrumbBar::SearchResults);
        assert_eq!(model.crumb_selection, None);
    }

    #[test]
    fn test_crumb_movement() {
        let mut model = NavigationModel::new(vec![]);
        model.focus = Pane::Breadcrumbs;
        model.set_breadcrumbs(BreadcrumbBar::Trail(vec![crumb("root"), crumb("sub")]));

        model.move_left();
        assert_eq!(model.crumb_selection, Some(0));
        model.move_left();
        assert_eq!(model.crumb_selection, Some(1));
    }
}
