// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (search, tree, breadcrumbs, grid, legend)
// - render: Main orchestration function that coordinates all rendering
// - search: Renders the search input box
// - folder_tree: Renders the configured root folders
// - breadcrumb: Renders the breadcrumb bar
// - grid: Renders the item cards or the grid message
// - legend: Renders hotkey legend
// - dialogs: Renders the edit metadata modal
// - toast: Renders toast notifications (brief pop-up messages)

pub mod breadcrumb;
pub mod dialogs;
pub mod folder_tree;
pub mod grid;
pub mod layout;
pub mod legend;
pub mod render;
pub mod search;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
