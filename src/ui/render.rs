use crate::App;
use ratatui::Frame;
use visionvault::model::Pane;

use super::{
    breadcrumb, dialogs, folder_tree, grid, layout,
    legend::{self, LegendContext},
    search, toast,
};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let nav = &app.model.navigation;
    let has_tree = !nav.tree.is_empty();

    let legend_ctx = LegendContext {
        vim_mode: app.model.ui.vim_mode,
        focus: nav.focus,
        has_tree,
        has_open_command: app.open_command.is_some(),
        search_mode: app.model.ui.search_mode,
        editing: app.model.ui.edit_modal.is_some(),
    };
    let legend_height = legend::calculate_legend_height(size.width, legend_ctx);
    let layout_info = layout::calculate_layout(size, has_tree, legend_height);

    search::render_search_input(
        f,
        layout_info.search_area,
        &app.model.ui.search_query,
        app.model.ui.search_mode,
        app.model.ui.vim_mode,
    );

    if let Some(tree_area) = layout_info.tree_area {
        folder_tree::render_folder_tree(
            f,
            tree_area,
            &nav.tree,
            nav.tree_selection,
            nav.current_folder.as_deref(),
            nav.focus == Pane::Tree,
        );
    }

    breadcrumb::render_breadcrumbs(
        f,
        layout_info.breadcrumb_area,
        &nav.breadcrumbs,
        nav.crumb_selection,
        nav.focus == Pane::Breadcrumbs,
    );

    let columns = grid::render_grid(
        f,
        layout_info.grid_area,
        &nav.grid,
        nav.grid_selection,
        nav.focus == Pane::Grid,
    );
    // Up/down moves a whole row, so the model needs the rendered width
    app.model.ui.grid_columns = columns;

    legend::render_legend(f, layout_info.legend_area, legend_ctx);

    if let Some(modal) = &app.model.ui.edit_modal {
        dialogs::render_edit_modal(f, modal);
    }

    if let Some(toast) = &app.model.ui.toast {
        toast::render_toast(f, size, toast);
    }
}
