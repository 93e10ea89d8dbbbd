use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the folder tree pane
const TREE_WIDTH: u16 = 26;

/// Layout information for rendering
pub struct LayoutInfo {
    /// Search input area (top)
    pub search_area: Rect,
    /// Folder tree pane (if a tree is configured)
    pub tree_area: Option<Rect>,
    /// Breadcrumb bar area
    pub breadcrumb_area: Rect,
    /// Item grid area
    pub grid_area: Rect,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, has_tree: bool, legend_height: u16) -> LayoutInfo {
    // Search bar (top) + content + legend (bottom)
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(legend_height),
        ])
        .split(terminal_size);

    let content_area = main_chunks[1];

    // Hide the tree when there is no room for a useful grid next to it
    let tree_visible = has_tree && content_area.width >= TREE_WIDTH * 2;
    let (tree_area, browser_area) = if tree_visible {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(TREE_WIDTH), Constraint::Min(10)])
            .split(content_area);
        (Some(chunks[0]), chunks[1])
    } else {
        (None, content_area)
    };

    let browser_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(browser_area);

    LayoutInfo {
        search_area: main_chunks[0],
        tree_area,
        breadcrumb_area: browser_chunks[0],
        grid_area: browser_chunks[1],
        legend_area: main_chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_with_tree() {
        let info = calculate_layout(Rect::new(0, 0, 120, 40), true, 3);
        let tree = info.tree_area.expect("tree should be visible");
        assert_eq!(tree.width, TREE_WIDTH);
        assert_eq!(info.search_area.height, 3);
        assert_eq!(info.breadcrumb_area.x, TREE_WIDTH);
        assert_eq!(info.legend_area.height, 3);
    }

    #[test]
    fn test_layout_hides_tree_when_narrow() {
        let info = calculate_layout(Rect::new(0, 0, 40, 20), true, 3);
        assert!(info.tree_area.is_none());
        assert_eq!(info.grid_area.width, 40);
    }
}
