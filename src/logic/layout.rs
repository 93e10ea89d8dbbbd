//! Grid layout calculations
//!
//! Pure functions for fitting cards into the grid area and keeping the
//! selected card on screen.

/// Card width in cells, borders included
pub const CARD_WIDTH: u16 = 24;

/// Card height in cells, borders included
pub const CARD_HEIGHT: u16 = 5;

/// Number of card columns that fit into `width` (at least one)
pub fn grid_columns(width: u16) -> usize {
    (width / CARD_WIDTH).max(1) as usize
}

/// Number of card rows that fit into `height` (at least one)
pub fn grid_rows(height: u16) -> usize {
    (height / CARD_HEIGHT).max(1) as usize
}

/// First visible row so that the selected card's row is on screen
///
/// # Examples
/// ```
/// use visionvault::logic::layout::first_visible_row;
///
/// // 3 columns, 2 visible rows, card 7 is on row 2
/// assert_eq!(first_visible_row(Some(7), 3, 2), 1);
/// assert_eq!(first_visible_row(None, 3, 2), 0);
/// ```
pub fn first_visible_row(selected: Option<usize>, columns: usize, visible_rows: usize) -> usize {
    let Some(selected) = selected else {
        return 0;
    };
    let row = selected / columns.max(1);
    let visible_rows = visible_rows.max(1);
    (row + 1).saturating_sub(visible_rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_columns() {
        assert_eq!(grid_columns(0), 1);
        assert_eq!(grid_columns(CARD_WIDTH - 1), 1);
        assert_eq!(grid_columns(CARD_WIDTH * 3 + 5), 3);
    }

    #[test]
    fn test_grid_rows() {
        assert_eq!(grid_rows(2), 1);
        assert_eq!(grid_rows(CARD_HEIGHT * 4), 4);
    }

    #[test]
    fn test_first_visible_row_scrolls_only_when_needed() {
        assert_eq!(first_visible_row(Some(2), 3, 2), 0);
        assert_eq!(first_visible_row(Some(5), 3, 2), 0);
        assert_eq!(first_visible_row(Some(6), 3, 2), 1);
        assert_eq!(first_visible_row(Some(6), 0, 0), 6);
    }
}
