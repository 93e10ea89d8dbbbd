//! Selection movement
//!
//! Pure functions for moving a selection through lists (wrapping) and through
//! the card grid (row-wise, clamped).

/// Calculate the next selection index with wrapping
///
/// # Examples
/// ```
/// use visionvault::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i >= list_len - 1 => 0, // Wrap to start
        Some(i) => i + 1,
        None => 0,
    })
}

/// Calculate the previous selection index with wrapping
///
/// # Examples
/// ```
/// use visionvault::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(Some(0), 3), Some(2));
/// assert_eq!(prev_selection(None, 3), Some(2));
/// ```
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => list_len - 1, // Wrap to end
        Some(i) => i.min(list_len) - 1,
    })
}

/// Move one grid row down, staying on the last card when the row below is short
pub fn row_down(current: Option<usize>, len: usize, columns: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let columns = columns.max(1);
    Some(match current {
        None => 0,
        Some(i) => (i + columns).min(len - 1),
    })
}

/// Move one grid row up, stopping at the first row
pub fn row_up(current: Option<usize>, len: usize, columns: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let columns = columns.max(1);
    Some(match current {
        None => 0,
        Some(i) if i >= columns => (i - columns).min(len - 1),
        Some(i) => i.min(len - 1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_selection_empty_list() {
        assert_eq!(next_selection(None, 0), None);
        assert_eq!(next_selection(Some(5), 0), None);
    }

    #[test]
    fn test_next_selection_wrapping() {
        assert_eq!(next_selection(Some(0), 3), Some(1));
        assert_eq!(next_selection(Some(2), 3), Some(0));
        assert_eq!(next_selection(Some(0), 1), Some(0)); // Single item wraps to itself
    }

    #[test]
    fn test_prev_selection_wrapping() {
        assert_eq!(prev_selection(Some(2), 3), Some(1));
        assert_eq!(prev_selection(Some(0), 3), Some(2));
        assert_eq!(prev_selection(None, 1), Some(0));
    }

    #[test]
    fn test_prev_selection_out_of_bounds() {
        // A stale index from a longer list lands on the last item
        assert_eq!(prev_selection(Some(10), 3), Some(2));
    }

    #[test]
    fn test_row_down() {
        assert_eq!(row_down(None, 7, 3), Some(0));
        assert_eq!(row_down(Some(1), 7, 3), Some(4));
        assert_eq!(row_down(Some(5), 7, 3), Some(6)); // short last row
        assert_eq!(row_down(Some(6), 7, 3), Some(6));
        assert_eq!(row_down(Some(0), 0, 3), None);
    }

    #[test]
    fn test_row_up() {
        assert_eq!(row_up(Some(4), 7, 3), Some(1));
        assert_eq!(row_up(Some(2), 7, 3), Some(2));
        assert_eq!(row_up(Some(3), 7, 0), Some(2)); // zero columns treated as one
    }
}
