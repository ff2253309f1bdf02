//! Cursor Arithmetic
//!
//! Pure helpers shared by every menu widget. Menus never wrap: the cursor
//! saturates at the first and last item.

/// Moves a cursor one step forward, stopping at the last item
///
/// An empty list keeps the cursor at 0.
pub fn select_next(current: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (current + 1).min(count - 1)
}

/// Moves a cursor one step back, stopping at the first item
pub fn select_prev(current: usize) -> usize {
    current.saturating_sub(1)
}

/// Maps a flat index to `(column, row)` for a grid `columns` wide
///
/// A width of zero is treated as a single column.
pub fn grid_position(flat_index: usize, columns: usize) -> (usize, usize) {
    let columns = columns.max(1);
    (flat_index % columns, flat_index / columns)
}

/// Inverse of [`grid_position`]
pub fn flat_index(x: usize, y: usize, columns: usize) -> usize {
    y * columns.max(1) + x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_next_moves_forward() {
        assert_eq!(select_next(0, 3), 1);
        assert_eq!(select_next(1, 3), 2);
    }

    #[test]
    fn test_select_next_saturates_at_max() {
        assert_eq!(select_next(2, 3), 2);
    }

    #[test]
    fn test_select_next_single_item() {
        assert_eq!(select_next(0, 1), 0);
    }

    #[test]
    fn test_select_next_empty_list() {
        assert_eq!(select_next(0, 0), 0);
    }

    #[test]
    fn test_select_prev() {
        assert_eq!(select_prev(2), 1);
        assert_eq!(select_prev(1), 0);
        // Already at the first item
        assert_eq!(select_prev(0), 0);
    }

    #[test]
    fn test_grid_position() {
        assert_eq!(grid_position(0, 13), (0, 0));
        assert_eq!(grid_position(12, 13), (12, 0));
        assert_eq!(grid_position(13, 13), (0, 1));
        assert_eq!(grid_position(25, 13), (12, 1));
        assert_eq!(grid_position(4, 2), (0, 2));
    }

    #[test]
    fn test_grid_position_zero_columns() {
        assert_eq!(grid_position(3, 0), (0, 3));
    }

    #[test]
    fn test_flat_index_inverts_grid_position() {
        for i in 0..30 {
            let (x, y) = grid_position(i, 7);
            assert_eq!(flat_index(x, y, 7), i);
        }
    }
}
