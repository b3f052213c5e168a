//! Cursor movement over the rows of a list screen.

use ratatui::widgets::ListState;

/// Default page size for page up/down navigation.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Extension trait for `ListState` used by every list screen.
///
/// All methods take the current row count so the cursor never points past
/// the end of the data, and leave an empty list unselected.
pub trait ListStateExt {
    /// Move selection up, stopping at the first row.
    fn move_up_by(&mut self, count: usize, total_items: usize);

    /// Move selection down, stopping at the last row.
    fn move_down_by(&mut self, count: usize, total_items: usize);

    fn select_first_item(&mut self, total_items: usize);

    fn select_last_item(&mut self, total_items: usize);

    /// Re-establish a valid selection after the rows were replaced.
    fn clamp_to(&mut self, total_items: usize);
}

impl ListStateExt for ListState {
    fn move_up_by(&mut self, count: usize, total_items: usize) {
        if total_items == 0 {
            return;
        }
        let current = self.selected().unwrap_or(0);
        self.select(Some(current.saturating_sub(count)));
    }

    fn move_down_by(&mut self, count: usize, total_items: usize) {
        if total_items == 0 {
            return;
        }
        let current = self.selected().unwrap_or(0);
        self.select(Some((current + count).min(total_items - 1)));
    }

    fn select_first_item(&mut self, total_items: usize) {
        if total_items > 0 {
            self.select(Some(0));
        }
    }

    fn select_last_item(&mut self, total_items: usize) {
        if total_items > 0 {
            self.select(Some(total_items - 1));
        }
    }

    fn clamp_to(&mut self, total_items: usize) {
        if total_items == 0 {
            self.select(None);
            return;
        }
        let current = self.selected().unwrap_or(0);
        self.select(Some(current.min(total_items - 1)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_up_by() {
        let mut state = ListState::default();
        state.select(Some(5));
        state.move_up_by(3, 10);
        assert_eq!(state.selected(), Some(2));

        state.move_up_by(10, 10);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_move_down_by() {
        let mut state = ListState::default();
        state.select(Some(5));
        state.move_down_by(DEFAULT_PAGE_SIZE, 10);
        assert_eq!(state.selected(), Some(9));
    }

    #[test]
    fn test_select_first_last() {
        let mut state = ListState::default();
        state.select_last_item(4);
        assert_eq!(state.selected(), Some(3));
        state.select_first_item(4);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_empty_list_stays_unselected() {
        let mut state = ListState::default();
        state.move_down_by(1, 0);
        state.select_first_item(0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_clamp_after_rows_replaced() {
        let mut state = ListState::default();
        state.select(Some(7));
        state.clamp_to(3);
        assert_eq!(state.selected(), Some(2));

        state.clamp_to(0);
        assert_eq!(state.selected(), None);

        state.clamp_to(5);
        assert_eq!(state.selected(), Some(0));
    }
}
