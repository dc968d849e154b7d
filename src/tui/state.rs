//! List navigation shared by the dashboard views.

use super::constants::PAGE_SIZE;

/// Selection and navigation for any view that shows a selectable list.
pub trait ListNavigation {
    /// Get the current selection index.
    fn selected(&self) -> usize;

    /// Set the selection index.
    fn set_selected(&mut self, idx: usize);

    /// Get the total number of items.
    fn total(&self) -> usize;

    /// Set the total number of items.
    fn set_total(&mut self, total: usize);

    /// Move selection to the next item.
    fn select_next(&mut self) {
        let total = self.total();
        let selected = self.selected();
        if total > 0 && selected < total.saturating_sub(1) {
            self.set_selected(selected + 1);
        }
    }

    /// Move selection to the previous item.
    fn select_prev(&mut self) {
        let selected = self.selected();
        if selected > 0 {
            self.set_selected(selected - 1);
        }
    }

    /// Ensure selection is within valid bounds.
    fn clamp_selection(&mut self) {
        let total = self.total();
        let selected = self.selected();
        if total == 0 {
            self.set_selected(0);
        } else if selected >= total {
            self.set_selected(total.saturating_sub(1));
        }
    }

    fn page_up(&mut self) {
        let selected = self.selected();
        self.set_selected(selected.saturating_sub(PAGE_SIZE));
    }

    fn page_down(&mut self) {
        let total = self.total();
        let selected = self.selected();
        if total > 0 {
            self.set_selected((selected + PAGE_SIZE).min(total.saturating_sub(1)));
        }
    }

    fn go_first(&mut self) {
        self.set_selected(0);
    }

    fn go_last(&mut self) {
        let total = self.total();
        if total > 0 {
            self.set_selected(total.saturating_sub(1));
        }
    }
}

/// Cursor over a list of known length.
#[derive(Debug, Clone, Default)]
pub struct ListState {
    pub selected: usize,
    pub total: usize,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn with_total(total: usize) -> Self {
        Self { selected: 0, total }
    }
}

impl ListNavigation for ListState {
    fn selected(&self) -> usize {
        self.selected
    }

    fn set_selected(&mut self, idx: usize) {
        self.selected = idx;
    }

    fn total(&self) -> usize {
        self.total
    }

    fn set_total(&mut self, total: usize) {
        self.total = total;
    }
}

/// Open `value`, or close it when it is already open.
pub fn toggle_selection<T: PartialEq>(current: &mut Option<T>, value: T) {
    if current.as_ref() == Some(&value) {
        *current = None;
    } else {
        *current = Some(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_state_navigation() {
        let mut state = ListState::with_total(5);

        state.select_next();
        assert_eq!(state.selected(), 1);

        state.select_prev();
        state.select_prev();
        assert_eq!(state.selected(), 0);

        state.go_last();
        state.select_next();
        assert_eq!(state.selected(), 4);

        state.go_first();
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn test_list_state_page_navigation() {
        let mut state = ListState::with_total(25);

        state.page_down();
        state.page_down();
        assert_eq!(state.selected(), 20);

        state.page_down();
        assert_eq!(state.selected(), 24);

        state.page_up();
        assert_eq!(state.selected(), 14);
    }

    #[test]
    fn test_list_state_clamp() {
        let mut state = ListState::with_total(10);
        state.selected = 15;
        state.clamp_selection();
        assert_eq!(state.selected(), 9);

        state.set_total(0);
        state.clamp_selection();
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn test_toggle_selection_closes_on_repeat() {
        let mut open = None;
        toggle_selection(&mut open, 2);
        assert_eq!(open, Some(2));
        toggle_selection(&mut open, 3);
        assert_eq!(open, Some(3));
        toggle_selection(&mut open, 3);
        assert_eq!(open, None);
    }
}
