//! List with a toggleable detail row.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, widgets::TableState};

use crate::tui::state::{toggle_selection, ListNavigation, ListState};
use crate::tui::traits::{handle_list_nav_key, EventResult, Shortcut, ViewContext, ViewState};

/// Which table a [`DetailListView`] walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailList {
    Products,
    Regions,
    Channels,
    /// Concerning cases after filtering.
    Cases,
}

impl DetailList {
    fn len(self, ctx: &ViewContext) -> usize {
        match self {
            Self::Products => ctx.data.product_lines.len(),
            Self::Regions => ctx.data.region_details.len(),
            Self::Channels => ctx.data.channel_metrics.len(),
            Self::Cases => ctx.data.filtered_cases(ctx.filters).count(),
        }
    }

    const fn title(self) -> &'static str {
        match self {
            Self::Products => "Product Portfolio",
            Self::Regions => "Regional Analysis",
            Self::Channels => "Channel Analysis",
            Self::Cases => "Concerning Cases",
        }
    }
}

/// Cursor plus an optional open row. Enter or a click on the open row
/// closes it again.
#[derive(Debug)]
pub struct DetailListView {
    kind: DetailList,
    list: ListState,
    open: Option<usize>,
    pub(crate) table: TableState,
    pub(crate) list_area: Rect,
}

impl DetailListView {
    pub fn new(kind: DetailList) -> Self {
        Self {
            kind,
            list: ListState::new(),
            open: None,
            table: TableState::default().with_selected(Some(0)),
            list_area: Rect::default(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> DetailList {
        self.kind
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.list.selected
    }

    /// Index of the row whose details are shown.
    #[must_use]
    pub const fn open(&self) -> Option<usize> {
        self.open
    }

    /// Close the detail and move the cursor back to the top.
    pub fn reset(&mut self) {
        self.open = None;
        self.list.go_first();
        self.table.select(Some(0));
        *self.table.offset_mut() = 0;
    }

    pub(crate) fn list_geometry(&self) -> (Rect, usize) {
        (self.list_area, self.table.offset())
    }

    fn sync_total(&mut self, ctx: &ViewContext) {
        self.list.set_total(self.kind.len(ctx));
        self.list.clamp_selection();
        if self.open.is_some_and(|idx| idx >= self.list.total) {
            self.open = None;
        }
    }

    fn toggle_at(&mut self, idx: usize) {
        if idx < self.list.total {
            self.list.set_selected(idx);
            toggle_selection(&mut self.open, idx);
        }
        self.table.select(Some(self.list.selected));
    }
}

impl ViewState for DetailListView {
    fn handle_key(&mut self, key: KeyEvent, ctx: &ViewContext) -> EventResult {
        self.sync_total(ctx);
        if handle_list_nav_key(&mut self.list, key) {
            self.table.select(Some(self.list.selected));
            return EventResult::Consumed;
        }
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.toggle_at(self.list.selected);
                EventResult::Consumed
            }
            KeyCode::Esc if self.open.is_some() => {
                self.open = None;
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn handle_click(&mut self, row: usize, ctx: &ViewContext) -> EventResult {
        self.sync_total(ctx);
        if row >= self.list.total {
            return EventResult::Ignored;
        }
        self.toggle_at(row);
        EventResult::Consumed
    }

    fn title(&self) -> &str {
        self.kind.title()
    }

    fn shortcuts(&self) -> Vec<Shortcut> {
        vec![
            Shortcut::new("↑↓/jk", "Move cursor"),
            Shortcut::new("Enter/Space", "Show or hide details"),
            Shortcut::new("Esc", "Close details"),
            Shortcut::new("g/G", "First/Last"),
            Shortcut::new("PgUp/PgDn", "Page"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::mock;
    use crate::model::{FilterField, FilterSelection};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_toggles_open_row() {
        let data = mock::dashboard_data();
        let filters = FilterSelection::new();
        let ctx = ViewContext { data: &data, filters: &filters };
        let mut view = DetailListView::new(DetailList::Products);

        view.handle_key(key(KeyCode::Down), &ctx);
        view.handle_key(key(KeyCode::Enter), &ctx);
        assert_eq!(view.open(), Some(1));

        view.handle_key(key(KeyCode::Enter), &ctx);
        assert_eq!(view.open(), None);
    }

    #[test]
    fn test_second_click_closes() {
        let data = mock::dashboard_data();
        let filters = FilterSelection::new();
        let ctx = ViewContext { data: &data, filters: &filters };
        let mut view = DetailListView::new(DetailList::Regions);

        assert_eq!(view.handle_click(2, &ctx), EventResult::Consumed);
        assert_eq!(view.open(), Some(2));
        view.handle_click(0, &ctx);
        assert_eq!(view.open(), Some(0));
        view.handle_click(0, &ctx);
        assert_eq!(view.open(), None);
        assert_eq!(view.handle_click(99, &ctx), EventResult::Ignored);
    }

    #[test]
    fn test_cases_follow_filters() {
        let data = mock::dashboard_data();
        let filters = FilterSelection::new().update(FilterField::Branch, "BR002");
        let ctx = ViewContext { data: &data, filters: &filters };
        let mut view = DetailListView::new(DetailList::Cases);

        view.handle_key(key(KeyCode::Char('G')), &ctx);
        assert_eq!(view.cursor(), data.filtered_cases(&filters).count() - 1);
    }

    #[test]
    fn test_escape_closes_then_ignores() {
        let data = mock::dashboard_data();
        let filters = FilterSelection::new();
        let ctx = ViewContext { data: &data, filters: &filters };
        let mut view = DetailListView::new(DetailList::Channels);

        view.handle_key(key(KeyCode::Enter), &ctx);
        assert_eq!(view.handle_key(key(KeyCode::Esc), &ctx), EventResult::Consumed);
        assert_eq!(view.handle_key(key(KeyCode::Esc), &ctx), EventResult::Ignored);
    }
}
