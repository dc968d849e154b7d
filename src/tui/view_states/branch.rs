//! Branch Performance state: one branch is always selected.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, widgets::TableState};

use crate::model::BranchProfile;
use crate::tui::constants::DEFAULT_BRANCH;
use crate::tui::state::{ListNavigation, ListState};
use crate::tui::traits::{handle_list_nav_key, EventResult, Shortcut, ViewContext, ViewState};

#[derive(Debug)]
pub struct BranchView {
    list: ListState,
    selected_code: String,
    show_peer: bool,
    pub(crate) table: TableState,
    pub(crate) list_area: Rect,
}

impl Default for BranchView {
    fn default() -> Self {
        Self::new()
    }
}

impl BranchView {
    pub fn new() -> Self {
        Self {
            list: ListState::new(),
            selected_code: DEFAULT_BRANCH.to_string(),
            show_peer: false,
            table: TableState::default().with_selected(Some(0)),
            list_area: Rect::default(),
        }
    }

    #[must_use]
    pub fn selected_code(&self) -> &str {
        &self.selected_code
    }

    #[must_use]
    pub const fn show_peer(&self) -> bool {
        self.show_peer
    }

    /// Select a branch by code. Any selection turns the peer comparison off.
    pub fn select(&mut self, code: impl Into<String>) {
        self.selected_code = code.into();
        self.show_peer = false;
    }

    /// Row of the selected branch in `branches`, if present.
    #[must_use]
    pub fn selected_index(&self, branches: &[BranchProfile]) -> Option<usize> {
        branches.iter().position(|b| b.code == self.selected_code)
    }

    fn sync(&mut self, ctx: &ViewContext) {
        let branches = &ctx.data.branches;
        self.list.set_total(branches.len());
        if let Some(idx) = self.selected_index(branches) {
            self.list.set_selected(idx);
        }
        self.list.clamp_selection();
    }

    fn select_row(&mut self, idx: usize, ctx: &ViewContext) {
        if let Some(branch) = ctx.data.branches.get(idx) {
            self.list.set_selected(idx);
            self.select(branch.code.clone());
            self.table.select(Some(idx));
        }
    }
}

impl ViewState for BranchView {
    fn handle_key(&mut self, key: KeyEvent, ctx: &ViewContext) -> EventResult {
        self.sync(ctx);
        if handle_list_nav_key(&mut self.list, key) {
            let idx = self.list.selected;
            let moved = ctx
                .data
                .branches
                .get(idx)
                .is_some_and(|b| b.code != self.selected_code);
            if moved {
                self.select_row(idx, ctx);
            }
            return EventResult::Consumed;
        }
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.select_row(self.list.selected, ctx);
                EventResult::Consumed
            }
            KeyCode::Char('p') => {
                if ctx.data.branches.len() < 2 {
                    return EventResult::status("No peer branch to compare against");
                }
                self.show_peer = !self.show_peer;
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn handle_click(&mut self, row: usize, ctx: &ViewContext) -> EventResult {
        self.sync(ctx);
        if row >= ctx.data.branches.len() {
            return EventResult::Ignored;
        }
        self.select_row(row, ctx);
        EventResult::Consumed
    }

    fn title(&self) -> &str {
        "Branch Performance"
    }

    fn shortcuts(&self) -> Vec<Shortcut> {
        vec![
            Shortcut::new("↑↓/jk", "Select branch"),
            Shortcut::new("p", "Toggle peer comparison"),
            Shortcut::new("g/G", "First/Last branch"),
        ]
    }
}
