//! Filter panel state.
//!
//! The panel never owns the selection: it reads the app's current
//! [`FilterSelection`] and answers each key with the replacement selection,
//! built through `update` or `clear`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::{FilterField, FilterOptions, FilterSelection};

/// What the panel did with a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelOutcome {
    /// Handled without changing the selection.
    Consumed,
    /// The selection should be replaced.
    Changed(FilterSelection),
    /// Not a panel key.
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct FilterPanelState {
    open: bool,
    focused: usize,
}

impl FilterPanelState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Label of the show/hide control.
    #[must_use]
    pub const fn toggle_label(&self) -> &'static str {
        if self.open {
            "Hide Filters"
        } else {
            "Show Filters"
        }
    }

    #[must_use]
    pub const fn focused_field(&self) -> FilterField {
        FilterField::ALL_FIELDS[self.focused]
    }

    pub fn focus(&mut self, field: FilterField) {
        if let Some(idx) = FilterField::ALL_FIELDS.iter().position(|f| *f == field) {
            self.focused = idx;
        }
    }

    fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % FilterField::ALL_FIELDS.len();
    }

    fn focus_prev(&mut self) {
        let len = FilterField::ALL_FIELDS.len();
        self.focused = (self.focused + len - 1) % len;
    }

    /// Interpret a key while the panel is open.
    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        filters: &FilterSelection,
        options: &FilterOptions,
    ) -> PanelOutcome {
        if !self.open {
            return PanelOutcome::Ignored;
        }
        let field = self.focused_field();

        match key.code {
            KeyCode::Esc => {
                self.close();
                PanelOutcome::Consumed
            }
            KeyCode::Up => {
                self.focus_prev();
                PanelOutcome::Consumed
            }
            KeyCode::Down => {
                self.focus_next();
                PanelOutcome::Consumed
            }
            KeyCode::Left | KeyCode::Right if !field.is_text() => {
                let forward = key.code == KeyCode::Right;
                let next = options.cycle(field, filters.get(field), forward);
                PanelOutcome::Changed(filters.update(field, next))
            }
            KeyCode::Backspace if field.is_text() => {
                let mut term = filters.get(field).to_string();
                if term.pop().is_some() {
                    PanelOutcome::Changed(filters.update(field, term))
                } else {
                    PanelOutcome::Consumed
                }
            }
            KeyCode::Char(c)
                if field.is_text() && !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                let mut term = filters.get(field).to_string();
                term.push(c);
                PanelOutcome::Changed(filters.update(field, term))
            }
            KeyCode::Char('c') if filters.has_active_filters() => {
                PanelOutcome::Changed(FilterSelection::clear())
            }
            KeyCode::Char('c') => PanelOutcome::Consumed,
            _ => PanelOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ALL;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn options() -> FilterOptions {
        FilterOptions {
            regions: vec!["North".into(), "South".into()],
            ..FilterOptions::default()
        }
    }

    fn open_panel() -> FilterPanelState {
        let mut panel = FilterPanelState::new();
        panel.toggle();
        panel
    }

    #[test]
    fn test_closed_panel_ignores_keys() {
        let mut panel = FilterPanelState::new();
        let outcome = panel.handle_key(key(KeyCode::Right), &FilterSelection::new(), &options());
        assert_eq!(outcome, PanelOutcome::Ignored);
        assert_eq!(panel.toggle_label(), "Show Filters");
    }

    #[test]
    fn test_cycle_region_from_all() {
        let mut panel = open_panel();
        let filters = FilterSelection::new();
        let PanelOutcome::Changed(next) = panel.handle_key(key(KeyCode::Right), &filters, &options())
        else {
            panic!("expected a change");
        };
        assert_eq!(next.region, "North");

        let PanelOutcome::Changed(back) = panel.handle_key(key(KeyCode::Left), &next, &options())
        else {
            panic!("expected a change");
        };
        assert_eq!(back.region, ALL);
    }

    #[test]
    fn test_typing_edits_search_only_when_focused() {
        let mut panel = open_panel();
        assert_eq!(
            panel.handle_key(key(KeyCode::Char('x')), &FilterSelection::new(), &options()),
            PanelOutcome::Ignored
        );

        panel.focus(FilterField::Search);
        let PanelOutcome::Changed(next) =
            panel.handle_key(key(KeyCode::Char('p')), &FilterSelection::new(), &options())
        else {
            panic!("expected a change");
        };
        assert_eq!(next.search, "p");

        let PanelOutcome::Changed(erased) = panel.handle_key(key(KeyCode::Backspace), &next, &options())
        else {
            panic!("expected a change");
        };
        assert_eq!(erased.search, "");
    }

    #[test]
    fn test_clear_only_acts_when_active() {
        let mut panel = open_panel();
        assert_eq!(
            panel.handle_key(key(KeyCode::Char('c')), &FilterSelection::new(), &options()),
            PanelOutcome::Consumed
        );

        let active = FilterSelection::new().update(FilterField::Region, "South");
        assert_eq!(
            panel.handle_key(key(KeyCode::Char('c')), &active, &options()),
            PanelOutcome::Changed(FilterSelection::clear())
        );
    }

    #[test]
    fn test_focus_wraps() {
        let mut panel = open_panel();
        panel.handle_key(key(KeyCode::Up), &FilterSelection::new(), &options());
        assert_eq!(panel.focused_field(), FilterField::Search);
        panel.handle_key(key(KeyCode::Down), &FilterSelection::new(), &options());
        assert_eq!(panel.focused_field(), FilterField::Region);
    }

    #[test]
    fn test_escape_closes() {
        let mut panel = open_panel();
        panel.handle_key(key(KeyCode::Esc), &FilterSelection::new(), &options());
        assert!(!panel.is_open());
    }
}
