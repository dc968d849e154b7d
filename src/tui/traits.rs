//! View state machines for the dashboard tabs.
//!
//! Each list-bearing view implements [`ViewState`] to handle its own keys and
//! clicks. `DashboardApp` owns the global state (overlays, filters, the active
//! tab) and dispatches whatever it does not handle to the active view.

use crossterm::event::{KeyCode, KeyEvent};
use std::fmt;

use crate::data::DashboardData;
use crate::model::FilterSelection;

/// Result of handling an event in a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled by this view
    Consumed,
    /// Event was not handled, let parent process it
    Ignored,
    /// Set a status message
    StatusMessage(String),
}

impl EventResult {
    pub fn status(msg: impl Into<String>) -> Self {
        Self::StatusMessage(msg.into())
    }
}

impl fmt::Display for EventResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Consumed => write!(f, "Consumed"),
            Self::Ignored => write!(f, "Ignored"),
            Self::StatusMessage(msg) => write!(f, "StatusMessage({msg})"),
        }
    }
}

/// A keyboard shortcut for display in the help overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    /// Key sequence (e.g., "j/k", "Enter")
    pub key: &'static str,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(key: &'static str, description: &'static str) -> Self {
        Self { key, description }
    }
}

/// Read-only state a view needs to interpret input.
pub struct ViewContext<'a> {
    pub data: &'a DashboardData,
    pub filters: &'a FilterSelection,
}

pub trait ViewState {
    /// Handle a key event. Unhandled keys return [`EventResult::Ignored`].
    fn handle_key(&mut self, key: KeyEvent, ctx: &ViewContext) -> EventResult;

    /// Handle a click on the `row`-th data row of the view's list.
    fn handle_click(&mut self, _row: usize, _ctx: &ViewContext) -> EventResult {
        EventResult::Ignored
    }

    fn title(&self) -> &str;

    /// Shortcuts listed in the help overlay.
    fn shortcuts(&self) -> Vec<Shortcut>;
}

/// Key bindings shared by every list view: j/k, arrows, g/G, Home/End and
/// page keys. Returns `true` when the key moved the cursor.
pub fn handle_list_nav_key<L: crate::tui::state::ListNavigation + ?Sized>(
    list: &mut L,
    key: KeyEvent,
) -> bool {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => list.select_next(),
        KeyCode::Up | KeyCode::Char('k') => list.select_prev(),
        KeyCode::Home | KeyCode::Char('g') => list.go_first(),
        KeyCode::End | KeyCode::Char('G') => list.go_last(),
        KeyCode::PageDown => list.page_down(),
        KeyCode::PageUp => list.page_up(),
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::{ListNavigation, ListState};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_list_nav_keys() {
        let mut list = ListState::with_total(10);
        assert!(handle_list_nav_key(&mut list, key(KeyCode::Char('j'))));
        assert!(handle_list_nav_key(&mut list, key(KeyCode::Down)));
        assert_eq!(list.selected(), 2);
        assert!(handle_list_nav_key(&mut list, key(KeyCode::Char('G'))));
        assert_eq!(list.selected(), 9);
        assert!(!handle_list_nav_key(&mut list, key(KeyCode::Char('x'))));
        assert_eq!(list.selected(), 9);
    }

    #[test]
    fn test_event_result_display() {
        assert_eq!(EventResult::Consumed.to_string(), "Consumed");
        assert_eq!(
            EventResult::status("Exported").to_string(),
            "StatusMessage(Exported)"
        );
    }
}
