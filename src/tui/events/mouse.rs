//! Mouse event handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::model::DashboardView;
use crate::tui::app::DashboardApp;
use crate::tui::constants::TABLE_HEADER_ROWS;
use crate::tui::ui::tab_at;

pub fn handle_mouse_event(app: &mut DashboardApp, mouse: MouseEvent) {
    if !app.mouse_enabled {
        return;
    }
    app.clear_status_message();

    match mouse.kind {
        MouseEventKind::Down(button) => {
            if app.has_overlay() {
                app.close_overlays();
                return;
            }
            if button == MouseButton::Left {
                handle_left_click(app, mouse.column, mouse.row);
            }
        }
        MouseEventKind::ScrollDown => {
            app.dispatch_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        }
        MouseEventKind::ScrollUp => {
            app.dispatch_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        }
        _ => {}
    }
}

fn handle_left_click(app: &mut DashboardApp, x: u16, y: u16) {
    let pos = Position::new(x, y);

    if app.layout.filter_toggle.contains(pos) {
        app.filter_panel.toggle();
        return;
    }

    if app.layout.tabs.contains(pos) {
        if let Some(view) = tab_at(app.layout.tabs, x) {
            app.select_view(view);
        }
        return;
    }

    let Some(view) = app.active_view.known() else {
        return;
    };
    if let Some(row) = list_row_at(app, view, pos) {
        app.dispatch_click(row);
    }
}

/// Data row under `pos` in the active view's list, accounting for scroll.
fn list_row_at(app: &DashboardApp, view: DashboardView, pos: Position) -> Option<usize> {
    let (area, offset) = app.views.list_area(view)?;
    row_in_table(area, offset, pos)
}

fn row_in_table(area: Rect, offset: usize, pos: Position) -> Option<usize> {
    let first_row = area.y + TABLE_HEADER_ROWS;
    // Bottom border.
    let last_row = area.bottom().checked_sub(2)?;
    if !area.contains(pos) || pos.y < first_row || pos.y > last_row {
        return None;
    }
    Some(offset + usize::from(pos.y - first_row))
}
