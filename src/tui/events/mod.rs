//! Terminal events and key handling for the dashboard.
//!
//! A helper thread polls crossterm and forwards key, mouse, resize and tick
//! events over a channel. Keys are resolved in this order: overlays, the
//! open filter panel, global shortcuts, then the active view.

pub mod mouse;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::model::DashboardView;
use crate::reports::ExportFormat;
use crate::tui::app::DashboardApp;
use crate::tui::constants::{EVENT_POLL_MS, MIN_TICK_MS};
use crate::tui::viewmodel::{OverlayKind, PanelOutcome};

pub use mouse::handle_mouse_event;

/// Terminal events.
#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Mouse(event::MouseEvent),
    Resize(u16, u16),
    Tick,
}

/// Event handler backed by a polling thread.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
    _tx: mpsc::Sender<Event>,
}

impl EventHandler {
    /// Spawn the polling thread. A tick is sent whenever `tick_rate` passes
    /// without input.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let tick_rate = tick_rate.max(Duration::from_millis(MIN_TICK_MS));
        let poll_rate = Duration::from_millis(EVENT_POLL_MS).min(tick_rate);

        let event_tx = tx.clone();
        thread::spawn(move || {
            let mut idle = Duration::ZERO;
            loop {
                if event::poll(poll_rate).unwrap_or(false) {
                    let forwarded = match event::read() {
                        Ok(CrosstermEvent::Key(key)) => Some(Event::Key(key)),
                        Ok(CrosstermEvent::Mouse(mouse)) => Some(Event::Mouse(mouse)),
                        Ok(CrosstermEvent::Resize(w, h)) => Some(Event::Resize(w, h)),
                        _ => None,
                    };
                    if let Some(ev) = forwarded {
                        if event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                } else {
                    idle += poll_rate;
                    if idle >= tick_rate {
                        idle = Duration::ZERO;
                        if event_tx.send(Event::Tick).is_err() {
                            break;
                        }
                    }
                }
            }
        });

        Self { rx, _tx: tx }
    }

    pub fn next(&self) -> io::Result<Event> {
        self.rx.recv().map_err(io::Error::other)
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::config::DEFAULT_TICK_RATE_MS))
    }
}

/// Handle a key press.
pub fn handle_key_event(app: &mut DashboardApp, key: KeyEvent) {
    app.clear_status_message();

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if let Some(kind) = app.overlays.current() {
        match kind {
            OverlayKind::Export => handle_export_key(app, key),
            // Help and legend close on any key.
            OverlayKind::Help | OverlayKind::Legend => app.close_overlays(),
        }
        return;
    }

    match app
        .filter_panel
        .handle_key(key, &app.filters, &app.data.filter_options)
    {
        PanelOutcome::Changed(filters) => {
            app.set_filters(filters);
            return;
        }
        PanelOutcome::Consumed => return,
        PanelOutcome::Ignored => {}
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.toggle_overlay(OverlayKind::Help),
        KeyCode::Char('e') => app.toggle_overlay(OverlayKind::Export),
        KeyCode::Char('l') => app.toggle_overlay(OverlayKind::Legend),
        KeyCode::Char('T') => app.toggle_theme(),
        KeyCode::Char('f') => app.filter_panel.toggle(),
        KeyCode::Tab => app.next_view(),
        KeyCode::BackTab => app.prev_view(),
        KeyCode::Char(c @ '1'..='6') => {
            let idx = c as usize - '1' as usize;
            app.select_view(DashboardView::ALL[idx]);
        }
        _ => {
            app.dispatch_key(key);
        }
    }
}

fn handle_export_key(app: &mut DashboardApp, key: KeyEvent) {
    let format = match key.code {
        KeyCode::Esc | KeyCode::Char('e') => {
            app.close_overlays();
            return;
        }
        KeyCode::Char('j') => ExportFormat::Json,
        KeyCode::Char('c') => ExportFormat::Csv,
        KeyCode::Char('m') => ExportFormat::Markdown,
        KeyCode::Enter => app.export.format,
        _ => return,
    };

    app.close_overlays();
    app.export(format);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::mock;
    use crate::model::{ActiveView, ALL};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> DashboardApp {
        DashboardApp::new(mock::dashboard_data())
    }

    #[test]
    fn test_number_keys_select_tabs() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('4')));
        assert_eq!(app.active_view, ActiveView::Known(DashboardView::Concerning));
        handle_key_event(&mut app, key(KeyCode::Char('6')));
        assert_eq!(app.active_view, ActiveView::Known(DashboardView::Regional));
        handle_key_event(&mut app, key(KeyCode::BackTab));
        assert_eq!(app.active_view, ActiveView::Known(DashboardView::Channel));
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('?')));
        assert!(app.overlays.is_showing(OverlayKind::Help));
        handle_key_event(&mut app, key(KeyCode::Char('3')));
        assert!(!app.has_overlay());
        // The key that closed the overlay does not also switch tabs.
        assert_eq!(app.active_view, ActiveView::Known(DashboardView::Overview));
    }

    #[test]
    fn test_filter_panel_captures_arrows() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('f')));
        assert!(app.filter_panel.is_open());

        handle_key_event(&mut app, key(KeyCode::Right));
        assert_ne!(app.filters.region, ALL);
        assert!(app.filters.has_active_filters());

        handle_key_event(&mut app, key(KeyCode::Char('c')));
        assert!(!app.filters.has_active_filters());

        handle_key_event(&mut app, key(KeyCode::Esc));
        assert!(!app.filter_panel.is_open());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = self::app();
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_export_escape_cancels() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('e')));
        assert!(app.overlays.is_showing(OverlayKind::Export));
        handle_key_event(&mut app, key(KeyCode::Esc));
        assert!(!app.has_overlay());
        assert!(app.status.peek().is_none());
    }
}
