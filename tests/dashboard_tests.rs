//! Integration tests for the interactive dashboard
//!
//! These tests drive `DashboardApp` with synthetic key and mouse events and
//! render frames into ratatui's `TestBackend`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, Terminal};
use renewals_dash::{
    data::mock,
    model::{ActiveView, DashboardView, FilterField},
    tui::{handle_key_event, handle_mouse_event, render},
    DashboardApp, FilterSelection,
};

// ============================================================================
// Helpers
// ============================================================================

fn app() -> DashboardApp {
    DashboardApp::new(mock::dashboard_data())
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Render one frame and return the screen as text, one line per row.
fn draw(app: &mut DashboardApp, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal
        .draw(|frame| render(frame, app))
        .expect("frame renders");
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

/// Click the first data row of the active view's list, as last rendered.
fn click_first_row(app: &mut DashboardApp, view: DashboardView) {
    let (area, _) = app.views.list_area(view).expect("view has a list");
    assert!(area.height > 0, "list was not rendered");
    // Border plus header row.
    handle_mouse_event(app, click(area.x + 4, area.y + 2));
}

// ============================================================================
// Rendering
// ============================================================================

mod rendering {
    use super::*;

    #[test]
    fn test_every_tab_renders_its_title() {
        let mut app = app();
        for view in DashboardView::ALL {
            app.select_view(view);
            let screen = draw(&mut app, 160, 48);
            assert!(
                screen.contains(view.title()),
                "{} missing from its own frame",
                view.title()
            );
        }
    }

    #[test]
    fn test_overview_shows_kpis_and_insights() {
        let mut app = app();
        let screen = draw(&mut app, 160, 48);
        assert!(screen.contains("12,847"));
        assert!(screen.contains("91.1%"));
        assert!(screen.contains("Key Insights & Recommendations"));
    }

    #[test]
    fn test_unknown_view_shows_placeholder() {
        let mut app = app().with_view("forecasting");
        assert!(matches!(app.active_view, ActiveView::Unrecognized(_)));
        let screen = draw(&mut app, 160, 48);
        assert!(screen.contains("This view is under development. Please check back soon!"));
    }

    #[test]
    fn test_small_terminal_shows_size_warning() {
        let mut app = app();
        let screen = draw(&mut app, 60, 20);
        assert!(!screen.contains("Key Insights"));
        assert!(screen.contains("80"));
    }

    #[test]
    fn test_filter_panel_and_status_bar() {
        let mut app = app();
        app.set_filters(FilterSelection::new().update(FilterField::Region, "South"));
        handle_key_event(&mut app, key(KeyCode::Char('f')));
        let screen = draw(&mut app, 160, 48);
        assert!(screen.contains("Region: South"));
        assert!(screen.contains("Clear All"));
    }

    #[test]
    fn test_branch_totals_with_large_policy_counts() {
        let mut app = app();
        for branch in &mut app.data.branches {
            branch.policies = u32::MAX;
        }
        app.select_view(DashboardView::Branch);
        let screen = draw(&mut app, 160, 48);
        let total = i64::from(u32::MAX) * app.data.branches.len() as i64;
        assert!(screen.contains(&renewals_dash::metrics::format_grouped(total)));
    }

    #[test]
    fn test_help_overlay_lists_view_shortcuts() {
        let mut app = app();
        app.select_view(DashboardView::Branch);
        handle_key_event(&mut app, key(KeyCode::Char('?')));
        let screen = draw(&mut app, 160, 48);
        assert!(screen.contains("Toggle peer comparison"));
    }
}

// ============================================================================
// Interaction
// ============================================================================

mod interaction {
    use super::*;

    #[test]
    fn test_tab_cycles_and_wraps() {
        let mut app = app();
        for _ in 0..DashboardView::ALL.len() {
            handle_key_event(&mut app, key(KeyCode::Tab));
        }
        assert_eq!(app.active_view, ActiveView::Known(DashboardView::Overview));
    }

    #[test]
    fn test_tab_from_placeholder_goes_to_overview() {
        let mut app = app().with_view("forecasting");
        handle_key_event(&mut app, key(KeyCode::Tab));
        assert_eq!(app.active_view, ActiveView::Known(DashboardView::Overview));
    }

    #[test]
    fn test_clicking_open_row_closes_it() {
        let mut app = app();
        app.select_view(DashboardView::Product);
        draw(&mut app, 160, 48);

        click_first_row(&mut app, DashboardView::Product);
        assert_eq!(app.views.product.open(), Some(0));
        let screen = draw(&mut app, 160, 48);
        let first = &app.data.product_lines[0];
        assert!(screen.contains(&first.sub_products[0].name));

        click_first_row(&mut app, DashboardView::Product);
        assert_eq!(app.views.product.open(), None);
    }

    #[test]
    fn test_peer_comparison_toggle() {
        let mut app = app();
        app.select_view(DashboardView::Branch);
        handle_key_event(&mut app, key(KeyCode::Char('p')));
        assert!(app.views.branch.show_peer());
        let screen = draw(&mut app, 160, 60);
        assert!(screen.contains("Branch vs Peer Comparison"));

        // Any new selection turns the comparison off.
        handle_key_event(&mut app, key(KeyCode::Down));
        assert!(!app.views.branch.show_peer());
        assert_ne!(app.views.branch.selected_code(), "BR001");
    }

    #[test]
    fn test_filter_change_resets_concerning_selection() {
        let mut app = app();
        app.select_view(DashboardView::Concerning);
        handle_key_event(&mut app, key(KeyCode::Down));
        handle_key_event(&mut app, key(KeyCode::Enter));
        assert_eq!(app.views.concerning.open(), Some(1));

        app.set_filters(FilterSelection::new().update(FilterField::Region, "South"));
        assert_eq!(app.views.concerning.open(), None);
        assert_eq!(app.views.concerning.cursor(), 0);

        let screen = draw(&mut app, 160, 48);
        assert!(screen.contains("POL009012"));
        assert!(!screen.contains("POL001234"));
    }

    #[test]
    fn test_mouse_disabled_ignores_clicks() {
        let mut app = app();
        app.mouse_enabled = false;
        app.select_view(DashboardView::Regional);
        draw(&mut app, 160, 48);
        click_first_row(&mut app, DashboardView::Regional);
        assert_eq!(app.views.regional.open(), None);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = super::app();
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }
}
