//! Terminal setup, the main loop and frame layout.

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
};
use std::io::{self, stdout};
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

use super::app::DashboardApp;
use super::constants::{FILTER_PANEL_HEIGHT, HEADER_HEIGHT, TABS_HEIGHT};
use super::events::{handle_key_event, handle_mouse_event, Event, EventHandler};
use super::theme::{colors, count_badge, render_footer_hints, FooterHints, Styles};
use super::viewmodel::OverlayKind;
use super::views;
use super::widgets::{self, check_terminal_size, render_size_warning, MIN_HEIGHT, MIN_WIDTH};
use crate::config::TuiPreferences;
use crate::metrics::{format_millions, format_percent, record_totals};
use crate::model::{ActiveView, DashboardView, FilterField};

/// Run the dashboard until the user quits.
pub fn run_dashboard(app: &mut DashboardApp, tick_rate: Duration) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    if app.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(tick_rate);
    let result = event_loop(&mut terminal, app, &events);

    // Restore the terminal even when the loop failed.
    disable_raw_mode()?;
    if app.mouse_enabled {
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    remember_last_view(app);
    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut DashboardApp,
    events: &EventHandler,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Mouse(mouse) => handle_mouse_event(app, mouse),
            Event::Resize(_, _) => {}
            Event::Tick => app.on_tick(),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn remember_last_view(app: &DashboardApp) {
    let mut prefs = TuiPreferences::load();
    prefs.last_view = Some(app.active_view.tag().to_string());
    if let Err(e) = prefs.save() {
        tracing::warn!(error = %e, "failed to save dashboard preferences");
    }
}

/// Draw one frame.
pub fn render(frame: &mut Frame, app: &mut DashboardApp) {
    let area = frame.area();

    if check_terminal_size(area.width, area.height).is_err() {
        render_size_warning(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    let panel_height = if app.filter_panel.is_open() {
        FILTER_PANEL_HEIGHT
    } else {
        0
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(TABS_HEIGHT),
            Constraint::Length(panel_height),
            Constraint::Min(10),
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_tabs(frame, chunks[1], app);
    if app.filter_panel.is_open() {
        render_filter_panel(frame, chunks[2], app);
    }

    let content = chunks[3];
    match app.active_view.clone() {
        ActiveView::Known(DashboardView::Overview) => {
            views::render_overview(frame, content, &app.data);
        }
        ActiveView::Known(DashboardView::Branch) => {
            views::render_branch(frame, content, &app.data, &mut app.views.branch);
        }
        ActiveView::Known(DashboardView::Product) => {
            views::render_product(frame, content, &app.data, &mut app.views.product);
        }
        ActiveView::Known(DashboardView::Concerning) => views::render_concerning(
            frame,
            content,
            &app.data,
            &app.filters,
            &mut app.views.concerning,
        ),
        ActiveView::Known(DashboardView::Channel) => {
            views::render_channel(frame, content, &app.data, &mut app.views.channel);
        }
        ActiveView::Known(DashboardView::Regional) => {
            views::render_regional(frame, content, &app.data, &mut app.views.regional);
        }
        unknown @ ActiveView::Unrecognized(_) => {
            views::render_placeholder(frame, content, &unknown);
        }
    }

    render_status_bar(frame, chunks[4], app);
    render_footer(frame, chunks[5], app);

    match app.overlays.current() {
        Some(OverlayKind::Help) => render_help_overlay(frame, area, app),
        Some(OverlayKind::Export) => render_export_dialog(frame, area, app),
        Some(OverlayKind::Legend) => render_legend_overlay(frame, area),
        None => {}
    }
}

// ============================================================================
// Header and tabs
// ============================================================================

fn render_header(frame: &mut Frame, area: Rect, app: &mut DashboardApp) {
    let scheme = colors();

    let mut title = vec![
        Span::styled(
            "Renewals Dashboard",
            Style::default().fg(scheme.primary).bold(),
        ),
        Span::styled(" │ ", Style::default().fg(scheme.muted)),
        Span::styled(
            format!("Last updated: {}", app.last_updated.format("%H:%M:%S")),
            Style::default().fg(scheme.text_muted),
        ),
    ];
    if app.filters.has_active_filters() {
        title.push(Span::raw(" "));
        title.push(count_badge("Active", scheme.accent));
    }

    let lines = vec![
        Line::from(title),
        Line::styled(
            "Real-time insights and analytics for policy renewals performance",
            Style::default().fg(scheme.text_muted).italic(),
        ),
    ];
    frame.render_widget(Paragraph::new(lines), area);

    // Show/hide control at the right edge of the title row.
    let label = format!("[f] {}", app.filter_panel.toggle_label());
    let width = u16::try_from(label.width()).unwrap_or(u16::MAX).min(area.width);
    let toggle_area = Rect {
        x: area.right().saturating_sub(width),
        y: area.y,
        width,
        height: 1,
    };
    let style = if app.filter_panel.is_open() {
        Style::default().fg(scheme.accent).bold()
    } else {
        Style::default().fg(scheme.primary)
    };
    frame.render_widget(Paragraph::new(Span::styled(label, style)), toggle_area);
    app.layout.filter_toggle = toggle_area;
}

fn tab_spans(view: DashboardView) -> (String, String) {
    (format!("[{}]", view.shortcut()), format!(" {} ", view.title()))
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &mut DashboardApp) {
    let scheme = colors();
    let active = app.active_view.known();

    let titles: Vec<Line> = DashboardView::ALL
        .iter()
        .map(|view| {
            let is_active = Some(*view) == active;
            let (key, title) = tab_spans(*view);
            let (key_style, title_style) = if is_active {
                (
                    Style::default().fg(scheme.accent).bold(),
                    Style::default().fg(scheme.accent).bold(),
                )
            } else {
                (
                    Style::default().fg(scheme.muted),
                    Style::default().fg(scheme.text_muted),
                )
            };
            Line::from(vec![
                Span::styled(key, key_style),
                Span::styled(title, title_style),
            ])
        })
        .collect();

    let mut tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(scheme.border)),
        )
        .highlight_style(Style::default().fg(scheme.accent))
        .divider(Span::styled(" │ ", Style::default().fg(scheme.muted)));
    // The placeholder leaves every tab unhighlighted.
    tabs = tabs.select(active.map(|v| v.index()));

    frame.render_widget(tabs, area);
    app.layout.tabs = area;
}

/// The tab whose label covers column `x` of a tab bar drawn in `area`.
///
/// Mirrors the `Tabs` layout: one cell of padding either side of each title
/// and a three-cell divider between titles.
#[must_use]
pub fn tab_at(area: Rect, x: u16) -> Option<DashboardView> {
    let mut start = area.x;
    for view in DashboardView::ALL {
        let (key, title) = tab_spans(view);
        let width = u16::try_from(key.width() + title.width()).unwrap_or(u16::MAX);
        let end = start.saturating_add(width + 2);
        if x >= start && x < end {
            return Some(view);
        }
        start = end.saturating_add(3);
    }
    None
}

// ============================================================================
// Filter panel
// ============================================================================

fn filter_chip(app: &DashboardApp, field: FilterField) -> Vec<Span<'static>> {
    let scheme = colors();
    let focused = app.filter_panel.focused_field() == field;
    let value = app.filters.get(field);

    let shown = if field.is_text() {
        if focused {
            format!("{value}▏")
        } else if value.is_empty() {
            "policy, branch, customer".to_string()
        } else {
            value.to_string()
        }
    } else if focused {
        format!("◀ {value} ▶")
    } else {
        value.to_string()
    };

    let value_style = if focused {
        Styles::selected()
    } else if field.is_text() && value.is_empty() {
        Style::default().fg(scheme.muted).italic()
    } else {
        Styles::value()
    };
    vec![
        Span::styled(format!("{}: ", field.label()), Styles::label()),
        Span::styled(shown, value_style),
        Span::raw("   "),
    ]
}

fn render_filter_panel(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let scheme = colors();
    let row = |fields: &[FilterField]| -> Line<'static> {
        Line::from(
            fields
                .iter()
                .flat_map(|f| filter_chip(app, *f))
                .collect::<Vec<_>>(),
        )
    };

    let mut summary = vec![Span::styled("Due: ", Styles::label())];
    let range = app
        .filters
        .describe()
        .into_iter()
        .find_map(|d| d.strip_prefix("Due: ").map(str::to_string));
    summary.push(Span::styled(
        range.unwrap_or_else(|| "any month".to_string()),
        Styles::value(),
    ));
    summary.push(Span::raw("   "));
    if app.filters.has_active_filters() {
        summary.push(Span::styled("[c]", Styles::shortcut_key()));
        summary.push(Span::styled(
            format!(" Clear All ({} active)", app.filters.active_count()),
            Styles::text(),
        ));
    } else {
        summary.push(Span::styled("No active filters", Styles::text_muted()));
    }

    let lines = vec![
        row(&[FilterField::Region, FilterField::Branch, FilterField::Product]),
        row(&[
            FilterField::Channel,
            FilterField::PaymentMechanism,
            FilterField::Search,
        ]),
        Line::from(summary),
    ];

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Filters ")
            .title_style(Style::default().fg(scheme.accent).bold())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(scheme.border_focused)),
    );
    frame.render_widget(panel, area);
}

// ============================================================================
// Status bar and footer
// ============================================================================

fn render_status_bar(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let scheme = colors();
    let totals = record_totals(app.data.filtered_renewals(&app.filters));
    let cases = app.data.filtered_cases(&app.filters).count();
    let sep = || Span::styled(" │ ", Style::default().fg(scheme.muted));

    let mut spans = vec![
        Span::styled(" Records: ", Styles::label()),
        Span::styled(
            totals.records.to_string(),
            Style::default().fg(scheme.primary).bold(),
        ),
        sep(),
        Span::styled("Dues: ", Styles::label()),
        Span::styled(format_millions(totals.dues), Styles::text()),
        sep(),
        Span::styled("Collected: ", Styles::label()),
        Span::styled(format_millions(totals.collected), Styles::text()),
        sep(),
        Span::styled("Rate: ", Styles::label()),
        Span::styled(
            format_percent(totals.collection_rate()),
            Style::default().fg(scheme.success),
        ),
        sep(),
        Span::styled("Cases: ", Styles::label()),
        Span::styled(
            cases.to_string(),
            Style::default()
                .fg(if cases > 0 { scheme.error } else { scheme.success })
                .bold(),
        ),
    ];

    let active = app.filters.describe();
    if !active.is_empty() {
        spans.push(sep());
        spans.push(Span::styled(
            active.join(", "),
            Style::default().fg(scheme.accent),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Styles::status_bar());
    frame.render_widget(status, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    if let Some(msg) = app.status.peek() {
        let status_line = Line::from(vec![
            Span::styled("ℹ ", Style::default().fg(colors().accent)),
            Span::styled(msg.to_string(), Style::default().fg(colors().accent).bold()),
        ]);
        frame.render_widget(
            Paragraph::new(status_line).alignment(Alignment::Center),
            area,
        );
        return;
    }

    let hints = if app.filter_panel.is_open() {
        FooterHints::filter_panel()
    } else {
        FooterHints::for_view(app.active_view.known())
    };
    let footer = Paragraph::new(Line::from(render_footer_hints(&hints)))
        .alignment(Alignment::Center)
        .style(Styles::text_muted());
    frame.render_widget(footer, area);
}

// ============================================================================
// Overlays
// ============================================================================

fn help_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<15}"), Style::default().fg(colors().accent)),
        Span::styled(desc.to_string(), Style::default().fg(colors().text)),
    ])
}

fn help_section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(colors().primary).bold(),
    ))
}

fn render_help_overlay(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let popup_area = widgets::centered_rect(65, 75, area);
    frame.render_widget(Clear, popup_area);

    let mut lines = vec![
        Line::styled(
            "━━━ Renewals Dashboard Help ━━━",
            Style::default().fg(colors().accent).bold(),
        ),
        Line::from(""),
        help_section("Navigation"),
        help_line("1-6", "Jump to view"),
        help_line("Tab/Shift+Tab", "Next / previous view"),
        help_line("Click tab", "Open that view"),
        Line::from(""),
        help_section("Filters"),
        help_line("f", "Show or hide the filter panel"),
        help_line("↑/↓", "Choose a filter field"),
        help_line("←/→", "Cycle the field's options"),
        help_line("type", "Edit the search term"),
        help_line("c", "Clear all filters"),
    ];

    if let Some(state) = app
        .active_view
        .known()
        .and_then(|view| app.views.get(view))
    {
        lines.push(Line::from(""));
        lines.push(help_section(state.title()));
        for shortcut in state.shortcuts() {
            lines.push(help_line(shortcut.key, shortcut.description));
        }
    }

    lines.extend([
        Line::from(""),
        help_section("Actions"),
        help_line("e", "Export the current view"),
        help_line("l", "Show color legend"),
        help_line("T", "Toggle theme (dark/light/high-contrast)"),
        help_line("?", "Toggle this help"),
        help_line("q / Ctrl+C", "Quit"),
        Line::from(""),
        Line::styled(
            "Press any key to close",
            Style::default().fg(colors().text_muted),
        ),
    ]);

    let help = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Help ")
                .title_style(Style::default().fg(colors().accent).bold())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors().accent)),
        )
        .style(Style::default().fg(colors().text));

    frame.render_widget(help, popup_area);
}

fn render_export_dialog(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let popup_area = widgets::centered_rect(55, 45, area);
    frame.render_widget(Clear, popup_area);

    let target = app.export_scope().map_or_else(
        || "Nothing to export from this view".to_string(),
        |scope| format!("Exporting: {}", scope.title()),
    );
    let dir = app
        .export
        .directory
        .as_ref()
        .map_or_else(|| ".".to_string(), |d| d.display().to_string());

    let option = |key: &str, name: &str, desc: &str| {
        Line::from(vec![
            Span::styled(format!("[{key}]"), Style::default().fg(colors().accent).bold()),
            Span::styled(format!(" {name:<10}"), Style::default().fg(colors().text)),
            Span::styled(format!("- {desc}"), Style::default().fg(colors().text_muted)),
        ])
    };

    let lines = vec![
        Line::styled(
            "━━━ Export View ━━━",
            Style::default().fg(colors().primary).bold(),
        ),
        Line::from(""),
        Line::styled(target, Style::default().fg(colors().text)),
        Line::styled(
            format!("Directory: {dir}"),
            Style::default().fg(colors().text_muted),
        ),
        Line::from(""),
        option("j", "JSON", "Structured data for automation"),
        option("c", "CSV", "Spreadsheet import"),
        option("m", "Markdown", "Tables for documentation"),
        option("Enter", app.export.format.to_string().as_str(), "Configured default"),
        Line::from(""),
        Line::styled(
            "Press Esc to cancel",
            Style::default().fg(colors().text_muted),
        ),
    ];

    let dialog = Paragraph::new(lines).block(
        Block::default()
            .title(" Export ")
            .title_style(Style::default().fg(colors().primary).bold())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors().primary)),
    );
    frame.render_widget(dialog, popup_area);
}

fn render_legend_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = widgets::centered_rect(50, 60, area);
    frame.render_widget(Clear, popup_area);
    let scheme = colors();

    let swatch = |color: Color, label: &str| {
        Line::from(vec![
            Span::styled("  ■ ", Style::default().fg(color)),
            Span::styled(label.to_string(), Style::default().fg(scheme.text)),
        ])
    };

    let lines = vec![
        Line::styled(
            "━━━ Color Legend ━━━",
            Style::default().fg(scheme.primary).bold(),
        ),
        Line::from(""),
        help_section("Concerning case risk"),
        swatch(scheme.risk_high, "High Risk (score ≥ 80)"),
        swatch(scheme.risk_medium, "Medium Risk (score ≥ 60)"),
        swatch(scheme.risk_low, "Low Risk"),
        Line::from(""),
        help_section("Performance badges"),
        swatch(scheme.success, "Excellent / High Growth"),
        swatch(scheme.warning, "Good / Moderate Growth"),
        swatch(scheme.error, "Needs Improvement / Declining"),
        Line::from(""),
        help_section("Trends"),
        swatch(scheme.success, "Favourable change"),
        swatch(scheme.error, "Unfavourable change"),
        Line::from(""),
        Line::styled(
            "Press any key to close",
            Style::default().fg(scheme.text_muted),
        ),
    ];

    let legend = Paragraph::new(lines).block(
        Block::default()
            .title(" Legend ")
            .title_style(Style::default().fg(scheme.primary).bold())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(scheme.primary)),
    );
    frame.render_widget(legend, popup_area);
}
