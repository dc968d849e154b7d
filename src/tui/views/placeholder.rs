use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::model::ActiveView;
use crate::tui::theme::{colors, Styles};

/// Stand-in for a view tag the dashboard does not know.
pub fn render_placeholder(frame: &mut Frame, area: Rect, view: &ActiveView) {
    let scheme = colors();
    let lines = vec![
        Line::from(""),
        Line::styled(
            view.placeholder_title(),
            Style::default().fg(scheme.primary).bold(),
        ),
        Line::from(""),
        Line::styled(
            "This view is under development. Please check back soon!",
            Styles::text_muted(),
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled("[1-6]", Styles::shortcut_key()),
            Span::styled(" open a dashboard view", Styles::shortcut_desc()),
        ]),
    ];

    let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Styles::border()),
    );
    frame.render_widget(panel, area);
}
