//! Custom widgets for the dashboard.
//!
//! Cards and bars are ratatui [`Widget`](ratatui::widgets::Widget)s; the free
//! functions here cover the shared panels and popups.

mod bars;
mod chart_card;
mod kpi_card;
mod sparkline;

pub use bars::HorizontalBar;
pub use chart_card::{ChartCard, ChartVariant};
pub use kpi_card::{CardVariant, KpiCard, Trend};
pub use sparkline::MiniSparkline;

use crate::tui::theme::colors;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render a detail panel with a title and content lines.
pub fn render_detail_panel(
    frame: &mut ratatui::Frame,
    area: Rect,
    title: &str,
    lines: Vec<Line<'static>>,
    border_color: Color,
) {
    let panel = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {title} "))
                .title_style(Style::default().fg(border_color).bold())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(panel, area);
}

/// Render an empty state placeholder.
pub fn render_empty_state(
    frame: &mut ratatui::Frame,
    area: Rect,
    message: &str,
    hint: Option<&str>,
) {
    let scheme = colors();
    let mut lines = vec![
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(scheme.text_muted)),
    ];

    if let Some(h) = hint {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            h.to_string(),
            Style::default().fg(scheme.text_muted).italic(),
        ));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.border)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

/// Helper function to create a centered rectangle.
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Truncate a string with ellipsis, using Unicode display width for accuracy.
#[must_use]
pub fn truncate_str(s: &str, max_width: usize) -> String {
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    let budget = if max_width > 3 { max_width - 3 } else { max_width };
    let mut width = 0;
    let truncated: String = s
        .chars()
        .take_while(|ch| {
            let w = UnicodeWidthChar::width(*ch).unwrap_or(0);
            if width + w > budget {
                return false;
            }
            width += w;
            true
        })
        .collect();
    if max_width > 3 {
        format!("{truncated}...")
    } else {
        truncated
    }
}

/// Pad or truncate to an exact display width.
#[must_use]
pub fn fit_width(s: &str, width: usize) -> String {
    use unicode_width::UnicodeWidthStr;

    let truncated = truncate_str(s, width);
    let pad = width.saturating_sub(UnicodeWidthStr::width(truncated.as_str()));
    format!("{truncated}{}", " ".repeat(pad))
}

// ============================================================================
// Minimum Size Check
// ============================================================================

/// Minimum terminal size requirements.
pub const MIN_WIDTH: u16 = 80;
pub const MIN_HEIGHT: u16 = 24;

/// Check if terminal meets minimum size requirements.
pub const fn check_terminal_size(width: u16, height: u16) -> Result<(), (u16, u16)> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        Err((MIN_WIDTH, MIN_HEIGHT))
    } else {
        Ok(())
    }
}

/// Render a "terminal too small" message.
pub fn render_size_warning(
    frame: &mut ratatui::Frame,
    area: Rect,
    required_width: u16,
    required_height: u16,
) {
    let lines = vec![
        Line::styled(
            "Terminal too small",
            Style::default().fg(colors().warning).bold(),
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw("Current: "),
            Span::styled(
                format!("{}x{}", area.width, area.height),
                Style::default().fg(colors().text),
            ),
        ]),
        Line::from(vec![
            Span::raw("Required: "),
            Span::styled(
                format!("{required_width}x{required_height}"),
                Style::default().fg(colors().accent),
            ),
        ]),
        Line::from(""),
        Line::styled(
            "Please resize your terminal",
            Style::default().fg(colors().text_muted),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors().warning)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("Delhi Central", 20), "Delhi Central");
        assert_eq!(truncate_str("Bangalore South", 10), "Bangalo...");
        assert_eq!(truncate_str("Bangalore", 3), "Ban");
    }

    #[test]
    fn test_truncate_wide_chars() {
        assert_eq!(truncate_str("₹₹₹₹₹₹", 6), "₹₹₹₹₹₹");
        assert_eq!(truncate_str("日本語日本語", 7), "日本...");
    }

    #[test]
    fn test_fit_width() {
        assert_eq!(fit_width("ULIP", 6), "ULIP  ");
        assert_eq!(fit_width("Whole Life", 6), "Who...");
    }

    #[test]
    fn test_terminal_size_check() {
        assert!(check_terminal_size(80, 24).is_ok());
        assert_eq!(check_terminal_size(79, 30), Err((MIN_WIDTH, MIN_HEIGHT)));
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(50, 50, outer);
        assert_eq!(inner.width, 50);
        assert_eq!(inner.height, 25);
        assert_eq!(inner.x, 25);
    }
}
