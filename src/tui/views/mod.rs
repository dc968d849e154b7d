//! Per-tab renderers.
//!
//! Each view reads the dataset and draws into the content area. Views with a
//! selectable list also record where that list landed so clicks can be
//! mapped back to rows.

mod branch;
mod channel;
mod concerning;
mod overview;
mod placeholder;
mod product;
mod regional;

pub use branch::render_branch;
pub use channel::render_channel;
pub use concerning::render_concerning;
pub use overview::render_overview;
pub use placeholder::render_placeholder;
pub use product::render_product;
pub use regional::render_regional;

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Cell, Row, Table, TableState},
};

use crate::tui::theme::{colors, Styles};
use crate::tui::widgets::HorizontalBar;

/// A bordered, selectable table in the house style.
///
/// The header occupies one row directly under the top border, which the
/// mouse handler relies on when mapping clicks to rows.
pub(crate) fn render_list_table(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    headers: &[&str],
    widths: &[Constraint],
    rows: Vec<Row<'static>>,
    state: &mut TableState,
) {
    let scheme = colors();
    let header = Row::new(
        headers
            .iter()
            .map(|h| Cell::from(h.to_string()).style(Style::default().fg(scheme.accent).bold())),
    )
    .height(1);

    let table = Table::new(rows, widths.to_vec())
        .header(header)
        .block(
            Block::default()
                .title(format!(" {title} "))
                .title_style(Styles::section_title())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Styles::border_focused()),
        )
        .row_highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(table, area, state);
}

/// `label: value` line for detail panels.
pub(crate) fn detail_line(label: &str, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Styles::label()),
        Span::styled(value.into(), Styles::value()),
    ])
}

/// Same as [`detail_line`] with a coloured value.
pub(crate) fn detail_line_colored(
    label: &str,
    value: impl Into<String>,
    color: Color,
) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Styles::label()),
        Span::styled(value.into(), Style::default().fg(color).bold()),
    ])
}

pub(crate) fn section_heading(title: &str) -> Line<'static> {
    Line::styled(title.to_string(), Styles::section_title())
}

/// Stack bars one per row; rows that do not fit are dropped.
pub(crate) fn render_bar_rows(buf: &mut Buffer, area: Rect, bars: Vec<HorizontalBar>) {
    for (row, bar) in (area.y..area.bottom()).zip(bars) {
        bar.render(Rect::new(area.x, row, area.width, 1), buf);
    }
}

/// Split `area` into a list on the left and a detail pane on the right.
pub(crate) fn split_list_detail(area: Rect, list_percent: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(list_percent),
            Constraint::Percentage(100 - list_percent),
        ])
        .split(area);
    (chunks[0], chunks[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list_detail() {
        let (list, detail) = split_list_detail(Rect::new(0, 0, 100, 20), 60);
        assert_eq!(list.width, 60);
        assert_eq!(detail.x, 60);
        assert_eq!(detail.width, 40);
    }
}
