//! Titled frame around a chart panel.

use crate::tui::theme::colors;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Widget},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChartVariant {
    #[default]
    Default,
    Primary,
    Secondary,
}

pub struct ChartCard<'a> {
    title: &'a str,
    description: Option<&'a str>,
    variant: ChartVariant,
}

impl<'a> ChartCard<'a> {
    pub const fn new(title: &'a str) -> Self {
        Self {
            title,
            description: None,
            variant: ChartVariant::Default,
        }
    }

    #[must_use]
    pub const fn description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    #[must_use]
    pub const fn variant(mut self, variant: ChartVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Draw the frame and description, returning the area left for content.
    pub fn render(self, area: Rect, buf: &mut Buffer) -> Rect {
        let scheme = colors();
        let title_color = match self.variant {
            ChartVariant::Default => scheme.text,
            ChartVariant::Primary => scheme.primary,
            ChartVariant::Secondary => scheme.secondary,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(scheme.border))
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().fg(title_color).bold(),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        match self.description {
            Some(description) if inner.height > 1 => {
                buf.set_stringn(
                    inner.x,
                    inner.y,
                    description,
                    inner.width as usize,
                    Style::default().fg(scheme.text_muted).italic(),
                );
                Rect {
                    y: inner.y + 1,
                    height: inner.height - 1,
                    ..inner
                }
            }
            _ => inner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_area_excludes_description() {
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        let inner = ChartCard::new("Regional Performance")
            .description("Collection rate by region")
            .render(area, &mut buf);
        assert_eq!(inner, Rect::new(1, 2, 38, 7));
        let desc: String = (1..26).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert_eq!(desc, "Collection rate by region");
    }

    #[test]
    fn test_without_description() {
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        let inner = ChartCard::new("Insights").render(area, &mut buf);
        assert_eq!(inner, Rect::new(1, 1, 18, 3));
    }
}
