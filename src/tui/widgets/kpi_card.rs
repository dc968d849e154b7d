//! KPI card: a bordered tile with a headline value and an optional trend.

use crate::metrics::format_signed;
use crate::tui::theme::colors;
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Accent used for the card border and value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardVariant {
    #[default]
    Default,
    Primary,
    Secondary,
    Accent,
    Teal,
}

impl CardVariant {
    fn color(self) -> Color {
        let scheme = colors();
        match self {
            Self::Default => scheme.text,
            Self::Primary => scheme.primary,
            Self::Secondary => scheme.secondary,
            Self::Accent => scheme.accent,
            Self::Teal => scheme.teal,
        }
    }
}

/// Change against the previous period.
#[derive(Debug, Clone, PartialEq)]
pub struct Trend {
    pub value: f64,
    pub label: String,
    /// Whether the change is good news; drives the colour, not the sign.
    pub is_positive: bool,
}

impl Trend {
    pub fn new(value: f64, label: impl Into<String>, is_positive: bool) -> Self {
        Self {
            value,
            label: label.into(),
            is_positive,
        }
    }

    /// `+2.4% vs last month`
    #[must_use]
    pub fn text(&self) -> String {
        format!("{}% {}", format_signed(self.value, 1), self.label)
    }
}

#[derive(Debug, Clone)]
pub struct KpiCard {
    title: String,
    value: String,
    subtitle: Option<String>,
    trend: Option<Trend>,
    variant: CardVariant,
}

impl KpiCard {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            subtitle: None,
            trend: None,
            variant: CardVariant::Default,
        }
    }

    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    #[must_use]
    pub fn trend(mut self, trend: Trend) -> Self {
        self.trend = Some(trend);
        self
    }

    #[must_use]
    pub const fn variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
        self
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let scheme = colors();
        let accent = self.variant.color();
        let mut lines = vec![Line::styled(
            self.value.clone(),
            Style::default().fg(accent).bold(),
        )];
        if let Some(subtitle) = &self.subtitle {
            lines.push(Line::styled(
                subtitle.clone(),
                Style::default().fg(scheme.text_muted),
            ));
        }
        if let Some(trend) = &self.trend {
            let arrow = if trend.value >= 0.0 { "▲ " } else { "▼ " };
            lines.push(Line::from(Span::styled(
                format!("{arrow}{}", trend.text()),
                Style::default().fg(scheme.trend_color(trend.is_positive)),
            )));
        }
        lines
    }
}

impl Widget for KpiCard {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let scheme = colors();
        let border = match self.variant {
            CardVariant::Default => scheme.border,
            other => other.color(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().fg(scheme.text_muted),
            ));
        Paragraph::new(self.lines()).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(card: KpiCard, width: u16, height: u16) -> Vec<String> {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        card.render(area, &mut buf);
        (0..height)
            .map(|y| (0..width).map(|x| buf[(x, y)].symbol().to_string()).collect())
            .collect()
    }

    #[test]
    fn test_trend_text_sign() {
        assert_eq!(Trend::new(2.4, "vs last month", true).text(), "+2.4% vs last month");
        assert_eq!(Trend::new(-8.5, "vs last month", true).text(), "-8.5% vs last month");
        assert_eq!(Trend::new(0.0, "flat", true).text(), "0.0% flat");
    }

    #[test]
    fn test_card_renders_title_value_and_trend() {
        let card = KpiCard::new("Collection Rate", "91.1%")
            .trend(Trend::new(1.2, "vs last month", true))
            .variant(CardVariant::Secondary);
        let rows = rendered(card, 30, 4);
        assert!(rows[0].contains("Collection Rate"));
        assert!(rows[1].contains("91.1%"));
        assert!(rows[2].contains("+1.2% vs last month"));
    }

    #[test]
    fn test_subtitle_sits_under_value() {
        let card = KpiCard::new("Premium Leakage", "₹5.8M").subtitle("Uncollected premiums");
        let rows = rendered(card, 30, 4);
        assert!(rows[2].contains("Uncollected premiums"));
    }
}
