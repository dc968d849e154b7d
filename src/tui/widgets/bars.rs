//! Horizontal bar rows for the chart panels.

use crate::metrics::safe_ratio;
use crate::tui::theme::colors;
use ratatui::{prelude::*, widgets::Widget};

use super::fit_width;

/// One labelled bar: `Label        ████████░░░░  91.2%`.
pub struct HorizontalBar {
    label: String,
    value: f64,
    max_value: f64,
    value_text: String,
    color: Color,
    label_width: u16,
}

impl HorizontalBar {
    pub fn new(label: impl Into<String>, value: f64, max_value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            max_value,
            value_text: String::new(),
            color: colors().primary,
            label_width: 14,
        }
    }

    /// Text printed after the bar, usually the formatted value.
    #[must_use]
    pub fn value_text(mut self, text: impl Into<String>) -> Self {
        self.value_text = text.into();
        self
    }

    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub const fn label_width(mut self, width: u16) -> Self {
        self.label_width = width;
        self
    }

    /// Number of filled cells for a bar of `width` cells.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn filled_cells(&self, width: usize) -> usize {
        let ratio = safe_ratio(self.value, self.max_value).clamp(0.0, 1.0);
        ((ratio * width as f64).round() as usize).min(width)
    }
}

impl Widget for HorizontalBar {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 10 || area.height < 1 {
            return;
        }

        let label_width = self.label_width.min(area.width / 3);
        let value_width = (unicode_width::UnicodeWidthStr::width(self.value_text.as_str()) as u16)
            .min(area.width / 3);
        let bar_width = area
            .width
            .saturating_sub(label_width + value_width + 2) as usize;

        let y = area.y;
        let mut x = area.x;

        let label = fit_width(&self.label, label_width as usize);
        buf.set_stringn(x, y, &label, label_width as usize, Style::default().fg(colors().text));
        x += label_width + 1;

        let filled = self.filled_cells(bar_width);
        for i in 0..bar_width {
            let (ch, style) = if i < filled {
                ("█", Style::default().fg(self.color))
            } else {
                ("░", Style::default().fg(colors().muted))
            };
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(ch).set_style(style);
            }
            x += 1;
        }

        if !self.value_text.is_empty() {
            buf.set_stringn(
                x + 1,
                y,
                &self.value_text,
                value_width as usize,
                Style::default().fg(self.color).bold(),
            );
        }
    }
}
