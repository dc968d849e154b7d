//! Sparkline for monthly trends.

use crate::tui::theme::colors;
use ratatui::{prelude::*, widgets::Widget};

const LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// A one-row sparkline. Values at or below the baseline are drawn muted.
pub struct MiniSparkline {
    values: Vec<f64>,
    color: Color,
    baseline: f64,
}

impl MiniSparkline {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            color: colors().primary,
            baseline: f64::NEG_INFINITY,
        }
    }

    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub const fn baseline(mut self, baseline: f64) -> Self {
        self.baseline = baseline;
        self
    }

    /// Glyphs for each value, scaled between the series min and max.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn glyphs(&self) -> Vec<char> {
        let finite = || self.values.iter().copied().filter(|v| v.is_finite());
        let min = finite().fold(f64::INFINITY, f64::min);
        let max = finite().fold(f64::NEG_INFINITY, f64::max);
        let range = max - min;

        self.values
            .iter()
            .map(|&v| {
                if !v.is_finite() {
                    return LEVELS[0];
                }
                let normalized = if range > 0.0 { (v - min) / range } else { 1.0 };
                let idx = (normalized * (LEVELS.len() - 1) as f64).round() as usize;
                LEVELS[idx.min(LEVELS.len() - 1)]
            })
            .collect()
    }
}

impl Widget for MiniSparkline {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 2 || area.height < 1 || self.values.is_empty() {
            return;
        }

        let glyphs = self.glyphs();
        let width = area.width as usize;
        // Stretch short series across the area; sample long ones.
        let step = glyphs.len() as f64 / width.min(glyphs.len().max(1) * 4) as f64;
        let cols = (glyphs.len() as f64 / step).floor() as usize;
        let y = area.y + area.height - 1;

        for x in 0..cols.min(width) {
            let idx = ((x as f64 * step) as usize).min(glyphs.len() - 1);
            let color = if self.values[idx] > self.baseline {
                self.color
            } else {
                colors().muted
            };
            if let Some(cell) = buf.cell_mut((area.x + x as u16, y)) {
                cell.set_char(glyphs[idx]).set_style(Style::default().fg(color));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs_span_min_to_max() {
        let spark = MiniSparkline::new(vec![89.2, 90.1, 91.3]);
        assert_eq!(spark.glyphs(), vec!['▁', '▄', '█']);
    }

    #[test]
    fn test_flat_series_is_full_height() {
        let spark = MiniSparkline::new(vec![5.0, 5.0]);
        assert_eq!(spark.glyphs(), vec!['█', '█']);
    }

    #[test]
    fn test_render_fills_bottom_row() {
        let area = Rect::new(0, 0, 12, 2);
        let mut buf = Buffer::empty(area);
        MiniSparkline::new(vec![1.0, 2.0, 3.0]).render(area, &mut buf);
        assert_eq!(buf[(0, 1)].symbol(), "▁");
        assert_eq!(buf[(0, 0)].symbol(), " ");
        assert_ne!(buf[(11, 1)].symbol(), " ");
    }
}
