//! Centralized theme and color scheme for the dashboard.
//!
//! This module provides consistent styling across all views and overlays.

use ratatui::prelude::*;
use std::sync::{PoisonError, RwLock};

use crate::metrics::BadgeLevel;
use crate::model::{DashboardView, RiskBand};

/// Color scheme for the dashboard.
/// Provides semantic colors for different UI elements.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // Card variant colors
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub teal: Color,

    // Risk band colors
    pub risk_high: Color,
    pub risk_medium: Color,
    pub risk_low: Color,

    // UI element colors
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub background_alt: Color,
    pub text: Color,
    pub text_muted: Color,
    pub selection: Color,
    pub highlight: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // Badge foreground colors (for text on colored backgrounds)
    pub badge_fg_dark: Color,
    pub badge_fg_light: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Blue,
            accent: Color::Yellow,
            teal: Color::Rgb(0, 170, 160),

            risk_high: Color::Red,
            risk_medium: Color::Yellow,
            risk_low: Color::Green,

            muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            background: Color::Reset,
            background_alt: Color::Rgb(30, 30, 40),
            text: Color::White,
            text_muted: Color::Gray,
            selection: Color::DarkGray,
            highlight: Color::Yellow,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,

            badge_fg_dark: Color::Black,
            badge_fg_light: Color::White,
        }
    }

    /// Light theme
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Rgb(0, 100, 150),
            secondary: Color::Rgb(0, 0, 150),
            accent: Color::Rgb(180, 140, 0),
            teal: Color::Rgb(0, 128, 128),

            risk_high: Color::Rgb(200, 0, 0),
            risk_medium: Color::Rgb(180, 140, 0),
            risk_low: Color::Rgb(0, 128, 0),

            muted: Color::Rgb(150, 150, 150),
            border: Color::Rgb(180, 180, 180),
            border_focused: Color::Rgb(0, 100, 150),
            background: Color::Rgb(255, 255, 255),
            background_alt: Color::Rgb(240, 240, 245),
            text: Color::Rgb(30, 30, 30),
            text_muted: Color::Rgb(100, 100, 100),
            selection: Color::Rgb(200, 220, 240),
            highlight: Color::Rgb(180, 140, 0),

            success: Color::Rgb(0, 128, 0),
            warning: Color::Rgb(180, 140, 0),
            error: Color::Rgb(200, 0, 0),

            badge_fg_dark: Color::Rgb(30, 30, 30),
            badge_fg_light: Color::White,
        }
    }

    /// High contrast theme (accessibility)
    #[must_use]
    pub const fn high_contrast() -> Self {
        Self {
            primary: Color::LightCyan,
            secondary: Color::LightBlue,
            accent: Color::LightYellow,
            teal: Color::LightGreen,

            risk_high: Color::LightRed,
            risk_medium: Color::LightYellow,
            risk_low: Color::LightGreen,

            muted: Color::Gray,
            border: Color::White,
            border_focused: Color::LightCyan,
            background: Color::Black,
            background_alt: Color::Rgb(20, 20, 20),
            text: Color::White,
            text_muted: Color::Gray,
            selection: Color::White,
            highlight: Color::LightYellow,

            success: Color::LightGreen,
            warning: Color::LightYellow,
            error: Color::LightRed,

            badge_fg_dark: Color::Black,
            badge_fg_light: Color::White,
        }
    }

    #[must_use]
    pub const fn risk_color(&self, band: RiskBand) -> Color {
        match band {
            RiskBand::High => self.risk_high,
            RiskBand::Medium => self.risk_medium,
            RiskBand::Low => self.risk_low,
        }
    }

    #[must_use]
    pub const fn badge_color(&self, level: BadgeLevel) -> Color {
        match level {
            BadgeLevel::Strong => self.success,
            BadgeLevel::Moderate => self.warning,
            BadgeLevel::Weak => self.error,
        }
    }

    /// Color for a trend or delta: good news is green.
    #[must_use]
    pub const fn trend_color(&self, is_positive: bool) -> Color {
        if is_positive {
            self.success
        } else {
            self.error
        }
    }

    /// Chart color palette for bars
    #[must_use]
    pub const fn chart_palette(&self) -> [Color; 5] {
        [
            self.primary,
            self.success,
            self.warning,
            self.teal,
            self.secondary,
        ]
    }
}

/// Global theme instance (runtime switchable)
static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

/// Theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ColorScheme,
    pub name: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            colors: ColorScheme::dark(),
            name: "dark",
        }
    }

    #[must_use]
    pub const fn light() -> Self {
        Self {
            colors: ColorScheme::light(),
            name: "light",
        }
    }

    #[must_use]
    pub const fn high_contrast() -> Self {
        Self {
            colors: ColorScheme::high_contrast(),
            name: "high-contrast",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "high-contrast" | "highcontrast" | "hc" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }

    /// Get the next theme in the rotation
    #[must_use]
    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            "light" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}

/// Set the current theme
pub fn set_theme(theme: Theme) {
    *THEME.write().unwrap_or_else(PoisonError::into_inner) = theme;
}

/// Toggle to the next theme in rotation (dark -> light -> high-contrast -> dark)
pub fn toggle_theme() -> &'static str {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = theme.next();
    theme.name
}

/// Convenience function to get current colors
pub fn colors() -> ColorScheme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).colors
}

// ============================================================================
// Style Helpers
// ============================================================================

/// Common style presets for consistent UI elements
pub struct Styles;

impl Styles {
    pub fn section_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    pub fn text() -> Style {
        Style::default().fg(colors().text)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(colors().text_muted)
    }

    pub fn label() -> Style {
        Style::default().fg(colors().text_muted)
    }

    /// Value text style (for data values)
    pub fn value() -> Style {
        Style::default().fg(colors().text).bold()
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(colors().selection)
            .fg(colors().text)
            .bold()
    }

    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(colors().border_focused)
    }

    pub fn status_bar() -> Style {
        Style::default().bg(colors().background_alt)
    }

    pub fn shortcut_key() -> Style {
        Style::default().fg(colors().accent)
    }

    pub fn shortcut_desc() -> Style {
        Style::default().fg(colors().text_muted)
    }
}

// ============================================================================
// Badge Rendering Helpers
// ============================================================================

/// Risk band badge, e.g. ` High Risk ` on red.
pub fn risk_badge(band: RiskBand) -> Span<'static> {
    let scheme = colors();
    let fg = match band {
        RiskBand::High => scheme.badge_fg_light,
        RiskBand::Medium | RiskBand::Low => scheme.badge_fg_dark,
    };
    Span::styled(
        format!(" {} ", band.label()),
        Style::default().fg(fg).bg(scheme.risk_color(band)).bold(),
    )
}

/// Badge for a threshold label such as "Excellent" or "Declining".
pub fn level_badge(label: &str, level: BadgeLevel) -> Span<'static> {
    let scheme = colors();
    Span::styled(
        format!(" {label} "),
        Style::default()
            .fg(scheme.badge_fg_dark)
            .bg(scheme.badge_color(level))
            .bold(),
    )
}

/// Render a count badge
pub fn count_badge(text: &str, bg_color: Color) -> Span<'static> {
    Span::styled(
        format!(" {text} "),
        Style::default()
            .fg(colors().badge_fg_dark)
            .bg(bg_color)
            .bold(),
    )
}

// ============================================================================
// Footer Hints
// ============================================================================

/// View-specific footer hints
pub struct FooterHints;

impl FooterHints {
    /// Hints for a view, or the global hints for the placeholder.
    #[must_use]
    pub fn for_view(view: Option<DashboardView>) -> Vec<(&'static str, &'static str)> {
        let mut hints = Self::global();

        match view {
            Some(DashboardView::Branch) => {
                hints.insert(0, ("↑↓/jk", "select branch"));
                hints.insert(1, ("p", "peer comparison"));
            }
            Some(DashboardView::Product | DashboardView::Channel | DashboardView::Regional) => {
                hints.insert(0, ("↑↓/jk", "navigate"));
                hints.insert(1, ("Enter", "details"));
            }
            Some(DashboardView::Concerning) => {
                hints.insert(0, ("↑↓/jk", "navigate"));
                hints.insert(1, ("Enter", "case details"));
            }
            Some(DashboardView::Overview) | None => {}
        }

        hints
    }

    /// Hints while the filter panel has focus.
    #[must_use]
    pub fn filter_panel() -> Vec<(&'static str, &'static str)> {
        vec![
            ("↑↓", "field"),
            ("←→", "cycle value"),
            ("c", "clear all"),
            ("f/Esc", "close filters"),
        ]
    }

    /// Global hints (always shown)
    #[must_use]
    pub fn global() -> Vec<(&'static str, &'static str)> {
        vec![
            ("1-6/Tab", "views"),
            ("f", "filters"),
            ("e", "export"),
            ("l", "legend"),
            ("T", "theme"),
            ("?", "help"),
            ("q", "quit"),
        ]
    }
}

/// Render footer hints as spans
pub fn render_footer_hints(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{key}]"), Styles::shortcut_key()));
        spans.push(Span::styled((*desc).to_string(), Styles::shortcut_desc()));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_rotation() {
        let theme = Theme::dark();
        assert_eq!(theme.next().name, "light");
        assert_eq!(theme.next().next().name, "high-contrast");
        assert_eq!(theme.next().next().next().name, "dark");
    }

    #[test]
    fn test_from_name_falls_back_to_dark() {
        assert_eq!(Theme::from_name("HC").name, "high-contrast");
        assert_eq!(Theme::from_name("solarized").name, "dark");
    }

    #[test]
    fn test_footer_hints_for_branch() {
        let hints = FooterHints::for_view(Some(DashboardView::Branch));
        assert_eq!(hints[1], ("p", "peer comparison"));
        assert_eq!(hints.len(), FooterHints::global().len() + 2);
    }

    #[test]
    fn test_render_footer_hints() {
        let spans = render_footer_hints(&[("q", "quit"), ("?", "help")]);
        assert_eq!(spans.len(), 5);
        assert_eq!(spans[0].content, "[q]");
    }
}
