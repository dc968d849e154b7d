//! Dashboard command handler.
//!
//! Implements the `dashboard` subcommand (also the default when no
//! subcommand is given).

use std::time::Duration;

use anyhow::{Context, Result};

use crate::config::{AppConfig, TuiPreferences};
use crate::tui::{self, DashboardApp, Theme};

/// Options that only apply to the interactive dashboard.
#[derive(Debug, Clone, Default)]
pub struct DashboardOptions {
    /// View tag to open; unknown tags mount the placeholder
    pub view: Option<String>,
    /// Reopen the view that was active when the dashboard last closed
    pub resume: bool,
    /// Theme named on the command line; beats both prefs and config
    pub theme: Option<String>,
}

/// Run the dashboard command
pub fn run_dashboard(config: &AppConfig, options: &DashboardOptions) -> Result<i32> {
    let data = super::load_data(config)?;
    let prefs = TuiPreferences::load();

    tui::set_theme(Theme::from_name(resolve_theme(options, &prefs, config)));

    let mut app = DashboardApp::from_config(data, config);
    let start_view = options.view.clone().or_else(|| {
        if options.resume {
            prefs.last_view.clone()
        } else {
            None
        }
    });
    if let Some(tag) = start_view {
        app = app.with_view(&tag);
    }
    tracing::debug!(view = app.active_view.tag(), "starting dashboard");

    let tick_rate = Duration::from_millis(config.tui.tick_rate_ms);
    tui::run_dashboard(&mut app, tick_rate).context("terminal error")?;
    Ok(0)
}

/// `--theme`, then a theme saved by the in-dashboard toggle, then config.
fn resolve_theme<'a>(
    options: &'a DashboardOptions,
    prefs: &'a TuiPreferences,
    config: &'a AppConfig,
) -> &'a str {
    options
        .theme
        .as_deref()
        .or(prefs.theme.as_deref())
        .unwrap_or(config.tui.theme.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn light_config() -> AppConfig {
        AppConfig::builder().theme("light").build()
    }

    #[test]
    fn test_config_theme_survives_saved_last_view() {
        let prefs = TuiPreferences {
            last_view: Some("branch".to_string()),
            ..TuiPreferences::default()
        };
        let options = DashboardOptions::default();
        let config = light_config();
        let theme = resolve_theme(&options, &prefs, &config);
        assert_eq!(theme, "light");
    }

    #[test]
    fn test_toggled_theme_beats_config() {
        let prefs = TuiPreferences {
            theme: Some("high-contrast".to_string()),
            last_view: None,
        };
        let options = DashboardOptions::default();
        let config = light_config();
        let theme = resolve_theme(&options, &prefs, &config);
        assert_eq!(theme, "high-contrast");
    }

    #[test]
    fn test_cli_theme_beats_everything() {
        let prefs = TuiPreferences {
            theme: Some("high-contrast".to_string()),
            last_view: None,
        };
        let options = DashboardOptions {
            theme: Some("dark".to_string()),
            ..DashboardOptions::default()
        };
        assert_eq!(resolve_theme(&options, &prefs, &light_config()), "dark");
    }
}
