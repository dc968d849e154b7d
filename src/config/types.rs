//! Configuration types for renewals-dash.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::model::FilterSelection;
use crate::reports::ExportFormat;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Top-level configuration, loaded from a config file and overridden by
/// command-line arguments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Terminal dashboard settings
    pub tui: TuiConfig,
    /// Where the dashboard data comes from
    pub data: DataConfig,
    /// Export defaults
    pub export: ExportConfig,
    /// Filters applied when the dashboard opens
    pub filters: FilterSelection,
}

impl AppConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Fluent construction of an [`AppConfig`], mostly from CLI flags.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.config.tui.theme = theme.into();
        self
    }

    pub const fn mouse_enabled(mut self, enabled: bool) -> Self {
        self.config.tui.mouse_enabled = enabled;
        self
    }

    pub fn default_view(mut self, view: impl Into<String>) -> Self {
        self.config.tui.default_view = view.into();
        self
    }

    pub const fn tick_rate_ms(mut self, ms: u64) -> Self {
        self.config.tui.tick_rate_ms = ms;
        self
    }

    pub fn data_source(mut self, path: Option<PathBuf>) -> Self {
        self.config.data.source = path;
        self
    }

    pub const fn export_format(mut self, format: ExportFormat) -> Self {
        self.config.export.format = format;
        self
    }

    pub fn export_directory(mut self, dir: Option<PathBuf>) -> Self {
        self.config.export.directory = dir;
        self
    }

    pub fn filters(mut self, filters: FilterSelection) -> Self {
        self.config.filters = filters;
        self
    }

    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// TUI Preferences (persisted)
// ============================================================================

/// Dashboard preferences that persist across sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiPreferences {
    /// Theme chosen with the in-dashboard toggle; unset until the user toggles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// Tag of the view shown when the dashboard was last closed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_view: Option<String>,
}

impl TuiPreferences {
    /// Path of the preferences file.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("renewals-dash").join("preferences.json"))
    }

    /// Load preferences from disk, or defaults when missing or unreadable.
    #[must_use]
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    pub fn save(&self) -> std::io::Result<()> {
        match Self::config_path() {
            Some(path) => self.save_to(&path),
            None => Ok(()),
        }
    }

    /// Write preferences to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &std::path::Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, json)
    }
}

// ============================================================================
// Section Types
// ============================================================================

/// Terminal dashboard settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// View tag opened at startup (overview, branch, product, concerning,
    /// channel, regional)
    pub default_view: String,
    /// Tick interval for the event loop in milliseconds
    #[schemars(range(min = 16, max = 5000))]
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            mouse_enabled: true,
            default_view: "overview".to_string(),
            tick_rate_ms: super::defaults::DEFAULT_TICK_RATE_MS,
        }
    }
}

/// Data source settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DataConfig {
    /// JSON data file; the built-in sample data is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
}

/// Export defaults used by the dashboard's export overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ExportConfig {
    /// Default export format
    pub format: ExportFormat,
    /// Directory for exported files; the working directory when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides() {
        let config = AppConfig::builder()
            .theme("light")
            .mouse_enabled(false)
            .default_view("branch")
            .export_format(ExportFormat::Csv)
            .build();
        assert_eq!(config.tui.theme, "light");
        assert!(!config.tui.mouse_enabled);
        assert_eq!(config.tui.default_view, "branch");
        assert_eq!(config.export.format, ExportFormat::Csv);
        assert_eq!(config.data, DataConfig::default());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str("tui:\n  theme: light\n").unwrap();
        assert_eq!(config.tui.theme, "light");
        assert!(config.tui.mouse_enabled);
        assert_eq!(config.filters, FilterSelection::default());
    }

    #[test]
    fn test_preferences_roundtrip() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("preferences.json");
        let prefs = TuiPreferences {
            theme: Some("light".to_string()),
            last_view: Some("channel".to_string()),
        };
        prefs.save_to(&path).unwrap();
        let loaded: TuiPreferences =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded, prefs);
    }

    #[test]
    fn test_preferences_tolerate_missing_fields() {
        let prefs: TuiPreferences = serde_json::from_str(r#"{"theme":"light"}"#).unwrap();
        assert_eq!(prefs.last_view, None);
        let prefs: TuiPreferences = serde_json::from_str(r#"{"last_view":"branch"}"#).unwrap();
        assert_eq!(prefs.theme, None);
    }

    #[test]
    fn test_saving_last_view_leaves_theme_unset() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("preferences.json");
        let prefs = TuiPreferences {
            last_view: Some("regional".to_string()),
            ..TuiPreferences::default()
        };
        prefs.save_to(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(!written.contains("theme"));
        let loaded: TuiPreferences = serde_json::from_str(&written).unwrap();
        assert_eq!(loaded.theme, None);
    }
}
