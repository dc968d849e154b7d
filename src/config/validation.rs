//! Configuration validation.

use super::types::{AppConfig, DataConfig, ExportConfig, TuiConfig};
use crate::model::{DashboardView, FilterSelection};

/// Theme names accepted in configuration and preferences.
pub const VALID_THEMES: [&str; 3] = ["dark", "light", "high-contrast"];

// ============================================================================
// Configuration Error
// ============================================================================

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// Dotted path of the offending field
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

pub trait Validatable {
    /// Validate the configuration, returning every error found.
    fn validate(&self) -> Vec<ConfigError>;

    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.tui.validate());
        errors.extend(self.data.validate());
        errors.extend(self.export.validate());
        errors.extend(self.filters.validate());
        errors
    }
}

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !VALID_THEMES.contains(&self.theme.as_str()) {
            errors.push(ConfigError {
                field: "tui.theme".to_string(),
                message: format!(
                    "Invalid theme '{}'. Valid options: {}",
                    self.theme,
                    VALID_THEMES.join(", ")
                ),
            });
        }

        if DashboardView::from_tag(&self.default_view).is_none() {
            let valid: Vec<&str> = DashboardView::ALL.iter().map(DashboardView::tag).collect();
            errors.push(ConfigError {
                field: "tui.default_view".to_string(),
                message: format!(
                    "Invalid view '{}'. Valid options: {}",
                    self.default_view,
                    valid.join(", ")
                ),
            });
        }

        if !(16..=5000).contains(&self.tick_rate_ms) {
            errors.push(ConfigError {
                field: "tui.tick_rate_ms".to_string(),
                message: format!(
                    "Tick rate must be between 16 and 5000 ms, got {}",
                    self.tick_rate_ms
                ),
            });
        }
        errors
    }
}

impl Validatable for DataConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(ref source) = self.source {
            if !source.exists() {
                errors.push(ConfigError {
                    field: "data.source".to_string(),
                    message: format!("Data file does not exist: {}", source.display()),
                });
            } else if source.extension().and_then(|e| e.to_str()) != Some("json") {
                errors.push(ConfigError {
                    field: "data.source".to_string(),
                    message: format!("Data file must be JSON: {}", source.display()),
                });
            }
        }
        errors
    }
}

impl Validatable for ExportConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(ref dir) = self.directory {
            if dir.exists() && !dir.is_dir() {
                errors.push(ConfigError {
                    field: "export.directory".to_string(),
                    message: format!("Export path is not a directory: {}", dir.display()),
                });
            }
        }
        errors
    }
}

impl Validatable for FilterSelection {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let (Some(from), Some(to)) = (self.date_range.from, self.date_range.to) {
            if from > to {
                errors.push(ConfigError {
                    field: "filters.date_range".to_string(),
                    message: format!("Start date {from} is after end date {to}"),
                });
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DateRange;
    use chrono::NaiveDate;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let config = AppConfig::builder().theme("solarized").build();
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "tui.theme");
        assert!(errors[0].message.contains("dark, light, high-contrast"));
    }

    #[test]
    fn test_unknown_view_rejected() {
        let config = AppConfig::builder().default_view("forecast").build();
        let errors = config.validate();
        assert!(errors.iter().any(|e| e.field == "tui.default_view"));
    }

    #[test]
    fn test_tick_rate_bounds() {
        assert!(!AppConfig::builder().tick_rate_ms(5).build().is_valid());
        assert!(AppConfig::builder().tick_rate_ms(100).build().is_valid());
    }

    #[test]
    fn test_inverted_date_range_rejected() {
        let filters = FilterSelection::new().with_date_range(DateRange {
            from: NaiveDate::from_ymd_opt(2025, 8, 1),
            to: NaiveDate::from_ymd_opt(2025, 1, 1),
        });
        let errors = filters.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "filters.date_range: Start date 2025-08-01 is after end date 2025-01-01");
    }

    #[test]
    fn test_missing_data_file_rejected() {
        let config = AppConfig::builder()
            .data_source(Some("/nonexistent/data.json".into()))
            .build();
        assert!(config
            .validate()
            .iter()
            .any(|e| e.field == "data.source"));
    }
}
