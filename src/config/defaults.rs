//! Default values and named presets.

use super::types::{AppConfig, ExportConfig, TuiConfig};
use crate::reports::ExportFormat;

/// Default event loop tick interval.
pub const DEFAULT_TICK_RATE_MS: u64 = 250;

/// Named configuration presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Dark theme, mouse on, opens on the overview
    Default,
    /// High-contrast theme for projectors and screen sharing, mouse off
    Presentation,
    /// Opens on branch performance and exports CSV
    Analyst,
}

impl ConfigPreset {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Presentation => "presentation",
            Self::Analyst => "analyst",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "presentation" | "present" | "projector" => Some(Self::Presentation),
            "analyst" | "analysis" => Some(Self::Analyst),
            _ => None,
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Dark theme with mouse support, opening on the overview",
            Self::Presentation => "High-contrast theme without mouse capture for screen sharing",
            Self::Analyst => "Opens on branch performance and exports CSV by default",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Presentation, Self::Analyst]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl AppConfig {
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Presentation => Self {
                tui: TuiConfig {
                    theme: "high-contrast".to_string(),
                    mouse_enabled: false,
                    ..TuiConfig::default()
                },
                ..Self::default()
            },
            ConfigPreset::Analyst => Self {
                tui: TuiConfig {
                    default_view: "branch".to_string(),
                    ..TuiConfig::default()
                },
                export: ExportConfig {
                    format: ExportFormat::Csv,
                    directory: None,
                },
                ..Self::default()
            },
        }
    }
}
