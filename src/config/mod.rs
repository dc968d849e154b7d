//! Configuration for renewals-dash.
//!
//! - Typed configuration sections with serde defaults
//! - Validation returning every problem at once
//! - Named presets
//! - YAML config file discovery and loading
//! - Merging of CLI arguments over file settings
//!
//! # Configuration File
//!
//! Place a `.renewals-dash.yaml` file in your project root or
//! `~/.config/renewals-dash/`:
//!
//! ```yaml
//! tui:
//!   theme: light
//!   default_view: concerning
//! filters:
//!   region: North
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{ConfigPreset, DEFAULT_TICK_RATE_MS};
pub use types::{
    AppConfig, AppConfigBuilder, DataConfig, ExportConfig, TuiConfig, TuiPreferences,
};
pub use validation::{ConfigError, Validatable, VALID_THEMES};

pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config,
    load_config_file, load_or_default, search_locations, ConfigFileError, CONFIG_FILE_NAMES,
};

/// JSON Schema for the configuration file format, for editor validation
/// and completion.
pub fn generate_json_schema() -> serde_json::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_lists_sections() {
        let schema = generate_json_schema().unwrap();
        for section in ["tui", "data", "export", "filters", "default_view"] {
            assert!(schema.contains(section), "schema missing {section}");
        }
    }
}
