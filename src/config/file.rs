//! Configuration file loading and discovery.

use super::types::AppConfig;
use super::validation::Validatable;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Config file names, in lookup order within a directory.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".renewals-dash.yaml",
    ".renewals-dash.yml",
    "renewals-dash.yaml",
    "renewals-dash.yml",
];

/// Directories searched for a config file, in order, excluding an
/// explicit path.
#[must_use]
pub fn search_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        locations.push(cwd);
    }
    if let Some(git_root) = find_git_root() {
        if !locations.contains(&git_root) {
            locations.push(git_root);
        }
    }
    if let Some(config_dir) = dirs::config_dir() {
        locations.push(config_dir.join("renewals-dash"));
    }
    if let Some(home) = dirs::home_dir() {
        locations.push(home);
    }
    locations
}

/// Discover a config file.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root
/// 4. User config directory (`~/.config/renewals-dash/`)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    search_locations()
        .iter()
        .find_map(|dir| find_config_in_dir(dir))
}

fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Walk up from the working directory to the nearest `.git`.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    NotFound(PathBuf),
    Io(std::io::Error),
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load the discovered config file, falling back to defaults.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                let errors = config.validate();
                if errors.is_empty() {
                    tracing::debug!("Loaded config from {}", path.display());
                    return (config, Some(path));
                }
                for error in &errors {
                    tracing::warn!("Invalid config in {}: {}", path.display(), error);
                }
                (AppConfig::default(), None)
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence
    /// wherever it differs from the defaults.
    pub fn merge(&mut self, other: &Self) {
        let defaults = Self::default();

        if other.tui.theme != defaults.tui.theme {
            self.tui.theme.clone_from(&other.tui.theme);
        }
        if !other.tui.mouse_enabled {
            self.tui.mouse_enabled = false;
        }
        if other.tui.default_view != defaults.tui.default_view {
            self.tui.default_view.clone_from(&other.tui.default_view);
        }
        if other.tui.tick_rate_ms != defaults.tui.tick_rate_ms {
            self.tui.tick_rate_ms = other.tui.tick_rate_ms;
        }

        if other.data.source.is_some() {
            self.data.source.clone_from(&other.data.source);
        }

        if other.export.format != defaults.export.format {
            self.export.format = other.export.format;
        }
        if other.export.directory.is_some() {
            self.export.directory.clone_from(&other.export.directory);
        }

        if other.filters.has_active_filters() {
            self.filters = other.filters.clone();
        }
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// The default configuration serialized as YAML.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# renewals-dash configuration
# Place this file at .renewals-dash.yaml in your project root or ~/.config/renewals-dash/

{}
",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}

/// A commented example config with every option.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# renewals-dash Configuration File
# ================================
#
# Place it at:
#   - .renewals-dash.yaml in your project root
#   - ~/.config/renewals-dash/renewals-dash.yaml for global config
#
# Command-line arguments always override file settings.

# Terminal dashboard
tui:
  # Theme: dark, light, high-contrast
  theme: dark
  mouse_enabled: true
  # View opened at startup: overview, branch, product, concerning,
  # channel, regional
  default_view: overview
  # Event loop tick in milliseconds (16-5000)
  tick_rate_ms: 250

# Data source
data:
  # JSON file in the shape written by `renewals-dash export --view all -f json`;
  # null uses the built-in sample data
  source: null

# Exports from the dashboard (press `e`)
export:
  # Format: json, csv, markdown
  format: json
  # directory: ./exports

# Filters applied at startup; `all` or an empty string disables a filter
filters:
  region: all
  branch: all
  product: all
  channel: all
  payment_mechanism: all
  search: ''
  # Inclusive, compared by month, e.g. 2025-06-01
  date_range:
    from: null
    to: null
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::ExportFormat;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".renewals-dash.yaml");
        std::fs::write(&config_path, "tui:\n  theme: light\n").unwrap();

        assert_eq!(find_config_in_dir(tmp.path()), Some(config_path));
    }

    #[test]
    fn test_find_config_prefers_dotfile() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("renewals-dash.yml"), "").unwrap();
        std::fs::write(tmp.path().join(".renewals-dash.yaml"), "").unwrap();

        let found = find_config_in_dir(tmp.path());
        assert_eq!(found, Some(tmp.path().join(".renewals-dash.yaml")));
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(find_config_in_dir(tmp.path()), None);
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");

        let yaml = r"
tui:
  theme: high-contrast
  default_view: concerning
export:
  format: markdown
filters:
  region: North
";
        std::fs::write(&config_path, yaml).unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.tui.theme, "high-contrast");
        assert_eq!(config.tui.default_view, "concerning");
        assert_eq!(config.export.format, ExportFormat::Markdown);
        assert_eq!(config.filters.region, "North");
        assert_eq!(config.filters.branch, "all");
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_load_config_file_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.yaml");
        std::fs::write(&path, "tui: [unclosed").unwrap();
        assert!(matches!(load_config_file(&path), Err(ConfigFileError::Parse(_))));
    }

    #[test]
    fn test_invalid_file_falls_back_to_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.yaml");
        std::fs::write(&path, "tui: [unclosed").unwrap();
        let (config, loaded_from) = load_or_default(Some(&path));
        assert_eq!(config, AppConfig::default());
        assert_eq!(loaded_from, None);
    }

    #[test]
    fn test_file_failing_validation_falls_back_to_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("dash.yaml");
        std::fs::write(
            &path,
            "tui:\n  theme: solarized\n  default_view: forecast\n  tick_rate_ms: 0\n",
        )
        .unwrap();

        assert_eq!(load_config_file(&path).unwrap().validate().len(), 3);
        let (config, loaded_from) = load_or_default(Some(&path));
        assert_eq!(config, AppConfig::default());
        assert_eq!(loaded_from, None);
        assert!(config.tui.tick_rate_ms > 0);
    }

    #[test]
    fn test_valid_file_is_kept() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("dash.yaml");
        std::fs::write(&path, "tui:\n  theme: light\n  tick_rate_ms: 500\n").unwrap();

        let (config, loaded_from) = load_or_default(Some(&path));
        assert_eq!(config.tui.theme, "light");
        assert_eq!(config.tui.tick_rate_ms, 500);
        assert_eq!(loaded_from, Some(path));
    }

    #[test]
    fn test_config_merge() {
        let mut base = AppConfig::builder().theme("light").build();
        let overrides = AppConfig::builder()
            .default_view("regional")
            .mouse_enabled(false)
            .data_source(Some("data.json".into()))
            .build();

        base.merge(&overrides);

        assert_eq!(base.tui.theme, "light");
        assert_eq!(base.tui.default_view, "regional");
        assert!(!base.tui.mouse_enabled);
        assert_eq!(base.data.source, Some(PathBuf::from("data.json")));
    }

    #[test]
    fn test_full_example_parses() {
        let config: AppConfig = serde_yaml::from_str(&generate_full_example_config()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_generate_example_config() {
        let example = generate_example_config();
        assert!(example.contains("tui:"));
        assert!(example.contains("default_view"));
    }

    #[test]
    fn test_discover_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("custom-config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "tui:\n  theme: light").unwrap();

        assert_eq!(discover_config_file(Some(&config_path)), Some(config_path));
    }
}
