//! Config command handlers: `config show`, `config path` and `config init`.

use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::config::{
    discover_config_file, generate_full_example_config, load_config_file, load_or_default,
    search_locations,
    Validatable, CONFIG_FILE_NAMES,
};

/// Print the effective configuration as YAML.
pub fn run_config_show(explicit: Option<&Path>, out: &mut dyn Write) -> Result<i32> {
    let (config, loaded_from) = load_or_default(explicit);
    match (&loaded_from, discover_config_file(explicit)) {
        (Some(path), _) => writeln!(out, "# Loaded from: {}", path.display())?,
        (None, Some(rejected)) => {
            writeln!(out, "# Ignored {}; showing defaults", rejected.display())?;
            match load_config_file(&rejected) {
                Ok(raw) => {
                    for error in raw.validate() {
                        writeln!(out, "# warning: {error}")?;
                    }
                }
                Err(e) => writeln!(out, "# warning: {e}")?,
            }
        }
        (None, None) => writeln!(out, "# No config file found; showing defaults")?,
    }
    let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
    write!(out, "{yaml}")?;
    Ok(0)
}

/// Print the search locations and the file that would be used.
pub fn run_config_path(explicit: Option<&Path>, out: &mut dyn Write) -> Result<i32> {
    writeln!(out, "Config file search paths (in order):")?;
    if let Some(path) = explicit {
        writeln!(out, "  {} (--config)", path.display())?;
    }
    for dir in search_locations() {
        writeln!(out, "  {}", dir.display())?;
    }
    writeln!(out)?;
    writeln!(out, "Recognized file names:")?;
    for name in CONFIG_FILE_NAMES {
        writeln!(out, "  {name}")?;
    }
    writeln!(out)?;
    match discover_config_file(explicit) {
        Some(path) => writeln!(out, "Active config file: {}", path.display())?,
        None => writeln!(out, "No config file found.")?,
    }
    Ok(0)
}

/// Write a commented example config into `dir`.
pub fn run_config_init(dir: &Path) -> Result<i32> {
    let target = dir.join(CONFIG_FILE_NAMES[0]);
    if target.exists() {
        bail!(
            "{} already exists. Remove it first to re-initialize.",
            target.display()
        );
    }
    std::fs::write(&target, generate_full_example_config())
        .with_context(|| format!("failed to write {}", target.display()))?;
    tracing::info!("Created {}", target.display());
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_refuses_to_overwrite() {
        let tmp = tempfile::TempDir::new().unwrap();
        assert_eq!(run_config_init(tmp.path()).unwrap(), 0);
        let written = std::fs::read_to_string(tmp.path().join(".renewals-dash.yaml")).unwrap();
        assert!(written.contains("tui:"));
        assert!(run_config_init(tmp.path()).is_err());
    }

    #[test]
    fn test_show_reads_explicit_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("dash.yaml");
        std::fs::write(&path, "tui:\n  theme: light\n").unwrap();

        let mut buf = Vec::new();
        run_config_show(Some(&path), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("# Loaded from"));
        assert!(text.contains("theme: light"));
    }

    #[test]
    fn test_show_reports_rejected_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("dash.yaml");
        std::fs::write(&path, "tui:\n  tick_rate_ms: 0\n").unwrap();

        let mut buf = Vec::new();
        run_config_show(Some(&path), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("# Ignored"));
        assert!(text.contains("# warning: tui.tick_rate_ms"));
        assert!(text.contains("tick_rate_ms: 250"));
    }
}
