//! Unified error types for renewals-dash.
//!
//! The dashboard itself cannot fail on the built-in data; errors come from
//! the edges: loading an external data file, writing exports and reading
//! configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dashboard operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DashboardError {
    /// Errors while loading a dataset
    #[error("Failed to load dashboard data: {context}")]
    Data {
        context: String,
        #[source]
        source: DataErrorKind,
    },

    /// Errors while exporting a view
    #[error("Export failed: {context}")]
    Export {
        context: String,
        #[source]
        source: ExportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific data error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DataErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Dataset has no aggregate rows")]
    EmptyDataset,
}

/// Specific export error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ExportErrorKind {
    #[error("JSON serialization failed: {0}")]
    Json(String),

    #[error("Unknown view '{0}'")]
    UnknownView(String),

    #[error("Format '{format}' is not supported for the {view} view")]
    UnsupportedFormat { format: String, view: String },
}

/// Convenient Result type for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;

impl DashboardError {
    /// Create a data error with context
    pub fn data(context: impl Into<String>, source: DataErrorKind) -> Self {
        Self::Data {
            context: context.into(),
            source,
        }
    }

    /// Create an export error with context
    pub fn export(context: impl Into<String>, source: ExportErrorKind) -> Self {
        Self::Export {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: Some(path.into()),
            message: source.to_string(),
            source,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::data(
            "JSON deserialization",
            DataErrorKind::InvalidJson(err.to_string()),
        )
    }
}

/// Extension trait for adding context to errors.
///
/// Context strings are prepended to whatever context the error already
/// carries, so the final message reads outermost-first.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Lazy variant; the closure only runs on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<DashboardError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context(e.into(), &ctx)
        })
    }
}

fn add_context(err: DashboardError, new_ctx: &str) -> DashboardError {
    match err {
        DashboardError::Data { context, source } => DashboardError::Data {
            context: chain_context(new_ctx, &context),
            source,
        },
        DashboardError::Export { context, source } => DashboardError::Export {
            context: chain_context(new_ctx, &context),
            source,
        },
        DashboardError::Io {
            path,
            message,
            source,
        } => DashboardError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        DashboardError::Config(msg) => DashboardError::Config(chain_context(new_ctx, &msg)),
        DashboardError::Validation(msg) => {
            DashboardError::Validation(chain_context(new_ctx, &msg))
        }
    }
}

fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for turning `None` into a validation error.
pub trait OptionContext<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| DashboardError::Validation(context.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DashboardError::data("reading data.json", DataErrorKind::EmptyDataset);
        assert_eq!(
            err.to_string(),
            "Failed to load dashboard data: reading data.json"
        );
    }

    #[test]
    fn test_error_source_chain() {
        let err = DashboardError::export("x", ExportErrorKind::UnknownView("forecast".into()));
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("Unknown view 'forecast'"));
    }

    #[test]
    fn test_context_chaining() {
        fn inner() -> Result<()> {
            Err(DashboardError::data("parse", DataErrorKind::EmptyDataset))
        }
        let err = inner().context("loading data.json").unwrap_err();
        match err {
            DashboardError::Data { context, .. } => {
                assert_eq!(context, "loading data.json: parse");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_io_conversion_with_context() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let result: std::result::Result<(), std::io::Error> = Err(io);
        let err = result.with_context(|| "opening export").unwrap_err();
        assert!(err.to_string().contains("opening export: missing"));
    }

    #[test]
    fn test_option_context() {
        let value: Option<u8> = None;
        let err = value.context_none("branch BR999 not found").unwrap_err();
        assert!(matches!(err, DashboardError::Validation(ref m) if m.contains("BR999")));
    }
}
