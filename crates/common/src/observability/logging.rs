//! Tracing subscriber initialisation
//!
//! Console output always goes to stderr so stdout stays free for the
//! published text. An optional log file is written through a non-blocking
//! `tracing-appender` writer; keep the returned guard alive until exit or
//! buffered lines are lost.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

/// Settings accepted by [`init_tracing`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Default filter directive, e.g. `info` or `rewatch_core=debug,info`
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
    /// Additional log file (parent directories are created)
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self { level: "info".to_string(), json: false, file: None }
    }
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log filter '{directive}': {message}")]
    InvalidFilter { directive: String, message: String },

    #[error("Invalid log file path: {0}")]
    InvalidPath(String),

    #[error("Failed to prepare log directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tracing subscriber already installed: {0}")]
    AlreadyInitialised(String),
}

/// Build the filter from a directive string.
///
/// # Errors
/// Returns [`LoggingError::InvalidFilter`] when the directive cannot be parsed.
pub fn build_filter(directive: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(directive).map_err(|e| LoggingError::InvalidFilter {
        directive: directive.to_string(),
        message: e.to_string(),
    })
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `settings.level` when it is set and valid.
///
/// # Errors
/// Fails on an invalid filter or file path, or when a subscriber is already
/// installed for this process.
pub fn init_tracing(settings: &LogSettings) -> Result<Option<WorkerGuard>, LoggingError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_filter(&settings.level)?,
    };

    let (file_writer, guard) = match &settings.file {
        Some(path) => {
            let (dir, file_name) = split_log_path(path)?;
            std::fs::create_dir_all(&dir)?;
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(file_writer.is_none());

    let installed = match (settings.json, file_writer) {
        (true, Some(file)) => builder.json().with_writer(std::io::stderr.and(file)).try_init(),
        (true, None) => builder.json().with_writer(std::io::stderr).try_init(),
        (false, Some(file)) => builder.with_writer(std::io::stderr.and(file)).try_init(),
        (false, None) => builder.with_writer(std::io::stderr).try_init(),
    };
    installed.map_err(|e| LoggingError::AlreadyInitialised(e.to_string()))?;

    Ok(guard)
}

fn split_log_path(path: &Path) -> Result<(PathBuf, String), LoggingError> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(path.display().to_string()))?
        .to_string();

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok((dir, file_name))
}
