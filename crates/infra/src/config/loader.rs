//! Configuration loader
//!
//! Loads application configuration from a file, then applies environment
//! overrides and validates the result.
//!
//! ## Loading Strategy
//! 1. `REWATCH_CONFIG` names an explicit file, otherwise standard paths are
//!    probed
//! 2. No file found means built-in defaults
//! 3. Environment variables override individual values
//! 4. The merged configuration is validated
//!
//! ## Environment Variables
//! - `REWATCH_CONFIG`: Explicit config file path
//! - `REWATCH_TIME_ZONE`: IANA time zone of the run date
//! - `REWATCH_PUBLISH_HOUR`: Local publish hour (0-23)
//! - `REWATCH_LOOKBACK_HOURS`: Window length in hours
//! - `REWATCH_MIN_INTEREST_SCORE`: Minimum score for a match to be posted
//! - `REWATCH_LOG_LEVEL`: Log level or filter directive
//! - `REWATCH_LOG_FORMAT`: `pretty` or `json`
//! - `REWATCH_FIXTURES`: JSON fixture file for the bundled sources
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./rewatch.toml`, `./rewatch.json` (current working directory)
//! 2. `./config.toml`, `./config.json` (current working directory)
//! 3. The same names next to the executable

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use rewatch_domain::{AppConfig, LogFormat, Result, RewatchError};

pub const CONFIG_PATH_ENV: &str = "REWATCH_CONFIG";
pub const TIME_ZONE_ENV: &str = "REWATCH_TIME_ZONE";
pub const PUBLISH_HOUR_ENV: &str = "REWATCH_PUBLISH_HOUR";
pub const LOOKBACK_HOURS_ENV: &str = "REWATCH_LOOKBACK_HOURS";
pub const MIN_INTEREST_SCORE_ENV: &str = "REWATCH_MIN_INTEREST_SCORE";
pub const LOG_LEVEL_ENV: &str = "REWATCH_LOG_LEVEL";
pub const LOG_FORMAT_ENV: &str = "REWATCH_LOG_FORMAT";
pub const FIXTURES_ENV: &str = "REWATCH_FIXTURES";

const CONFIG_FILE_NAMES: [&str; 4] = ["rewatch.toml", "rewatch.json", "config.toml", "config.json"];

/// Load, override and validate the application configuration
///
/// # Errors
/// Returns `RewatchError::Config` if:
/// - An explicitly named file is missing or unreadable
/// - File format is invalid
/// - An environment override cannot be parsed
/// - The merged configuration fails validation
pub fn load() -> Result<AppConfig> {
    let explicit = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);

    let mut config = match explicit.or_else(probe_config_paths) {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::info!("No configuration file found, using defaults");
            AppConfig::default()
        }
    };

    apply_env_overrides(&mut config)?;
    validate(&config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Supports JSON and
/// TOML (detected by file extension). A relative `fixtures` path is resolved
/// against the directory of the config file.
///
/// # Errors
/// Returns `RewatchError::Config` if the file is missing, unreadable or
/// malformed, or if no file is found while probing.
pub fn load_from_file(path: Option<PathBuf>) -> Result<AppConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(RewatchError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            RewatchError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| RewatchError::Config(format!("Failed to read config file: {e}")))?;

    let mut config = parse_config(&contents, &config_path)?;
    if let (Some(fixtures), Some(dir)) = (config.fixtures.as_ref(), config_path.parent()) {
        if fixtures.is_relative() {
            config.fixtures = Some(dir.join(fixtures));
        }
    }
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<AppConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| RewatchError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| RewatchError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(RewatchError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the standard paths for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(CONFIG_FILE_NAMES.iter().map(|name| cwd.join(name)));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(CONFIG_FILE_NAMES.iter().map(|name| exe_dir.join(name)));
        }
    }

    candidates.into_iter().find(|path| path.is_file())
}

/// Apply `REWATCH_*` environment overrides on top of `config`
///
/// Unset or blank variables leave the value untouched.
///
/// # Errors
/// Returns `RewatchError::Config` when a numeric or enum value cannot be
/// parsed.
pub fn apply_env_overrides(config: &mut AppConfig) -> Result<()> {
    if let Some(time_zone) = env_string(TIME_ZONE_ENV) {
        config.digest.time_zone = time_zone;
    }
    if let Some(hour) = env_parse::<u32>(PUBLISH_HOUR_ENV)? {
        config.digest.publish_hour = hour;
    }
    if let Some(hours) = env_parse::<u32>(LOOKBACK_HOURS_ENV)? {
        config.digest.lookback_hours = hours;
    }
    if let Some(score) = env_parse::<f64>(MIN_INTEREST_SCORE_ENV)? {
        config.digest.min_interest_score = score;
    }
    if let Some(level) = env_string(LOG_LEVEL_ENV) {
        config.logging.level = level;
    }
    if let Some(format) = env_string(LOG_FORMAT_ENV) {
        config.logging.format = parse_log_format(&format)?;
    }
    if let Some(fixtures) = env_string(FIXTURES_ENV) {
        config.fixtures = Some(PathBuf::from(fixtures));
    }
    Ok(())
}

/// Domain validation plus a check that the time zone is known
fn validate(config: &AppConfig) -> Result<()> {
    config.validate()?;
    rewatch_core::parse_time_zone(&config.digest.time_zone)?;
    Ok(())
}

fn parse_log_format(value: &str) -> Result<LogFormat> {
    match value.trim().to_ascii_lowercase().as_str() {
        "pretty" | "text" => Ok(LogFormat::Pretty),
        "json" => Ok(LogFormat::Json),
        other => Err(RewatchError::Config(format!("Invalid log format: {other}"))),
    }
}

/// Non-blank environment variable, trimmed
fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Parse an optional environment variable
///
/// # Errors
/// Returns `RewatchError::Config` if the variable is set but invalid.
fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    env_string(key)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|e| RewatchError::Config(format!("Invalid value for {key}: {e}")))
        })
        .transpose()
}
