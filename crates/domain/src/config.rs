//! Configuration structures
//!
//! Plain serde structs; loading and environment overrides live in
//! `rewatch-infra`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_LOG_LEVEL, DEFAULT_LOOKBACK_HOURS, DEFAULT_MIN_INTEREST_SCORE, DEFAULT_PUBLISH_HOUR,
    DEFAULT_TIME_ZONE, MAX_LOOKBACK_HOURS,
};
use crate::types::ScoringRule;
use crate::{Result, RewatchError};

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub digest: DigestConfig,
    pub logging: LoggingConfig,
    pub render: RenderLabels,
    pub rules: Vec<ScoringRule>,
    /// JSON fixture file backing the bundled results and video sources
    pub fixtures: Option<PathBuf>,
}

impl AppConfig {
    /// Reject values the pipeline cannot run with.
    ///
    /// The time zone itself is resolved by the window calculator, which
    /// reports unknown identifiers the same way.
    pub fn validate(&self) -> Result<()> {
        self.digest.validate()
    }
}

/// Settings for one digest run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigestConfig {
    /// IANA time zone the run date is computed in
    pub time_zone: String,
    /// Local hour (0..=23) the digest is anchored to
    pub publish_hour: u32,
    pub lookback_hours: u32,
    /// Matches scoring below this are left out of the post
    pub min_interest_score: f64,
}

impl DigestConfig {
    pub fn validate(&self) -> Result<()> {
        if self.publish_hour > 23 {
            return Err(RewatchError::Config(format!(
                "publish_hour must be within 0..=23, got {}",
                self.publish_hour
            )));
        }
        if self.lookback_hours == 0 || self.lookback_hours > MAX_LOOKBACK_HOURS {
            return Err(RewatchError::Config(format!(
                "lookback_hours must be within 1..={MAX_LOOKBACK_HOURS}, got {}",
                self.lookback_hours
            )));
        }
        if !self.min_interest_score.is_finite() {
            return Err(RewatchError::Config(format!(
                "min_interest_score must be finite, got {}",
                self.min_interest_score
            )));
        }
        if self.time_zone.trim().is_empty() {
            return Err(RewatchError::Config("time_zone must not be empty".to_string()));
        }
        Ok(())
    }
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            time_zone: DEFAULT_TIME_ZONE.to_string(),
            publish_hour: DEFAULT_PUBLISH_HOUR,
            lookback_hours: DEFAULT_LOOKBACK_HOURS,
            min_interest_score: DEFAULT_MIN_INTEREST_SCORE,
        }
    }
}

/// Output format for log lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: DEFAULT_LOG_LEVEL.to_string(), format: LogFormat::Pretty, file: None }
    }
}

/// Fixed labels used by the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderLabels {
    pub no_matches: String,
    pub highlights: String,
    pub full: String,
    pub not_found: String,
    pub issues_header: String,
}

impl Default for RenderLabels {
    fn default() -> Self {
        Self {
            no_matches: "No matches.".to_string(),
            highlights: "highlights".to_string(),
            full: "full".to_string(),
            not_found: "link not found".to_string(),
            issues_header: "⚠️ Issues:".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_moscow_morning_digest() {
        let cfg = DigestConfig::default();
        assert_eq!(cfg.time_zone, "Europe/Moscow");
        assert_eq!(cfg.publish_hour, 8);
        assert_eq!(cfg.lookback_hours, 48);
        assert_eq!(cfg.min_interest_score, 0.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_hour() {
        let cfg = DigestConfig { publish_hour: 24, ..DigestConfig::default() };
        assert!(matches!(cfg.validate(), Err(RewatchError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_out_of_range_lookback_and_nan_threshold() {
        let zero = DigestConfig { lookback_hours: 0, ..DigestConfig::default() };
        assert!(zero.validate().is_err());

        let huge = DigestConfig { lookback_hours: u32::MAX, ..DigestConfig::default() };
        assert!(matches!(huge.validate(), Err(RewatchError::Config(_))));

        let year = DigestConfig { lookback_hours: MAX_LOOKBACK_HOURS, ..DigestConfig::default() };
        assert!(year.validate().is_ok());

        let nan = DigestConfig { min_interest_score: f64::NAN, ..DigestConfig::default() };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let cfg: AppConfig = serde_json::from_str(r#"{"digest": {"publish_hour": 9}}"#).unwrap();
        assert_eq!(cfg.digest.publish_hour, 9);
        assert_eq!(cfg.digest.lookback_hours, 48);
        assert_eq!(cfg.logging.format, LogFormat::Pretty);
        assert!(cfg.rules.is_empty());
        assert!(cfg.fixtures.is_none());
    }
}
