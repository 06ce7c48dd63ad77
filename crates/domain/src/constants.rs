//! Domain constants
//!
//! Centralized location for scoring weights, stable issue codes and
//! configuration defaults.

// Scoring
pub const ASSIST_FACTOR: f64 = 0.5;
pub const OVERTIME_BONUS: f64 = 0.2;
pub const SHOOTOUT_BONUS: f64 = 0.2;
pub const TOTAL_GOALS_BONUS_WEIGHT: f64 = 0.2;
pub const TOTAL_GOALS_SATURATION: f64 = 10.0; // goals at which the bonus stops growing

// Configuration defaults
pub const DEFAULT_TIME_ZONE: &str = "Europe/Moscow";
pub const DEFAULT_PUBLISH_HOUR: u32 = 8;
pub const DEFAULT_LOOKBACK_HOURS: u32 = 48;
pub const MAX_LOOKBACK_HOURS: u32 = 24 * 366;
pub const DEFAULT_MIN_INTEREST_SCORE: f64 = 0.0;
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Issue codes raised by the core
pub const CODE_ALREADY_PUBLISHED: &str = "ALREADY_PUBLISHED";
pub const CODE_PUBLICATION_NOT_RECORDED: &str = "PUBLICATION_NOT_RECORDED";

// Issue codes raised by the bundled adapters
pub const CODE_PUBLICATION_ALREADY_RECORDED: &str = "PUBLICATION_ALREADY_RECORDED";
pub const CODE_RULES_EMPTY: &str = "RULES_EMPTY";
pub const CODE_RESULTS_UNAVAILABLE: &str = "RESULTS_UNAVAILABLE";
pub const CODE_VIDEOS_UNAVAILABLE: &str = "VIDEOS_UNAVAILABLE";
pub const CODE_PUBLISH_FAILED: &str = "PUBLISH_FAILED";
