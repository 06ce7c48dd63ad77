//! Mapping from configuration to tracing settings

use rewatch_common::LogSettings;
use rewatch_domain::{LogFormat, LoggingConfig};

pub fn log_settings(config: &LoggingConfig) -> LogSettings {
    LogSettings {
        level: config.level.clone(),
        json: config.format == LogFormat::Json,
        file: config.file.clone(),
    }
}
