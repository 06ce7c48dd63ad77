//! Structured issues (errors and warnings carried as data)

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::impl_domain_tag_conversions;

/// How serious an accumulated issue is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

impl_domain_tag_conversions!(Severity {
    Warning => "warning",
    Error => "error",
});

/// System an issue originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceSystem {
    ResultsSource,
    VideoSource,
    PublishingChannel,
    Registry,
    Core,
}

impl_domain_tag_conversions!(SourceSystem {
    ResultsSource => "results_source",
    VideoSource => "video_source",
    PublishingChannel => "publishing_channel",
    Registry => "registry",
    Core => "core",
});

/// Error or warning accumulated during a digest run.
///
/// Issues are never raised as control flow. Every stage appends to a shared
/// list and the list is attached to the run output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestIssue {
    /// Stable machine code, e.g. `RESULTS_TIMEOUT`
    pub code: String,
    pub origin: SourceSystem,
    pub severity: Severity,
    pub message: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub details: BTreeMap<String, String>,
}

impl DigestIssue {
    pub fn new(
        code: impl Into<String>,
        origin: SourceSystem,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            origin,
            severity,
            message: message.into(),
            details: BTreeMap::new(),
        }
    }

    pub fn warning(
        code: impl Into<String>,
        origin: SourceSystem,
        message: impl Into<String>,
    ) -> Self {
        Self::new(code, origin, Severity::Warning, message)
    }

    pub fn error(
        code: impl Into<String>,
        origin: SourceSystem,
        message: impl Into<String>,
    ) -> Self {
        Self::new(code, origin, Severity::Error, message)
    }

    /// Attach a diagnostic key/value pair
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Identity used when collapsing repeated issues in rendered output
    pub fn dedup_key(&self) -> (&str, SourceSystem, &str) {
        (&self.code, self.origin, &self.message)
    }
}

impl fmt::Display for DigestIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.origin, self.code, self.message)
    }
}
