//! Video link lookup results

use serde::{Deserialize, Serialize};

use super::issue::{DigestIssue, SourceSystem};
use crate::impl_domain_tag_conversions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoKind {
    Highlights,
    Full,
}

impl_domain_tag_conversions!(VideoKind {
    Highlights => "highlights",
    Full => "full",
});

/// Flat status tag of a lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoStatus {
    Found,
    NotFound,
    Error,
}

impl_domain_tag_conversions!(VideoStatus {
    Found => "found",
    NotFound => "not_found",
    Error => "error",
});

/// Lookup outcome. A URL exists only for `Found`, an issue only for `Error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VideoLinkStatus {
    Found { url: String },
    NotFound,
    Error { error: DigestIssue },
}

/// Result of looking up one video kind for one match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoLinkResult {
    pub match_id: String,
    pub kind: VideoKind,
    #[serde(flatten)]
    pub status: VideoLinkStatus,
    #[serde(default = "default_video_source")]
    pub source: SourceSystem,
}

const fn default_video_source() -> SourceSystem {
    SourceSystem::VideoSource
}

impl VideoLinkResult {
    pub fn found(match_id: impl Into<String>, kind: VideoKind, url: impl Into<String>) -> Self {
        Self::with_status(match_id, kind, VideoLinkStatus::Found { url: url.into() })
    }

    pub fn not_found(match_id: impl Into<String>, kind: VideoKind) -> Self {
        Self::with_status(match_id, kind, VideoLinkStatus::NotFound)
    }

    pub fn error(match_id: impl Into<String>, kind: VideoKind, error: DigestIssue) -> Self {
        Self::with_status(match_id, kind, VideoLinkStatus::Error { error })
    }

    fn with_status(match_id: impl Into<String>, kind: VideoKind, status: VideoLinkStatus) -> Self {
        Self { match_id: match_id.into(), kind, status, source: SourceSystem::VideoSource }
    }

    pub const fn status(&self) -> VideoStatus {
        match self.status {
            VideoLinkStatus::Found { .. } => VideoStatus::Found,
            VideoLinkStatus::NotFound => VideoStatus::NotFound,
            VideoLinkStatus::Error { .. } => VideoStatus::Error,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match &self.status {
            VideoLinkStatus::Found { url } => Some(url),
            _ => None,
        }
    }

    pub fn issue(&self) -> Option<&DigestIssue> {
        match &self.status {
            VideoLinkStatus::Error { error } => Some(error),
            _ => None,
        }
    }
}
