//! JSON fixture file shared by the results and video sources
//!
//! ```json
//! {
//!   "matches": [{ "match_id": "m1", "start_time": "2025-11-02T00:30:00Z", ... }],
//!   "player_stats": [{ "match_id": "m1", "player_id": "p1", ... }],
//!   "videos": [{ "match_id": "m1", "kind": "highlights", "url": "https://..." }]
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rewatch_domain::{MatchForScoring, PlayerGameStats, VideoKind};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FixtureFile {
    pub matches: Vec<MatchForScoring>,
    pub player_stats: Vec<PlayerGameStats>,
    pub videos: Vec<FixtureVideo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FixtureVideo {
    pub match_id: String,
    pub kind: VideoKind,
    pub url: String,
}

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed fixture file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Where fixture data comes from
///
/// File-backed stores re-read the file on every call so edits are picked up
/// by the next run.
#[derive(Debug, Clone)]
pub enum FixtureStore {
    File(PathBuf),
    Loaded(Arc<FixtureFile>),
}

impl FixtureStore {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    pub fn loaded(fixture: FixtureFile) -> Self {
        Self::Loaded(Arc::new(fixture))
    }

    /// Store with no matches and no videos
    pub fn empty() -> Self {
        Self::loaded(FixtureFile::default())
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            Self::Loaded(_) => None,
        }
    }

    pub fn load(&self) -> Result<Arc<FixtureFile>, FixtureError> {
        match self {
            Self::File(path) => read_fixture(path).map(Arc::new),
            Self::Loaded(fixture) => Ok(Arc::clone(fixture)),
        }
    }

    /// Human-readable origin for issue details
    pub(crate) fn describe(&self) -> String {
        self.path().map_or_else(|| "<in-memory>".to_string(), |p| p.display().to_string())
    }
}

pub fn read_fixture(path: &Path) -> Result<FixtureFile, FixtureError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|source| FixtureError::Io { path: path.to_path_buf(), source })?;
    serde_json::from_str(&contents)
        .map_err(|source| FixtureError::Parse { path: path.to_path_buf(), source })
}
