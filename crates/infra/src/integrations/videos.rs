//! Video link source backed by a fixture file

use std::collections::HashMap;

use rewatch_core::{VideoBatch, VideoLinkSource};
use rewatch_domain::constants::CODE_VIDEOS_UNAVAILABLE;
use rewatch_domain::{DigestIssue, SourceSystem, VideoKind, VideoLinkResult};
use tracing::{debug, instrument, warn};

use super::fixtures::FixtureStore;

const KINDS: [VideoKind; 2] = [VideoKind::Highlights, VideoKind::Full];

/// Answers every requested match with exactly one highlights and one full
/// result
#[derive(Debug, Clone)]
pub struct FixtureVideoLinkSource {
    store: FixtureStore,
}

impl FixtureVideoLinkSource {
    pub fn new(store: FixtureStore) -> Self {
        Self { store }
    }
}

impl VideoLinkSource for FixtureVideoLinkSource {
    #[instrument(skip(self), fields(matches = match_ids.len()))]
    fn load_links(&self, match_ids: &[String]) -> VideoBatch {
        let fixture = match self.store.load() {
            Ok(fixture) => fixture,
            Err(err) => {
                warn!(error = %err, "Video fixture unavailable");
                let issue = DigestIssue::error(
                    CODE_VIDEOS_UNAVAILABLE,
                    SourceSystem::VideoSource,
                    "Video links could not be loaded.",
                )
                .with_detail("fixture", self.store.describe());
                let links = match_ids
                    .iter()
                    .flat_map(|id| {
                        KINDS.map(|kind| VideoLinkResult::error(id, kind, issue.clone()))
                    })
                    .collect();
                return VideoBatch { links, issues: Vec::new() };
            }
        };

        let mut urls: HashMap<(&str, VideoKind), &str> = HashMap::new();
        for video in &fixture.videos {
            urls.insert((video.match_id.as_str(), video.kind), video.url.as_str());
        }

        let links: Vec<_> = match_ids
            .iter()
            .flat_map(|id| {
                KINDS.map(|kind| match urls.get(&(id.as_str(), kind)) {
                    Some(url) => VideoLinkResult::found(id, kind, *url),
                    None => VideoLinkResult::not_found(id, kind),
                })
            })
            .collect();

        debug!(
            found = links.iter().filter(|l| l.url().is_some()).count(),
            total = links.len(),
            "Resolved video links from fixture"
        );
        VideoBatch { links, issues: Vec::new() }
    }
}
