//! Results source backed by a fixture file

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rewatch_core::{ResultsBatch, ResultsSource};
use rewatch_domain::constants::CODE_RESULTS_UNAVAILABLE;
use rewatch_domain::{DigestIssue, SourceSystem};
use tracing::{debug, instrument, warn};

use super::fixtures::FixtureStore;

/// Serves matches whose start time falls inside the requested window,
/// together with their player stats
#[derive(Debug, Clone)]
pub struct FixtureResultsSource {
    store: FixtureStore,
}

impl FixtureResultsSource {
    pub fn new(store: FixtureStore) -> Self {
        Self { store }
    }
}

impl ResultsSource for FixtureResultsSource {
    #[instrument(skip(self))]
    fn load_results(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> ResultsBatch {
        let fixture = match self.store.load() {
            Ok(fixture) => fixture,
            Err(err) => {
                warn!(error = %err, "Results fixture unavailable");
                return ResultsBatch {
                    issues: vec![DigestIssue::error(
                        CODE_RESULTS_UNAVAILABLE,
                        SourceSystem::ResultsSource,
                        "Match results could not be loaded.",
                    )
                    .with_detail("fixture", self.store.describe())
                    .with_detail("reason", err.to_string())],
                    ..ResultsBatch::default()
                };
            }
        };

        let matches: Vec<_> = fixture
            .matches
            .iter()
            .filter(|m| start <= m.start_time && m.start_time < end)
            .cloned()
            .collect();
        let kept: HashSet<&str> = matches.iter().map(|m| m.match_id.as_str()).collect();
        let player_stats = fixture
            .player_stats
            .iter()
            .filter(|s| kept.contains(s.match_id.as_str()))
            .cloned()
            .collect();

        debug!(
            total = fixture.matches.len(),
            in_window = matches.len(),
            "Loaded results from fixture"
        );
        ResultsBatch { matches, player_stats, issues: Vec::new() }
    }
}
