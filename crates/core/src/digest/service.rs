//! Digest orchestration service
//!
//! Drives one run through
//! `START -> WINDOW_COMPUTED -> IDEMPOTENCY_CHECKED -> RESULTS_LOADED ->
//! RULES_LOADED -> SCORED_RANKED -> VIDEOS_LOADED -> POST_BUILT -> PUBLISHED
//! -> RECORDED`, short-circuiting to `ALREADY_PUBLISHED` when the run date
//! has a record and from `RESULTS_LOADED` straight to publishing when no
//! matches were found.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use rewatch_common::Clock;
use rewatch_domain::constants::{CODE_ALREADY_PUBLISHED, CODE_PUBLICATION_NOT_RECORDED};
use rewatch_domain::{
    impl_domain_tag_conversions, DigestConfig, DigestIssue, PublicPost, PublicationRecord,
    RenderLabels, Result, SourceSystem,
};
use tracing::{debug, info, warn};

use super::ports::{PublicationRegistry, Publisher, ResultsSource, RulesSource, VideoLinkSource};
use super::public_view::build_public_post;
use super::ranker::rank_matches;
use super::render::render_post;
use super::scorer::score_matches;
use super::window::{compute_window, DigestWindow};

/// States of a digest run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestStage {
    Start,
    WindowComputed,
    IdempotencyChecked,
    AlreadyPublished,
    ResultsLoaded,
    NoMatches,
    RulesLoaded,
    ScoredRanked,
    VideosLoaded,
    PostBuilt,
    Published,
    PublishFailed,
    Recorded,
}

impl_domain_tag_conversions!(DigestStage {
    Start => "start",
    WindowComputed => "window_computed",
    IdempotencyChecked => "idempotency_checked",
    AlreadyPublished => "already_published",
    ResultsLoaded => "results_loaded",
    NoMatches => "no_matches",
    RulesLoaded => "rules_loaded",
    ScoredRanked => "scored_ranked",
    VideosLoaded => "videos_loaded",
    PostBuilt => "post_built",
    Published => "published",
    PublishFailed => "publish_failed",
    Recorded => "recorded",
});

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestOutcome {
    /// A record for the run date existed; nothing was published
    AlreadyPublished,
    /// The window held no matches; the "no matches" post was published
    PublishedNoMatches,
    Published { items: usize },
    /// The publisher reported an error; no record was written
    PublishFailed { items: usize },
}

impl DigestOutcome {
    pub const fn published(&self) -> bool {
        matches!(self, Self::PublishedNoMatches | Self::Published { .. })
    }
}

/// Everything a run produced
#[derive(Debug, Clone)]
pub struct DigestRun {
    pub run_date: NaiveDate,
    pub window: DigestWindow,
    pub stages: Vec<DigestStage>,
    pub outcome: DigestOutcome,
    /// `None` only when the run date was already published
    pub post: Option<PublicPost>,
    /// All issues in the order they were raised
    pub issues: Vec<DigestIssue>,
}

/// Collaborators a [`DigestService`] talks to
#[derive(Clone)]
pub struct DigestPorts {
    pub results: Arc<dyn ResultsSource>,
    pub rules: Arc<dyn RulesSource>,
    pub videos: Arc<dyn VideoLinkSource>,
    pub publisher: Arc<dyn Publisher>,
    pub registry: Arc<dyn PublicationRegistry>,
}

/// Daily digest orchestrator
pub struct DigestService {
    config: DigestConfig,
    labels: RenderLabels,
    ports: DigestPorts,
}

/// Mutable state threaded through one run
struct RunState {
    stages: Vec<DigestStage>,
    issues: Vec<DigestIssue>,
}

impl RunState {
    fn new() -> Self {
        Self { stages: vec![DigestStage::Start], issues: Vec::new() }
    }

    fn advance(&mut self, stage: DigestStage) {
        debug!(stage = %stage, issues = self.issues.len(), "Digest stage reached");
        self.stages.push(stage);
    }

    fn absorb(&mut self, issues: impl IntoIterator<Item = DigestIssue>) {
        self.issues.extend(issues);
    }
}

impl DigestService {
    pub fn new(config: DigestConfig, ports: DigestPorts) -> Self {
        Self { config, labels: RenderLabels::default(), ports }
    }

    /// Use custom labels for the rendered post
    pub fn with_labels(mut self, labels: RenderLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn config(&self) -> &DigestConfig {
        &self.config
    }

    /// Run the digest for the instant reported by `clock`.
    pub fn run_with_clock(&self, clock: &dyn Clock) -> Result<DigestRun> {
        self.run(clock.now_utc())
    }

    /// Run the digest for the window containing `now`.
    ///
    /// Only an invalid time zone or publish hour returns `Err`; every
    /// collaborator failure ends up in [`DigestRun::issues`].
    pub fn run(&self, now: DateTime<Utc>) -> Result<DigestRun> {
        let mut state = RunState::new();

        let window = compute_window(&now, &self.config)?;
        state.advance(DigestStage::WindowComputed);
        info!(
            run_date = %window.run_date,
            window_start = %window.start,
            window_end = %window.end,
            "Starting digest run"
        );

        let lookup = self.ports.registry.get(window.run_date);
        state.absorb(lookup.issues);
        state.advance(DigestStage::IdempotencyChecked);

        if let Some(record) = lookup.record.filter(|r| r.published) {
            info!(
                run_date = %window.run_date,
                message_id = ?record.message_id,
                "Digest already published, skipping"
            );
            state.absorb([already_published(&record)]);
            state.advance(DigestStage::AlreadyPublished);
            return Ok(finish(window, state, DigestOutcome::AlreadyPublished, None));
        }

        let results = self.ports.results.load_results(window.start, window.end);
        state.absorb(results.issues);
        state.advance(DigestStage::ResultsLoaded);
        debug!(
            matches = results.matches.len(),
            stats = results.player_stats.len(),
            "Results loaded"
        );

        if results.matches.is_empty() {
            state.advance(DigestStage::NoMatches);
            let post = PublicPost::empty(window.run_date, now, state.issues.clone());
            let (post, published) = self.publish_and_record(post, &mut state);
            let outcome = if published {
                DigestOutcome::PublishedNoMatches
            } else {
                DigestOutcome::PublishFailed { items: 0 }
            };
            return Ok(finish(window, state, outcome, Some(post)));
        }

        let rules = self.ports.rules.load_rules();
        state.absorb(rules.issues);
        state.advance(DigestStage::RulesLoaded);

        let scored = score_matches(&results.matches, &results.player_stats, &rules.rules);
        let ranked = rank_matches(scored);
        state.advance(DigestStage::ScoredRanked);

        let eligible: Vec<String> = ranked
            .iter()
            .filter(|rm| rm.score.total >= self.config.min_interest_score)
            .map(|rm| rm.match_id().to_string())
            .collect();
        let links = if eligible.is_empty() {
            debug!("No match reached the interest threshold, skipping video lookup");
            Vec::new()
        } else {
            let videos = self.ports.videos.load_links(&eligible);
            state.absorb(videos.issues);
            videos.links
        };
        state.advance(DigestStage::VideosLoaded);

        let post = build_public_post(
            window.run_date,
            now,
            &ranked,
            &links,
            self.config.min_interest_score,
            state.issues.clone(),
        );
        // Video lookup errors were appended by the builder.
        state.issues.clone_from(&post.issues);
        state.advance(DigestStage::PostBuilt);

        let items = post.items.len();
        let (post, published) = self.publish_and_record(post, &mut state);
        let outcome = if published {
            DigestOutcome::Published { items }
        } else {
            DigestOutcome::PublishFailed { items }
        };
        Ok(finish(window, state, outcome, Some(post)))
    }

    /// Render and publish `post`, then record it if the publish succeeded.
    ///
    /// Returns the post with every issue raised so far and whether the
    /// publish succeeded.
    fn publish_and_record(&self, post: PublicPost, state: &mut RunState) -> (PublicPost, bool) {
        let text = render_post(&post, &self.labels);
        let receipt = self.ports.publisher.publish(&text);
        let succeeded = receipt.succeeded();
        state.absorb(receipt.issues);

        if succeeded {
            state.advance(DigestStage::Published);
            let record =
                PublicationRecord::published(post.run_date, receipt.message_id, post.generated_at);
            let registry_issues = self.ports.registry.set_published(record);
            state.absorb(registry_issues);
            state.advance(DigestStage::Recorded);
        } else {
            state.absorb([DigestIssue::warning(
                CODE_PUBLICATION_NOT_RECORDED,
                SourceSystem::Core,
                format!("Publishing for {} failed; the run may be retried.", post.run_date),
            )]);
            state.advance(DigestStage::PublishFailed);
        }

        let post = PublicPost { issues: state.issues.clone(), ..post };
        (post, succeeded)
    }
}

fn finish(
    window: DigestWindow,
    state: RunState,
    outcome: DigestOutcome,
    post: Option<PublicPost>,
) -> DigestRun {
    for issue in state.issues.iter().filter(|i| i.is_error()) {
        warn!(code = %issue.code, origin = %issue.origin, message = %issue.message, "Digest issue");
    }
    info!(
        run_date = %window.run_date,
        outcome = ?outcome,
        issues = state.issues.len(),
        "Digest run finished"
    );

    DigestRun {
        run_date: window.run_date,
        window,
        stages: state.stages,
        outcome,
        post,
        issues: state.issues,
    }
}

fn already_published(record: &PublicationRecord) -> DigestIssue {
    let message_id = record.message_id.as_deref().unwrap_or("unknown");
    DigestIssue::warning(
        CODE_ALREADY_PUBLISHED,
        SourceSystem::Core,
        format!("Digest for {} was already published (message_id={message_id}).", record.run_date),
    )
    .with_detail("run_date", record.run_date.to_string())
}
