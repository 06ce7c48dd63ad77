//! Port interfaces for the daily digest pipeline
//!
//! Every collaborator reports failures as [`DigestIssue`] values next to
//! whatever partial data it produced. None of these calls return `Err`; the
//! orchestrator keeps going with what it got.

use chrono::{DateTime, NaiveDate, Utc};
use rewatch_domain::{
    DigestIssue, MatchForScoring, PlayerGameStats, PublicationRecord, ScoringRule, VideoLinkResult,
};

/// Finished matches and per-player stats for one window
#[derive(Debug, Clone, Default)]
pub struct ResultsBatch {
    pub matches: Vec<MatchForScoring>,
    pub player_stats: Vec<PlayerGameStats>,
    pub issues: Vec<DigestIssue>,
}

/// Provides finished match results
pub trait ResultsSource: Send + Sync {
    /// Load matches that started inside `[start, end)`.
    fn load_results(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> ResultsBatch;
}

#[derive(Debug, Clone, Default)]
pub struct RulesBatch {
    pub rules: Vec<ScoringRule>,
    pub issues: Vec<DigestIssue>,
}

/// Provides the user-configured scoring rules
pub trait RulesSource: Send + Sync {
    fn load_rules(&self) -> RulesBatch;
}

#[derive(Debug, Clone, Default)]
pub struct VideoBatch {
    pub links: Vec<VideoLinkResult>,
    pub issues: Vec<DigestIssue>,
}

/// Resolves highlight and full-game links for matches
pub trait VideoLinkSource: Send + Sync {
    /// Look up links for the given match ids.
    ///
    /// Implementations may return several results per match; when two share
    /// a `(match_id, kind)` pair the later one is used.
    fn load_links(&self, match_ids: &[String]) -> VideoBatch;
}

/// Outcome of a publish attempt
#[derive(Debug, Clone, Default)]
pub struct PublishReceipt {
    pub message_id: Option<String>,
    pub issues: Vec<DigestIssue>,
}

impl PublishReceipt {
    /// A publish succeeded when it produced no error-severity issue.
    pub fn succeeded(&self) -> bool {
        !self.issues.iter().any(DigestIssue::is_error)
    }
}

/// Sends rendered digest text to the outside world
pub trait Publisher: Send + Sync {
    fn publish(&self, text: &str) -> PublishReceipt;
}

#[derive(Debug, Clone, Default)]
pub struct RegistryLookup {
    pub record: Option<PublicationRecord>,
    pub issues: Vec<DigestIssue>,
}

/// Remembers which run dates already have a published digest
pub trait PublicationRegistry: Send + Sync {
    fn get(&self, run_date: NaiveDate) -> RegistryLookup;

    /// Store `record`, returning any issues raised while doing so.
    fn set_published(&self, record: PublicationRecord) -> Vec<DigestIssue>;
}

#[cfg(test)]
mod tests {
    use rewatch_domain::SourceSystem;

    use super::*;

    #[test]
    fn test_receipt_with_only_warnings_counts_as_success() {
        let receipt = PublishReceipt {
            message_id: Some("m-1".into()),
            issues: vec![DigestIssue::warning("SLOW", SourceSystem::PublishingChannel, "slow")],
        };
        assert!(receipt.succeeded());
    }

    #[test]
    fn test_receipt_with_error_is_failure() {
        let receipt = PublishReceipt {
            message_id: None,
            issues: vec![DigestIssue::error(
                "PUBLISH_FAILED",
                SourceSystem::PublishingChannel,
                "down",
            )],
        };
        assert!(!receipt.succeeded());
    }
}
