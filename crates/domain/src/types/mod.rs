//! Domain types and models
//!
//! Types are split by pipeline side: `matches` and `scoring` may carry
//! spoiler data and stay inside the scoring stage, while `post` is the
//! spoiler-free projection that is rendered and published.

pub mod issue;
pub mod matches;
pub mod post;
pub mod scoring;
pub mod video;

pub use issue::{DigestIssue, Severity, SourceSystem};
pub use matches::{FinalScore, MatchForScoring, PlayerGameStats, Team};
pub use post::{PublicPost, PublicPostItem, PublicationRecord};
pub use scoring::{
    ContributionReason, EntityKind, EntityRef, MatchScore, RankedMatch, ScoreContribution,
    ScoringRule,
};
pub use video::{VideoKind, VideoLinkResult, VideoLinkStatus, VideoStatus};
