//! # Rewatch Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The daily digest pipeline: window, scoring, ranking, public view,
//!   rendering and the orchestrating service
//! - Port interfaces (traits) for the collaborators the pipeline calls
//!
//! ## Architecture Principles
//! - Only depends on `rewatch-domain` and `rewatch-common`
//! - No network, storage, or platform code
//! - All external dependencies via traits
//! - Collaborator failures are data, never `Err`

pub mod digest;

// Re-export specific items to avoid ambiguity
pub use digest::ports::{
    PublicationRegistry, PublishReceipt, Publisher, RegistryLookup, ResultsBatch, ResultsSource,
    RulesBatch, RulesSource, VideoBatch, VideoLinkSource,
};
pub use digest::public_view::{build_public_post, match_title};
pub use digest::ranker::rank_matches;
pub use digest::render::render_post;
pub use digest::scorer::{score_matches, RuleWeights};
pub use digest::service::{DigestOutcome, DigestPorts, DigestRun, DigestService, DigestStage};
pub use digest::window::{compute_window, parse_time_zone, DigestWindow};
