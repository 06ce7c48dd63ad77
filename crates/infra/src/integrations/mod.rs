//! Bundled port implementations
//!
//! File- and stream-backed sources and sinks that let the digest run without
//! any network service: results and video links come from a JSON fixture
//! file, rules from configuration, and posts go to any `io::Write`.

pub mod fixtures;
pub mod publisher;
pub mod results;
pub mod rules;
pub mod videos;

pub use fixtures::{FixtureError, FixtureFile, FixtureStore, FixtureVideo};
pub use publisher::WriterPublisher;
pub use results::FixtureResultsSource;
pub use rules::ConfiguredRulesSource;
pub use videos::FixtureVideoLinkSource;
