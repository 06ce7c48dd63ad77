//! Application context - dependency injection container

use std::sync::Arc;

use rewatch_common::Clock;
use rewatch_core::{DigestPorts, DigestRun, DigestService, Publisher};
use rewatch_domain::{AppConfig, Result};
use rewatch_infra::config::{self, ChannelSecrets};
use rewatch_infra::{
    ConfiguredRulesSource, FixtureResultsSource, FixtureStore, FixtureVideoLinkSource,
    InMemoryPublicationRegistry, WriterPublisher,
};
use tracing::{info, warn};

/// Application context - holds the configuration and the wired services
pub struct AppContext {
    pub config: AppConfig,
    pub secrets: ChannelSecrets,
    pub registry: Arc<InMemoryPublicationRegistry>,
    pub digest: Arc<DigestService>,
}

impl AppContext {
    /// Load configuration from the standard locations and wire everything,
    /// publishing to stdout.
    ///
    /// # Errors
    /// Returns `RewatchError::Config` if the configuration cannot be loaded
    /// or is invalid.
    pub fn new() -> Result<Self> {
        let config = config::load()?;
        Self::from_config(config)
    }

    /// Wire the bundled adapters for an already loaded configuration
    pub fn from_config(config: AppConfig) -> Result<Self> {
        Self::with_publisher(config, Arc::new(WriterPublisher::stdout()))
    }

    /// Wire the bundled adapters with a custom publisher
    pub fn with_publisher(config: AppConfig, publisher: Arc<dyn Publisher>) -> Result<Self> {
        config.validate()?;

        let store = match &config.fixtures {
            Some(path) => FixtureStore::file(path),
            None => {
                warn!("No fixture file configured; results and videos will be empty");
                FixtureStore::empty()
            }
        };

        let registry = Arc::new(InMemoryPublicationRegistry::new());
        let ports = DigestPorts {
            results: Arc::new(FixtureResultsSource::new(store.clone())),
            rules: Arc::new(ConfiguredRulesSource::new(config.rules.clone())),
            videos: Arc::new(FixtureVideoLinkSource::new(store)),
            publisher,
            registry: registry.clone(),
        };
        let digest = DigestService::new(config.digest.clone(), ports)
            .with_labels(config.render.clone());

        info!(
            time_zone = %config.digest.time_zone,
            publish_hour = config.digest.publish_hour,
            lookback_hours = config.digest.lookback_hours,
            rules = config.rules.len(),
            "Application context initialised"
        );

        Ok(Self { config, secrets: ChannelSecrets::from_env(), registry, digest: Arc::new(digest) })
    }

    /// Run one digest for the instant reported by `clock`
    ///
    /// # Errors
    /// Only fatal configuration problems surface as errors.
    pub fn run_digest(&self, clock: &dyn Clock) -> Result<DigestRun> {
        self.digest.run_with_clock(clock)
    }
}
