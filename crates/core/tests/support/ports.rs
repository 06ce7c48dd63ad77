//! In-memory port mocks
//!
//! Each mock records how it was called so tests can assert on the
//! interaction as well as on the returned run.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use parking_lot::Mutex;
use rewatch_core::{
    DigestPorts, PublicationRegistry, PublishReceipt, Publisher, RegistryLookup, ResultsBatch,
    ResultsSource, RulesBatch, RulesSource, VideoBatch, VideoLinkSource,
};
use rewatch_domain::{
    DigestIssue, MatchForScoring, PlayerGameStats, PublicationRecord, ScoringRule, SourceSystem,
    VideoLinkResult,
};

#[derive(Default)]
pub struct MockResults {
    pub batch: ResultsBatch,
    pub calls: Mutex<Vec<(DateTime<Utc>, DateTime<Utc>)>>,
}

impl MockResults {
    pub fn new(matches: Vec<MatchForScoring>, player_stats: Vec<PlayerGameStats>) -> Self {
        Self {
            batch: ResultsBatch { matches, player_stats, issues: Vec::new() },
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_issue(mut self, issue: DigestIssue) -> Self {
        self.batch.issues.push(issue);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl ResultsSource for MockResults {
    fn load_results(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> ResultsBatch {
        self.calls.lock().push((start, end));
        self.batch.clone()
    }
}

#[derive(Default)]
pub struct MockRules {
    pub batch: RulesBatch,
}

impl MockRules {
    pub fn new(rules: Vec<ScoringRule>) -> Self {
        Self { batch: RulesBatch { rules, issues: Vec::new() } }
    }

    pub fn with_issue(mut self, issue: DigestIssue) -> Self {
        self.batch.issues.push(issue);
        self
    }
}

impl RulesSource for MockRules {
    fn load_rules(&self) -> RulesBatch {
        self.batch.clone()
    }
}

#[derive(Default)]
pub struct MockVideos {
    pub batch: VideoBatch,
    pub requested: Mutex<Vec<Vec<String>>>,
}

impl MockVideos {
    pub fn new(links: Vec<VideoLinkResult>) -> Self {
        Self { batch: VideoBatch { links, issues: Vec::new() }, requested: Mutex::new(Vec::new()) }
    }

    pub fn with_issue(mut self, issue: DigestIssue) -> Self {
        self.batch.issues.push(issue);
        self
    }

    pub fn requested(&self) -> Vec<Vec<String>> {
        self.requested.lock().clone()
    }
}

impl VideoLinkSource for MockVideos {
    fn load_links(&self, match_ids: &[String]) -> VideoBatch {
        self.requested.lock().push(match_ids.to_vec());
        self.batch.clone()
    }
}

/// Publisher that stores every text it was asked to publish
#[derive(Default)]
pub struct RecordingPublisher {
    pub texts: Mutex<Vec<String>>,
    pub fail_with: Option<DigestIssue>,
}

impl RecordingPublisher {
    pub fn failing(message: &str) -> Self {
        Self {
            texts: Mutex::new(Vec::new()),
            fail_with: Some(DigestIssue::error(
                "PUBLISH_FAILED",
                SourceSystem::PublishingChannel,
                message,
            )),
        }
    }

    pub fn texts(&self) -> Vec<String> {
        self.texts.lock().clone()
    }
}

impl Publisher for RecordingPublisher {
    fn publish(&self, text: &str) -> PublishReceipt {
        let mut texts = self.texts.lock();
        texts.push(text.to_string());
        match &self.fail_with {
            Some(issue) => PublishReceipt { message_id: None, issues: vec![issue.clone()] },
            None => PublishReceipt {
                message_id: Some(format!("msg-{}", texts.len())),
                issues: Vec::new(),
            },
        }
    }
}

/// Registry backed by a map, with optional canned issues
#[derive(Default)]
pub struct MemoryRegistry {
    pub records: Mutex<HashMap<NaiveDate, PublicationRecord>>,
    pub lookup_issues: Vec<DigestIssue>,
    pub writes: Mutex<usize>,
}

impl MemoryRegistry {
    pub fn with_record(record: PublicationRecord) -> Self {
        let registry = Self::default();
        registry.records.lock().insert(record.run_date, record);
        registry
    }

    pub fn record(&self, run_date: NaiveDate) -> Option<PublicationRecord> {
        self.records.lock().get(&run_date).cloned()
    }

    pub fn write_count(&self) -> usize {
        *self.writes.lock()
    }
}

impl PublicationRegistry for MemoryRegistry {
    fn get(&self, run_date: NaiveDate) -> RegistryLookup {
        RegistryLookup {
            record: self.records.lock().get(&run_date).cloned(),
            issues: self.lookup_issues.clone(),
        }
    }

    fn set_published(&self, record: PublicationRecord) -> Vec<DigestIssue> {
        *self.writes.lock() += 1;
        self.records.lock().insert(record.run_date, record);
        Vec::new()
    }
}

/// Concrete handles to every mock plus the erased port set
pub struct Harness {
    pub results: Arc<MockResults>,
    pub rules: Arc<MockRules>,
    pub videos: Arc<MockVideos>,
    pub publisher: Arc<RecordingPublisher>,
    pub registry: Arc<MemoryRegistry>,
}

impl Harness {
    pub fn new(
        results: MockResults,
        rules: MockRules,
        videos: MockVideos,
        publisher: RecordingPublisher,
        registry: MemoryRegistry,
    ) -> Self {
        Self {
            results: Arc::new(results),
            rules: Arc::new(rules),
            videos: Arc::new(videos),
            publisher: Arc::new(publisher),
            registry: Arc::new(registry),
        }
    }

    pub fn ports(&self) -> DigestPorts {
        DigestPorts {
            results: self.results.clone(),
            rules: self.rules.clone(),
            videos: self.videos.clone(),
            publisher: self.publisher.clone(),
            registry: self.registry.clone(),
        }
    }
}
