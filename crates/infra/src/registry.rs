//! In-memory publication registry
//!
//! Keeps one [`PublicationRecord`] per run date for the lifetime of the
//! process. Writes are check-and-set: once a date is recorded as published
//! the record is never replaced.

use std::collections::HashMap;

use chrono::NaiveDate;
use parking_lot::Mutex;
use rewatch_core::{PublicationRegistry, RegistryLookup};
use rewatch_domain::constants::CODE_PUBLICATION_ALREADY_RECORDED;
use rewatch_domain::{DigestIssue, PublicationRecord, SourceSystem};
use tracing::{debug, warn};

#[derive(Debug, Default)]
pub struct InMemoryPublicationRegistry {
    records: Mutex<HashMap<NaiveDate, PublicationRecord>>,
}

impl InMemoryPublicationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with `records`, e.g. restored from elsewhere
    pub fn with_records(records: impl IntoIterator<Item = PublicationRecord>) -> Self {
        let map = records.into_iter().map(|r| (r.run_date, r)).collect();
        Self { records: Mutex::new(map) }
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Snapshot of every record, ordered by run date
    pub fn records(&self) -> Vec<PublicationRecord> {
        let mut records: Vec<_> = self.records.lock().values().cloned().collect();
        records.sort_by_key(|r| r.run_date);
        records
    }
}

impl PublicationRegistry for InMemoryPublicationRegistry {
    fn get(&self, run_date: NaiveDate) -> RegistryLookup {
        let record = self.records.lock().get(&run_date).cloned();
        debug!(%run_date, found = record.is_some(), "Publication registry lookup");
        RegistryLookup { record, issues: Vec::new() }
    }

    fn set_published(&self, record: PublicationRecord) -> Vec<DigestIssue> {
        let mut records = self.records.lock();

        if let Some(existing) = records.get(&record.run_date).filter(|r| r.published) {
            warn!(
                run_date = %record.run_date,
                existing_message_id = ?existing.message_id,
                "Refusing to overwrite publication record"
            );
            return vec![DigestIssue::warning(
                CODE_PUBLICATION_ALREADY_RECORDED,
                SourceSystem::Registry,
                format!("Publication for {} is already recorded.", record.run_date),
            )
            .with_detail("run_date", record.run_date.to_string())];
        }

        debug!(
            run_date = %record.run_date,
            message_id = ?record.message_id,
            "Recording publication"
        );
        records.insert(record.run_date, record);
        Vec::new()
    }
}
