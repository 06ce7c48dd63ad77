//! Spoiler-free public post and publication records

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::issue::DigestIssue;

/// One match block of the post. Carries no score or goal data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublicPostItem {
    pub match_id: String,
    /// e.g. "BOS vs NYR"
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub highlights_url: Option<String>,
    pub full_url: Option<String>,
    /// Interest score kept for diagnostics; never rendered or serialized
    #[serde(skip)]
    pub rank_score: Option<f64>,
}

/// What gets rendered and published for a run date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublicPost {
    /// Idempotency key
    pub run_date: NaiveDate,
    pub generated_at: DateTime<Utc>,
    pub items: Vec<PublicPostItem>,
    pub issues: Vec<DigestIssue>,
}

impl PublicPost {
    /// Post announcing that no matches were played in the window
    pub fn empty(
        run_date: NaiveDate,
        generated_at: DateTime<Utc>,
        issues: Vec<DigestIssue>,
    ) -> Self {
        Self { run_date, generated_at, items: Vec::new(), issues }
    }

    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }
}

/// Fact that the digest for a date has been published
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationRecord {
    pub run_date: NaiveDate,
    pub published: bool,
    pub message_id: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

impl PublicationRecord {
    pub fn published(
        run_date: NaiveDate,
        message_id: Option<String>,
        published_at: DateTime<Utc>,
    ) -> Self {
        Self { run_date, published: true, message_id, published_at: Some(published_at) }
    }
}
