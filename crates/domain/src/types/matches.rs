//! Scoring inputs
//!
//! These types may carry spoilers. `FinalScore` keeps the goal counts private
//! and only hands out the combined total, which the scorer needs for its
//! goals bonus. Nothing built for the public post can read the raw score.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Team reference
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Team {
    /// Stable identifier from the results source
    pub team_id: String,
    /// Full name, e.g. "Boston Bruins"
    pub name: String,
    /// Short code, e.g. "BOS"
    #[serde(default)]
    pub abbr: Option<String>,
}

impl Team {
    pub fn new(team_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { team_id: team_id.into(), name: name.into(), abbr: None }
    }

    pub fn with_abbr(mut self, abbr: impl Into<String>) -> Self {
        self.abbr = Some(abbr.into());
        self
    }

    /// Abbreviation when known, full name otherwise
    pub fn short_label(&self) -> &str {
        self.abbr.as_deref().filter(|a| !a.trim().is_empty()).unwrap_or(&self.name)
    }
}

/// Final score of a completed match (spoiler)
#[derive(Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FinalScore {
    home: u32,
    away: u32,
}

impl FinalScore {
    pub const fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    /// Combined goals of both sides
    pub const fn total_goals(&self) -> u32 {
        self.home.saturating_add(self.away)
    }
}

impl fmt::Debug for FinalScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FinalScore(<redacted>)")
    }
}

/// Completed match as input to scoring
#[derive(Debug, Clone, Deserialize)]
pub struct MatchForScoring {
    pub match_id: String,
    pub start_time: DateTime<Utc>,
    /// Season label, e.g. "2025-2026"
    pub season: String,
    pub home: Team,
    pub away: Team,
    pub final_score: FinalScore,
    #[serde(default)]
    pub went_overtime: Option<bool>,
    #[serde(default)]
    pub went_shootout: Option<bool>,
}

/// Per-match player aggregate (no event timeline)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlayerGameStats {
    pub match_id: String,
    pub player_id: String,
    pub player_name: String,
    pub team_id: String,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub assists: u32,
}
