//! Builders for matches, stats and configuration used across digest tests.

use chrono::{DateTime, TimeZone, Utc};
use rewatch_domain::{DigestConfig, FinalScore, MatchForScoring, PlayerGameStats, Team};

/// 08:30 Moscow on 2025-11-03, inside the run for that date.
pub fn morning() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 3, 5, 30, 0).unwrap()
}

pub fn moscow_config() -> DigestConfig {
    DigestConfig {
        time_zone: "Europe/Moscow".to_string(),
        publish_hour: 8,
        lookback_hours: 48,
        min_interest_score: 0.0,
    }
}

pub fn game(id: &str, home: Team, away: Team, score: (u32, u32)) -> MatchForScoring {
    MatchForScoring {
        match_id: id.to_string(),
        start_time: Utc.with_ymd_and_hms(2025, 11, 2, 0, 30, 0).unwrap(),
        season: "2025-2026".to_string(),
        home,
        away,
        final_score: FinalScore::new(score.0, score.1),
        went_overtime: None,
        went_shootout: None,
    }
}

pub fn stat(match_id: &str, player_id: &str, goals: u32, assists: u32) -> PlayerGameStats {
    PlayerGameStats {
        match_id: match_id.to_string(),
        player_id: player_id.to_string(),
        player_name: player_id.to_string(),
        team_id: "BOS".to_string(),
        goals,
        assists,
    }
}

/// `m1` BOS vs NYR 4-3 in overtime, `m2` Anaheim vs Buffalo 2-1.
pub fn sample_matches() -> Vec<MatchForScoring> {
    let mut m1 = game(
        "m1",
        Team::new("BOS", "Boston Bruins").with_abbr("BOS"),
        Team::new("NYR", "New York Rangers").with_abbr("NYR"),
        (4, 3),
    );
    m1.went_overtime = Some(true);
    let m2 = game("m2", Team::new("ANA", "Anaheim"), Team::new("BUF", "Buffalo"), (2, 1));
    vec![m1, m2]
}
