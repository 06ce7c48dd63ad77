//! Spoiler-free public view
//!
//! Turns ranked matches into [`PublicPost`] items. Only the title, start
//! time and video links cross this boundary; scores, goals and overtime
//! flags stay behind.

use ahash::AHashMap;
use chrono::{DateTime, NaiveDate, Utc};
use rewatch_domain::{
    DigestIssue, MatchForScoring, PublicPost, PublicPostItem, RankedMatch, VideoKind,
    VideoLinkResult,
};

/// Display title of a match, e.g. `"BOS vs NYR"`.
pub fn match_title(game: &MatchForScoring) -> String {
    format!("{} vs {}", game.home.short_label(), game.away.short_label())
}

/// Build the post for `run_date`.
///
/// Matches below `min_interest_score` are dropped; the rest keep their rank
/// order. The post's issues are `carried_issues` followed by the issues of
/// erroring video lookups, in item order (highlights before full).
pub fn build_public_post(
    run_date: NaiveDate,
    generated_at: DateTime<Utc>,
    ranked: &[RankedMatch],
    video_links: &[VideoLinkResult],
    min_interest_score: f64,
    carried_issues: Vec<DigestIssue>,
) -> PublicPost {
    let mut by_key: AHashMap<(&str, VideoKind), &VideoLinkResult> = AHashMap::new();
    for link in video_links {
        by_key.insert((link.match_id.as_str(), link.kind), link);
    }

    let mut issues = carried_issues;
    let mut items = Vec::new();

    for entry in ranked.iter().filter(|rm| rm.score.total >= min_interest_score) {
        let id = entry.match_id();
        let highlights = by_key.get(&(id, VideoKind::Highlights)).copied();
        let full = by_key.get(&(id, VideoKind::Full)).copied();

        issues.extend(
            [highlights, full].into_iter().flatten().filter_map(VideoLinkResult::issue).cloned(),
        );

        items.push(PublicPostItem {
            match_id: id.to_string(),
            title: match_title(&entry.game),
            start_time: entry.game.start_time,
            highlights_url: highlights.and_then(VideoLinkResult::url).map(str::to_string),
            full_url: full.and_then(VideoLinkResult::url).map(str::to_string),
            rank_score: Some(entry.score.total),
        });
    }

    PublicPost { run_date, generated_at, items, issues }
}
