//! Ranking of scored matches

use std::cmp::Ordering;

use rewatch_domain::RankedMatch;

/// Sort by descending score; equal scores keep their input order.
pub fn rank_matches(mut scored: Vec<RankedMatch>) -> Vec<RankedMatch> {
    scored.sort_by(|a, b| by_score_desc(a.score.total, b.score.total));
    scored
}

// `total_cmp` keeps the comparator total even for NaN. Adding 0.0 folds
// -0.0 into 0.0 so zero scores tie.
fn by_score_desc(a: f64, b: f64) -> Ordering {
    (b + 0.0).total_cmp(&(a + 0.0))
}
