//! Interest scoring
//!
//! A match score is the sum of, in this order:
//! 1. configured weights of the home and away teams
//! 2. per player, `weight * (goals + 0.5 * assists)`
//! 3. fixed bonuses for overtime and shootout
//! 4. a total-goals bonus growing linearly up to the saturation point
//!
//! Zero terms are not recorded. Scoring is a pure function of its inputs.

use ahash::AHashMap;
use rewatch_domain::constants::{
    ASSIST_FACTOR, OVERTIME_BONUS, SHOOTOUT_BONUS, TOTAL_GOALS_BONUS_WEIGHT,
    TOTAL_GOALS_SATURATION,
};
use rewatch_domain::{
    ContributionReason, EntityKind, EntityRef, MatchForScoring, MatchScore, PlayerGameStats,
    RankedMatch, ScoreContribution, ScoringRule,
};
use tracing::{debug, warn};

/// Rule weights folded per entity
///
/// Several rules for the same entity add up. Rules with an unknown entity
/// kind are ignored and non-finite weights count as zero.
#[derive(Debug, Default, Clone)]
pub struct RuleWeights {
    teams: AHashMap<String, f64>,
    players: AHashMap<String, f64>,
}

impl RuleWeights {
    pub fn from_rules(rules: &[ScoringRule]) -> Self {
        let mut weights = Self::default();
        for rule in rules {
            let Some(kind) = rule.entity_kind() else {
                debug!(entity_type = %rule.entity_type, "Skipping rule with unknown entity type");
                continue;
            };
            let weight = if rule.weight.is_finite() {
                rule.weight
            } else {
                warn!(
                    entity_type = %rule.entity_type,
                    entity_id = %rule.entity_id,
                    "Rule weight is not a finite number, treating as zero"
                );
                0.0
            };
            let table = match kind {
                EntityKind::Team => &mut weights.teams,
                EntityKind::Player => &mut weights.players,
            };
            *table.entry(rule.entity_id.clone()).or_insert(0.0) += weight;
        }
        zero_overflowed(&mut weights.teams, EntityKind::Team);
        zero_overflowed(&mut weights.players, EntityKind::Player);
        weights
    }

    pub fn team(&self, team_id: &str) -> f64 {
        self.teams.get(team_id).copied().unwrap_or(0.0)
    }

    pub fn player(&self, player_id: &str) -> f64 {
        self.players.get(player_id).copied().unwrap_or(0.0)
    }
}

/// Folded sums of finite weights can still overflow to an infinity.
fn zero_overflowed(table: &mut AHashMap<String, f64>, kind: EntityKind) {
    for (entity_id, weight) in table.iter_mut().filter(|(_, w)| !w.is_finite()) {
        warn!(entity_type = %kind, %entity_id, "Summed rule weight overflowed, treating as zero");
        *weight = 0.0;
    }
}

/// Score every match, preserving input order.
pub fn score_matches(
    matches: &[MatchForScoring],
    player_stats: &[PlayerGameStats],
    rules: &[ScoringRule],
) -> Vec<RankedMatch> {
    let weights = RuleWeights::from_rules(rules);

    let mut stats_by_match: AHashMap<&str, Vec<&PlayerGameStats>> = AHashMap::new();
    for stat in player_stats {
        stats_by_match.entry(stat.match_id.as_str()).or_default().push(stat);
    }

    matches
        .iter()
        .map(|game| {
            let stats = stats_by_match.get(game.match_id.as_str()).map_or(&[][..], Vec::as_slice);
            RankedMatch { game: game.clone(), score: score_match(game, stats, &weights) }
        })
        .collect()
}

/// Score a single match against pre-folded weights.
pub fn score_match(
    game: &MatchForScoring,
    stats: &[&PlayerGameStats],
    weights: &RuleWeights,
) -> MatchScore {
    let mut contributions = Vec::new();

    for team in [&game.home, &game.away] {
        let weight = weights.team(&team.team_id);
        if weight != 0.0 {
            contributions.push(ScoreContribution::for_entity(
                ContributionReason::TeamWeight,
                weight,
                EntityRef::new(EntityKind::Team, team.team_id.clone()),
            ));
        }
    }

    for stat in stats {
        let weight = weights.player(&stat.player_id);
        if weight == 0.0 {
            continue;
        }
        let involvement = f64::from(stat.goals) + ASSIST_FACTOR * f64::from(stat.assists);
        let delta = weight * involvement;
        if !delta.is_finite() {
            warn!(player_id = %stat.player_id, "Player contribution overflowed, treating as zero");
            continue;
        }
        if delta != 0.0 {
            contributions.push(ScoreContribution::for_entity(
                ContributionReason::PlayerWeight,
                delta,
                EntityRef::new(EntityKind::Player, stat.player_id.clone()),
            ));
        }
    }

    if game.went_overtime == Some(true) {
        contributions
            .push(ScoreContribution::bonus(ContributionReason::OvertimeBonus, OVERTIME_BONUS));
    }
    if game.went_shootout == Some(true) {
        contributions
            .push(ScoreContribution::bonus(ContributionReason::ShootoutBonus, SHOOTOUT_BONUS));
    }

    let goals = f64::from(game.final_score.total_goals());
    let goals_bonus = (goals / TOTAL_GOALS_SATURATION).min(1.0) * TOTAL_GOALS_BONUS_WEIGHT;
    if goals_bonus != 0.0 {
        contributions
            .push(ScoreContribution::bonus(ContributionReason::TotalGoalsBonus, goals_bonus));
    }

    // Every term is finite, so the sum can only saturate, never turn NaN.
    let total = contributions.iter().fold(0.0_f64, |acc, c| acc + c.weight);
    let total = if total.is_finite() { total } else { f64::MAX.copysign(total) };
    MatchScore { match_id: game.match_id.clone(), total, contributions }
}
