//! Scoring rules and scoring outputs

use serde::{Deserialize, Deserializer, Serialize};

use super::matches::MatchForScoring;
use crate::impl_domain_tag_conversions;

/// Kind of entity a scoring rule targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Team,
    Player,
}

impl_domain_tag_conversions!(EntityKind {
    Team => "team",
    Player => "player",
});

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    pub kind: EntityKind,
    pub id: String,
}

impl EntityRef {
    pub fn new(kind: EntityKind, id: impl Into<String>) -> Self {
        Self { kind, id: id.into() }
    }
}

/// One row of the "interest boost" table.
///
/// `entity_type` stays a raw string so rule sources can introduce new kinds
/// without breaking older readers; the scorer skips kinds it does not know.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringRule {
    pub entity_type: String,
    pub entity_id: String,
    /// Additive weight. Values that are not numbers read as NaN and score zero.
    #[serde(deserialize_with = "lenient_weight")]
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ScoringRule {
    pub fn new(entity_type: impl Into<String>, entity_id: impl Into<String>, weight: f64) -> Self {
        Self { entity_type: entity_type.into(), entity_id: entity_id.into(), weight, label: None }
    }

    pub fn team(team_id: impl Into<String>, weight: f64) -> Self {
        Self::new(EntityKind::Team.as_str(), team_id, weight)
    }

    pub fn player(player_id: impl Into<String>, weight: f64) -> Self {
        Self::new(EntityKind::Player.as_str(), player_id, weight)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Parsed entity kind, `None` for kinds this build does not understand
    pub fn entity_kind(&self) -> Option<EntityKind> {
        self.entity_type.parse().ok()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WeightRepr {
    Number(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

fn lenient_weight<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match WeightRepr::deserialize(deserializer)? {
        WeightRepr::Number(value) => value,
        WeightRepr::Text(text) => text.trim().parse().unwrap_or(f64::NAN),
        WeightRepr::Other(_) => f64::NAN,
    })
}

/// Why a match gained interest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionReason {
    TeamWeight,
    PlayerWeight,
    OvertimeBonus,
    ShootoutBonus,
    TotalGoalsBonus,
}

impl_domain_tag_conversions!(ContributionReason {
    TeamWeight => "team_weight",
    PlayerWeight => "player_weight",
    OvertimeBonus => "overtime_bonus",
    ShootoutBonus => "shootout_bonus",
    TotalGoalsBonus => "total_goals_bonus",
});

/// Single additive term of a match score (diagnostics and tests only)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreContribution {
    pub reason: ContributionReason,
    pub weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<EntityRef>,
}

impl ScoreContribution {
    pub fn bonus(reason: ContributionReason, weight: f64) -> Self {
        Self { reason, weight, entity: None }
    }

    pub fn for_entity(reason: ContributionReason, weight: f64, entity: EntityRef) -> Self {
        Self { reason, weight, entity: Some(entity) }
    }
}

/// Interest score of a match with its breakdown in computation order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchScore {
    pub match_id: String,
    pub total: f64,
    pub contributions: Vec<ScoreContribution>,
}

/// Match paired with its score; list order after ranking is publish order
#[derive(Debug, Clone)]
pub struct RankedMatch {
    pub game: MatchForScoring,
    pub score: MatchScore,
}

impl RankedMatch {
    pub fn match_id(&self) -> &str {
        &self.game.match_id
    }
}
