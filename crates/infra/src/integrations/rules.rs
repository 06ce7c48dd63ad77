//! Rules source serving the rules from configuration

use rewatch_core::{RulesBatch, RulesSource};
use rewatch_domain::constants::CODE_RULES_EMPTY;
use rewatch_domain::{DigestIssue, ScoringRule, SourceSystem};

#[derive(Debug, Clone, Default)]
pub struct ConfiguredRulesSource {
    rules: Vec<ScoringRule>,
}

impl ConfiguredRulesSource {
    pub fn new(rules: Vec<ScoringRule>) -> Self {
        Self { rules }
    }
}

impl RulesSource for ConfiguredRulesSource {
    fn load_rules(&self) -> RulesBatch {
        let issues = if self.rules.is_empty() {
            vec![DigestIssue::warning(
                CODE_RULES_EMPTY,
                SourceSystem::Core,
                "No scoring rules configured; only match bonuses apply.",
            )]
        } else {
            Vec::new()
        };
        RulesBatch { rules: self.rules.clone(), issues }
    }
}
