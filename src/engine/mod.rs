//! Classification strategies.
//!
//! Two engines implement the same `Classifier` contract: the rule/indicator
//! engine escalates through per-question risk indicators tied to legal
//! articles, while the weighted engine sums option point values and buckets
//! the resulting percentage. Both are pure: the same answer set always
//! yields a structurally equal result.

pub mod rules;
pub mod weighted;

use crate::catalog::Catalog;
use crate::config::{Completeness, EngineConfig};
use crate::core::{AnswerSet, AssessmentResult};
use crate::errors::{ActmapError, Result};
use log::debug;
use serde::{Deserialize, Serialize};

pub trait Classifier {
    fn evaluate(&self, answers: &AnswerSet) -> Result<AssessmentResult>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Indicator-based escalation with legal-article traceability.
    #[default]
    Rules,
    /// Additive point scoring bucketed by percentage thresholds.
    Weighted,
}

/// Build the classifier selected by the configuration.
pub fn classifier(config: EngineConfig) -> Box<dyn Classifier + Send + Sync> {
    match config.strategy {
        Strategy::Rules => Box::new(rules::RuleEngine::new(config)),
        Strategy::Weighted => Box::new(weighted::WeightedEngine::new(config)),
    }
}

/// One-shot evaluation under the given configuration.
pub fn evaluate(answers: &AnswerSet, config: EngineConfig) -> Result<AssessmentResult> {
    debug!("evaluating {} answer(s) with {:?} strategy", answers.len(), config.strategy);
    classifier(config).evaluate(answers)
}

/// Strict-completeness gate shared by both engines.
pub(crate) fn check_completeness(
    completeness: Completeness,
    catalog: &Catalog,
    answers: &AnswerSet,
) -> Result<()> {
    if completeness == Completeness::Lenient {
        return Ok(());
    }
    let missing: Vec<String> = catalog
        .questions()
        .iter()
        .filter(|q| !answers.contains(q.id))
        .map(|q| q.id.to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ActmapError::Incomplete { missing })
    }
}

/// Log answers that reference no catalog question. They are ignored by
/// evaluation, which keeps the engine forward-compatible with catalog
/// changes, but a debug trace helps diagnose drifting callers.
pub(crate) fn log_unknown_answers(catalog: &Catalog, answers: &AnswerSet) {
    for (id, _) in answers.iter() {
        if catalog.get(id).is_none() {
            debug!("ignoring answer for unknown question id {id:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::indicator_catalog;

    #[test]
    fn lenient_accepts_empty_answers() {
        let answers = AnswerSet::new();
        assert!(check_completeness(Completeness::Lenient, indicator_catalog(), &answers).is_ok());
    }

    #[test]
    fn strict_lists_missing_questions() {
        let mut answers = AnswerSet::new();
        answers.select_single("manipulation", "no");

        let err = check_completeness(Completeness::Strict, indicator_catalog(), &answers)
            .unwrap_err();
        match err {
            ActmapError::Incomplete { missing } => {
                assert_eq!(missing.len(), indicator_catalog().len() - 1);
                assert!(!missing.contains(&"manipulation".to_string()));
            }
            other => panic!("expected Incomplete, got {other:?}"),
        }
    }

    #[test]
    fn dispatch_matches_strategy() {
        let answers = AnswerSet::new();
        let rules = evaluate(&answers, EngineConfig::rules()).unwrap();
        let weighted = evaluate(&answers, EngineConfig::weighted()).unwrap();
        assert!(rules.score.is_none());
        assert_eq!(weighted.score, Some(0));
    }
}
