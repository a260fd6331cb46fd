//! Weighted scoring engine.
//!
//! Purely additive: every answered option contributes its point value, the
//! sum is normalized against the maximum possible score and the resulting
//! percentage is bucketed into one of four tiers. There is no short-circuit
//! and no per-question indicator, so the result carries no triggers; the
//! score breakdown in [`crate::report::section_scores`] is the audit trail.

use crate::catalog::{weighted_catalog, Catalog, MAX_POINTS_PER_QUESTION};
use crate::config::EngineConfig;
use crate::core::{Answer, AnswerSet, AssessmentResult, RiskLevel};
use crate::engine::{check_completeness, log_unknown_answers, Classifier};
use crate::errors::Result;
use crate::resolver::resolve;
use im::Vector;
use log::debug;

pub struct WeightedEngine {
    config: EngineConfig,
    catalog: &'static Catalog,
}

/// Bucket a percentage into a tier. Thresholds are inclusive upper bounds;
/// the GPAI tiers are never produced by this engine.
pub fn level_for_percentage(percentage: u32) -> RiskLevel {
    match percentage {
        0..=25 => RiskLevel::Minimal,
        26..=50 => RiskLevel::Limited,
        51..=75 => RiskLevel::High,
        _ => RiskLevel::Unacceptable,
    }
}

impl WeightedEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            catalog: weighted_catalog(),
        }
    }

    fn total_score(&self, answers: &AnswerSet) -> u32 {
        let mut score = 0;
        for question in self.catalog.questions() {
            match answers.get(question.id) {
                Some(Answer::Single(value)) => match question.points_for(value) {
                    Some(points) => score += points,
                    None => debug!("ignoring unknown {} value {value:?}", question.id),
                },
                Some(Answer::Multiple(_)) => {
                    // The weighted catalog is single-choice throughout.
                    debug!("ignoring multi-select answer for {}", question.id);
                }
                None => {}
            }
        }
        score
    }
}

impl Classifier for WeightedEngine {
    fn evaluate(&self, answers: &AnswerSet) -> Result<AssessmentResult> {
        check_completeness(self.config.completeness, self.catalog, answers)?;
        log_unknown_answers(self.catalog, answers);

        let max_score = self.catalog.len() as u32 * MAX_POINTS_PER_QUESTION;
        let score = self.total_score(answers);
        let percentage = ((f64::from(score) / f64::from(max_score)) * 100.0).round() as u32;
        let level = level_for_percentage(percentage);

        let guidance = resolve(level);
        let articles = guidance
            .obligations
            .iter()
            .filter_map(|o| o.article.clone())
            .collect();

        Ok(AssessmentResult {
            level,
            profile: level.profile(),
            score: Some(score),
            max_score: Some(max_score),
            percentage: Some(percentage),
            triggers: Vector::new(),
            obligations: guidance.obligations,
            recommendations: guidance.recommendations,
            articles,
        })
    }
}
