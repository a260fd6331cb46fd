//! Rule/indicator engine.
//!
//! Evaluation runs fixed passes over the indicator catalog in regulation
//! order: prohibited practices (Article 5) short-circuit to `Unacceptable`;
//! Annex I/III matches, GPAI status and Article 50 transparency matches
//! escalate monotonically; context questions only add recommendations.

use crate::catalog::obligations::{context_recommendations, ContextBundle};
use crate::catalog::{indicator_catalog, Catalog, Question};
use crate::config::EngineConfig;
use crate::core::{
    Answer, AnswerSet, AssessmentResult, Recommendation, RiskLevel, Trigger, NONE_SENTINEL,
};
use crate::engine::{check_completeness, log_unknown_answers, Classifier};
use crate::errors::Result;
use crate::resolver::resolve;
use im::Vector;
use log::debug;

/// Question ids whose "yes" answer encodes an outright-prohibited practice.
const PROHIBITED_QUESTIONS: &[&str] = &[
    "manipulation",
    "vulnerability_exploitation",
    "social_scoring",
    "biometric_realtime",
    "emotion_recognition_work",
    "biometric_categorization",
    "facial_scraping",
];

/// Annex III domain questions, in catalog order.
const ANNEX3_QUESTIONS: &[&str] = &[
    "biometric_identification",
    "critical_infrastructure",
    "education",
    "employment",
    "essential_services",
    "law_enforcement",
    "migration",
    "justice",
];

/// Article 50 disclosure questions.
const TRANSPARENCY_QUESTIONS: &[&str] = &["chatbot", "content_generation", "emotion_detection"];

const REASON_PROHIBITED: &str = "Practice prohibited by the AI Act";
const REASON_ANNEX1: &str = "Safety component of a regulated product (Annex I)";
const REASON_ANNEX3: &str = "High-risk domain (Annex III)";
const REASON_GPAI_SYSTEMIC: &str = "General-purpose AI model presenting systemic risk";
const REASON_GPAI_STANDARD: &str = "General-purpose AI model";
const REASON_TRANSPARENCY: &str = "Transparency obligation";

pub struct RuleEngine {
    config: EngineConfig,
    catalog: &'static Catalog,
}

/// Mutable state threaded through the passes of one evaluation.
struct Evaluation {
    level: RiskLevel,
    triggers: Vector<Trigger>,
    articles: Vec<String>,
    context: Vec<Recommendation>,
}

impl Evaluation {
    fn new() -> Self {
        Self {
            level: RiskLevel::Minimal,
            triggers: Vector::new(),
            articles: Vec::new(),
            context: Vec::new(),
        }
    }

    /// Record a trigger and escalate. The trigger is kept even when the
    /// level is already at or above the indicated one, so the audit trail
    /// lists every matching answer.
    fn escalate(&mut self, question: &Question, level: RiskLevel, article: &str, reason: &str) {
        self.level = self.level.upgrade(level);
        self.triggers.push_back(Trigger {
            question_id: question.id.to_string(),
            question: question.title.to_string(),
            article: article.to_string(),
            reason: reason.to_string(),
        });
        if !self.articles.iter().any(|a| a == article) {
            self.articles.push(article.to_string());
        }
    }
}

impl RuleEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            catalog: indicator_catalog(),
        }
    }

    /// Article 5 pass. Returns true when a prohibited practice matched, in
    /// which case the remaining escalation passes are skipped: nothing
    /// outranks `Unacceptable`.
    fn check_prohibited(&self, answers: &AnswerSet, eval: &mut Evaluation) -> bool {
        for &id in PROHIBITED_QUESTIONS {
            let Some(question) = self.catalog.get(id) else {
                continue;
            };
            let Some(value) = answers.single(id) else {
                continue;
            };
            if let Some(indicator) = question.indicator(value) {
                eval.escalate(question, indicator.level, indicator.article, REASON_PROHIBITED);
            }
        }
        eval.level == RiskLevel::Unacceptable
    }

    /// Annex I and Annex III pass.
    fn check_high_risk(&self, answers: &AnswerSet, eval: &mut Evaluation) {
        if let Some(question) = self.catalog.get("annex1_product") {
            if let Some(Answer::Multiple(values)) = answers.get("annex1_product") {
                for value in values.iter().map(String::as_str) {
                    if value == NONE_SENTINEL {
                        continue;
                    }
                    match question.indicator(value) {
                        Some(indicator) => eval.escalate(
                            question,
                            indicator.level,
                            indicator.article,
                            REASON_ANNEX1,
                        ),
                        None => debug!("ignoring unknown annex1_product value {value:?}"),
                    }
                }
            }
        }

        for &id in ANNEX3_QUESTIONS {
            let Some(question) = self.catalog.get(id) else {
                continue;
            };
            match answers.get(id) {
                Some(Answer::Multiple(values)) => {
                    for value in values.iter().map(String::as_str) {
                        if value == NONE_SENTINEL {
                            continue;
                        }
                        if let Some(indicator) = question.indicator(value) {
                            eval.escalate(
                                question,
                                indicator.level,
                                indicator.article,
                                REASON_ANNEX3,
                            );
                        } else {
                            debug!("ignoring unknown {id} value {value:?}");
                        }
                    }
                }
                Some(Answer::Single(value)) => {
                    if value == "no" || value == NONE_SENTINEL {
                        continue;
                    }
                    if let Some(indicator) = question.indicator(value) {
                        eval.escalate(question, indicator.level, indicator.article, REASON_ANNEX3);
                    }
                }
                None => {}
            }
        }
    }

    /// Chapter V pass. Exactly one of the two GPAI triggers may fire: the
    /// systemic branch on an explicit "yes", otherwise the standard branch
    /// on an explicit "no" or a declared GPAI-provider role.
    fn check_gpai(&self, answers: &AnswerSet, eval: &mut Evaluation) {
        let Some(question) = self.catalog.get("gpai_systemic") else {
            return;
        };
        let systemic = answers.single("gpai_systemic");
        if systemic == Some("yes") {
            if let Some(indicator) = question.indicator("yes") {
                eval.escalate(question, indicator.level, indicator.article, REASON_GPAI_SYSTEMIC);
            }
        } else if systemic == Some("no") || answers.single("system_type") == Some("gpai_provider") {
            if let Some(indicator) = question.indicator("no") {
                eval.escalate(question, indicator.level, indicator.article, REASON_GPAI_STANDARD);
            }
        }
    }

    /// Article 50 pass: disclosure-related answers escalate to `Limited`,
    /// which has no effect when a higher level is already set.
    fn check_transparency(&self, answers: &AnswerSet, eval: &mut Evaluation) {
        for &id in TRANSPARENCY_QUESTIONS {
            let Some(question) = self.catalog.get(id) else {
                continue;
            };
            let Some(value) = answers.single(id) else {
                continue;
            };
            if let Some(indicator) = question.indicator(value) {
                eval.escalate(question, indicator.level, indicator.article, REASON_TRANSPARENCY);
            }
        }
    }

    /// Context pass: answer-keyed recommendation bundles. Never touches the
    /// level.
    fn add_context_recommendations(&self, answers: &AnswerSet, eval: &mut Evaluation) {
        if answers.single("data_personal") == Some("yes") {
            eval.context
                .extend(context_recommendations(ContextBundle::DataProtection));
        }

        let oversight_gap = answers.single("human_oversight") == Some(NONE_SENTINEL)
            && matches!(eval.level, RiskLevel::High | RiskLevel::GpaiSystemic);
        if oversight_gap {
            eval.context
                .extend(context_recommendations(ContextBundle::MissingOversight));
        }

        let documentation_gap = answers.single("documentation") == Some(NONE_SENTINEL)
            && matches!(
                eval.level,
                RiskLevel::High | RiskLevel::GpaiSystemic | RiskLevel::GpaiStandard
            );
        if documentation_gap {
            eval.context
                .extend(context_recommendations(ContextBundle::MissingDocumentation));
        }
    }

    /// Attach level-bound guidance and merge context recommendations,
    /// first occurrence winning on duplicate titles.
    fn finalize(&self, eval: Evaluation) -> AssessmentResult {
        let mut guidance = resolve(eval.level);
        guidance.recommendations.extend(eval.context);

        AssessmentResult {
            level: eval.level,
            profile: eval.level.profile(),
            score: None,
            max_score: None,
            percentage: None,
            triggers: eval.triggers,
            obligations: guidance.obligations,
            recommendations: guidance.recommendations,
            articles: eval.articles,
        }
    }
}

impl Classifier for RuleEngine {
    fn evaluate(&self, answers: &AnswerSet) -> Result<AssessmentResult> {
        check_completeness(self.config.completeness, self.catalog, answers)?;
        log_unknown_answers(self.catalog, answers);

        let mut eval = Evaluation::new();

        if self.check_prohibited(answers, &mut eval) {
            return Ok(self.finalize(eval));
        }

        self.check_high_risk(answers, &mut eval);
        self.check_gpai(answers, &mut eval);
        self.check_transparency(answers, &mut eval);
        self.add_context_recommendations(answers, &mut eval);

        Ok(self.finalize(eval))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    fn engine() -> RuleEngine {
        RuleEngine::new(EngineConfig::rules())
    }

    #[test]
    fn empty_answers_resolve_to_minimal() {
        let result = engine().evaluate(&AnswerSet::new()).unwrap();
        assert_eq!(result.level, RiskLevel::Minimal);
        assert!(result.triggers.is_empty());
        assert!(!result.obligations.is_empty());
    }

    #[test]
    fn prohibited_practice_short_circuits() {
        let mut answers = AnswerSet::new();
        answers.select_single("manipulation", "yes");
        answers.select_single("gpai_systemic", "yes");
        answers.select_single("chatbot", "yes");

        let result = engine().evaluate(&answers).unwrap();
        assert_eq!(result.level, RiskLevel::Unacceptable);
        assert_eq!(result.triggers.len(), 1);
        assert_eq!(result.triggers[0].article, "Article 5(1)(a)");
        // Short-circuit: no GPAI or transparency triggers recorded.
        assert!(result.triggers.iter().all(|t| t.question_id == "manipulation"));
    }

    #[test]
    fn all_prohibited_matches_are_recorded() {
        let mut answers = AnswerSet::new();
        answers.select_single("manipulation", "yes");
        answers.select_single("social_scoring", "yes");

        let result = engine().evaluate(&answers).unwrap();
        assert_eq!(result.level, RiskLevel::Unacceptable);
        assert_eq!(result.triggers.len(), 2);
        assert_eq!(result.articles, ["Article 5(1)(a)", "Article 5(1)(c)"]);
    }

    #[test]
    fn annex3_multi_select_escalates_per_value() {
        let mut answers = AnswerSet::new();
        answers.select("employment", "recruitment");
        answers.select("employment", "monitoring");

        let result = engine().evaluate(&answers).unwrap();
        assert_eq!(result.level, RiskLevel::High);
        assert_eq!(result.triggers.len(), 2);
    }

    #[test]
    fn none_sentinel_does_not_escalate() {
        let mut answers = AnswerSet::new();
        answers.select("employment", NONE_SENTINEL);
        answers.select("education", NONE_SENTINEL);

        let result = engine().evaluate(&answers).unwrap();
        assert_eq!(result.level, RiskLevel::Minimal);
        assert!(result.triggers.is_empty());
    }

    #[test]
    fn biometric_verification_is_limited_not_high() {
        let mut answers = AnswerSet::new();
        answers.select_single("biometric_identification", "verification");

        let result = engine().evaluate(&answers).unwrap();
        assert_eq!(result.level, RiskLevel::Limited);
    }

    #[test]
    fn gpai_systemic_and_standard_are_exclusive() {
        let mut systemic = AnswerSet::new();
        systemic.select_single("gpai_systemic", "yes");
        systemic.select_single("system_type", "gpai_provider");

        let result = engine().evaluate(&systemic).unwrap();
        assert_eq!(result.level, RiskLevel::GpaiSystemic);
        let gpai_triggers: Vec<_> = result
            .triggers
            .iter()
            .filter(|t| t.question_id == "gpai_systemic")
            .collect();
        assert_eq!(gpai_triggers.len(), 1);
    }

    #[test]
    fn gpai_provider_role_implies_standard_tier() {
        let mut answers = AnswerSet::new();
        answers.select_single("system_type", "gpai_provider");

        let result = engine().evaluate(&answers).unwrap();
        assert_eq!(result.level, RiskLevel::GpaiStandard);
        assert_eq!(result.triggers[0].article, "Article 53");
    }

    #[test]
    fn transparency_does_not_downgrade_high() {
        let mut answers = AnswerSet::new();
        answers.select("essential_services", "credit");
        answers.select_single("chatbot", "yes");

        let result = engine().evaluate(&answers).unwrap();
        assert_eq!(result.level, RiskLevel::High);
        // Both triggers still recorded.
        assert_eq!(result.triggers.len(), 2);
    }

    #[test]
    fn oversight_gap_only_applies_to_high_tiers() {
        let mut low = AnswerSet::new();
        low.select_single("human_oversight", "none");
        let result = engine().evaluate(&low).unwrap();
        assert!(!result
            .recommendations
            .iter()
            .any(|r| r.title == "Implement human oversight"));

        let mut high = AnswerSet::new();
        high.select_single("human_oversight", "none");
        high.select("employment", "recruitment");
        let result = engine().evaluate(&high).unwrap();
        assert!(result
            .recommendations
            .iter()
            .any(|r| r.title == "Implement human oversight"));
    }

    #[test]
    fn gdpr_bundle_added_for_personal_data() {
        let mut answers = AnswerSet::new();
        answers.select_single("data_personal", "yes");

        let result = engine().evaluate(&answers).unwrap();
        assert_eq!(result.level, RiskLevel::Minimal);
        assert!(result
            .recommendations
            .iter()
            .any(|r| r.title == "GDPR compliance"));
    }

    #[test]
    fn unknown_ids_and_values_are_ignored() {
        let mut answers = AnswerSet::new();
        answers.select_single("not_a_question", "yes");
        answers.select_single("chatbot", "not_an_option");

        let result = engine().evaluate(&answers).unwrap();
        assert_eq!(result.level, RiskLevel::Minimal);
        assert!(result.triggers.is_empty());
    }
}
