//! Static question catalogs.
//!
//! The catalog is the single source of truth for valid option values: the
//! engines look indicators and point values up here and never carry a
//! parallel hardcoded option table. Catalogs are built once per process and
//! shared read-only across concurrent evaluations.

pub mod obligations;
mod questions;
mod weighted;

use crate::core::RiskLevel;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

pub use weighted::MAX_POINTS_PER_QUESTION;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Single,
    Multiple,
}

/// Ties one option value of a question to the risk level it indicates and
/// the legal article backing the classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RiskIndicator {
    pub value: &'static str,
    pub level: RiskLevel,
    pub article: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct QuestionOption {
    pub value: &'static str,
    pub label: &'static str,
    /// Weighted-engine point value; zero throughout the indicator catalog.
    pub points: u32,
}

#[derive(Clone, Debug, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub section: &'static str,
    pub title: &'static str,
    pub question_type: QuestionType,
    pub options: Vec<QuestionOption>,
    pub indicators: Vec<RiskIndicator>,
}

impl Question {
    pub fn option(&self, value: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.value == value)
    }

    /// The risk indicator configured for an option value, if any.
    pub fn indicator(&self, value: &str) -> Option<&RiskIndicator> {
        self.indicators.iter().find(|i| i.value == value)
    }

    /// Point value of an option; `None` for unknown values.
    pub fn points_for(&self, value: &str) -> Option<u32> {
        self.option(value).map(|o| o.points)
    }

    pub fn is_multiple(&self) -> bool {
        self.question_type == QuestionType::Multiple
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Read-only, ordered question list with id lookup.
#[derive(Debug)]
pub struct Catalog {
    sections: Vec<Section>,
    questions: Vec<Question>,
    by_id: HashMap<&'static str, usize>,
}

impl Catalog {
    fn new(sections: Vec<Section>, questions: Vec<Question>) -> Self {
        let by_id = questions
            .iter()
            .enumerate()
            .map(|(idx, q)| (q.id, idx))
            .collect();
        Self {
            sections,
            questions,
            by_id,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Lookup by question id. Unknown ids are a caller-side no-op, never an
    /// error: answers referencing them are simply ignored.
    pub fn get(&self, id: &str) -> Option<&Question> {
        self.by_id.get(id).map(|&idx| &self.questions[idx])
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Catalog for the rule/indicator engine: per-option risk indicators tied to
/// AI Act articles.
pub fn indicator_catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(questions::build)
}

/// Catalog for the weighted engine: 25 single-choice questions, each option
/// worth 0 to 5 points.
pub fn weighted_catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(weighted::build)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_catalog_lookup() {
        let catalog = indicator_catalog();
        let question = catalog.get("manipulation").unwrap();
        assert_eq!(question.question_type, QuestionType::Single);

        let indicator = question.indicator("yes").unwrap();
        assert_eq!(indicator.level, RiskLevel::Unacceptable);
        assert_eq!(indicator.article, "Article 5(1)(a)");

        assert!(question.indicator("no").is_none());
        assert!(catalog.get("nonexistent").is_none());
    }

    #[test]
    fn indicator_catalog_is_ordered_and_complete() {
        let catalog = indicator_catalog();
        assert_eq!(catalog.len(), 25);
        // Prohibited practices come right after identification.
        assert_eq!(catalog.questions()[0].id, "system_type");
        assert_eq!(catalog.questions()[1].id, "manipulation");
    }

    #[test]
    fn annex1_indicators_cover_all_products() {
        let question = indicator_catalog().get("annex1_product").unwrap();
        assert!(question.is_multiple());
        for option in &question.options {
            if option.value == crate::core::NONE_SENTINEL {
                assert!(question.indicator(option.value).is_none());
            } else {
                let indicator = question.indicator(option.value).unwrap();
                assert_eq!(indicator.level, RiskLevel::High);
            }
        }
    }

    #[test]
    fn weighted_catalog_shape() {
        let catalog = weighted_catalog();
        assert_eq!(catalog.len(), 25);
        assert_eq!(catalog.sections().len(), 5);
        for question in catalog.questions() {
            assert_eq!(question.question_type, QuestionType::Single);
            assert!(question.indicators.is_empty());
            for option in &question.options {
                assert!(option.points <= MAX_POINTS_PER_QUESTION);
            }
        }
    }

    #[test]
    fn weighted_points_lookup_ignores_unknown_values() {
        let question = weighted_catalog().get("q2_decisions").unwrap();
        assert_eq!(question.points_for("full_auto"), Some(5));
        assert_eq!(question.points_for("no"), Some(0));
        assert_eq!(question.points_for("bogus"), None);
    }
}
