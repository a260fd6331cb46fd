//! Derived statistics for report-rendering collaborators.

use crate::catalog::{weighted_catalog, MAX_POINTS_PER_QUESTION};
use crate::core::{Answer, AnswerSet, AssessmentResult};
use serde::Serialize;

/// Headline counts for a results view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AssessmentSummary {
    pub level_label: &'static str,
    pub obligations: usize,
    pub recommendations: usize,
    pub triggers: usize,
    pub articles: usize,
    /// Obligations at critical/high priority plus high-priority
    /// recommendations.
    pub high_priority_items: usize,
}

pub fn summarize(result: &AssessmentResult) -> AssessmentSummary {
    let high_priority_items = result
        .obligations
        .iter()
        .filter(|o| o.priority.is_high())
        .count()
        + result
            .recommendations
            .iter()
            .filter(|r| r.priority.is_high())
            .count();

    AssessmentSummary {
        level_label: result.profile.label,
        obligations: result.obligations.len(),
        recommendations: result.recommendations.len(),
        triggers: result.triggers.len(),
        articles: result.articles.len(),
        high_priority_items,
    }
}

/// Per-section score for the weighted catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SectionScore {
    pub section: &'static str,
    pub title: &'static str,
    pub score: u32,
    pub max_score: u32,
    pub percentage: u32,
}

/// Break the weighted score down by section. Unanswered questions count as
/// zero, same as the engine itself.
pub fn section_scores(answers: &AnswerSet) -> Vec<SectionScore> {
    let catalog = weighted_catalog();
    catalog
        .sections()
        .iter()
        .map(|section| {
            let questions: Vec<_> = catalog
                .questions()
                .iter()
                .filter(|q| q.section == section.id)
                .collect();
            let score = questions
                .iter()
                .filter_map(|q| match answers.get(q.id) {
                    Some(Answer::Single(value)) => q.points_for(value),
                    _ => None,
                })
                .sum();
            let max_score = questions.len() as u32 * MAX_POINTS_PER_QUESTION;
            let percentage = if max_score > 0 {
                ((f64::from(score) / f64::from(max_score)) * 100.0).round() as u32
            } else {
                0
            };
            SectionScore {
                section: section.id,
                title: section.title,
                score,
                max_score,
                percentage,
            }
        })
        .collect()
}
