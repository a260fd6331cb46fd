//! JSON export document.
//!
//! Serializes an assessment together with the answers that produced it, so
//! a download collaborator can hand the user a self-contained record.

use crate::core::{AnswerSet, AssessmentResult};
use crate::errors::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const EXPORT_VERSION: &str = "1.0";
pub const REGULATION: &str = "EU 2024/1689 (AI Act)";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExportDocument {
    pub export_date: DateTime<Utc>,
    pub version: &'static str,
    pub regulation: &'static str,
    pub assessment: AssessmentResult,
    pub answers: AnswerSet,
}

impl ExportDocument {
    pub fn new(assessment: AssessmentResult, answers: AnswerSet) -> Self {
        Self::at(Utc::now(), assessment, answers)
    }

    /// Deterministic constructor for callers that control the timestamp.
    pub fn at(export_date: DateTime<Utc>, assessment: AssessmentResult, answers: AnswerSet) -> Self {
        Self {
            export_date,
            version: EXPORT_VERSION,
            regulation: REGULATION,
            assessment,
            answers,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::engine::evaluate;

    #[test]
    fn export_embeds_assessment_and_answers() {
        let mut answers = AnswerSet::new();
        answers.select_single("chatbot", "yes");

        let result = evaluate(&answers, EngineConfig::rules()).unwrap();
        let timestamp = "2025-06-01T12:00:00Z".parse().unwrap();
        let document = ExportDocument::at(timestamp, result, answers);

        let json: serde_json::Value =
            serde_json::from_str(&document.to_json_pretty().unwrap()).unwrap();
        assert_eq!(json["version"], "1.0");
        assert_eq!(json["regulation"], "EU 2024/1689 (AI Act)");
        assert_eq!(json["assessment"]["level"], "limited");
        assert_eq!(json["answers"]["chatbot"], "yes");
        // Rule-engine results omit the weighted score fields entirely.
        assert!(json["assessment"].get("score").is_none());
    }
}
