//! actmap: deterministic risk classification for AI-system self-assessments,
//! modeled on Regulation (EU) 2024/1689 (the AI Act).
//!
//! A questionnaire collaborator supplies an [`AnswerSet`]; [`evaluate`] maps
//! it onto a [`RiskLevel`] plus the triggers, obligations and
//! recommendations attached to that tier. Two interchangeable strategies
//! implement the [`Classifier`] contract: an indicator-based rule engine
//! with legal-article traceability and a point-weighted scoring engine.
//! Output is advisory only and carries no legal authority.

pub mod catalog;
pub mod config;
pub mod core;
pub mod engine;
pub mod errors;
pub mod io;
pub mod report;
pub mod resolver;

// Re-export commonly used types
pub use crate::config::{Completeness, EngineConfig};
pub use crate::core::{
    Answer, AnswerSet, AssessmentResult, Obligation, Priority, Recommendation, RiskLevel,
    RiskProfile, Titled, TitledList, Trigger, NONE_SENTINEL,
};
pub use crate::engine::{classifier, evaluate, Classifier, Strategy};
pub use crate::errors::{ActmapError, Result};
pub use crate::io::export::ExportDocument;
pub use crate::report::{section_scores, summarize, AssessmentSummary, SectionScore};
pub use crate::resolver::{resolve, Guidance};
