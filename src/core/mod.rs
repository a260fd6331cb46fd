pub mod answers;
pub mod dedup;

use im::Vector;
use serde::{Deserialize, Serialize};

pub use answers::{Answer, AnswerSet, NONE_SENTINEL};
pub use dedup::{Titled, TitledList};

/// Ordered risk tiers of the AI Act.
///
/// Declaration order is rank order: escalation is a monotonic `max` over this
/// ordering, so the resolved level of an assessment never decreases once a
/// higher tier has been triggered. The two GPAI tiers sit between `Limited`
/// and `High`, mirroring the regulation's 2.2 / 2.5 sub-ranks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// No specific obligations; voluntary codes of conduct encouraged.
    Minimal,
    /// Transparency obligations under Article 50.
    Limited,
    /// General-purpose AI model, Chapter V standard obligations.
    GpaiStandard,
    /// General-purpose AI model presenting systemic risk (Article 55).
    GpaiSystemic,
    /// High-risk system under Articles 6-7 (Annexes I and III).
    High,
    /// Prohibited practice under Article 5.
    Unacceptable,
}

impl RiskLevel {
    /// Numeric rank, 1 (minimal) through 6 (unacceptable).
    pub fn rank(self) -> u8 {
        match self {
            RiskLevel::Minimal => 1,
            RiskLevel::Limited => 2,
            RiskLevel::GpaiStandard => 3,
            RiskLevel::GpaiSystemic => 4,
            RiskLevel::High => 5,
            RiskLevel::Unacceptable => 6,
        }
    }

    /// Monotonic escalation: returns the higher of the two levels.
    pub fn upgrade(self, other: RiskLevel) -> RiskLevel {
        self.max(other)
    }

    /// Human-readable metadata for report rendering.
    pub fn profile(self) -> RiskProfile {
        match self {
            RiskLevel::Unacceptable => RiskProfile {
                level: self,
                label: "Unacceptable risk",
                description: "This AI system is prohibited by the AI Act. It may not be \
                              placed on the market or used within the European Union.",
                color: "unacceptable",
                badge: "UNACCEPTABLE",
            },
            RiskLevel::High => RiskProfile {
                level: self,
                label: "High risk",
                description: "This AI system is classified as high risk. Strict obligations \
                              apply before market placement and throughout its lifecycle.",
                color: "high",
                badge: "HIGH",
            },
            RiskLevel::GpaiSystemic => RiskProfile {
                level: self,
                label: "GPAI model with systemic risk",
                description: "This general-purpose AI model presents systemic risk. \
                              Reinforced obligations apply on top of the standard GPAI ones.",
                color: "high",
                badge: "GPAI-SR",
            },
            RiskLevel::GpaiStandard => RiskProfile {
                level: self,
                label: "Standard GPAI model",
                description: "This general-purpose AI model is subject to the transparency \
                              and documentation obligations of Chapter V.",
                color: "limited",
                badge: "GPAI",
            },
            RiskLevel::Limited => RiskProfile {
                level: self,
                label: "Limited risk",
                description: "This AI system is subject to transparency obligations. Users \
                              must be informed that they are interacting with an AI system.",
                color: "limited",
                badge: "LIMITED",
            },
            RiskLevel::Minimal => RiskProfile {
                level: self,
                label: "Minimal risk",
                description: "This AI system carries no specific obligations under the \
                              AI Act. Adopting voluntary codes of conduct is encouraged.",
                color: "minimal",
                badge: "MINIMAL",
            },
        }
    }
}

/// Priority of an obligation or recommendation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn is_high(self) -> bool {
        self >= Priority::High
    }
}

/// Audit record linking one answered question to one risk escalation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trigger {
    pub question_id: String,
    pub question: String,
    pub article: String,
    pub reason: String,
}

/// Compliance action bound to a risk tier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obligation {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article: Option<String>,
    pub priority: Priority,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}

impl Titled for Obligation {
    fn title(&self) -> &str {
        &self.title
    }
}

/// Advisory action bound to a risk tier or an answer context.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

impl Titled for Recommendation {
    fn title(&self) -> &str {
        &self.title
    }
}

/// Display metadata attached to a resolved risk level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RiskProfile {
    pub level: RiskLevel,
    pub label: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub badge: &'static str,
}

/// Output of one `evaluate` call. Immutable after construction; every call
/// allocates a fresh result, so results may be shared across threads freely.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AssessmentResult {
    pub level: RiskLevel,
    pub profile: RiskProfile,
    /// Raw weighted score; `None` for the rule engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<u32>,
    /// Escalation audit trail, in catalog evaluation order.
    pub triggers: Vector<Trigger>,
    pub obligations: TitledList<Obligation>,
    pub recommendations: TitledList<Recommendation>,
    /// Referenced legal articles, ordered by first occurrence.
    pub articles: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_levels_are_totally_ordered() {
        assert!(RiskLevel::Unacceptable > RiskLevel::High);
        assert!(RiskLevel::High > RiskLevel::GpaiSystemic);
        assert!(RiskLevel::GpaiSystemic > RiskLevel::GpaiStandard);
        assert!(RiskLevel::GpaiStandard > RiskLevel::Limited);
        assert!(RiskLevel::Limited > RiskLevel::Minimal);
    }

    #[test]
    fn upgrade_never_decreases() {
        let level = RiskLevel::High;
        assert_eq!(level.upgrade(RiskLevel::Limited), RiskLevel::High);
        assert_eq!(level.upgrade(RiskLevel::Unacceptable), RiskLevel::Unacceptable);
        assert_eq!(
            RiskLevel::Minimal.upgrade(RiskLevel::GpaiStandard),
            RiskLevel::GpaiStandard
        );
    }

    #[test]
    fn ranks_match_declaration_order() {
        let levels = [
            RiskLevel::Minimal,
            RiskLevel::Limited,
            RiskLevel::GpaiStandard,
            RiskLevel::GpaiSystemic,
            RiskLevel::High,
            RiskLevel::Unacceptable,
        ];
        for pair in levels.windows(2) {
            assert!(pair[0].rank() < pair[1].rank());
        }
    }

    #[test]
    fn priority_high_threshold() {
        assert!(Priority::Critical.is_high());
        assert!(Priority::High.is_high());
        assert!(!Priority::Medium.is_high());
        assert!(!Priority::Low.is_high());
    }

    #[test]
    fn level_serializes_snake_case() {
        let json = serde_json::to_string(&RiskLevel::GpaiSystemic).unwrap();
        assert_eq!(json, "\"gpai_systemic\"");
    }
}
