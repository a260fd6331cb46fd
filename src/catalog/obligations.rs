//! Obligations and recommendations bound to each risk level, plus the
//! context bundles keyed on specific answers. Accessors match exhaustively
//! on `RiskLevel` so a new tier cannot silently fall through a lookup.

use crate::core::{Obligation, Priority, Recommendation, RiskLevel};

fn ob(
    title: &str,
    description: &str,
    article: &str,
    priority: Priority,
    required: bool,
    deadline: Option<&str>,
) -> Obligation {
    Obligation {
        title: title.to_string(),
        description: description.to_string(),
        article: Some(article.to_string()),
        priority,
        required,
        deadline: deadline.map(str::to_string),
    }
}

fn rec(title: &str, description: &str, priority: Priority) -> Recommendation {
    Recommendation {
        title: title.to_string(),
        description: description.to_string(),
        priority,
    }
}

/// Static obligations for a resolved risk level.
pub fn obligations_for(level: RiskLevel) -> Vec<Obligation> {
    match level {
        RiskLevel::Unacceptable => vec![
            ob(
                "Prohibition of market placement",
                "The system may not be placed on the market, put into service or used \
                 within the European Union.",
                "Article 5",
                Priority::Critical,
                true,
                Some("2 February 2025"),
            ),
            ob(
                "Immediate withdrawal",
                "If the system is already in service it must be withdrawn from the \
                 market immediately and its use discontinued.",
                "Article 5",
                Priority::Critical,
                true,
                None,
            ),
        ],
        RiskLevel::High => vec![
            ob(
                "Risk management system",
                "Establish, implement, document and maintain a risk management system \
                 across the entire lifecycle.",
                "Article 9",
                Priority::High,
                true,
                Some("2 August 2027"),
            ),
            ob(
                "Data governance",
                "Apply data governance practices to training, validation and test \
                 datasets, covering traceability, quality and representativeness.",
                "Article 10",
                Priority::High,
                true,
                Some("2 August 2027"),
            ),
            ob(
                "Technical documentation",
                "Draw up technical documentation demonstrating compliance before \
                 market placement.",
                "Article 11",
                Priority::High,
                true,
                Some("2 August 2027"),
            ),
            ob(
                "Automatic event logging",
                "Design the system to automatically record events during operation.",
                "Article 12",
                Priority::High,
                true,
                Some("2 August 2027"),
            ),
            ob(
                "Transparency and instructions for use",
                "Provide deployers with clear, comprehensible instructions for use, \
                 including capabilities and limitations.",
                "Article 13",
                Priority::High,
                true,
                Some("2 August 2027"),
            ),
            ob(
                "Human oversight",
                "Design the system to allow effective human oversight while in use.",
                "Article 14",
                Priority::High,
                true,
                Some("2 August 2027"),
            ),
            ob(
                "Accuracy, robustness and cybersecurity",
                "Ensure appropriate levels of accuracy, robustness and cybersecurity.",
                "Article 15",
                Priority::High,
                true,
                Some("2 August 2027"),
            ),
            ob(
                "Quality management system",
                "Put a documented quality management system in place.",
                "Article 17",
                Priority::High,
                true,
                None,
            ),
            ob(
                "Conformity assessment",
                "Perform a conformity assessment before market placement.",
                "Articles 43-49",
                Priority::High,
                true,
                Some("2 August 2027"),
            ),
            ob(
                "CE marking",
                "Affix the CE marking after a successful conformity assessment.",
                "Article 48",
                Priority::Medium,
                true,
                None,
            ),
            ob(
                "EU declaration of conformity",
                "Draw up a written EU declaration of conformity.",
                "Article 47",
                Priority::High,
                true,
                None,
            ),
            ob(
                "EU database registration",
                "Register the system in the EU database before market placement.",
                "Article 49",
                Priority::High,
                true,
                None,
            ),
            ob(
                "Post-market monitoring",
                "Operate a post-market monitoring system.",
                "Article 72",
                Priority::Medium,
                true,
                None,
            ),
            ob(
                "Serious incident reporting",
                "Report serious incidents to the market surveillance authorities.",
                "Article 73",
                Priority::High,
                true,
                None,
            ),
        ],
        RiskLevel::GpaiSystemic => vec![
            ob(
                "Standard GPAI obligations",
                "Meet all obligations applicable to GPAI models (technical \
                 documentation, transparency, copyright policy).",
                "Article 53",
                Priority::High,
                true,
                Some("Applicable since 2 August 2025"),
            ),
            ob(
                "Model evaluation",
                "Evaluate the model using standardised protocols and tooling.",
                "Article 55(1)(a)",
                Priority::High,
                true,
                None,
            ),
            ob(
                "Systemic risk assessment and mitigation",
                "Assess and mitigate possible systemic risks at Union level.",
                "Article 55(1)(b)",
                Priority::High,
                true,
                None,
            ),
            ob(
                "Incident tracking and reporting",
                "Track, document and report serious incidents to the authorities.",
                "Article 55(1)(c)",
                Priority::High,
                true,
                None,
            ),
            ob(
                "Cybersecurity protection",
                "Ensure an adequate level of cybersecurity protection.",
                "Article 55(1)(d)",
                Priority::High,
                true,
                None,
            ),
        ],
        RiskLevel::GpaiStandard => vec![
            ob(
                "Technical documentation",
                "Draw up and keep up to date the model's technical documentation, \
                 including training and testing processes.",
                "Article 53(1)(a)",
                Priority::High,
                true,
                Some("Applicable since 2 August 2025"),
            ),
            ob(
                "Information for downstream providers",
                "Provide the information and documentation needed by providers of AI \
                 systems that integrate the model.",
                "Article 53(1)(b)",
                Priority::High,
                true,
                None,
            ),
            ob(
                "Copyright policy",
                "Put in place a policy to comply with EU copyright law.",
                "Article 53(1)(c)",
                Priority::Medium,
                true,
                None,
            ),
            ob(
                "Training content summary",
                "Publish a sufficiently detailed summary of the content used for \
                 training.",
                "Article 53(1)(d)",
                Priority::Medium,
                true,
                None,
            ),
        ],
        RiskLevel::Limited => vec![
            ob(
                "Disclosure of AI interaction",
                "People must be informed that they are interacting with an AI system, \
                 unless this is obvious.",
                "Article 50(1)",
                Priority::Medium,
                true,
                Some("Applicable since 2 August 2025"),
            ),
            ob(
                "Marking of synthetic content",
                "AI-generated content must be marked as such in a machine-readable \
                 manner.",
                "Article 50(2)",
                Priority::Medium,
                true,
                Some("Applicable since 2 August 2025"),
            ),
            ob(
                "Deepfake disclosure",
                "Disclose that audio, image or video content has been artificially \
                 generated or manipulated.",
                "Article 50(4)",
                Priority::Medium,
                true,
                Some("Applicable since 2 August 2025"),
            ),
            ob(
                "Emotion recognition disclosure",
                "Inform people exposed to an emotion recognition system.",
                "Article 50(3)",
                Priority::Medium,
                true,
                None,
            ),
        ],
        RiskLevel::Minimal => vec![
            ob(
                "Voluntary codes of conduct",
                "No specific obligations apply, but adopting voluntary codes of \
                 conduct is encouraged.",
                "Article 95",
                Priority::Low,
                false,
                None,
            ),
            ob(
                "Good practice",
                "Follow good practice for responsible AI development and use.",
                "Recital 28",
                Priority::Low,
                false,
                None,
            ),
        ],
    }
}

/// Static recommendations for a resolved risk level.
pub fn recommendations_for(level: RiskLevel) -> Vec<Recommendation> {
    match level {
        RiskLevel::Unacceptable => vec![
            rec(
                "Cease use immediately",
                "The system cannot legally be used in the EU. Stop its development, \
                 marketing and use.",
                Priority::High,
            ),
            rec(
                "Consult specialised counsel",
                "Seek advice from a lawyer specialised in digital law to assess your \
                 options and liabilities.",
                Priority::High,
            ),
            rec(
                "Explore compliant alternatives",
                "Consider redesigning the system to bring it into compliance, or \
                 explore lawful alternatives.",
                Priority::Medium,
            ),
        ],
        RiskLevel::High => vec![
            rec(
                "Appoint a compliance owner",
                "Name a person or team responsible for AI Act compliance within the \
                 organisation.",
                Priority::High,
            ),
            rec(
                "Run a gap analysis",
                "Compare your current posture against the Regulation's requirements.",
                Priority::High,
            ),
            rec(
                "Plan the conformity assessment",
                "Identify whether a notified body must be involved and plan the \
                 assessment accordingly.",
                Priority::High,
            ),
            rec(
                "Establish data governance",
                "Set up robust processes for managing training and test data.",
                Priority::Medium,
            ),
            rec(
                "Document the system",
                "Start assembling the required technical documentation now.",
                Priority::Medium,
            ),
            rec(
                "Design for human oversight",
                "Build human oversight mechanisms into the system architecture.",
                Priority::Medium,
            ),
        ],
        RiskLevel::GpaiSystemic => vec![
            rec(
                "Assess systemic risks",
                "Conduct a thorough assessment of the model's potential systemic \
                 risks.",
                Priority::High,
            ),
            rec(
                "Harden cybersecurity",
                "Deploy reinforced cybersecurity measures commensurate with the \
                 model's scale.",
                Priority::High,
            ),
            rec(
                "Prepare red-team testing",
                "Plan adversarial testing to surface vulnerabilities.",
                Priority::Medium,
            ),
        ],
        RiskLevel::GpaiStandard => vec![
            rec(
                "Document the training process",
                "Document the training process and the data used in detail.",
                Priority::High,
            ),
            rec(
                "Prepare integrator documentation",
                "Produce clear documentation for providers who will integrate the \
                 model.",
                Priority::Medium,
            ),
        ],
        RiskLevel::Limited => vec![
            rec(
                "Implement transparency notices",
                "Put clear mechanisms in place to inform users they are interacting \
                 with an AI system.",
                Priority::Medium,
            ),
            rec(
                "Set up content marking",
                "Add metadata and markings identifying AI-generated content.",
                Priority::Medium,
            ),
        ],
        RiskLevel::Minimal => vec![
            rec(
                "Adopt good practice",
                "Even without legal obligations, follow responsible development \
                 practice.",
                Priority::Low,
            ),
            rec(
                "Track regulatory developments",
                "Stay informed about changes to the regulatory framework that could \
                 affect the system.",
                Priority::Low,
            ),
        ],
    }
}

/// Recommendation bundles keyed on specific answers rather than the level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextBundle {
    /// The system processes personal data.
    DataProtection,
    /// No human oversight on a high-risk or systemic-risk system.
    MissingOversight,
    /// No technical documentation where documentation is mandatory.
    MissingDocumentation,
}

pub fn context_recommendations(bundle: ContextBundle) -> Vec<Recommendation> {
    match bundle {
        ContextBundle::DataProtection => vec![
            rec(
                "GDPR compliance",
                "The system processes personal data. Ensure GDPR compliance alongside \
                 the AI Act.",
                Priority::High,
            ),
            rec(
                "Data protection impact assessment",
                "Consider carrying out a DPIA for the processing involved.",
                Priority::Medium,
            ),
        ],
        ContextBundle::MissingOversight => vec![rec(
            "Implement human oversight",
            "The system lacks human oversight mechanisms, which are required for \
             high-risk systems.",
            Priority::High,
        )],
        ContextBundle::MissingDocumentation => vec![rec(
            "Create the technical documentation",
            "Missing technical documentation is a critical gap for systems in this \
             category.",
            Priority::High,
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_LEVELS: [RiskLevel; 6] = [
        RiskLevel::Minimal,
        RiskLevel::Limited,
        RiskLevel::GpaiStandard,
        RiskLevel::GpaiSystemic,
        RiskLevel::High,
        RiskLevel::Unacceptable,
    ];

    #[test]
    fn every_level_has_obligations_and_recommendations() {
        for level in ALL_LEVELS {
            assert!(!obligations_for(level).is_empty(), "{level:?}");
            assert!(!recommendations_for(level).is_empty(), "{level:?}");
        }
    }

    #[test]
    fn catalog_titles_are_unique_per_level() {
        for level in ALL_LEVELS {
            let obligations = obligations_for(level);
            let mut titles: Vec<&str> = obligations.iter().map(|o| o.title.as_str()).collect();
            titles.sort_unstable();
            titles.dedup();
            assert_eq!(titles.len(), obligations.len(), "{level:?}");
        }
    }

    #[test]
    fn minimal_obligations_are_voluntary() {
        assert!(obligations_for(RiskLevel::Minimal)
            .iter()
            .all(|o| !o.required && o.priority == Priority::Low));
    }

    #[test]
    fn unacceptable_includes_market_prohibition() {
        let obligations = obligations_for(RiskLevel::Unacceptable);
        let prohibition = obligations
            .iter()
            .find(|o| o.title == "Prohibition of market placement")
            .unwrap();
        assert_eq!(prohibition.priority, Priority::Critical);
        assert_eq!(prohibition.article.as_deref(), Some("Article 5"));
    }

    #[test]
    fn context_bundles_are_nonempty() {
        for bundle in [
            ContextBundle::DataProtection,
            ContextBundle::MissingOversight,
            ContextBundle::MissingDocumentation,
        ] {
            assert!(!context_recommendations(bundle).is_empty());
        }
    }
}
