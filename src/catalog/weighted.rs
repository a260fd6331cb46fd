//! Question data for the weighted engine: five sections of five single-choice
//! questions, each option worth 0 to 5 points. The percentage is computed
//! against `questions * MAX_POINTS_PER_QUESTION` even where a question's
//! highest option is worth less than the maximum.

use super::{Catalog, Question, QuestionOption, QuestionType, Section};

pub const MAX_POINTS_PER_QUESTION: u32 = 5;

fn opt(value: &'static str, label: &'static str, points: u32) -> QuestionOption {
    QuestionOption {
        value,
        label,
        points,
    }
}

fn q(
    id: &'static str,
    section: &'static str,
    title: &'static str,
    options: Vec<QuestionOption>,
) -> Question {
    Question {
        id,
        section,
        title,
        question_type: QuestionType::Single,
        options,
        indicators: vec![],
    }
}

pub(super) fn build() -> Catalog {
    let sections = vec![
        Section {
            id: "identification",
            title: "AI system identification",
            description: "General characteristics of the system",
        },
        Section {
            id: "domain",
            title: "Application domain",
            description: "Sector and context of use",
        },
        Section {
            id: "data",
            title: "Data and training",
            description: "Data management and training process",
        },
        Section {
            id: "transparency",
            title: "Transparency and explainability",
            description: "User information and recourse",
        },
        Section {
            id: "governance",
            title: "Governance",
            description: "Organisation and oversight processes",
        },
    ];

    let questions = vec![
        q(
            "q1_type",
            "identification",
            "What kind of AI system is it?",
            vec![
                opt("ml_classic", "Classical ML (regression, classification)", 1),
                opt("deep_learning", "Deep learning", 2),
                opt("genai_llm", "Generative AI / LLM", 3),
                opt("autonomous", "Autonomous system / AI agents", 4),
            ],
        ),
        q(
            "q2_decisions",
            "identification",
            "Does the system make automated decisions affecting people?",
            vec![
                opt("no", "No automated decisions", 0),
                opt("yes_validated", "Yes, with systematic human validation", 2),
                opt("semi_auto", "Yes, semi-automated decisions", 3),
                opt("full_auto", "Yes, fully automated decisions", 5),
            ],
        ),
        q(
            "q3_criticality",
            "identification",
            "How critical are the decisions or recommendations?",
            vec![
                opt("info", "Information only, no direct impact", 0),
                opt("recommendation", "Recommendation / decision support", 2),
                opt("important", "Important decisions with significant impact", 4),
                opt("critical", "Critical decisions (health, safety, rights)", 5),
            ],
        ),
        q(
            "q4_status",
            "identification",
            "What is the current status of the system?",
            vec![
                opt("research", "Research / proof of concept", 0),
                opt("development", "In development", 1),
                opt("preprod", "Pre-production / testing", 2),
                opt("production", "In production", 3),
            ],
        ),
        q(
            "q5_users",
            "identification",
            "Who are the end users?",
            vec![
                opt("internal", "Internal employees only", 1),
                opt("b2b", "B2B customers", 2),
                opt("b2c", "B2C customers", 3),
                opt("public", "Unrestricted general public", 4),
            ],
        ),
        q(
            "q6_sector",
            "domain",
            "In which sector is the system mainly used?",
            vec![
                opt("commercial", "Commerce, marketing, entertainment", 1),
                opt("finance", "Finance, insurance, banking", 3),
                opt("health", "Health, medicine, pharma", 4),
                opt("justice", "Justice, policing, public security", 5),
            ],
        ),
        q(
            "q7_infrastructure",
            "domain",
            "Does the system concern critical infrastructure?",
            vec![
                opt("no", "No critical infrastructure", 0),
                opt("indirect", "Indirectly (support services)", 2),
                opt("yes_infra", "Yes: energy, transport or telecoms", 4),
                opt("defense", "Yes: defence or national security", 5),
            ],
        ),
        q(
            "q8_biometric",
            "domain",
            "Does the system process biometric data?",
            vec![
                opt("no", "No biometric data", 0),
                opt("optional_auth", "Yes, optional authentication", 2),
                opt("identification", "Yes, identification of persons", 4),
                opt("realtime_facial", "Yes, real-time facial recognition", 5),
            ],
        ),
        q(
            "q9_scoring",
            "domain",
            "Does the system score or profile people?",
            vec![
                opt("no", "No personal scoring", 0),
                opt("product", "Product/service scoring (recommendations)", 1),
                opt("behavioral", "Behavioural scoring", 3),
                opt("social_credit", "Social or credit scoring", 5),
            ],
        ),
        q(
            "q10_hr",
            "domain",
            "Is the system used for recruitment or HR management?",
            vec![
                opt("no", "No HR use", 0),
                opt("support", "Support tooling (sourcing, matching)", 2),
                opt("screening", "Application screening", 4),
                opt("auto_decision", "Automated HR decisions", 5),
            ],
        ),
        q(
            "q11_data_type",
            "data",
            "What data does the system use?",
            vec![
                opt("public", "Public data only", 0),
                opt("internal_non_personal", "Internal non-personal data", 1),
                opt("personal", "Non-sensitive personal data", 3),
                opt("sensitive", "Sensitive data (health, opinions, origin...)", 5),
            ],
        ),
        q(
            "q12_data_origin",
            "data",
            "Is the origin of the training data documented?",
            vec![
                opt("full", "Fully documented and traceable", 0),
                opt("partial", "Partially documented", 2),
                opt("minimal", "Barely documented", 3),
                opt("unknown", "Undocumented / unknown", 5),
            ],
        ),
        q(
            "q13_bias",
            "data",
            "Have bias tests been performed?",
            vec![
                opt("regular", "Regular, documented testing", 0),
                opt("occasional", "Occasional testing", 2),
                opt("planned", "Planned but not performed", 3),
                opt("none", "No bias testing", 4),
            ],
        ),
        q(
            "q14_versioning",
            "data",
            "Is model version traceability ensured?",
            vec![
                opt("complete", "Full versioning (models, data, code)", 0),
                opt("models_only", "Model versioning only", 1),
                opt("partial", "Partial versioning", 2),
                opt("none", "No versioning", 4),
            ],
        ),
        q(
            "q15_lineage",
            "data",
            "Is data lineage documented?",
            vec![
                opt("full_auto", "Complete, automated lineage", 0),
                opt("manual", "Manual, documented lineage", 1),
                opt("partial", "Partial", 2),
                opt("none", "No lineage documentation", 4),
            ],
        ),
        q(
            "q16_disclosure",
            "transparency",
            "Do users know they are interacting with an AI?",
            vec![
                opt("clear", "Yes, clear and visible information", 0),
                opt("documented", "Yes, mentioned in terms/documentation", 2),
                opt("sometimes", "Sometimes, depending on context", 3),
                opt("no", "No information", 5),
            ],
        ),
        q(
            "q17_explainability",
            "transparency",
            "Are the AI's decisions explainable?",
            vec![
                opt("detailed", "Detailed explanations available", 0),
                opt("simplified", "Simplified explanations", 1),
                opt("partial", "Partially (grey box)", 3),
                opt("blackbox", "Black-box model", 4),
            ],
        ),
        q(
            "q18_human_recourse",
            "transparency",
            "Is human recourse possible?",
            vec![
                opt("easy", "Easy and fast recourse", 0),
                opt("defined", "Defined contestation procedure", 1),
                opt("complex", "Yes, but the process is cumbersome", 3),
                opt("none", "No recourse possible", 5),
            ],
        ),
        q(
            "q19_documentation",
            "transparency",
            "Is technical documentation available?",
            vec![
                opt("complete", "Complete and up to date", 0),
                opt("basic", "Basic documentation", 1),
                opt("partial", "Partial or stale documentation", 3),
                opt("none", "No documentation", 4),
            ],
        ),
        q(
            "q20_audit",
            "transparency",
            "Are logs and an audit trail retained?",
            vec![
                opt("complete", "Complete logs with defined retention", 0),
                opt("main", "Main logs", 1),
                opt("partial", "Partial or temporary logs", 2),
                opt("none", "No log retention", 4),
            ],
        ),
        q(
            "q21_responsible",
            "governance",
            "Is an AI owner identified in the organisation?",
            vec![
                opt("dedicated", "Dedicated role with authority", 0),
                opt("committee", "Shared responsibility / committee", 1),
                opt("informal", "Informal, no defined role", 3),
                opt("none", "No identified owner", 4),
            ],
        ),
        q(
            "q22_validation",
            "governance",
            "Is there a validation process before production?",
            vec![
                opt("formal", "Formal multi-stage process", 0),
                opt("dual", "Technical and business validation", 1),
                opt("tech_only", "Technical validation only", 2),
                opt("none", "No validation process", 4),
            ],
        ),
        q(
            "q23_monitoring",
            "governance",
            "Is production monitoring active?",
            vec![
                opt("complete", "Full monitoring (performance, bias, drift)", 0),
                opt("performance", "Performance monitoring", 1),
                opt("basic", "Basic monitoring", 2),
                opt("none", "No monitoring", 4),
            ],
        ),
        q(
            "q24_incident",
            "governance",
            "Does an AI incident management plan exist?",
            vec![
                opt("complete", "Complete, tested procedure", 0),
                opt("defined", "Defined procedure", 1),
                opt("wip", "Being drafted", 2),
                opt("none", "No incident plan", 4),
            ],
        ),
        q(
            "q25_impact",
            "governance",
            "Has an impact assessment (DPIA/FRIA) been carried out?",
            vec![
                opt("complete", "Complete, documented assessment", 0),
                opt("partial", "Partial assessment", 2),
                opt("planned", "Planned but not performed", 3),
                opt("none", "No impact assessment", 4),
            ],
        ),
    ];

    Catalog::new(sections, questions)
}
