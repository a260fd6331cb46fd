//! Question data for the rule/indicator engine, following the structure of
//! Regulation (EU) 2024/1689: prohibited practices (Article 5), high-risk
//! systems (Annexes I and III), transparency (Article 50), GPAI (Chapter V),
//! and context questions feeding recommendations only.

use super::{Catalog, Question, QuestionOption, QuestionType, RiskIndicator, Section};
use crate::core::RiskLevel;

fn opt(value: &'static str, label: &'static str) -> QuestionOption {
    QuestionOption {
        value,
        label,
        points: 0,
    }
}

fn ind(value: &'static str, level: RiskLevel, article: &'static str) -> RiskIndicator {
    RiskIndicator {
        value,
        level,
        article,
    }
}

fn single(
    id: &'static str,
    section: &'static str,
    title: &'static str,
    options: Vec<QuestionOption>,
    indicators: Vec<RiskIndicator>,
) -> Question {
    Question {
        id,
        section,
        title,
        question_type: QuestionType::Single,
        options,
        indicators,
    }
}

fn multiple(
    id: &'static str,
    section: &'static str,
    title: &'static str,
    options: Vec<QuestionOption>,
    indicators: Vec<RiskIndicator>,
) -> Question {
    Question {
        id,
        section,
        title,
        question_type: QuestionType::Multiple,
        options,
        indicators,
    }
}

fn yes_no(yes: &'static str, no: &'static str) -> Vec<QuestionOption> {
    vec![opt("yes", yes), opt("no", no)]
}

pub(super) fn build() -> Catalog {
    let sections = vec![
        Section {
            id: "identification",
            title: "System identification",
            description: "Role and general characteristics of the AI system",
        },
        Section {
            id: "prohibited",
            title: "Prohibited practices",
            description: "Practices banned outright by Article 5",
        },
        Section {
            id: "annex1",
            title: "High risk: regulated products",
            description: "Safety components of products under Annex I harmonisation law",
        },
        Section {
            id: "annex3",
            title: "High risk: sensitive domains",
            description: "Application domains listed in Annex III",
        },
        Section {
            id: "transparency",
            title: "Transparency obligations",
            description: "Disclosure duties under Article 50",
        },
        Section {
            id: "gpai",
            title: "General-purpose AI models",
            description: "Chapter V obligations for GPAI providers",
        },
        Section {
            id: "context",
            title: "Additional context",
            description: "Data handling, oversight and documentation posture",
        },
    ];

    let questions = vec![
        single(
            "system_type",
            "identification",
            "What is your role with respect to the AI system?",
            vec![
                opt("provider", "Provider of an AI system"),
                opt("deployer", "Deployer of an AI system"),
                opt("importer", "Importer or distributor"),
                opt("gpai_provider", "Provider of a general-purpose AI model"),
            ],
            vec![],
        ),
        // Article 5: any "yes" below makes the system unacceptable.
        single(
            "manipulation",
            "prohibited",
            "Does the system use subliminal or deliberately manipulative techniques?",
            vec![
                opt("yes", "Yes, such techniques are used"),
                opt("no", "No"),
                opt("unknown", "I don't know"),
            ],
            vec![ind("yes", RiskLevel::Unacceptable, "Article 5(1)(a)")],
        ),
        single(
            "vulnerability_exploitation",
            "prohibited",
            "Does the system exploit vulnerabilities linked to age, disability or social situation?",
            vec![
                opt("yes", "Yes, vulnerable groups are targeted"),
                opt("no", "No"),
                opt("unknown", "I don't know"),
            ],
            vec![ind("yes", RiskLevel::Unacceptable, "Article 5(1)(b)")],
        ),
        single(
            "social_scoring",
            "prohibited",
            "Does the system perform social scoring on behalf of public authorities?",
            vec![
                opt("yes", "Yes"),
                opt("no", "No"),
                opt("not_public", "Not applicable, not a public authority"),
            ],
            vec![ind("yes", RiskLevel::Unacceptable, "Article 5(1)(c)")],
        ),
        single(
            "biometric_realtime",
            "prohibited",
            "Does the system perform real-time remote biometric identification in public spaces?",
            vec![
                opt("yes", "Yes"),
                opt("no", "No"),
                opt("exception", "Yes, under an explicit legal authorisation"),
            ],
            vec![ind("yes", RiskLevel::Unacceptable, "Article 5(1)(h)")],
        ),
        single(
            "emotion_recognition_work",
            "prohibited",
            "Does the system infer emotions in workplaces or educational institutions?",
            vec![
                opt("yes", "Yes"),
                opt("no", "No"),
                opt("medical", "Yes, for medical or safety reasons"),
            ],
            vec![ind("yes", RiskLevel::Unacceptable, "Article 5(1)(f)")],
        ),
        single(
            "biometric_categorization",
            "prohibited",
            "Does the system categorise people from biometric data to infer sensitive attributes?",
            yes_no("Yes", "No"),
            vec![ind("yes", RiskLevel::Unacceptable, "Article 5(1)(g)")],
        ),
        single(
            "facial_scraping",
            "prohibited",
            "Does the system build facial recognition databases by untargeted scraping?",
            yes_no("Yes", "No"),
            vec![ind("yes", RiskLevel::Unacceptable, "Article 5(1)(e)")],
        ),
        // Annex I: safety component of a harmonised product.
        multiple(
            "annex1_product",
            "annex1",
            "Is the AI system a safety component of a product covered by Annex I harmonisation legislation?",
            vec![
                opt("machinery", "Machinery and equipment"),
                opt("toys", "Toys"),
                opt("medical", "Medical devices"),
                opt("ivd", "In vitro diagnostic devices"),
                opt("vehicles", "Motor vehicles"),
                opt("aviation", "Civil aviation"),
                opt("marine", "Marine equipment"),
                opt("rail", "Rail systems"),
                opt("lifts", "Lifts"),
                opt("pressure", "Pressure equipment"),
                opt("radio", "Radio equipment"),
                opt("none", "None of these products"),
            ],
            vec![
                ind("machinery", RiskLevel::High, "Annex I, point 1"),
                ind("toys", RiskLevel::High, "Annex I, point 2"),
                ind("medical", RiskLevel::High, "Annex I, point 10"),
                ind("ivd", RiskLevel::High, "Annex I, point 11"),
                ind("vehicles", RiskLevel::High, "Annex I, point 14"),
                ind("aviation", RiskLevel::High, "Annex I, point 17"),
                ind("marine", RiskLevel::High, "Annex I, point 18"),
                ind("rail", RiskLevel::High, "Annex I, point 19"),
                ind("lifts", RiskLevel::High, "Annex I, point 5"),
                ind("pressure", RiskLevel::High, "Annex I, point 7"),
                ind("radio", RiskLevel::High, "Annex I, point 8"),
            ],
        ),
        // Annex III domains.
        single(
            "biometric_identification",
            "annex3",
            "Does the system perform remote biometric identification or verification?",
            vec![
                opt("remote_id", "Remote biometric identification"),
                opt("verification", "One-to-one biometric verification"),
                opt("no", "No biometrics"),
            ],
            vec![
                ind("remote_id", RiskLevel::High, "Annex III, point 1(a)"),
                ind("verification", RiskLevel::Limited, "Annex III, exception"),
            ],
        ),
        single(
            "critical_infrastructure",
            "annex3",
            "Is the system a safety component in the management of critical infrastructure?",
            yes_no("Yes", "No"),
            vec![ind("yes", RiskLevel::High, "Annex III, point 2")],
        ),
        multiple(
            "education",
            "annex3",
            "Is the system used in education or vocational training?",
            vec![
                opt("admission", "Admission or assignment decisions"),
                opt("assessment", "Assessment of learning outcomes"),
                opt("cheating", "Exam proctoring / cheating detection"),
                opt("career", "Career guidance"),
                opt("none", "None of these uses"),
            ],
            vec![
                ind("admission", RiskLevel::High, "Annex III, point 3(a)"),
                ind("assessment", RiskLevel::High, "Annex III, point 3(b)"),
                ind("cheating", RiskLevel::High, "Annex III, point 3(c)"),
                ind("career", RiskLevel::High, "Annex III, point 3(d)"),
            ],
        ),
        multiple(
            "employment",
            "annex3",
            "Is the system used in recruitment or workforce management?",
            vec![
                opt("recruitment", "Recruitment / CV screening"),
                opt("interviews", "Interview analysis"),
                opt("performance", "Performance evaluation"),
                opt("promotion", "Promotion or termination decisions"),
                opt("task", "Task allocation"),
                opt("monitoring", "Worker monitoring"),
                opt("none", "None of these uses"),
            ],
            vec![
                ind("recruitment", RiskLevel::High, "Annex III, point 4(a)"),
                ind("interviews", RiskLevel::High, "Annex III, point 4(a)"),
                ind("performance", RiskLevel::High, "Annex III, point 4(b)"),
                ind("promotion", RiskLevel::High, "Annex III, point 4(b)"),
                ind("task", RiskLevel::High, "Annex III, point 4(c)"),
                ind("monitoring", RiskLevel::High, "Annex III, point 4(d)"),
            ],
        ),
        multiple(
            "essential_services",
            "annex3",
            "Does the system influence access to essential services?",
            vec![
                opt("credit", "Credit scoring"),
                opt("public_benefits", "Public benefits eligibility"),
                opt("insurance", "Insurance risk assessment and pricing"),
                opt("emergency", "Emergency service dispatch"),
                opt("none", "None of these uses"),
            ],
            vec![
                ind("credit", RiskLevel::High, "Annex III, point 5(a)"),
                ind("public_benefits", RiskLevel::High, "Annex III, point 5(b)"),
                ind("insurance", RiskLevel::High, "Annex III, point 5(c)"),
                ind("emergency", RiskLevel::High, "Annex III, point 5(d)"),
            ],
        ),
        multiple(
            "law_enforcement",
            "annex3",
            "Is the system used by law enforcement authorities?",
            vec![
                opt("risk_assessment", "Criminal risk assessment"),
                opt("polygraph", "Lie detection"),
                opt("evidence", "Evidence reliability analysis"),
                opt("profiling", "Suspect profiling"),
                opt("crime_analysis", "Crime data analysis"),
                opt("none", "None of these uses"),
            ],
            vec![
                ind("risk_assessment", RiskLevel::High, "Annex III, point 6(a)"),
                ind("polygraph", RiskLevel::High, "Annex III, point 6(b)"),
                ind("evidence", RiskLevel::High, "Annex III, point 6(c)"),
                ind("profiling", RiskLevel::High, "Annex III, point 6(d)"),
                ind("crime_analysis", RiskLevel::High, "Annex III, point 6(e)"),
            ],
        ),
        multiple(
            "migration",
            "annex3",
            "Is the system used in migration and border management?",
            vec![
                opt("asylum", "Asylum or visa applications"),
                opt("border", "Border control risk detection"),
                opt("irregular", "Irregular migration risk assessment"),
                opt("none", "None of these uses"),
            ],
            vec![
                ind("asylum", RiskLevel::High, "Annex III, point 7(a)"),
                ind("border", RiskLevel::High, "Annex III, point 7(b)"),
                ind("irregular", RiskLevel::High, "Annex III, point 7(c)"),
            ],
        ),
        multiple(
            "justice",
            "annex3",
            "Is the system used in the administration of justice or democratic processes?",
            vec![
                opt("judicial", "Judicial decision support"),
                opt("adr", "Alternative dispute resolution"),
                opt("elections", "Influence on elections or referenda"),
                opt("none", "None of these uses"),
            ],
            vec![
                ind("judicial", RiskLevel::High, "Annex III, point 8(a)"),
                ind("adr", RiskLevel::High, "Annex III, point 8(a)"),
                ind("elections", RiskLevel::High, "Annex III, point 8(b)"),
            ],
        ),
        // Article 50 transparency.
        single(
            "chatbot",
            "transparency",
            "Does the system interact directly with natural persons?",
            yes_no("Yes, users interact with the system", "No direct interaction"),
            vec![ind("yes", RiskLevel::Limited, "Article 50(1)")],
        ),
        single(
            "content_generation",
            "transparency",
            "Does the system generate synthetic text, audio, image or video content?",
            yes_no("Yes", "No"),
            vec![ind("yes", RiskLevel::Limited, "Article 50(2) and (4)")],
        ),
        single(
            "emotion_detection",
            "transparency",
            "Does the system detect emotions or perform biometric categorisation?",
            vec![
                opt("emotion", "Emotion detection"),
                opt("categorization", "Biometric categorisation"),
                opt("both", "Both"),
                opt("no", "Neither"),
            ],
            vec![
                ind("emotion", RiskLevel::Limited, "Article 50(3)"),
                ind("categorization", RiskLevel::Limited, "Article 50(3)"),
                ind("both", RiskLevel::Limited, "Article 50(3)"),
            ],
        ),
        // Chapter V.
        single(
            "gpai_systemic",
            "gpai",
            "If you provide a GPAI model, does it present systemic risk?",
            vec![
                opt("yes", "Yes, above the thresholds or designated"),
                opt("no", "No, standard GPAI model"),
                opt("not_gpai", "Not applicable, no GPAI model"),
            ],
            vec![
                ind("yes", RiskLevel::GpaiSystemic, "Articles 51-55"),
                ind("no", RiskLevel::GpaiStandard, "Article 53"),
            ],
        ),
        // Context questions: recommendations only, never escalate the level.
        single(
            "data_personal",
            "context",
            "Does the system process personal data?",
            vec![
                opt("yes", "Yes"),
                opt("no", "No"),
                opt("anonymous", "Anonymised data only"),
            ],
            vec![],
        ),
        single(
            "human_oversight",
            "context",
            "Does the system provide for human oversight?",
            vec![
                opt("full", "Human in the loop for every decision"),
                opt("partial", "Human review for selected cases"),
                opt("override", "Ability to intervene or stop the system"),
                opt("none", "Fully automated, no oversight"),
            ],
            vec![],
        ),
        single(
            "documentation",
            "context",
            "Is complete technical documentation available?",
            vec![
                opt("complete", "Complete documentation"),
                opt("partial", "Partial documentation"),
                opt("none", "No documentation"),
            ],
            vec![],
        ),
        single(
            "conformity_assessment",
            "context",
            "Has a conformity assessment been carried out?",
            vec![
                opt("third_party", "Third-party assessment by a notified body"),
                opt("internal", "Documented internal self-assessment"),
                opt("planned", "Planned but not yet performed"),
                opt("none", "Not performed"),
            ],
            vec![],
        ),
    ];

    Catalog::new(sections, questions)
}
