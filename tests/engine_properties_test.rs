use actmap::catalog::{indicator_catalog, weighted_catalog};
use actmap::io::share;
use actmap::{evaluate, AnswerSet, EngineConfig, RiskLevel};
use proptest::prelude::*;
use proptest::sample::Index;

/// Answer an arbitrary subset of a catalog, each answered question getting
/// one arbitrarily chosen option value.
fn arb_answers(weighted: bool) -> impl Strategy<Value = AnswerSet> {
    let catalog = if weighted {
        weighted_catalog()
    } else {
        indicator_catalog()
    };
    let len = catalog.len();
    prop::collection::vec(prop::option::of(any::<Index>()), len).prop_map(move |choices| {
        let mut answers = AnswerSet::new();
        for (question, choice) in catalog.questions().iter().zip(choices) {
            if let Some(index) = choice {
                let option = index.get(&question.options);
                if question.is_multiple() {
                    answers.select(question.id, option.value);
                } else {
                    answers.select_single(question.id, option.value);
                }
            }
        }
        answers
    })
}

proptest! {
    #[test]
    fn rule_engine_is_deterministic(answers in arb_answers(false)) {
        let first = evaluate(&answers, EngineConfig::rules()).unwrap();
        let second = evaluate(&answers, EngineConfig::rules()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn weighted_engine_is_deterministic(answers in arb_answers(true)) {
        let first = evaluate(&answers, EngineConfig::weighted()).unwrap();
        let second = evaluate(&answers, EngineConfig::weighted()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn share_tokens_round_trip(answers in arb_answers(false)) {
        let token = share::encode(&answers).unwrap();
        let decoded = share::decode(&token).unwrap();
        prop_assert_eq!(&decoded, &answers);

        let original = evaluate(&answers, EngineConfig::rules()).unwrap();
        let replayed = evaluate(&decoded, EngineConfig::rules()).unwrap();
        prop_assert_eq!(original, replayed);
    }

    /// Adding one more triggering answer never lowers the resolved level.
    #[test]
    fn extra_trigger_never_decreases_level(answers in arb_answers(false)) {
        let base = evaluate(&answers, EngineConfig::rules()).unwrap();

        let mut augmented = answers;
        augmented.select("employment", "recruitment");
        let result = evaluate(&augmented, EngineConfig::rules()).unwrap();

        prop_assert!(result.level.rank() >= base.level.rank());
        prop_assert!(result.level.rank() >= RiskLevel::High.rank()
            || base.level == RiskLevel::Unacceptable);
    }

    /// The combined level dominates the level implied by any single answer
    /// taken in isolation.
    #[test]
    fn combined_level_dominates_isolated_answers(answers in arb_answers(false)) {
        let combined = evaluate(&answers, EngineConfig::rules()).unwrap();
        for (id, answer) in answers.iter() {
            let mut alone = AnswerSet::new();
            alone.insert(id, answer.clone());
            let isolated = evaluate(&alone, EngineConfig::rules()).unwrap();
            prop_assert!(
                combined.level.rank() >= isolated.level.rank(),
                "answer {:?} alone gave {:?}, combined gave {:?}",
                id, isolated.level, combined.level
            );
        }
    }

    #[test]
    fn prohibited_answer_forces_unacceptable(answers in arb_answers(false)) {
        let mut answers = answers;
        answers.select_single("facial_scraping", "yes");
        let result = evaluate(&answers, EngineConfig::rules()).unwrap();
        prop_assert_eq!(result.level, RiskLevel::Unacceptable);
    }

    #[test]
    fn titles_stay_unique(answers in arb_answers(false)) {
        let result = evaluate(&answers, EngineConfig::rules()).unwrap();

        let mut titles: Vec<&str> =
            result.recommendations.iter().map(|r| r.title.as_str()).collect();
        let total = titles.len();
        titles.sort_unstable();
        titles.dedup();
        prop_assert_eq!(titles.len(), total);

        let mut titles: Vec<&str> =
            result.obligations.iter().map(|o| o.title.as_str()).collect();
        let total = titles.len();
        titles.sort_unstable();
        titles.dedup();
        prop_assert_eq!(titles.len(), total);
    }

    #[test]
    fn weighted_score_stays_in_bounds(answers in arb_answers(true)) {
        let result = evaluate(&answers, EngineConfig::weighted()).unwrap();
        let score = result.score.unwrap();
        let max_score = result.max_score.unwrap();
        let percentage = result.percentage.unwrap();

        prop_assert_eq!(max_score, 125);
        prop_assert!(score <= max_score);
        prop_assert!(percentage <= 100);
        prop_assert!(result.triggers.is_empty());
        prop_assert!(!matches!(
            result.level,
            RiskLevel::GpaiStandard | RiskLevel::GpaiSystemic
        ));
    }

    /// Answering one more weighted question never lowers the score.
    #[test]
    fn weighted_scoring_is_additive(answers in arb_answers(true), index: Index) {
        let base = evaluate(&answers, EngineConfig::weighted()).unwrap();

        let catalog = weighted_catalog();
        let question = index.get(catalog.questions());
        if answers.get(question.id).is_none() {
            let highest = question.options.iter().max_by_key(|o| o.points).unwrap();
            let mut augmented = answers;
            augmented.select_single(question.id, highest.value);
            let result = evaluate(&augmented, EngineConfig::weighted()).unwrap();
            prop_assert!(result.score.unwrap() >= base.score.unwrap());
            prop_assert!(result.level.rank() >= base.level.rank());
        }
    }
}
