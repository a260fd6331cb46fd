//! Answer shapes supplied by the questionnaire boundary.
//!
//! The wire format is a JSON object mapping question ids to either a single
//! option value (single-choice) or an array of values (multi-select), so
//! `Answer` deserializes untagged. The shape is decided once here by the
//! question's declared type instead of being re-inferred at each use site.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Sentinel option value meaning "no applicable option" in a multi-select.
/// Mutually exclusive with every other value within the same question.
pub const NONE_SENTINEL: &str = "none";

/// One answered question: a single option value or a set of them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Single(String),
    Multiple(BTreeSet<String>),
}

impl Answer {
    pub fn single(value: impl Into<String>) -> Self {
        Answer::Single(value.into())
    }

    pub fn multiple<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Answer::Multiple(values.into_iter().map(Into::into).collect())
    }

    /// True when this answer selects the given option value.
    pub fn selects(&self, value: &str) -> bool {
        match self {
            Answer::Single(v) => v == value,
            Answer::Multiple(vs) => vs.contains(value),
        }
    }
}

/// The full set of answers for one assessment, keyed by question id.
///
/// Insertion through [`AnswerSet::select`] enforces the `none` sentinel rule;
/// raw [`AnswerSet::insert`] is available for boundary deserialization where
/// the payload is trusted to already be consistent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<String, Answer>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, question_id: &str) -> Option<&Answer> {
        self.answers.get(question_id)
    }

    /// The selected value, if the question was answered single-choice.
    pub fn single(&self, question_id: &str) -> Option<&str> {
        match self.answers.get(question_id) {
            Some(Answer::Single(v)) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn insert(&mut self, question_id: impl Into<String>, answer: Answer) {
        self.answers.insert(question_id.into(), answer);
    }

    /// Record a single-choice selection, replacing any previous answer.
    pub fn select_single(&mut self, question_id: impl Into<String>, value: impl Into<String>) {
        self.answers
            .insert(question_id.into(), Answer::Single(value.into()));
    }

    /// Add a value to a multi-select answer.
    ///
    /// Selecting the `none` sentinel clears every other value; selecting any
    /// other value removes the sentinel.
    pub fn select(&mut self, question_id: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        let entry = self
            .answers
            .entry(question_id.into())
            .or_insert_with(|| Answer::Multiple(BTreeSet::new()));
        let values = match entry {
            Answer::Multiple(vs) => vs,
            Answer::Single(_) => {
                *entry = Answer::Multiple(BTreeSet::new());
                match entry {
                    Answer::Multiple(vs) => vs,
                    Answer::Single(_) => unreachable!(),
                }
            }
        };
        if value == NONE_SENTINEL {
            values.clear();
        } else {
            values.remove(NONE_SENTINEL);
        }
        values.insert(value);
    }

    /// Remove a value from a multi-select answer; drops the entry when empty.
    pub fn deselect(&mut self, question_id: &str, value: &str) {
        if let Some(Answer::Multiple(vs)) = self.answers.get_mut(question_id) {
            vs.remove(value);
            if vs.is_empty() {
                self.answers.remove(question_id);
            }
        }
    }

    pub fn remove(&mut self, question_id: &str) -> Option<Answer> {
        self.answers.remove(question_id)
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.answers.contains_key(question_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Answer)> {
        self.answers.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl FromIterator<(String, Answer)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (String, Answer)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_none_clears_other_values() {
        let mut answers = AnswerSet::new();
        answers.select("employment", "recruitment");
        answers.select("employment", "monitoring");
        answers.select("employment", NONE_SENTINEL);

        assert_eq!(
            answers.get("employment"),
            Some(&Answer::multiple([NONE_SENTINEL]))
        );
    }

    #[test]
    fn selecting_a_value_removes_none() {
        let mut answers = AnswerSet::new();
        answers.select("education", NONE_SENTINEL);
        answers.select("education", "admission");

        assert_eq!(
            answers.get("education"),
            Some(&Answer::multiple(["admission"]))
        );
    }

    #[test]
    fn deselect_drops_empty_entries() {
        let mut answers = AnswerSet::new();
        answers.select("justice", "judicial");
        answers.deselect("justice", "judicial");
        assert!(!answers.contains("justice"));
    }

    #[test]
    fn untagged_wire_shape() {
        let json = r#"{"chatbot":"yes","annex1_product":["medical","toys"]}"#;
        let answers: AnswerSet = serde_json::from_str(json).unwrap();

        assert_eq!(answers.single("chatbot"), Some("yes"));
        assert_eq!(
            answers.get("annex1_product"),
            Some(&Answer::multiple(["medical", "toys"]))
        );

        let back = serde_json::to_string(&answers).unwrap();
        let reparsed: AnswerSet = serde_json::from_str(&back).unwrap();
        assert_eq!(reparsed, answers);
    }

    #[test]
    fn selects_matches_both_shapes() {
        assert!(Answer::single("yes").selects("yes"));
        assert!(!Answer::single("yes").selects("no"));
        assert!(Answer::multiple(["a", "b"]).selects("b"));
    }
}
