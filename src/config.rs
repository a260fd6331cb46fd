//! Engine configuration.

use crate::engine::Strategy;
use serde::{Deserialize, Serialize};

/// Policy for answer sets that do not cover the full catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Completeness {
    /// Unanswered questions contribute nothing; the assessment may resolve to
    /// a lower level than a complete one would. Matches the questionnaire's
    /// historical behavior.
    #[default]
    Lenient,
    /// Refuse to produce a result while any catalog question is unanswered;
    /// `evaluate` returns `ActmapError::Incomplete` instead of a possibly
    /// understated risk level.
    Strict,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub strategy: Strategy,
    #[serde(default)]
    pub completeness: Completeness,
}

impl EngineConfig {
    pub fn rules() -> Self {
        Self {
            strategy: Strategy::Rules,
            ..Default::default()
        }
    }

    pub fn weighted() -> Self {
        Self {
            strategy: Strategy::Weighted,
            ..Default::default()
        }
    }

    pub fn strict(mut self) -> Self {
        self.completeness = Completeness::Strict;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_lenient_rules() {
        let config = EngineConfig::default();
        assert_eq!(config.strategy, Strategy::Rules);
        assert_eq!(config.completeness, Completeness::Lenient);
    }

    #[test]
    fn empty_json_uses_defaults() {
        let config: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn parses_overrides() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"strategy":"weighted","completeness":"strict"}"#).unwrap();
        assert_eq!(config.strategy, Strategy::Weighted);
        assert_eq!(config.completeness, Completeness::Strict);
    }
}
