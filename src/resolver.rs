//! Obligation/recommendation resolution.
//!
//! A pure table lookup: every risk level maps to a defined (possibly small)
//! set of obligations and recommendations. The returned lists go through the
//! dedup container so the unique-title invariant holds by construction.

use crate::catalog::obligations::{obligations_for, recommendations_for};
use crate::core::{Obligation, Recommendation, RiskLevel, TitledList};
use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Guidance {
    pub obligations: TitledList<Obligation>,
    pub recommendations: TitledList<Recommendation>,
}

/// Resolve the static guidance for a risk level. Total: never fails, never
/// returns an undefined list.
pub fn resolve(level: RiskLevel) -> Guidance {
    Guidance {
        obligations: obligations_for(level).into_iter().collect(),
        recommendations: recommendations_for(level).into_iter().collect(),
    }
}
