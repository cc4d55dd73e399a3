//! Weight validation and normalization.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Criterion, ScoringError};
use crate::domain::foundation::CriterionId;

/// Total every analysis's criterion weights must add up to.
pub const REQUIRED_WEIGHT_SUM: u32 = 100;

/// Sum of declared criterion weights, known to equal [`REQUIRED_WEIGHT_SUM`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightSum(u32);

impl WeightSum {
    pub fn value(&self) -> u32 {
        self.0
    }
}

/// Checks the weight distribution before any per-alternative work.
pub struct WeightValidator;

impl WeightValidator {
    /// Sums the weights of `criteria`.
    pub fn sum(criteria: &[Criterion]) -> u32 {
        criteria
            .iter()
            .map(|criterion| u32::from(criterion.weight.value()))
            .sum()
    }

    /// Returns the weight sum if it equals 100.
    ///
    /// An empty criteria list sums to 0 and is rejected like any other
    /// mismatch.
    pub fn validate(criteria: &[Criterion]) -> Result<WeightSum, ScoringError> {
        let actual = Self::sum(criteria);
        if actual != REQUIRED_WEIGHT_SUM {
            return Err(ScoringError::InvalidWeightSum { actual });
        }
        Ok(WeightSum(actual))
    }
}

/// Criterion weights expressed as fractions of the weight sum.
///
/// Keeps the criteria order it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedWeights {
    ordered: Vec<(CriterionId, f64)>,
    by_id: HashMap<CriterionId, f64>,
}

impl NormalizedWeights {
    /// Normalized weight for a criterion, if it was part of the input.
    pub fn get(&self, criterion_id: &CriterionId) -> Option<f64> {
        self.by_id.get(criterion_id).copied()
    }

    /// Iterates `(criterion, normalized weight)` in criteria order.
    pub fn iter(&self) -> impl Iterator<Item = &(CriterionId, f64)> {
        self.ordered.iter()
    }

    /// Sum of all normalized weights (1.0 up to rounding).
    pub fn total(&self) -> f64 {
        self.ordered.iter().map(|(_, weight)| weight).sum()
    }
}

/// Converts integer weights into shares of the validated total.
pub struct WeightNormalizer;

impl WeightNormalizer {
    /// Computes `weight / sum` for every criterion.
    pub fn normalize(criteria: &[Criterion], sum: WeightSum) -> NormalizedWeights {
        let ordered: Vec<(CriterionId, f64)> = criteria
            .iter()
            .map(|criterion| (criterion.id, criterion.weight.as_fraction_of(sum.value())))
            .collect();
        let by_id = ordered.iter().copied().collect();

        NormalizedWeights { ordered, by_id }
    }
}
