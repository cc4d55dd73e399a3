//! Results Calculator - Runs the scoring stages in order.

use tracing::{debug, warn};

use super::{
    AlternativeSummary, ContributionCalculator, CriterionSummary, NormalizedWeights, Ranker,
    RatingMatrix, ResultsSnapshot, ScoringError, ScoringInputs, WeightNormalizer,
    WeightValidator,
};

/// Turns one analysis's inputs into a ranked snapshot.
pub struct ResultsCalculator;

impl ResultsCalculator {
    /// Validates, normalizes, checks completeness, scores, and ranks.
    ///
    /// Fails fast on the weight check before any per-alternative work. Pure
    /// apart from logging: identical inputs give identical snapshots.
    pub fn calculate(inputs: &ScoringInputs) -> Result<ResultsSnapshot, ScoringError> {
        let weight_sum = WeightValidator::validate(&inputs.criteria).map_err(|err| {
            warn!(error = %err, "Invalid criteria weight sum");
            err
        })?;

        let weights = WeightNormalizer::normalize(&inputs.criteria, weight_sum);

        let matrix = RatingMatrix::index(&inputs.ratings);
        matrix.ensure_complete(&inputs.alternatives, &inputs.criteria)?;

        let items = ContributionCalculator::calculate(
            &inputs.alternatives,
            &inputs.criteria,
            &weights,
            &matrix,
        )?;
        let results = Ranker::rank(items);

        debug!(
            alternatives = inputs.alternatives.len(),
            criteria = inputs.criteria.len(),
            ratings = inputs.ratings.len(),
            normalized_total = weights.total(),
            "Scored analysis"
        );

        Ok(ResultsSnapshot {
            alternatives: inputs
                .alternatives
                .iter()
                .map(|alternative| AlternativeSummary {
                    id: alternative.id,
                    name: alternative.name.clone(),
                })
                .collect(),
            criteria: Self::criteria_summary(inputs, &weights),
            weight_sum: weight_sum.value(),
            results,
        })
    }

    fn criteria_summary(inputs: &ScoringInputs, weights: &NormalizedWeights) -> Vec<CriterionSummary> {
        inputs
            .criteria
            .iter()
            .map(|criterion| CriterionSummary {
                id: criterion.id,
                name: criterion.name.clone(),
                weight: criterion.weight,
                normalized_weight: weights.get(&criterion.id).unwrap_or(0.0),
            })
            .collect()
    }
}
