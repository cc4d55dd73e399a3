//! Contribution Calculator - Per-criterion weighted scores for each alternative.

use super::{
    Alternative, Contribution, Criterion, NormalizedWeights, RatingMatrix, ResultItem,
    ScoringError,
};

/// Builds unranked result items.
pub struct ContributionCalculator;

impl ContributionCalculator {
    /// Computes contributions and total score for every alternative.
    ///
    /// # Algorithm
    /// For each alternative, for each criterion in input order:
    /// `weighted_score = rating × normalized_weight`; `total = Σ weighted_score`.
    ///
    /// Every returned item carries rank 0. Callers run
    /// [`RatingMatrix::ensure_complete`] first; a gap found here anyway is
    /// reported as [`ScoringError::MissingRatings`].
    pub fn calculate(
        alternatives: &[Alternative],
        criteria: &[Criterion],
        weights: &NormalizedWeights,
        matrix: &RatingMatrix,
    ) -> Result<Vec<ResultItem>, ScoringError> {
        let expected = alternatives.len() * criteria.len();

        alternatives
            .iter()
            .map(|alternative| -> Result<ResultItem, ScoringError> {
                let contributions = criteria
                    .iter()
                    .map(|criterion| -> Result<Contribution, ScoringError> {
                        let rating = matrix.get(&alternative.id, &criterion.id).ok_or(
                            ScoringError::MissingRatings {
                                expected,
                                actual: matrix.entry_count(),
                            },
                        )?;
                        let normalized_weight = weights.get(&criterion.id).unwrap_or(0.0);

                        Ok(Contribution {
                            criterion_id: criterion.id,
                            rating,
                            weight: criterion.weight,
                            normalized_weight,
                            weighted_score: rating.as_f64() * normalized_weight,
                        })
                    })
                    .collect::<Result<Vec<_>, ScoringError>>()?;

                let total_score: f64 = contributions.iter().map(|c| c.weighted_score).sum();

                Ok(ResultItem {
                    alternative_id: alternative.id,
                    alternative_name: alternative.name.clone(),
                    total_score,
                    rank: 0,
                    contributions,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{
        AlternativeId, AnalysisId, CriterionId, RatingValue, Weight,
    };
    use crate::domain::scoring::{RatingEntry, ScoringInputs, WeightNormalizer, WeightValidator};

    fn rating(value: i16) -> RatingValue {
        RatingValue::try_from_i16(value).unwrap()
    }

    fn weight(value: i32) -> Weight {
        Weight::try_new(value).unwrap()
    }

    fn run(inputs: &ScoringInputs) -> Result<Vec<ResultItem>, ScoringError> {
        let sum = WeightValidator::validate(&inputs.criteria).unwrap();
        let weights = WeightNormalizer::normalize(&inputs.criteria, sum);
        let matrix = RatingMatrix::index(&inputs.ratings);
        ContributionCalculator::calculate(&inputs.alternatives, &inputs.criteria, &weights, &matrix)
    }

    #[test]
    fn computes_weighted_scores_and_totals() {
        let a = AlternativeId::new();
        let b = AlternativeId::new();
        let cost = CriterionId::new();
        let quality = CriterionId::new();
        let inputs = ScoringInputs::builder(AnalysisId::new())
            .alternative(a, "Option A")
            .alternative(b, "Option B")
            .criterion(cost, "Cost", weight(60))
            .criterion(quality, "Quality", weight(40))
            .rating(a, cost, rating(5))
            .rating(a, quality, rating(4))
            .rating(b, cost, rating(3))
            .rating(b, quality, rating(2))
            .build();

        let items = run(&inputs).unwrap();

        assert_eq!(items.len(), 2);
        assert!((items[0].total_score - 4.6).abs() < 1e-9);
        assert!((items[1].total_score - 2.6).abs() < 1e-9);

        let first = &items[0].contributions[0];
        assert_eq!(first.criterion_id, cost);
        assert_eq!(first.rating, rating(5));
        assert_eq!(first.weight, weight(60));
        assert!((first.normalized_weight - 0.6).abs() < 1e-12);
        assert!((first.weighted_score - 3.0).abs() < 1e-12);
    }

    #[test]
    fn contributions_follow_criteria_order() {
        let a = AlternativeId::new();
        let ids: Vec<CriterionId> = (0..4).map(|_| CriterionId::new()).collect();
        let mut builder = ScoringInputs::builder(AnalysisId::new()).alternative(a, "Only");
        for (i, id) in ids.iter().enumerate() {
            builder = builder
                .criterion(*id, format!("C{}", i), weight(25))
                .rating(a, *id, rating(1));
        }

        let items = run(&builder.build()).unwrap();
        let order: Vec<CriterionId> = items[0].contributions.iter().map(|c| c.criterion_id).collect();
        assert_eq!(order, ids);
    }

    #[test]
    fn items_start_unranked_in_input_order() {
        let a = AlternativeId::new();
        let b = AlternativeId::new();
        let c = CriterionId::new();
        let inputs = ScoringInputs::builder(AnalysisId::new())
            .alternative(a, "Low")
            .alternative(b, "High")
            .criterion(c, "Only", weight(100))
            .rating(a, c, rating(1))
            .rating(b, c, rating(5))
            .build();

        let items = run(&inputs).unwrap();
        assert_eq!(items[0].alternative_id, a);
        assert_eq!(items[1].alternative_id, b);
        assert!(items.iter().all(|item| item.rank == 0));
    }

    #[test]
    fn gap_is_reported_as_missing_ratings() {
        let a = AlternativeId::new();
        let c = CriterionId::new();
        let inputs = ScoringInputs {
            ratings: vec![RatingEntry::new(AlternativeId::new(), c, rating(3))],
            ..ScoringInputs::builder(AnalysisId::new())
                .alternative(a, "A")
                .criterion(c, "C", weight(100))
                .build()
        };

        assert_eq!(
            run(&inputs),
            Err(ScoringError::MissingRatings { expected: 1, actual: 1 })
        );
    }

    #[test]
    fn no_alternatives_yields_no_items() {
        let inputs = ScoringInputs::builder(AnalysisId::new())
            .criterion(CriterionId::new(), "C", weight(100))
            .build();
        assert!(run(&inputs).unwrap().is_empty());
    }
}
