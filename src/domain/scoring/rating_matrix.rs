//! Rating Matrix - Composite-key index over rating cells and its completeness check.

use std::collections::HashMap;

use tracing::warn;

use super::{Alternative, Criterion, RatingEntry, ScoringError};
use crate::domain::foundation::{AlternativeId, CriterionId, RatingValue};

/// Ratings indexed by `(alternative, criterion)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatingMatrix {
    cells: HashMap<(AlternativeId, CriterionId), RatingValue>,
    /// Number of entries supplied, duplicates included.
    entry_count: usize,
}

impl RatingMatrix {
    /// Builds the index in a single pass over the entries.
    pub fn index(ratings: &[RatingEntry]) -> Self {
        let cells = ratings
            .iter()
            .map(|entry| ((entry.alternative_id, entry.criterion_id), entry.value))
            .collect();

        Self {
            cells,
            entry_count: ratings.len(),
        }
    }

    /// Gets the rating for one cell.
    pub fn get(&self, alternative_id: &AlternativeId, criterion_id: &CriterionId) -> Option<RatingValue> {
        self.cells.get(&(*alternative_id, *criterion_id)).copied()
    }

    /// Number of entries the matrix was built from.
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// Number of distinct cells present.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Verifies exactly one rating exists per `(alternative, criterion)` pair.
    ///
    /// # Algorithm
    /// 1. Expected size is `alternatives × criteria`; zero passes trivially.
    /// 2. The supplied entry count must equal the expected size. This rejects
    ///    duplicates and ratings for alternatives or criteria no longer present.
    /// 3. Every pair is looked up; the first gap fails the check.
    pub fn ensure_complete(
        &self,
        alternatives: &[Alternative],
        criteria: &[Criterion],
    ) -> Result<(), ScoringError> {
        let expected = alternatives.len() * criteria.len();
        if expected == 0 {
            return Ok(());
        }

        if self.entry_count != expected {
            warn!(
                expected,
                actual = self.entry_count,
                distinct = self.cell_count(),
                "Rating count does not match matrix size"
            );
            return Err(self.missing(expected));
        }

        for alternative in alternatives {
            for criterion in criteria {
                if self.get(&alternative.id, &criterion.id).is_none() {
                    warn!(
                        alternative_id = %alternative.id,
                        criterion_id = %criterion.id,
                        "Missing rating entry"
                    );
                    return Err(self.missing(expected));
                }
            }
        }

        Ok(())
    }

    fn missing(&self, expected: usize) -> ScoringError {
        ScoringError::MissingRatings {
            expected,
            actual: self.entry_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AnalysisId, Weight};

    struct Fixture {
        alternatives: Vec<Alternative>,
        criteria: Vec<Criterion>,
    }

    fn fixture(alternative_count: usize, weights: &[i32]) -> Fixture {
        let analysis_id = AnalysisId::new();
        Fixture {
            alternatives: (0..alternative_count)
                .map(|i| Alternative::new(AlternativeId::new(), analysis_id, format!("Alt {}", i)))
                .collect(),
            criteria: weights
                .iter()
                .enumerate()
                .map(|(i, w)| {
                    Criterion::new(
                        CriterionId::new(),
                        analysis_id,
                        format!("Crit {}", i),
                        Weight::try_new(*w).unwrap(),
                    )
                })
                .collect(),
        }
    }

    fn rating(value: i16) -> RatingValue {
        RatingValue::try_from_i16(value).unwrap()
    }

    fn full_ratings(f: &Fixture) -> Vec<RatingEntry> {
        f.alternatives
            .iter()
            .flat_map(|a| {
                f.criteria
                    .iter()
                    .map(move |c| RatingEntry::new(a.id, c.id, rating(3)))
            })
            .collect()
    }

    #[test]
    fn index_looks_up_by_composite_key() {
        let f = fixture(1, &[100]);
        let a = f.alternatives[0].id;
        let c = f.criteria[0].id;
        let matrix = RatingMatrix::index(&[RatingEntry::new(a, c, rating(4))]);

        assert_eq!(matrix.get(&a, &c), Some(rating(4)));
        assert_eq!(matrix.get(&AlternativeId::new(), &c), None);
        assert_eq!(matrix.entry_count(), 1);
    }

    #[test]
    fn complete_matrix_passes() {
        let f = fixture(3, &[50, 50]);
        let matrix = RatingMatrix::index(&full_ratings(&f));
        assert!(matrix.ensure_complete(&f.alternatives, &f.criteria).is_ok());
    }

    #[test]
    fn missing_cell_fails_size_check() {
        let f = fixture(2, &[50, 50]);
        let mut ratings = full_ratings(&f);
        ratings.pop();
        let matrix = RatingMatrix::index(&ratings);

        assert_eq!(
            matrix.ensure_complete(&f.alternatives, &f.criteria),
            Err(ScoringError::MissingRatings { expected: 4, actual: 3 })
        );
    }

    #[test]
    fn duplicate_covering_a_gap_fails_pair_check() {
        let f = fixture(2, &[50, 50]);
        let mut ratings = full_ratings(&f);
        let duplicate = ratings[0];
        ratings.pop();
        ratings.push(duplicate);
        let matrix = RatingMatrix::index(&ratings);

        assert_eq!(matrix.entry_count(), 4);
        assert_eq!(matrix.cell_count(), 3);
        assert_eq!(
            matrix.ensure_complete(&f.alternatives, &f.criteria),
            Err(ScoringError::MissingRatings { expected: 4, actual: 4 })
        );
    }

    #[test]
    fn stray_key_with_right_cardinality_fails_pair_check() {
        let f = fixture(2, &[50, 50]);
        let mut ratings = full_ratings(&f);
        ratings.pop();
        ratings.push(RatingEntry::new(AlternativeId::new(), f.criteria[0].id, rating(1)));
        let matrix = RatingMatrix::index(&ratings);

        assert!(matches!(
            matrix.ensure_complete(&f.alternatives, &f.criteria),
            Err(ScoringError::MissingRatings { .. })
        ));
    }

    #[test]
    fn extra_rating_for_removed_alternative_fails() {
        let f = fixture(2, &[100]);
        let mut ratings = full_ratings(&f);
        ratings.push(RatingEntry::new(AlternativeId::new(), f.criteria[0].id, rating(5)));
        let matrix = RatingMatrix::index(&ratings);

        assert_eq!(
            matrix.ensure_complete(&f.alternatives, &f.criteria),
            Err(ScoringError::MissingRatings { expected: 2, actual: 3 })
        );
    }

    #[test]
    fn empty_alternatives_pass_trivially() {
        let f = fixture(0, &[100]);
        let matrix = RatingMatrix::index(&[]);
        assert!(matrix.ensure_complete(&f.alternatives, &f.criteria).is_ok());
    }

    #[test]
    fn empty_criteria_pass_even_with_leftover_ratings() {
        let f = fixture(2, &[]);
        let stray = RatingEntry::new(f.alternatives[0].id, CriterionId::new(), rating(2));
        let matrix = RatingMatrix::index(&[stray]);
        assert!(matrix.ensure_complete(&f.alternatives, &f.criteria).is_ok());
    }
}
