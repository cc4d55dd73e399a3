//! Errors that abort a scoring run.

use thiserror::Error;

/// Fatal scoring failures. No partial results are produced for either.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// Criterion weights do not add up to the required total.
    #[error("Criteria weights must sum to 100, got {actual}")]
    InvalidWeightSum { actual: u32 },

    /// The rating matrix is not dense for the current alternatives and criteria.
    #[error("Ratings incomplete: expected {expected}, found {actual}")]
    MissingRatings { expected: usize, actual: usize },
}

impl ScoringError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            ScoringError::InvalidWeightSum { .. } => "INVALID_WEIGHT_SUM",
            ScoringError::MissingRatings { .. } => "MISSING_RATINGS",
        }
    }
}
