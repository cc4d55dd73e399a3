//! Analysis input readers (read side).
//!
//! Each reader returns one collection for an analysis, already filtered to
//! the caller. A caller who does not own the analysis gets an empty
//! collection, never an error.

use async_trait::async_trait;

use crate::domain::foundation::{AnalysisId, DomainError, UserId};
use crate::domain::scoring::{Alternative, Criterion, RatingEntry};

/// Reads the alternatives of an analysis.
#[async_trait]
pub trait AlternativeReader: Send + Sync {
    /// Alternatives in stable insertion order.
    async fn find_alternatives(
        &self,
        user_id: &UserId,
        analysis_id: &AnalysisId,
    ) -> Result<Vec<Alternative>, DomainError>;
}

/// Reads the criteria of an analysis.
#[async_trait]
pub trait CriterionReader: Send + Sync {
    /// Criteria in stable insertion order.
    async fn find_criteria(
        &self,
        user_id: &UserId,
        analysis_id: &AnalysisId,
    ) -> Result<Vec<Criterion>, DomainError>;
}

/// Reads the rating cells of an analysis.
#[async_trait]
pub trait RatingReader: Send + Sync {
    async fn find_ratings(
        &self,
        user_id: &UserId,
        analysis_id: &AnalysisId,
    ) -> Result<Vec<RatingEntry>, DomainError>;
}
