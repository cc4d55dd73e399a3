//! Rating writer (write side).

use async_trait::async_trait;

use crate::domain::foundation::{AnalysisId, DomainError, UserId};
use crate::domain::scoring::RatingEntry;

/// Port for storing rating cells.
#[async_trait]
pub trait RatingWriter: Send + Sync {
    /// Inserts or overwrites every given cell as one atomic batch.
    ///
    /// Returns all ratings of the analysis after the write, or `None` when
    /// the caller does not own the analysis. A cell naming an alternative or
    /// criterion outside the analysis fails the whole batch.
    async fn upsert_ratings(
        &self,
        user_id: &UserId,
        analysis_id: &AnalysisId,
        ratings: &[RatingEntry],
    ) -> Result<Option<Vec<RatingEntry>>, DomainError>;
}
