//! PostgreSQL implementation of RatingReader.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{
    AlternativeId, AnalysisId, CriterionId, DomainError, RatingValue, UserId,
};
use crate::domain::scoring::RatingEntry;
use crate::ports::RatingReader;

/// PostgreSQL implementation of RatingReader.
#[derive(Clone)]
pub struct PostgresRatingReader {
    pool: PgPool,
}

impl PostgresRatingReader {
    /// Creates a new PostgresRatingReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(super) struct RatingRow {
    alternative_id: Uuid,
    criterion_id: Uuid,
    value: i16,
}

impl TryFrom<RatingRow> for RatingEntry {
    type Error = DomainError;

    fn try_from(row: RatingRow) -> Result<Self, Self::Error> {
        let value = RatingValue::try_from_i16(row.value).map_err(|e| {
            DomainError::from(e)
                .with_detail("alternative_id", row.alternative_id.to_string())
                .with_detail("criterion_id", row.criterion_id.to_string())
        })?;

        Ok(RatingEntry::new(
            AlternativeId::from_uuid(row.alternative_id),
            CriterionId::from_uuid(row.criterion_id),
            value,
        ))
    }
}

#[async_trait]
impl RatingReader for PostgresRatingReader {
    async fn find_ratings(
        &self,
        user_id: &UserId,
        analysis_id: &AnalysisId,
    ) -> Result<Vec<RatingEntry>, DomainError> {
        let rows: Vec<RatingRow> = sqlx::query_as(
            r#"
            SELECT r.alternative_id, r.criterion_id, r.value
            FROM ratings r
            JOIN analyses a ON a.id = r.analysis_id
            WHERE r.analysis_id = $1 AND a.user_id = $2
            ORDER BY r.alternative_id, r.criterion_id
            "#,
        )
        .bind(analysis_id.as_uuid())
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch ratings: {}", e)))?;

        rows.into_iter().map(RatingEntry::try_from).collect()
    }
}
