//! PostgreSQL implementation of RatingWriter.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{AnalysisId, DomainError, UserId};
use crate::domain::scoring::RatingEntry;
use crate::ports::RatingWriter;

use super::rating_reader::RatingRow;

/// PostgreSQL implementation of RatingWriter.
///
/// Writes the whole batch in one transaction. The owning analysis row is
/// locked for the duration so concurrent batches serialize.
#[derive(Clone)]
pub struct PostgresRatingWriter {
    pool: PgPool,
}

impl PostgresRatingWriter {
    /// Creates a new PostgresRatingWriter.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RatingWriter for PostgresRatingWriter {
    async fn upsert_ratings(
        &self,
        user_id: &UserId,
        analysis_id: &AnalysisId,
        ratings: &[RatingEntry],
    ) -> Result<Option<Vec<RatingEntry>>, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database(format!("Failed to begin transaction: {}", e)))?;

        let owned: Option<(i32,)> = sqlx::query_as(
            r#"
            SELECT 1 FROM analyses
            WHERE id = $1 AND user_id = $2
            FOR UPDATE
            "#,
        )
        .bind(analysis_id.as_uuid())
        .bind(user_id.as_str())
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| DomainError::database(format!("Failed to lock analysis: {}", e)))?;

        if owned.is_none() {
            return Ok(None);
        }

        for entry in ratings {
            // Inserts nothing when either reference is outside this analysis.
            let result = sqlx::query(
                r#"
                INSERT INTO ratings (id, analysis_id, alternative_id, criterion_id, value)
                SELECT $1, $2, $3, $4, $5
                WHERE EXISTS (SELECT 1 FROM alternatives WHERE id = $3 AND analysis_id = $2)
                  AND EXISTS (SELECT 1 FROM criteria WHERE id = $4 AND analysis_id = $2)
                ON CONFLICT (alternative_id, criterion_id)
                DO UPDATE SET value = EXCLUDED.value
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(analysis_id.as_uuid())
            .bind(entry.alternative_id.as_uuid())
            .bind(entry.criterion_id.as_uuid())
            .bind(i16::from(entry.value))
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database(format!("Failed to upsert rating: {}", e)))?;

            if result.rows_affected() == 0 {
                return Err(
                    DomainError::validation("ratings", "Unknown alternative or criterion")
                        .with_detail("alternative_id", entry.alternative_id.to_string())
                        .with_detail("criterion_id", entry.criterion_id.to_string()),
                );
            }
        }

        let rows: Vec<RatingRow> = sqlx::query_as(
            r#"
            SELECT alternative_id, criterion_id, value
            FROM ratings
            WHERE analysis_id = $1
            ORDER BY alternative_id, criterion_id
            "#,
        )
        .bind(analysis_id.as_uuid())
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch ratings: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database(format!("Failed to commit ratings: {}", e)))?;

        rows.into_iter()
            .map(RatingEntry::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}
