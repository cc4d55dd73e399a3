//! PostgreSQL implementation of CriterionReader.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{AnalysisId, CriterionId, DomainError, UserId, Weight};
use crate::domain::scoring::Criterion;
use crate::ports::CriterionReader;

/// PostgreSQL implementation of CriterionReader.
#[derive(Clone)]
pub struct PostgresCriterionReader {
    pool: PgPool,
}

impl PostgresCriterionReader {
    /// Creates a new PostgresCriterionReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct CriterionRow {
    id: Uuid,
    analysis_id: Uuid,
    name: String,
    weight: i32,
}

impl TryFrom<CriterionRow> for Criterion {
    type Error = DomainError;

    fn try_from(row: CriterionRow) -> Result<Self, Self::Error> {
        let weight = Weight::try_new(row.weight)
            .map_err(|e| DomainError::from(e).with_detail("criterion_id", row.id.to_string()))?;

        Ok(Criterion::new(
            CriterionId::from_uuid(row.id),
            AnalysisId::from_uuid(row.analysis_id),
            row.name,
            weight,
        ))
    }
}

#[async_trait]
impl CriterionReader for PostgresCriterionReader {
    async fn find_criteria(
        &self,
        user_id: &UserId,
        analysis_id: &AnalysisId,
    ) -> Result<Vec<Criterion>, DomainError> {
        let rows: Vec<CriterionRow> = sqlx::query_as(
            r#"
            SELECT c.id, c.analysis_id, c.name, c.weight
            FROM criteria c
            JOIN analyses a ON a.id = c.analysis_id
            WHERE c.analysis_id = $1 AND a.user_id = $2
            ORDER BY c.created_at, c.id
            "#,
        )
        .bind(analysis_id.as_uuid())
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch criteria: {}", e)))?;

        rows.into_iter().map(Criterion::try_from).collect()
    }
}
