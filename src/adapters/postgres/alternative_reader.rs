//! PostgreSQL implementation of AlternativeReader.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{AlternativeId, AnalysisId, DomainError, UserId};
use crate::domain::scoring::Alternative;
use crate::ports::AlternativeReader;

/// PostgreSQL implementation of AlternativeReader.
#[derive(Clone)]
pub struct PostgresAlternativeReader {
    pool: PgPool,
}

impl PostgresAlternativeReader {
    /// Creates a new PostgresAlternativeReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AlternativeRow {
    id: Uuid,
    analysis_id: Uuid,
    name: String,
}

impl From<AlternativeRow> for Alternative {
    fn from(row: AlternativeRow) -> Self {
        Alternative::new(
            AlternativeId::from_uuid(row.id),
            AnalysisId::from_uuid(row.analysis_id),
            row.name,
        )
    }
}

#[async_trait]
impl AlternativeReader for PostgresAlternativeReader {
    async fn find_alternatives(
        &self,
        user_id: &UserId,
        analysis_id: &AnalysisId,
    ) -> Result<Vec<Alternative>, DomainError> {
        let rows: Vec<AlternativeRow> = sqlx::query_as(
            r#"
            SELECT alt.id, alt.analysis_id, alt.name
            FROM alternatives alt
            JOIN analyses a ON a.id = alt.analysis_id
            WHERE alt.analysis_id = $1 AND a.user_id = $2
            ORDER BY alt.created_at, alt.id
            "#,
        )
        .bind(analysis_id.as_uuid())
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch alternatives: {}", e)))?;

        Ok(rows.into_iter().map(Alternative::from).collect())
    }
}
