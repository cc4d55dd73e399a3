//! PostgreSQL implementation of AnalysisAccessChecker.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{AnalysisId, DomainError, UserId};
use crate::ports::{AnalysisAccess, AnalysisAccessChecker};

/// PostgreSQL implementation of AnalysisAccessChecker.
#[derive(Clone)]
pub struct PostgresAnalysisAccessChecker {
    pool: PgPool,
}

impl PostgresAnalysisAccessChecker {
    /// Creates a new PostgresAnalysisAccessChecker.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnalysisAccessChecker for PostgresAnalysisAccessChecker {
    async fn check_access(
        &self,
        user_id: &UserId,
        analysis_id: &AnalysisId,
    ) -> Result<AnalysisAccess, DomainError> {
        let row = sqlx::query("SELECT user_id FROM analyses WHERE id = $1")
            .bind(analysis_id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch analysis: {}", e)))?;

        let Some(row) = row else {
            return Ok(AnalysisAccess::NotFound);
        };

        let owner: String = row
            .try_get("user_id")
            .map_err(|e| DomainError::database(format!("Failed to read analysis owner: {}", e)))?;

        if owner == user_id.as_str() {
            Ok(AnalysisAccess::Granted)
        } else {
            Ok(AnalysisAccess::Forbidden)
        }
    }
}
