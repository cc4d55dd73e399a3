//! In-Memory Analysis Store Adapter
//!
//! Holds analyses and their inputs in memory and serves every read port plus
//! the rating writer.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{AnalysisId, DomainError, UserId};
use crate::domain::scoring::{Alternative, Criterion, RatingEntry, ScoringInputs};
use crate::ports::{
    AlternativeReader, AnalysisAccess, AnalysisAccessChecker, CriterionReader, RatingReader,
    RatingWriter,
};

#[derive(Debug, Clone)]
struct StoredAnalysis {
    owner: UserId,
    inputs: ScoringInputs,
}

/// In-memory storage for analyses, scoped by owner like the SQL adapters.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAnalysisStore {
    analyses: Arc<RwLock<HashMap<AnalysisId, StoredAnalysis>>>,
}

impl InMemoryAnalysisStore {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an analysis owned by `owner`.
    pub async fn insert(&self, owner: UserId, analysis_id: AnalysisId, inputs: ScoringInputs) {
        self.analyses
            .write()
            .await
            .insert(analysis_id, StoredAnalysis { owner, inputs });
    }

    /// Runs `select` on the caller's analysis, or returns an empty collection.
    async fn owned<T>(
        &self,
        user_id: &UserId,
        analysis_id: &AnalysisId,
        select: impl FnOnce(&ScoringInputs) -> Vec<T>,
    ) -> Vec<T> {
        let analyses = self.analyses.read().await;
        analyses
            .get(analysis_id)
            .filter(|stored| &stored.owner == user_id)
            .map(|stored| select(&stored.inputs))
            .unwrap_or_default()
    }
}

#[async_trait]
impl AnalysisAccessChecker for InMemoryAnalysisStore {
    async fn check_access(
        &self,
        user_id: &UserId,
        analysis_id: &AnalysisId,
    ) -> Result<AnalysisAccess, DomainError> {
        let analyses = self.analyses.read().await;
        Ok(match analyses.get(analysis_id) {
            None => AnalysisAccess::NotFound,
            Some(stored) if &stored.owner == user_id => AnalysisAccess::Granted,
            Some(_) => AnalysisAccess::Forbidden,
        })
    }
}

#[async_trait]
impl AlternativeReader for InMemoryAnalysisStore {
    async fn find_alternatives(
        &self,
        user_id: &UserId,
        analysis_id: &AnalysisId,
    ) -> Result<Vec<Alternative>, DomainError> {
        Ok(self
            .owned(user_id, analysis_id, |inputs| inputs.alternatives.clone())
            .await)
    }
}

#[async_trait]
impl CriterionReader for InMemoryAnalysisStore {
    async fn find_criteria(
        &self,
        user_id: &UserId,
        analysis_id: &AnalysisId,
    ) -> Result<Vec<Criterion>, DomainError> {
        Ok(self
            .owned(user_id, analysis_id, |inputs| inputs.criteria.clone())
            .await)
    }
}

#[async_trait]
impl RatingReader for InMemoryAnalysisStore {
    async fn find_ratings(
        &self,
        user_id: &UserId,
        analysis_id: &AnalysisId,
    ) -> Result<Vec<RatingEntry>, DomainError> {
        Ok(self
            .owned(user_id, analysis_id, |inputs| inputs.ratings.clone())
            .await)
    }
}

#[async_trait]
impl RatingWriter for InMemoryAnalysisStore {
    async fn upsert_ratings(
        &self,
        user_id: &UserId,
        analysis_id: &AnalysisId,
        ratings: &[RatingEntry],
    ) -> Result<Option<Vec<RatingEntry>>, DomainError> {
        let mut analyses = self.analyses.write().await;
        let Some(stored) = analyses
            .get_mut(analysis_id)
            .filter(|stored| &stored.owner == user_id)
        else {
            return Ok(None);
        };

        let inputs = &mut stored.inputs;
        if let Some(stray) = ratings.iter().find(|entry| {
            !inputs.alternatives.iter().any(|a| a.id == entry.alternative_id)
                || !inputs.criteria.iter().any(|c| c.id == entry.criterion_id)
        }) {
            return Err(
                DomainError::validation("ratings", "Unknown alternative or criterion")
                    .with_detail("alternative_id", stray.alternative_id.to_string())
                    .with_detail("criterion_id", stray.criterion_id.to_string()),
            );
        }

        for entry in ratings {
            match inputs.ratings.iter_mut().find(|r| {
                r.alternative_id == entry.alternative_id && r.criterion_id == entry.criterion_id
            }) {
                Some(existing) => existing.value = entry.value,
                None => inputs.ratings.push(*entry),
            }
        }

        Ok(Some(inputs.ratings.clone()))
    }
}
