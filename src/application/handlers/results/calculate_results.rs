//! CalculateResultsHandler - Query handler producing ranked analysis results.
//!
//! Checks the caller can see the analysis, fetches alternatives, criteria,
//! and ratings concurrently, then runs the scoring engine.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, info_span, warn};

use crate::domain::foundation::{AnalysisId, DomainError, UserId};
use crate::domain::scoring::{ResultsCalculator, ResultsSnapshot, ScoringError, ScoringInputs};
use crate::ports::{AlternativeReader, AnalysisAccessChecker, CriterionReader, RatingReader};

/// Query for the ranked results of one analysis.
#[derive(Debug, Clone)]
pub struct CalculateResultsQuery {
    /// Caller on whose behalf inputs are read.
    pub user_id: UserId,
    pub analysis_id: AnalysisId,
}

/// Result of a successful results query.
pub type CalculateResultsResult = ResultsSnapshot;

/// Errors from computing results.
#[derive(Debug, Error)]
pub enum ResultsError {
    /// Missing, or owned by someone else. Both look the same to callers.
    #[error("Analysis not found: {0}")]
    AnalysisNotFound(AnalysisId),

    /// The inputs cannot be scored.
    #[error(transparent)]
    Scoring(#[from] ScoringError),

    /// A collaborator failed; passed through untouched.
    #[error(transparent)]
    Repository(#[from] DomainError),
}

/// Handler for computing analysis results.
pub struct CalculateResultsHandler {
    access_checker: Arc<dyn AnalysisAccessChecker>,
    alternative_reader: Arc<dyn AlternativeReader>,
    criterion_reader: Arc<dyn CriterionReader>,
    rating_reader: Arc<dyn RatingReader>,
}

impl CalculateResultsHandler {
    pub fn new(
        access_checker: Arc<dyn AnalysisAccessChecker>,
        alternative_reader: Arc<dyn AlternativeReader>,
        criterion_reader: Arc<dyn CriterionReader>,
        rating_reader: Arc<dyn RatingReader>,
    ) -> Self {
        Self {
            access_checker,
            alternative_reader,
            criterion_reader,
            rating_reader,
        }
    }

    pub async fn handle(
        &self,
        query: CalculateResultsQuery,
    ) -> Result<CalculateResultsResult, ResultsError> {
        let CalculateResultsQuery { user_id, analysis_id } = query;

        debug!(user_id = %user_id, analysis_id = %analysis_id, "Calculating analysis results");

        let access = self.access_checker.check_access(&user_id, &analysis_id).await?;
        if !access.is_granted() {
            warn!(
                user_id = %user_id,
                analysis_id = %analysis_id,
                outcome = ?access,
                "Analysis not accessible"
            );
            return Err(ResultsError::AnalysisNotFound(analysis_id));
        }

        let inputs = self.fetch_inputs(&user_id, &analysis_id).await?;

        let snapshot = {
            let _span = info_span!(
                "score_analysis",
                user_id = %user_id,
                analysis_id = %analysis_id
            )
            .entered();
            ResultsCalculator::calculate(&inputs)?
        };

        info!(
            user_id = %user_id,
            analysis_id = %analysis_id,
            alternatives = inputs.alternatives.len(),
            criteria = inputs.criteria.len(),
            ratings = inputs.ratings.len(),
            winner = snapshot.winner().map(|w| w.alternative_name.as_str()),
            "Analysis results calculated successfully"
        );

        Ok(snapshot)
    }

    /// Fetches the three input collections concurrently.
    async fn fetch_inputs(
        &self,
        user_id: &UserId,
        analysis_id: &AnalysisId,
    ) -> Result<ScoringInputs, DomainError> {
        let (alternatives, criteria, ratings) = tokio::try_join!(
            self.alternative_reader.find_alternatives(user_id, analysis_id),
            self.criterion_reader.find_criteria(user_id, analysis_id),
            self.rating_reader.find_ratings(user_id, analysis_id),
        )?;

        Ok(ScoringInputs {
            alternatives,
            criteria,
            ratings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{
        AlternativeId, CriterionId, ErrorCode, RatingValue, Weight,
    };
    use crate::domain::scoring::{Alternative, Criterion, RatingEntry};
    use crate::ports::AnalysisAccess;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::Barrier;

    // ─────────────────────────────────────────────────────────────────────
    // Mock Implementation
    // ─────────────────────────────────────────────────────────────────────

    struct MockAnalysis {
        access: AnalysisAccess,
        inputs: ScoringInputs,
        fail_ratings: bool,
        reads: AtomicUsize,
        /// When set, every reader waits here until all three have started.
        rendezvous: Option<Barrier>,
    }

    impl MockAnalysis {
        fn with_inputs(inputs: ScoringInputs) -> Self {
            Self {
                access: AnalysisAccess::Granted,
                inputs,
                fail_ratings: false,
                reads: AtomicUsize::new(0),
                rendezvous: None,
            }
        }

        fn requiring_concurrent_reads(inputs: ScoringInputs) -> Self {
            Self {
                rendezvous: Some(Barrier::new(3)),
                ..Self::with_inputs(inputs)
            }
        }

        async fn read(&self) {
            self.reads.fetch_add(1, Ordering::SeqCst);
            if let Some(barrier) = &self.rendezvous {
                barrier.wait().await;
            }
        }

        fn denied(access: AnalysisAccess) -> Self {
            Self {
                access,
                ..Self::with_inputs(ScoringInputs::default())
            }
        }

        fn failing_ratings(inputs: ScoringInputs) -> Self {
            Self {
                fail_ratings: true,
                ..Self::with_inputs(inputs)
            }
        }
    }

    #[async_trait]
    impl AnalysisAccessChecker for MockAnalysis {
        async fn check_access(
            &self,
            _user_id: &UserId,
            _analysis_id: &AnalysisId,
        ) -> Result<AnalysisAccess, DomainError> {
            Ok(self.access)
        }
    }

    #[async_trait]
    impl AlternativeReader for MockAnalysis {
        async fn find_alternatives(
            &self,
            _user_id: &UserId,
            _analysis_id: &AnalysisId,
        ) -> Result<Vec<Alternative>, DomainError> {
            self.read().await;
            Ok(self.inputs.alternatives.clone())
        }
    }

    #[async_trait]
    impl CriterionReader for MockAnalysis {
        async fn find_criteria(
            &self,
            _user_id: &UserId,
            _analysis_id: &AnalysisId,
        ) -> Result<Vec<Criterion>, DomainError> {
            self.read().await;
            Ok(self.inputs.criteria.clone())
        }
    }

    #[async_trait]
    impl RatingReader for MockAnalysis {
        async fn find_ratings(
            &self,
            _user_id: &UserId,
            _analysis_id: &AnalysisId,
        ) -> Result<Vec<RatingEntry>, DomainError> {
            self.read().await;
            if self.fail_ratings {
                return Err(DomainError::database("Simulated failure"));
            }
            Ok(self.inputs.ratings.clone())
        }
    }

    fn handler_for(mock: Arc<MockAnalysis>) -> CalculateResultsHandler {
        CalculateResultsHandler::new(mock.clone(), mock.clone(), mock.clone(), mock)
    }

    fn test_query() -> CalculateResultsQuery {
        CalculateResultsQuery {
            user_id: UserId::new("test-user-123").unwrap(),
            analysis_id: AnalysisId::new(),
        }
    }

    fn sample_inputs(weights: (i32, i32), drop_last_rating: bool) -> ScoringInputs {
        let a = AlternativeId::new();
        let b = AlternativeId::new();
        let cost = CriterionId::new();
        let quality = CriterionId::new();
        let r = |v| RatingValue::try_from_i16(v).unwrap();
        let mut inputs = ScoringInputs::builder(AnalysisId::new())
            .alternative(a, "Option A")
            .alternative(b, "Option B")
            .criterion(cost, "Cost", Weight::try_new(weights.0).unwrap())
            .criterion(quality, "Quality", Weight::try_new(weights.1).unwrap())
            .rating(a, cost, r(5))
            .rating(a, quality, r(4))
            .rating(b, cost, r(3))
            .rating(b, quality, r(2))
            .build();
        if drop_last_rating {
            inputs.ratings.pop();
        }
        inputs
    }

    // ─────────────────────────────────────────────────────────────────────
    // Tests
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_returns_ranked_snapshot() {
        let mock = Arc::new(MockAnalysis::with_inputs(sample_inputs((60, 40), false)));
        let handler = handler_for(mock.clone());

        let snapshot = handler.handle(test_query()).await.unwrap();

        assert_eq!(snapshot.weight_sum, 100);
        assert_eq!(snapshot.results.len(), 2);
        assert_eq!(snapshot.results[0].alternative_name, "Option A");
        assert_eq!(snapshot.results[0].rank, 1);
        assert_eq!(snapshot.results[1].rank, 2);
        assert_eq!(mock.reads.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_not_found_analysis_is_reported() {
        let mock = Arc::new(MockAnalysis::denied(AnalysisAccess::NotFound));
        let handler = handler_for(mock.clone());
        let query = test_query();
        let analysis_id = query.analysis_id;

        let result = handler.handle(query).await;

        assert!(matches!(result, Err(ResultsError::AnalysisNotFound(id)) if id == analysis_id));
        assert_eq!(mock.reads.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_forbidden_analysis_looks_like_not_found() {
        let mock = Arc::new(MockAnalysis::denied(AnalysisAccess::Forbidden));
        let handler = handler_for(mock);

        let result = handler.handle(test_query()).await;
        assert!(matches!(result, Err(ResultsError::AnalysisNotFound(_))));
    }

    #[tokio::test]
    async fn test_invalid_weight_sum_is_reported() {
        let mock = Arc::new(MockAnalysis::with_inputs(sample_inputs((40, 40), false)));
        let handler = handler_for(mock);

        let result = handler.handle(test_query()).await;
        assert!(matches!(
            result,
            Err(ResultsError::Scoring(ScoringError::InvalidWeightSum { actual: 80 }))
        ));
    }

    #[tokio::test]
    async fn test_missing_ratings_are_reported() {
        let mock = Arc::new(MockAnalysis::with_inputs(sample_inputs((50, 50), true)));
        let handler = handler_for(mock);

        let result = handler.handle(test_query()).await;
        assert!(matches!(
            result,
            Err(ResultsError::Scoring(ScoringError::MissingRatings { expected: 4, actual: 3 }))
        ));
    }

    #[tokio::test]
    async fn test_reader_failure_propagates_unchanged() {
        let mock = Arc::new(MockAnalysis::failing_ratings(sample_inputs((60, 40), false)));
        let handler = handler_for(mock);

        match handler.handle(test_query()).await {
            Err(ResultsError::Repository(err)) => {
                assert_eq!(err.code, ErrorCode::DatabaseError);
                assert_eq!(err.message, "Simulated failure");
            }
            other => panic!("Expected repository error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_empty_analysis_with_no_criteria_fails_weight_check() {
        let mock = Arc::new(MockAnalysis::with_inputs(ScoringInputs::default()));
        let handler = handler_for(mock);

        let result = handler.handle(test_query()).await;
        assert!(matches!(
            result,
            Err(ResultsError::Scoring(ScoringError::InvalidWeightSum { actual: 0 }))
        ));
    }

    #[tokio::test]
    async fn test_inputs_are_fetched_concurrently() {
        // A sequential fetch would park the first reader at the barrier forever.
        let mock = Arc::new(MockAnalysis::requiring_concurrent_reads(sample_inputs(
            (60, 40),
            false,
        )));
        let handler = handler_for(mock.clone());

        let snapshot = tokio::time::timeout(Duration::from_secs(2), handler.handle(test_query()))
            .await
            .expect("readers were not polled concurrently")
            .unwrap();

        assert_eq!(snapshot.results.len(), 2);
        assert_eq!(mock.reads.load(Ordering::SeqCst), 3);
    }
}
