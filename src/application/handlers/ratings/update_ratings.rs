//! UpdateRatingsHandler - Command handler for batch rating upserts.
//!
//! Rejects malformed batches, checks ownership, verifies that every cell
//! names an alternative and criterion of the analysis, then writes the batch
//! in one step.

use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::foundation::{
    AlternativeId, AnalysisId, CriterionId, DomainError, UserId, ValidationError,
};
use crate::domain::scoring::{Alternative, Criterion, RatingEntry};
use crate::ports::{AlternativeReader, AnalysisAccessChecker, CriterionReader, RatingWriter};

/// Command to insert or overwrite a batch of ratings.
#[derive(Debug, Clone)]
pub struct UpdateRatingsCommand {
    pub user_id: UserId,
    pub analysis_id: AnalysisId,
    pub ratings: Vec<RatingEntry>,
}

/// Every rating of the analysis after the write.
pub type UpdateRatingsResult = Vec<RatingEntry>;

/// Errors from updating ratings.
#[derive(Debug, Error)]
pub enum UpdateRatingsError {
    #[error("Invalid ratings: {0}")]
    Validation(#[from] ValidationError),

    #[error("Analysis not found: {0}")]
    AnalysisNotFound(AnalysisId),

    #[error("Ratings reference unknown alternatives or criteria")]
    UnknownReferences {
        alternative_ids: Vec<AlternativeId>,
        criterion_ids: Vec<CriterionId>,
    },

    /// The writer refused the batch for this caller.
    #[error("Ratings not found for analysis {0}")]
    RatingsNotFound(AnalysisId),

    #[error(transparent)]
    Repository(#[from] DomainError),
}

/// Handler for batch rating upserts.
pub struct UpdateRatingsHandler {
    access_checker: Arc<dyn AnalysisAccessChecker>,
    alternative_reader: Arc<dyn AlternativeReader>,
    criterion_reader: Arc<dyn CriterionReader>,
    rating_writer: Arc<dyn RatingWriter>,
}

impl UpdateRatingsHandler {
    pub fn new(
        access_checker: Arc<dyn AnalysisAccessChecker>,
        alternative_reader: Arc<dyn AlternativeReader>,
        criterion_reader: Arc<dyn CriterionReader>,
        rating_writer: Arc<dyn RatingWriter>,
    ) -> Self {
        Self {
            access_checker,
            alternative_reader,
            criterion_reader,
            rating_writer,
        }
    }

    pub async fn handle(
        &self,
        cmd: UpdateRatingsCommand,
    ) -> Result<UpdateRatingsResult, UpdateRatingsError> {
        let UpdateRatingsCommand {
            user_id,
            analysis_id,
            ratings,
        } = cmd;

        debug!(
            user_id = %user_id,
            analysis_id = %analysis_id,
            count = ratings.len(),
            "Updating ratings"
        );

        validate_batch(&ratings)?;

        let access = self.access_checker.check_access(&user_id, &analysis_id).await?;
        if !access.is_granted() {
            warn!(
                user_id = %user_id,
                analysis_id = %analysis_id,
                outcome = ?access,
                "Analysis not accessible"
            );
            return Err(UpdateRatingsError::AnalysisNotFound(analysis_id));
        }

        let (alternatives, criteria) = tokio::try_join!(
            self.alternative_reader.find_alternatives(&user_id, &analysis_id),
            self.criterion_reader.find_criteria(&user_id, &analysis_id),
        )?;

        if let Err(err) = check_references(&ratings, &alternatives, &criteria) {
            warn!(
                user_id = %user_id,
                analysis_id = %analysis_id,
                error = %err,
                "Ratings contain unknown references"
            );
            return Err(err);
        }

        let stored = self
            .rating_writer
            .upsert_ratings(&user_id, &analysis_id, &ratings)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user_id, analysis_id = %analysis_id, "Rating write refused");
                UpdateRatingsError::RatingsNotFound(analysis_id)
            })?;

        info!(
            user_id = %user_id,
            analysis_id = %analysis_id,
            written = ratings.len(),
            total = stored.len(),
            "Ratings updated successfully"
        );

        Ok(stored)
    }
}

/// A batch must be non-empty with at most one entry per cell.
fn validate_batch(ratings: &[RatingEntry]) -> Result<(), ValidationError> {
    if ratings.is_empty() {
        return Err(ValidationError::empty_field("ratings"));
    }

    let mut seen = HashSet::with_capacity(ratings.len());
    for entry in ratings {
        if !seen.insert((entry.alternative_id, entry.criterion_id)) {
            return Err(ValidationError::invalid_format(
                "ratings",
                "Ratings must be unique per alternative and criterion",
            ));
        }
    }
    Ok(())
}

fn check_references(
    ratings: &[RatingEntry],
    alternatives: &[Alternative],
    criteria: &[Criterion],
) -> Result<(), UpdateRatingsError> {
    let known_alternatives: HashSet<AlternativeId> = alternatives.iter().map(|a| a.id).collect();
    let known_criteria: HashSet<CriterionId> = criteria.iter().map(|c| c.id).collect();

    let mut alternative_ids = Vec::new();
    let mut criterion_ids = Vec::new();
    for entry in ratings {
        if !known_alternatives.contains(&entry.alternative_id)
            && !alternative_ids.contains(&entry.alternative_id)
        {
            alternative_ids.push(entry.alternative_id);
        }
        if !known_criteria.contains(&entry.criterion_id)
            && !criterion_ids.contains(&entry.criterion_id)
        {
            criterion_ids.push(entry.criterion_id);
        }
    }

    if alternative_ids.is_empty() && criterion_ids.is_empty() {
        Ok(())
    } else {
        Err(UpdateRatingsError::UnknownReferences {
            alternative_ids,
            criterion_ids,
        })
    }
}
