//! HTTP handlers for the ratings endpoint.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

use crate::adapters::http::dto::ErrorResponse;
use crate::adapters::http::middleware::AuthenticatedUser;
use crate::application::handlers::{
    UpdateRatingsCommand, UpdateRatingsError, UpdateRatingsHandler,
};
use crate::domain::foundation::{
    AlternativeId, AnalysisId, CriterionId, ErrorCode, ValidationError,
};
use crate::ports::{AlternativeReader, AnalysisAccessChecker, CriterionReader, RatingWriter};

use super::dto::{RatingsResponse, UpdateRatingsRequest};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Ratings API error that implements IntoResponse.
#[derive(Debug)]
pub enum RatingsApiError {
    BadRequest(String),
    Validation(ValidationError),
    AnalysisNotFound,
    RatingsNotFound {
        alternative_ids: Vec<AlternativeId>,
        criterion_ids: Vec<CriterionId>,
    },
    Internal,
}

impl IntoResponse for RatingsApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            RatingsApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            RatingsApiError::Validation(err) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::validation(&err))
            }
            RatingsApiError::AnalysisNotFound => {
                (StatusCode::NOT_FOUND, ErrorResponse::analysis_not_found())
            }
            RatingsApiError::RatingsNotFound {
                alternative_ids,
                criterion_ids,
            } => (
                StatusCode::NOT_FOUND,
                ErrorResponse::ratings_not_found(&alternative_ids, &criterion_ids),
            ),
            RatingsApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::internal("Internal server error"),
            ),
        };
        (status, Json(error)).into_response()
    }
}

impl From<UpdateRatingsError> for RatingsApiError {
    fn from(err: UpdateRatingsError) -> Self {
        match err {
            UpdateRatingsError::Validation(err) => RatingsApiError::Validation(err),
            UpdateRatingsError::AnalysisNotFound(_) => RatingsApiError::AnalysisNotFound,
            UpdateRatingsError::UnknownReferences {
                alternative_ids,
                criterion_ids,
            } => RatingsApiError::RatingsNotFound {
                alternative_ids,
                criterion_ids,
            },
            UpdateRatingsError::RatingsNotFound(_) => RatingsApiError::RatingsNotFound {
                alternative_ids: Vec::new(),
                criterion_ids: Vec::new(),
            },
            // The store rejected a reference that vanished after the handler checked it.
            UpdateRatingsError::Repository(err) if err.code == ErrorCode::ValidationFailed => {
                warn!(error = %err, "Rating write rejected by store");
                RatingsApiError::RatingsNotFound {
                    alternative_ids: Vec::new(),
                    criterion_ids: Vec::new(),
                }
            }
            UpdateRatingsError::Repository(err) => {
                error!(error = %err, "Unexpected error during rating update");
                RatingsApiError::Internal
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing ratings dependencies.
#[derive(Clone)]
pub struct RatingsAppState {
    pub access_checker: Arc<dyn AnalysisAccessChecker>,
    pub alternative_reader: Arc<dyn AlternativeReader>,
    pub criterion_reader: Arc<dyn CriterionReader>,
    pub rating_writer: Arc<dyn RatingWriter>,
}

impl RatingsAppState {
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

    pub fn update_ratings_handler(&self) -> UpdateRatingsHandler {
        UpdateRatingsHandler::new(
            self.access_checker.clone(),
            self.alternative_reader.clone(),
            self.criterion_reader.clone(),
            self.rating_writer.clone(),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// PUT /api/analyses/:analysis_id/ratings
///
/// Inserts or overwrites a batch of cells and returns every stored rating.
pub async fn update_ratings(
    State(state): State<RatingsAppState>,
    Path(analysis_id_str): Path<String>,
    user: AuthenticatedUser,
    body: Result<Json<UpdateRatingsRequest>, JsonRejection>,
) -> Result<Json<RatingsResponse>, RatingsApiError> {
    let analysis_id: AnalysisId = analysis_id_str
        .parse()
        .map_err(|_| RatingsApiError::BadRequest("Invalid analysis ID format".to_string()))?;

    let Json(request) = body.map_err(|rejection| RatingsApiError::BadRequest(rejection.body_text()))?;
    let ratings = request.into_entries().map_err(RatingsApiError::Validation)?;

    let cmd = UpdateRatingsCommand {
        user_id: user.user_id,
        analysis_id,
        ratings,
    };

    let handler = state.update_ratings_handler();
    let stored = handler.handle(cmd).await?;

    Ok(Json(RatingsResponse::from(stored)))
}
