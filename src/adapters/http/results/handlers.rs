//! HTTP handlers for the results endpoint.
//!
//! Connects the Axum route to `CalculateResultsHandler` and maps its errors
//! onto status codes.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::adapters::http::dto::ErrorResponse;
use crate::adapters::http::middleware::AuthenticatedUser;
use crate::application::handlers::{
    CalculateResultsHandler, CalculateResultsQuery, ResultsError,
};
use crate::domain::foundation::AnalysisId;
use crate::domain::scoring::{ResultsSnapshot, ScoringError};
use crate::ports::{AlternativeReader, AnalysisAccessChecker, CriterionReader, RatingReader};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Results API error that implements IntoResponse.
#[derive(Debug)]
pub enum ResultsApiError {
    BadRequest(String),
    NotFound,
    Scoring(ScoringError),
    Internal,
}

impl IntoResponse for ResultsApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ResultsApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            ResultsApiError::NotFound => (StatusCode::NOT_FOUND, ErrorResponse::analysis_not_found()),
            ResultsApiError::Scoring(err) => {
                let status = match err {
                    ScoringError::InvalidWeightSum { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                    ScoringError::MissingRatings { .. } => StatusCode::CONFLICT,
                };
                (status, ErrorResponse::scoring(&err))
            }
            ResultsApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::internal("Internal server error"),
            ),
        };
        (status, Json(error)).into_response()
    }
}

impl From<ResultsError> for ResultsApiError {
    fn from(err: ResultsError) -> Self {
        match err {
            ResultsError::AnalysisNotFound(_) => ResultsApiError::NotFound,
            ResultsError::Scoring(err) => ResultsApiError::Scoring(err),
            ResultsError::Repository(err) => {
                error!(error = %err, "Unexpected error during results calculation");
                ResultsApiError::Internal
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing results dependencies.
#[derive(Clone)]
pub struct ResultsAppState {
    pub access_checker: Arc<dyn AnalysisAccessChecker>,
    pub alternative_reader: Arc<dyn AlternativeReader>,
    pub criterion_reader: Arc<dyn CriterionReader>,
    pub rating_reader: Arc<dyn RatingReader>,
}

impl ResultsAppState {
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

    pub fn calculate_results_handler(&self) -> CalculateResultsHandler {
        CalculateResultsHandler::new(
            self.access_checker.clone(),
            self.alternative_reader.clone(),
            self.criterion_reader.clone(),
            self.rating_reader.clone(),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/analyses/:analysis_id/results
///
/// Returns every alternative of the analysis, scored and ranked.
pub async fn get_results(
    State(state): State<ResultsAppState>,
    Path(analysis_id_str): Path<String>,
    user: AuthenticatedUser,
) -> Result<Json<ResultsSnapshot>, ResultsApiError> {
    let analysis_id: AnalysisId = analysis_id_str
        .parse()
        .map_err(|_| ResultsApiError::BadRequest("Invalid analysis ID format".to_string()))?;

    let query = CalculateResultsQuery {
        user_id: user.user_id,
        analysis_id,
    };

    let handler = state.calculate_results_handler();
    let snapshot = handler.handle(query).await?;

    Ok(Json(snapshot))
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}
