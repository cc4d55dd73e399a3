//! Error body shared by every endpoint.
//!
//! Successful responses serialize their own DTOs; failures all use
//! `ErrorResponse`.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::foundation::{AlternativeId, CriterionId, DomainError, ValidationError};
use crate::domain::scoring::ScoringError;

/// Standard error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            code: "UNAUTHORIZED".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn analysis_not_found() -> Self {
        Self {
            code: "ANALYSIS_NOT_FOUND".to_string(),
            message: "Analysis not found".to_string(),
            details: None,
        }
    }

    /// Rejected request content, coded from the domain error.
    pub fn validation(err: &ValidationError) -> Self {
        let domain = DomainError::from(err.clone());
        Self {
            code: domain.code.to_string(),
            message: domain.message,
            details: Some(json!(domain.details)),
        }
    }

    /// Scoring failure, coded by `ScoringError::code`.
    pub fn scoring(err: &ScoringError) -> Self {
        let (message, details) = match err {
            ScoringError::InvalidWeightSum { actual } => (
                "Criteria weights must sum to 100",
                json!({ "weightSum": actual }),
            ),
            ScoringError::MissingRatings { expected, actual } => (
                "Ratings incomplete",
                json!({ "expected": expected, "actual": actual }),
            ),
        };
        Self {
            code: err.code().to_string(),
            message: message.to_string(),
            details: Some(details),
        }
    }

    pub fn ratings_not_found(
        alternative_ids: &[AlternativeId],
        criterion_ids: &[CriterionId],
    ) -> Self {
        Self {
            code: "RATING_NOT_FOUND".to_string(),
            message: "Ratings not found".to_string(),
            details: Some(json!({
                "alternativeIds": alternative_ids,
                "criterionIds": criterion_ids,
            })),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}
