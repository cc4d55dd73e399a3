//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the decision matrix domain.

mod errors;
mod ids;
mod rating;
mod weight;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AlternativeId, AnalysisId, CriterionId, UserId};
pub use rating::RatingValue;
pub use weight::Weight;
