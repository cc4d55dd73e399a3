//! Derived, never-persisted output of a scoring run.
//!
//! Field names serialize in camelCase to match the results wire format.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AlternativeId, CriterionId, RatingValue, Weight};

/// One criterion's weighted input to an alternative's total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    pub criterion_id: CriterionId,
    pub rating: RatingValue,
    pub weight: Weight,
    pub normalized_weight: f64,
    /// `rating * normalized_weight`.
    pub weighted_score: f64,
}

/// Scored (and, after ranking, positioned) alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultItem {
    pub alternative_id: AlternativeId,
    pub alternative_name: String,
    /// Sum of `contributions[].weighted_score`.
    pub total_score: f64,
    /// 1-based position; 0 until ranked.
    pub rank: u32,
    pub contributions: Vec<Contribution>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeSummary {
    pub id: AlternativeId,
    pub name: String,
}

/// Criterion echoed back with its normalized weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionSummary {
    pub id: CriterionId,
    pub name: String,
    pub weight: Weight,
    pub normalized_weight: f64,
}

/// Complete output of one computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsSnapshot {
    /// Alternatives in input order.
    pub alternatives: Vec<AlternativeSummary>,
    /// Criteria in input order.
    pub criteria: Vec<CriterionSummary>,
    pub weight_sum: u32,
    /// Ranked results, best first.
    pub results: Vec<ResultItem>,
}

impl ResultsSnapshot {
    /// The top-ranked result, if any alternatives were scored.
    pub fn winner(&self) -> Option<&ResultItem> {
        self.results.first()
    }
}
