//! Request and response DTOs for the ratings endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    AlternativeId, CriterionId, RatingValue, ValidationError,
};
use crate::domain::scoring::RatingEntry;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request body for PUT /api/analyses/:analysis_id/ratings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRatingsRequest {
    pub ratings: Vec<RatingInput>,
}

/// One submitted cell.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingInput {
    pub alternative_id: AlternativeId,
    pub criterion_id: CriterionId,
    pub value: i32,
}

impl RatingInput {
    fn to_entry(&self) -> Result<RatingEntry, ValidationError> {
        let value = i16::try_from(self.value)
            .map_err(|_| {
                ValidationError::out_of_range(
                    "rating",
                    i32::from(RatingValue::MIN),
                    i32::from(RatingValue::MAX),
                    self.value,
                )
            })
            .and_then(RatingValue::try_from_i16)?;
        Ok(RatingEntry::new(self.alternative_id, self.criterion_id, value))
    }
}

impl UpdateRatingsRequest {
    /// Converts every submitted cell, failing on the first out-of-range value.
    pub fn into_entries(self) -> Result<Vec<RatingEntry>, ValidationError> {
        self.ratings.iter().map(RatingInput::to_entry).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Stored ratings after a write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingsResponse {
    pub data: Vec<RatingView>,
}

/// One stored cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingView {
    pub alternative_id: AlternativeId,
    pub criterion_id: CriterionId,
    pub value: u8,
}

impl From<&RatingEntry> for RatingView {
    fn from(entry: &RatingEntry) -> Self {
        Self {
            alternative_id: entry.alternative_id,
            criterion_id: entry.criterion_id,
            value: entry.value.value(),
        }
    }
}

impl From<Vec<RatingEntry>> for RatingsResponse {
    fn from(entries: Vec<RatingEntry>) -> Self {
        Self {
            data: entries.iter().map(RatingView::from).collect(),
        }
    }
}
