//! Analysis ownership check.
//!
//! The outcome is a value rather than an error so callers decide how
//! "missing" and "not yours" are reported.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AnalysisId, DomainError, UserId};

/// Result of looking up an analysis on behalf of a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisAccess {
    /// The analysis exists and belongs to the caller.
    Granted,
    /// No analysis with that id exists.
    NotFound,
    /// The analysis exists but belongs to someone else.
    Forbidden,
}

impl AnalysisAccess {
    pub fn is_granted(&self) -> bool {
        matches!(self, AnalysisAccess::Granted)
    }
}

/// Port for checking whether a caller may read an analysis.
#[async_trait]
pub trait AnalysisAccessChecker: Send + Sync {
    async fn check_access(
        &self,
        user_id: &UserId,
        analysis_id: &AnalysisId,
    ) -> Result<AnalysisAccess, DomainError>;
}
