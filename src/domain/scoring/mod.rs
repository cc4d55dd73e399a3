//! Scoring Module - Weighted-sum scoring and ranking of alternatives.
//!
//! # Components
//!
//! - `WeightValidator` - Criterion weights must sum to exactly 100
//! - `WeightNormalizer` - Integer weights to fractional shares
//! - `RatingMatrix` - Composite-key rating index and completeness check
//! - `ContributionCalculator` - Per-criterion weighted scores and totals
//! - `Ranker` - Deterministic ordering with dense 1-based ranks
//! - `ResultsCalculator` - Runs the stages above in order
//!
//! Everything here is synchronous and pure. Fetching the inputs is the
//! application layer's job.

mod calculator;
mod contributions;
mod errors;
mod inputs;
mod ranker;
mod rating_matrix;
mod results;
mod weights;

pub use calculator::ResultsCalculator;
pub use contributions::ContributionCalculator;
pub use errors::ScoringError;
pub use inputs::{Alternative, Criterion, RatingEntry, ScoringInputs, ScoringInputsBuilder};
pub use ranker::Ranker;
pub use rating_matrix::RatingMatrix;
pub use results::{AlternativeSummary, Contribution, CriterionSummary, ResultItem, ResultsSnapshot};
pub use weights::{
    NormalizedWeights, WeightNormalizer, WeightSum, WeightValidator, REQUIRED_WEIGHT_SUM,
};
