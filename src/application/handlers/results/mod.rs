//! Results query handlers.
//!
//! Read-only handlers that compute ranked results for an analysis.

mod calculate_results;

pub use calculate_results::{
    CalculateResultsHandler, CalculateResultsQuery, CalculateResultsResult, ResultsError,
};
