//! Application handlers.
//!
//! Query and command handlers that orchestrate domain operations.

pub mod ratings;
pub mod results;

pub use ratings::{
    UpdateRatingsCommand, UpdateRatingsError, UpdateRatingsHandler, UpdateRatingsResult,
};
pub use results::{
    CalculateResultsHandler, CalculateResultsQuery, CalculateResultsResult, ResultsError,
};
