//! Application layer - Queries, Commands, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    CalculateResultsHandler, CalculateResultsQuery, CalculateResultsResult, ResultsError,
    UpdateRatingsCommand, UpdateRatingsError, UpdateRatingsHandler, UpdateRatingsResult,
};
