//! Results HTTP adapter module.
//!
//! Provides the REST endpoint for ranked analysis results.

pub mod handlers;
pub mod routes;

pub use handlers::{ResultsApiError, ResultsAppState};
pub use routes::results_routes;
