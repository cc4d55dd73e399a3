//! HTTP routes for results endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_results, health, ResultsAppState};

/// Creates the results router with all routes.
pub fn results_routes(state: ResultsAppState) -> Router {
    Router::new()
        // GET /api/analyses/:analysis_id/results
        .route("/api/analyses/:analysis_id/results", get(get_results))
        .route("/health", get(health))
        .with_state(state)
}
