//! HTTP routes for ratings endpoints.

use axum::routing::put;
use axum::Router;

use super::handlers::{update_ratings, RatingsAppState};

/// Creates the ratings router with all routes.
pub fn ratings_routes(state: RatingsAppState) -> Router {
    Router::new()
        // PUT /api/analyses/:analysis_id/ratings
        .route("/api/analyses/:analysis_id/ratings", put(update_ratings))
        .with_state(state)
}
