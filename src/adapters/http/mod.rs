//! HTTP adapters - REST API implementations.

pub mod dto;
pub mod middleware;
pub mod ratings;
pub mod results;

pub use dto::ErrorResponse;
pub use middleware::AuthenticatedUser;
pub use ratings::{ratings_routes, RatingsAppState};
pub use results::{results_routes, ResultsAppState};
