//! Ratings HTTP adapter module.
//!
//! Provides the REST endpoint for batch rating upserts.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{RatingInput, RatingView, RatingsResponse, UpdateRatingsRequest};
pub use handlers::{RatingsApiError, RatingsAppState};
pub use routes::ratings_routes;
