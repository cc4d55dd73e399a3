//! HTTP middleware for axum.
//!
//! - `auth` - Caller identity extractor

pub mod auth;

pub use auth::{AuthenticatedUser, AuthenticationRequired};
