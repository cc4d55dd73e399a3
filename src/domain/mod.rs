//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `scoring` - Weighted-sum scoring and ranking of alternatives

pub mod foundation;
pub mod scoring;
