//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum REST surface
//! - `memory` - In-memory store for tests and local runs
//! - `postgres` - sqlx readers over PostgreSQL

pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::InMemoryAnalysisStore;
