//! Decision Matrix - Multi-criteria decision analysis service
//!
//! Scores alternatives against weighted criteria, validates that the matrix
//! is complete, and ranks the alternatives by weighted total.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
