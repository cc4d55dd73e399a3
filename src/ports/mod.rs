//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Read Ports
//!
//! - `AlternativeReader` - Alternatives of an analysis, scoped to the caller
//! - `CriterionReader` - Weighted criteria of an analysis, scoped to the caller
//! - `RatingReader` - Rating cells of an analysis, scoped to the caller
//! - `AnalysisAccessChecker` - Ownership lookup returning an explicit outcome
//!
//! ## Write Ports
//!
//! - `RatingWriter` - Atomic, owner-checked rating upserts

mod analysis_access;
mod analysis_inputs;
mod rating_writer;

pub use analysis_access::{AnalysisAccess, AnalysisAccessChecker};
pub use analysis_inputs::{AlternativeReader, CriterionReader, RatingReader};
pub use rating_writer::RatingWriter;
