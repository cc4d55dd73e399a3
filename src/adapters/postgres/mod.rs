//! PostgreSQL adapters - Database implementations for the ports.
//!
//! - `PostgresAnalysisAccessChecker` - Ownership lookup on `analyses`
//! - `PostgresAlternativeReader` - Owner-scoped alternatives
//! - `PostgresCriterionReader` - Owner-scoped criteria with weight validation
//! - `PostgresRatingReader` - Owner-scoped rating cells with range validation
//! - `PostgresRatingWriter` - Transactional batch upsert of rating cells

mod alternative_reader;
mod analysis_access_checker;
mod criterion_reader;
mod rating_reader;
mod rating_writer;

pub use alternative_reader::PostgresAlternativeReader;
pub use analysis_access_checker::PostgresAnalysisAccessChecker;
pub use criterion_reader::PostgresCriterionReader;
pub use rating_reader::PostgresRatingReader;
pub use rating_writer::PostgresRatingWriter;
