//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, enums, and error types that form the
//! vocabulary of the schema engine.

mod complexity_tier;
mod errors;
mod project_input;
mod timestamp;

pub use complexity_tier::ComplexityTier;
pub use errors::{ErrorCode, SchemaError};
pub use project_input::{CustomProjectType, ProjectInput, ProjectType, RawProjectInput, Scale};
pub use timestamp::Timestamp;
