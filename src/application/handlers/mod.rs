//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

mod generate_schema;

pub use generate_schema::{GenerateSchemaCommand, GenerateSchemaHandler, GenerateSchemaResult};
