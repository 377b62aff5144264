//! Application layer - Commands and Handlers.
//!
//! This layer accepts raw caller input, drives the domain engine and hands
//! back transport-ready output.

pub mod handlers;

pub use handlers::{GenerateSchemaCommand, GenerateSchemaHandler, GenerateSchemaResult};
