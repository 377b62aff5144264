//! DevPlan Schema - Deterministic derivation of technical project plans
//!
//! This crate turns a short project description (type, scale, requirements,
//! optional technology preferences) into a detailed technical schema:
//! complexity tier, technology stack, architecture graph, five-phase
//! timeline, cost figures and advisory text.

pub mod application;
pub mod config;
pub mod domain;
pub mod telemetry;

pub use application::{GenerateSchemaCommand, GenerateSchemaHandler, GenerateSchemaResult};
pub use domain::foundation::{
    ComplexityTier, ProjectInput, ProjectType, RawProjectInput, Scale, SchemaError, Timestamp,
};
pub use domain::planning::{
    analyze_complexity, generate, recommend_technologies, serialize, DetailedSchema,
    SchemaGenerator, TechnologyRecommendation,
};
