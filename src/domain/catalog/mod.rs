//! Catalog Module - Static reference tables.
//!
//! Both tables are built once on first access and shared by `&'static`
//! reference; nothing in the engine mutates them.
//!
//! # Components
//!
//! - `TechnologyCatalog` - Candidate technologies per category
//! - `TemplateTable` - Architecture shape and baseline weeks per project type
//! - `ComponentKind` - Fixed traits of every architecture node type

mod components;
mod technologies;
mod templates;

pub use components::ComponentKind;
pub use technologies::{
    LearningCurve, MaintenanceCost, TechCategory, TechnologyCatalog, TechnologyEntry,
    TECHNOLOGY_CATALOG,
};
pub use templates::{
    ProjectTemplate, TemplateSummary, TemplateTable, FALLBACK_TEMPLATE, PROJECT_TEMPLATES,
};

use crate::domain::foundation::SchemaError;

/// Validates both built-in tables.
pub fn validate_reference_tables() -> Result<(), SchemaError> {
    TECHNOLOGY_CATALOG.validate()?;
    PROJECT_TEMPLATES.validate()?;
    Ok(())
}
