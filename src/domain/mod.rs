//! Domain layer containing the schema derivation engine.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (input, tiers, timestamps, errors)
//! - `catalog` - Static technology catalog and project template table
//! - `planning` - Pure services deriving a detailed project schema

pub mod catalog;
pub mod foundation;
pub mod planning;
