//! Planning Module - Pure derivation of a detailed project schema.
//!
//! Every service here is stateless: it reads a `ProjectInput` and the static
//! reference tables and returns owned results. Nothing is cached between
//! runs, so concurrent callers need no coordination.
//!
//! # Components
//!
//! - `ComplexityAnalyzer` - Scores input into a `ComplexityTier`
//! - `TechnologyRecommender` - One technology per category
//! - `ArchitectureComposer` - Component graph from the project template
//! - `TimelineEstimator` - Five-phase delivery plan
//! - `CostEstimator` - Development, infrastructure and maintenance costs
//! - `Narrative` - Recommendations, risks and descriptive text
//! - `SchemaGenerator` - Orchestrates the above into a `DetailedSchema`
//!
//! # Pipeline
//!
//! ```text
//! input → complexity → technologies → architecture
//!                    ↘ timeline → costs ↘
//!                                       DetailedSchema → serialize
//! ```

mod architecture_composer;
mod complexity_analyzer;
mod cost_estimator;
mod narrative;
mod schema_assembler;
mod technology_recommender;
mod timeline_estimator;

pub use architecture_composer::{ArchitectureComponent, ArchitectureComposer};
pub use complexity_analyzer::{
    ComplexityAnalyzer, ScoreBreakdown, ARCHITECTURE_TERMS, SENSITIVE_TERMS,
};
pub use cost_estimator::{
    CostEstimate, CostEstimator, CURRENCY, HOURLY_RATE, MAINTENANCE_RATE_PERCENT,
    TEAM_SIZE_TENTHS,
};
pub use narrative::Narrative;
pub use schema_assembler::{
    deserialize, serialize, DetailedSchema, SchemaGenerator, CONFIDENCE_SCORE,
};
pub use technology_recommender::{
    SelectionSource, TechnologyRecommendation, TechnologyRecommender,
};
pub use timeline_estimator::{
    ProjectPhase, TimeEstimation, Timeline, TimelineEstimator, HOURS_PER_WEEK,
};

use crate::domain::foundation::{ComplexityTier, ProjectInput, SchemaError};

/// Classifies a project into a complexity tier.
pub fn analyze_complexity(input: &ProjectInput) -> ComplexityTier {
    ComplexityAnalyzer::analyze(input)
}

/// Recommends one technology per category using the built-in catalog.
pub fn recommend_technologies(
    input: &ProjectInput,
    tier: ComplexityTier,
) -> Result<Vec<TechnologyRecommendation>, SchemaError> {
    TechnologyRecommender::default().recommend(input, tier)
}

/// Generates a detailed schema using the built-in reference tables.
pub fn generate(input: &ProjectInput) -> Result<DetailedSchema, SchemaError> {
    SchemaGenerator::default().generate(input)
}
