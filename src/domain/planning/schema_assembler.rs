//! Schema Assembler - Orchestrates the planning services into a DetailedSchema.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, info};

use super::{
    ArchitectureComponent, ArchitectureComposer, ComplexityAnalyzer, CostEstimate, CostEstimator,
    Narrative, ProjectPhase, TechnologyRecommendation, TechnologyRecommender, TimeEstimation,
    TimelineEstimator, HOURS_PER_WEEK,
};
use crate::domain::catalog::{
    TechnologyCatalog, TemplateSummary, TemplateTable, PROJECT_TEMPLATES, TECHNOLOGY_CATALOG,
};
use crate::domain::foundation::{ComplexityTier, ProjectInput, ProjectType, SchemaError, Timestamp};

/// Fixed confidence attached to every generated schema.
pub const CONFIDENCE_SCORE: f64 = 0.85;

const PROJECT_SKILLS: &[&str] = &["Full-stack development", "DevOps", "UI/UX"];

/// Complete technical schema for one project.
///
/// Owned by the caller; the generator keeps no reference to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedSchema {
    pub project_name: String,
    pub project_type: ProjectType,
    pub description: String,
    pub complexity: ComplexityTier,
    pub complexity_score: u32,
    pub template: TemplateSummary,

    pub architecture_components: Vec<ArchitectureComponent>,
    pub system_architecture: String,
    pub data_flow: String,

    pub tech_recommendations: Vec<TechnologyRecommendation>,
    /// Category token → selected technology name.
    pub tech_stack_summary: BTreeMap<String, String>,

    pub project_phases: Vec<ProjectPhase>,
    /// `floor(template weeks × tier multiplier)`; basis of costs and effort.
    pub baseline_weeks: u32,
    /// Sum of the phase durations.
    pub total_duration_weeks: u32,

    pub time_estimation: TimeEstimation,
    pub cost_estimation: CostEstimate,

    pub generated_at: Timestamp,
    pub confidence_score: f64,
    pub recommendations: Vec<String>,
    pub risks: Vec<String>,
    pub success_factors: Vec<String>,
}

/// Derives detailed schemas from project input.
///
/// Holds only shared references to the read-only reference tables, so one
/// generator can serve any number of concurrent callers.
pub struct SchemaGenerator<'a> {
    catalog: &'a TechnologyCatalog,
    templates: &'a TemplateTable,
}

impl Default for SchemaGenerator<'static> {
    fn default() -> Self {
        Self::new(&TECHNOLOGY_CATALOG, &PROJECT_TEMPLATES)
    }
}

impl<'a> SchemaGenerator<'a> {
    pub fn new(catalog: &'a TechnologyCatalog, templates: &'a TemplateTable) -> Self {
        Self { catalog, templates }
    }

    /// Generates a schema stamped with the current time.
    pub fn generate(&self, input: &ProjectInput) -> Result<DetailedSchema, SchemaError> {
        self.generate_at(input, Timestamp::now())
    }

    /// Generates a schema with an explicit generation timestamp.
    ///
    /// Output is fully determined by `input` and `generated_at`.
    pub fn generate_at(
        &self,
        input: &ProjectInput,
        generated_at: Timestamp,
    ) -> Result<DetailedSchema, SchemaError> {
        info!(project_type = %input.project_type, scale = %input.scale, "Generating detailed schema");

        let complexity_score = ComplexityAnalyzer::score(input);
        let complexity = ComplexityTier::from_score(complexity_score);
        debug!(score = complexity_score, tier = %complexity, "Complexity analyzed");

        let tech_recommendations = TechnologyRecommender::new(self.catalog).recommend(input, complexity)?;

        let architecture_components =
            ArchitectureComposer::new(self.templates).compose(input, &tech_recommendations)?;
        debug!(components = architecture_components.len(), "Architecture composed");

        let timeline = TimelineEstimator::new(self.templates).estimate(input, complexity)?;
        debug!(
            total_weeks = timeline.total_weeks,
            phase_sum_weeks = timeline.phase_sum_weeks,
            "Timeline estimated"
        );

        let cost_estimation = CostEstimator::estimate(input, complexity, timeline.total_weeks);
        debug!(first_year = cost_estimation.total_first_year, "Costs estimated");

        let template = TemplateSummary::from(self.templates.resolve(&input.project_type)?);

        let tech_stack_summary = tech_recommendations
            .iter()
            .map(|rec| (rec.category.as_str().to_string(), rec.name.clone()))
            .collect();

        let schema = DetailedSchema {
            project_name: format!("{} Project", input.project_type.title()),
            project_type: input.project_type.clone(),
            description: input.description.clone(),
            complexity,
            complexity_score,
            template,
            system_architecture: Narrative::architecture_description(&architecture_components),
            data_flow: Narrative::data_flow_description(),
            architecture_components,
            tech_recommendations,
            tech_stack_summary,
            project_phases: timeline.phases,
            baseline_weeks: timeline.total_weeks,
            total_duration_weeks: timeline.phase_sum_weeks,
            time_estimation: project_estimate(timeline.total_weeks),
            cost_estimation,
            generated_at,
            confidence_score: CONFIDENCE_SCORE,
            recommendations: Narrative::recommendations(complexity, &input.project_type),
            risks: Narrative::risks(complexity, &input.project_type),
            success_factors: Narrative::success_factors(),
        };

        info!(complexity = %schema.complexity, weeks = schema.baseline_weeks, "Schema generated");
        Ok(schema)
    }
}

/// Whole-project effort: 2.5 people on average, 2 to 3 at the extremes.
fn project_estimate(total_weeks: u32) -> TimeEstimation {
    let person_weeks_hours = total_weeks * HOURS_PER_WEEK;
    TimeEstimation {
        task_name: "Complete project".to_string(),
        estimated_hours: person_weeks_hours * 5 / 2,
        min_hours: person_weeks_hours * 2,
        max_hours: person_weeks_hours * 3,
        dependencies: Vec::new(),
        critical_path: true,
        required_skills: PROJECT_SKILLS.iter().map(|s| s.to_string()).collect(),
    }
}

/// Lowers a schema into a tree of primitive values.
///
/// Tiers, categories and component ids become their lowercase tokens and
/// timestamps become ISO-8601 strings. The tree contains only objects,
/// arrays, strings, numbers and booleans.
pub fn serialize(schema: &DetailedSchema) -> Result<Value, SchemaError> {
    Ok(serde_json::to_value(schema)?)
}

/// Rebuilds a schema from a primitive tree produced by [`serialize`].
pub fn deserialize(value: Value) -> Result<DetailedSchema, SchemaError> {
    Ok(serde_json::from_value(value)?)
}
