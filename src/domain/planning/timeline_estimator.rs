//! Timeline Estimator - Total duration and the five-phase delivery plan.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{TemplateTable, PROJECT_TEMPLATES};
use crate::domain::foundation::{ComplexityTier, ProjectInput, SchemaError};

/// Working hours in a week, per person.
pub const HOURS_PER_WEEK: u32 = 40;

/// Effort estimate for a task or phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEstimation {
    pub task_name: String,
    pub estimated_hours: u32,
    pub min_hours: u32,
    pub max_hours: u32,
    pub dependencies: Vec<String>,
    pub critical_path: bool,
    pub required_skills: Vec<String>,
}

/// One stage of the delivery plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPhase {
    pub name: String,
    pub description: String,
    pub duration_weeks: u32,
    pub tasks: Vec<String>,
    pub deliverables: Vec<String>,
    /// Name of the preceding phase; empty for the first phase.
    pub dependencies: Vec<String>,
    pub team_size: u32,
    pub time_estimations: Vec<TimeEstimation>,
}

/// Derived delivery plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub phases: Vec<ProjectPhase>,
    /// `floor(template weeks × tier multiplier)`; drives phase sizing and costs.
    pub total_weeks: u32,
    /// Sum of the phase durations. Phase minimums can push it above `total_weeks`.
    pub phase_sum_weeks: u32,
}

struct PhaseDefinition {
    name: &'static str,
    description: &'static str,
    divisor: u32,
    minimum_weeks: u32,
    team_size: u32,
    tasks: &'static [&'static str],
    deliverables: &'static [&'static str],
    skills: &'static [&'static str],
}

/// The five phases, in delivery order.
const PHASES: [PhaseDefinition; 5] = [
    PhaseDefinition {
        name: "Planning & Setup",
        description: "Requirements analysis, environment setup, detailed architecture",
        divisor: 8,
        minimum_weeks: 1,
        team_size: 2,
        tasks: &[
            "Requirements analysis",
            "Detailed system architecture",
            "Development environment setup",
            "CI/CD configuration",
            "Database setup",
        ],
        deliverables: &[
            "Architecture document",
            "Development environment",
            "Configured repository",
        ],
        skills: &["Software architecture", "DevOps"],
    },
    PhaseDefinition {
        name: "Backend Development",
        description: "API, database and business logic development",
        divisor: 3,
        minimum_weeks: 2,
        team_size: 2,
        tasks: &[
            "Data models",
            "API endpoints",
            "Authentication",
            "Business logic",
            "Unit tests",
        ],
        deliverables: &["Working API", "API documentation", "Backend tests"],
        skills: &["Backend development", "Database design"],
    },
    PhaseDefinition {
        name: "Frontend Development",
        description: "User interface and API integration",
        divisor: 3,
        minimum_weeks: 2,
        team_size: 2,
        tasks: &[
            "User interface",
            "API integration",
            "State management",
            "Responsive design",
            "Frontend tests",
        ],
        deliverables: &[
            "Complete user interface",
            "Responsive application",
            "Frontend tests",
        ],
        skills: &["Frontend development", "UI/UX"],
    },
    PhaseDefinition {
        name: "Integration & Testing",
        description: "Integration testing, optimization, deployment preparation",
        divisor: 6,
        minimum_weeks: 1,
        team_size: 3,
        tasks: &[
            "Integration tests",
            "End-to-end tests",
            "Performance optimization",
            "Security review",
            "Deployment preparation",
        ],
        deliverables: &["Tested application", "Security report", "Deployment guide"],
        skills: &["QA automation", "Security"],
    },
    PhaseDefinition {
        name: "Deployment & Launch",
        description: "Production deployment, monitoring, documentation",
        divisor: 10,
        minimum_weeks: 1,
        team_size: 2,
        tasks: &[
            "Production deployment",
            "Monitoring configuration",
            "User documentation",
            "Team training",
            "Go-live",
        ],
        deliverables: &[
            "Application in production",
            "Active monitoring",
            "Complete documentation",
        ],
        skills: &["DevOps", "Technical writing"],
    },
];

/// Derives timelines from the template table.
pub struct TimelineEstimator<'a> {
    templates: &'a TemplateTable,
}

impl Default for TimelineEstimator<'static> {
    fn default() -> Self {
        Self::new(&PROJECT_TEMPLATES)
    }
}

impl<'a> TimelineEstimator<'a> {
    pub fn new(templates: &'a TemplateTable) -> Self {
        Self { templates }
    }

    /// Tier multiplier applied to template weeks, in tenths.
    ///
    /// Simple 0.7, Moderate 1.0, Complex 1.3, Enterprise 1.6.
    pub fn multiplier_tenths(tier: ComplexityTier) -> u32 {
        match tier {
            ComplexityTier::Simple => 7,
            ComplexityTier::Moderate => 10,
            ComplexityTier::Complex => 13,
            ComplexityTier::Enterprise => 16,
        }
    }

    /// `floor(base_weeks × multiplier)`, computed without floating point.
    pub fn total_weeks(base_weeks: u32, tier: ComplexityTier) -> u32 {
        base_weeks * Self::multiplier_tenths(tier) / 10
    }

    /// Builds the five-phase plan.
    ///
    /// Each phase lasts `max(minimum, baseline // divisor)` weeks with
    /// divisors 8, 3, 3, 6, 10 and minimums 1, 2, 2, 1, 1. Every phase
    /// depends on the one before it.
    pub fn estimate(&self, input: &ProjectInput, tier: ComplexityTier) -> Result<Timeline, SchemaError> {
        let template = self.templates.resolve(&input.project_type)?;
        let total_weeks = Self::total_weeks(template.base_weeks, tier);

        let mut previous: Option<&'static str> = None;
        let phases: Vec<ProjectPhase> = PHASES
            .iter()
            .map(|def| {
                let duration_weeks = (total_weeks / def.divisor).max(def.minimum_weeks);
                let dependencies: Vec<String> = previous.iter().map(|p| p.to_string()).collect();
                previous = Some(def.name);

                ProjectPhase {
                    name: def.name.to_string(),
                    description: def.description.to_string(),
                    duration_weeks,
                    tasks: to_strings(def.tasks),
                    deliverables: to_strings(def.deliverables),
                    time_estimations: vec![phase_estimate(def, duration_weeks, &dependencies)],
                    dependencies,
                    team_size: def.team_size,
                }
            })
            .collect();

        let phase_sum_weeks = phases.iter().map(|p| p.duration_weeks).sum();

        Ok(Timeline {
            phases,
            total_weeks,
            phase_sum_weeks,
        })
    }
}

fn phase_estimate(def: &PhaseDefinition, weeks: u32, dependencies: &[String]) -> TimeEstimation {
    let hours = weeks * HOURS_PER_WEEK * def.team_size;
    TimeEstimation {
        task_name: def.name.to_string(),
        estimated_hours: hours,
        min_hours: hours * 4 / 5,
        max_hours: hours * 6 / 5,
        dependencies: dependencies.to_vec(),
        critical_path: true,
        required_skills: to_strings(def.skills),
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
