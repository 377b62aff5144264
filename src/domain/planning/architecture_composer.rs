//! Architecture Composer - Builds the component graph for a project.

use serde::{Deserialize, Serialize};

use super::TechnologyRecommendation;
use crate::domain::catalog::{ComponentKind, TechCategory, TemplateTable, PROJECT_TEMPLATES};
use crate::domain::foundation::{ProjectInput, ProjectType, SchemaError};

/// One node of the derived architecture graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchitectureComponent {
    pub id: ComponentKind,
    pub name: String,
    #[serde(rename = "type")]
    pub component_type: String,
    pub description: String,
    pub technologies: Vec<String>,
    /// Outbound edges, by component id.
    pub connections: Vec<ComponentKind>,
    pub scalability: String,
    /// 1-10, fixed per component kind.
    pub estimated_complexity: u8,
}

/// Composes architecture graphs from the template table.
pub struct ArchitectureComposer<'a> {
    templates: &'a TemplateTable,
}

impl Default for ArchitectureComposer<'static> {
    fn default() -> Self {
        Self::new(&PROJECT_TEMPLATES)
    }
}

impl<'a> ArchitectureComposer<'a> {
    pub fn new(templates: &'a TemplateTable) -> Self {
        Self { templates }
    }

    /// Builds the component list for a project.
    ///
    /// Order: the template's core components, then a cache for medium and
    /// large projects, then type-specific integrations (payment gateway for
    /// e-commerce, push notifications for mobile). Each kind appears once,
    /// and connections only reference kinds present in the result.
    pub fn compose(
        &self,
        input: &ProjectInput,
        recommendations: &[TechnologyRecommendation],
    ) -> Result<Vec<ArchitectureComponent>, SchemaError> {
        let template = self.templates.resolve(&input.project_type)?;
        let kinds = Self::component_kinds(template.base_components, input);

        let components = kinds
            .iter()
            .map(|kind| ArchitectureComponent {
                id: *kind,
                name: kind.display_name().to_string(),
                component_type: kind.type_tag().to_string(),
                description: kind.description().to_string(),
                technologies: Self::technologies(*kind, recommendations),
                connections: kind
                    .logical_connections()
                    .iter()
                    .filter(|target| kinds.contains(*target))
                    .copied()
                    .collect(),
                scalability: kind.scalability().to_string(),
                estimated_complexity: kind.complexity_weight(),
            })
            .collect();

        Ok(components)
    }

    fn component_kinds(base: &[ComponentKind], input: &ProjectInput) -> Vec<ComponentKind> {
        let mut kinds: Vec<ComponentKind> = Vec::new();
        let mut push = |kind: ComponentKind| {
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        };

        base.iter().filter(|k| !k.is_external()).for_each(|k| push(*k));

        if input.scale.needs_cache() {
            push(ComponentKind::Cache);
        }

        base.iter().filter(|k| k.is_external()).for_each(|k| push(*k));

        match input.project_type {
            ProjectType::Ecommerce => push(ComponentKind::PaymentGateway),
            ProjectType::Mobile => push(ComponentKind::PushNotifications),
            _ => {}
        }

        kinds
    }

    fn technologies(kind: ComponentKind, recommendations: &[TechnologyRecommendation]) -> Vec<String> {
        let selected = |category: TechCategory| recommendations.iter().find(|r| r.category == category);

        match kind {
            ComponentKind::WebFrontend => match selected(TechCategory::Frontend) {
                Some(rec) => vec![rec.name.clone()],
                None => defaults(kind),
            },
            ComponentKind::ApiBackend => match selected(TechCategory::Backend) {
                Some(rec) => vec![rec.name.clone(), backend_framework(&rec.key).to_string()],
                None => defaults(kind),
            },
            ComponentKind::Database => match selected(TechCategory::Database) {
                Some(rec) => vec![rec.name.clone()],
                None => defaults(kind),
            },
            _ => defaults(kind),
        }
    }
}

fn defaults(kind: ComponentKind) -> Vec<String> {
    kind.default_technologies()
        .iter()
        .map(|t| t.to_string())
        .collect()
}

/// Conventional web framework for a backend catalog key.
fn backend_framework(key: &str) -> &'static str {
    match key {
        "python" => "FastAPI",
        "java" => "Spring Boot",
        _ => "Express/Fastify",
    }
}
