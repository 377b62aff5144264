//! Project template table - default architecture shape and baseline timeline
//! per project type.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::ComponentKind;
use crate::domain::foundation::{ProjectType, SchemaError};

const TABLE: &str = "project_templates";

/// Key of the template used when a project type has no template of its own.
pub const FALLBACK_TEMPLATE: &str = "api";

/// One template record.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectTemplate {
    pub key: &'static str,
    pub name: &'static str,
    pub base_components: &'static [ComponentKind],
    pub required_features: &'static [&'static str],
    pub complexity_multiplier: f64,
    pub base_weeks: u32,
}

/// Serializable summary of the template a schema was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateSummary {
    pub key: String,
    pub name: String,
    pub base_weeks: u32,
    pub complexity_multiplier: f64,
    pub required_features: Vec<String>,
}

impl From<&ProjectTemplate> for TemplateSummary {
    fn from(template: &ProjectTemplate) -> Self {
        Self {
            key: template.key.to_string(),
            name: template.name.to_string(),
            base_weeks: template.base_weeks,
            complexity_multiplier: template.complexity_multiplier,
            required_features: template
                .required_features
                .iter()
                .map(|f| f.to_string())
                .collect(),
        }
    }
}

/// The process-wide template table.
pub static PROJECT_TEMPLATES: Lazy<TemplateTable> = Lazy::new(TemplateTable::builtin);

/// Read-only table of project templates.
#[derive(Debug, Clone)]
pub struct TemplateTable {
    templates: Vec<ProjectTemplate>,
}

impl TemplateTable {
    /// Creates a table from explicit templates.
    pub fn new(templates: Vec<ProjectTemplate>) -> Self {
        Self { templates }
    }

    /// The built-in template table shipped with the engine.
    pub fn builtin() -> Self {
        use ComponentKind::*;

        Self::new(vec![
            ProjectTemplate {
                key: "ecommerce",
                name: "E-commerce Platform",
                base_components: &[WebFrontend, ApiBackend, Database, PaymentGateway, Cdn],
                required_features: &["user_auth", "product_catalog", "cart", "checkout", "admin_panel"],
                complexity_multiplier: 1.3,
                base_weeks: 16,
            },
            ProjectTemplate {
                key: "saas",
                name: "SaaS Application",
                base_components: &[WebFrontend, ApiBackend, Database, AuthService, Billing],
                required_features: &["multi_tenant", "subscription", "analytics", "api_access"],
                complexity_multiplier: 1.5,
                base_weeks: 20,
            },
            ProjectTemplate {
                key: "mobile",
                name: "Mobile Application",
                base_components: &[MobileApp, ApiBackend, Database, PushNotifications],
                required_features: &["offline_sync", "real_time", "user_auth"],
                complexity_multiplier: 1.2,
                base_weeks: 14,
            },
            ProjectTemplate {
                key: "api",
                name: "REST API",
                base_components: &[ApiBackend, Database, Documentation, Monitoring],
                required_features: &["versioning", "rate_limiting", "auth", "caching"],
                complexity_multiplier: 0.8,
                base_weeks: 8,
            },
            ProjectTemplate {
                key: "dashboard",
                name: "Analytics Dashboard",
                base_components: &[WebFrontend, ApiBackend, Database, AnalyticsEngine],
                required_features: &["real_time_data", "charts", "export", "user_management"],
                complexity_multiplier: 1.1,
                base_weeks: 12,
            },
        ])
    }

    /// Looks up a template by key.
    pub fn get(&self, key: &str) -> Option<&ProjectTemplate> {
        self.templates.iter().find(|t| t.key == key)
    }

    /// Resolves the template for a project type, falling back to `api`.
    pub fn resolve(&self, project_type: &ProjectType) -> Result<&ProjectTemplate, SchemaError> {
        match self.get(project_type.as_str()) {
            Some(template) => Ok(template),
            None => self.get(FALLBACK_TEMPLATE).ok_or_else(|| {
                SchemaError::configuration(TABLE, "fallback template 'api' is missing")
            }),
        }
    }

    /// Checks the fallback exists and every template is usable.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.get(FALLBACK_TEMPLATE).is_none() {
            return Err(SchemaError::configuration(
                TABLE,
                "fallback template 'api' is missing",
            ));
        }

        for template in &self.templates {
            if template.base_weeks == 0 {
                return Err(SchemaError::configuration(
                    TABLE,
                    format!("template '{}' has zero baseline weeks", template.key),
                ));
            }
            if template.base_components.is_empty() {
                return Err(SchemaError::configuration(
                    TABLE,
                    format!("template '{}' has no base components", template.key),
                ));
            }
            if template.complexity_multiplier <= 0.0 {
                return Err(SchemaError::configuration(
                    TABLE,
                    format!("template '{}' has a non-positive multiplier", template.key),
                ));
            }
        }

        Ok(())
    }
}
