//! Narrative - Static advisory text attached to a schema.

use std::fmt::Write;

use super::ArchitectureComponent;
use crate::domain::foundation::{ComplexityTier, ProjectType};

const BASE_RECOMMENDATIONS: &[&str] = &[
    "Start with an MVP (Minimum Viable Product) to validate the concept",
    "Adopt a modular architecture to ease maintenance",
    "Set up monitoring from day one",
    "Plan a backup and recovery strategy",
    "Document the API and keep the documentation current",
];

const DEMANDING_RECOMMENDATIONS: &[&str] = &[
    "Consider a microservices architecture for scalability",
    "Implement a robust CI/CD pipeline",
    "Plan comprehensive automated tests (unit, integration, E2E)",
    "Put monitoring and alerting in place",
];

const BASE_RISKS: &[&str] = &[
    "Budget overrun if requirements change",
    "Extended timelines if unforeseen technical problems arise",
    "Performance problems if user load is underestimated",
];

const ENTERPRISE_RISKS: &[&str] = &[
    "Integration complexity with existing systems",
    "Data migration challenges",
    "Need for advanced technical expertise",
];

const SUCCESS_FACTORS: &[&str] = &[
    "Experienced development team",
    "Clear, validated requirements",
    "Regular user testing",
    "Continuous communication with stakeholders",
    "Agile approach with iterative deliveries",
    "Continuous monitoring and feedback",
    "Technical documentation kept up to date",
];

/// Builds the advisory text of a schema.
pub struct Narrative;

impl Narrative {
    /// General recommendations; extended for demanding tiers and for
    /// payment or multi-tenant project types.
    pub fn recommendations(tier: ComplexityTier, project_type: &ProjectType) -> Vec<String> {
        let mut items = to_strings(BASE_RECOMMENDATIONS);

        if tier.is_demanding() {
            items.extend(to_strings(DEMANDING_RECOMMENDATIONS));
        }

        match project_type {
            ProjectType::Ecommerce => {
                items.push("Delegate card handling to a PCI DSS certified payment provider".into())
            }
            ProjectType::Saas => {
                items.push("Enforce tenant isolation at the data access layer".into())
            }
            _ => {}
        }

        items
    }

    /// Project risks; extended for enterprise tier and for e-commerce / SaaS.
    pub fn risks(tier: ComplexityTier, project_type: &ProjectType) -> Vec<String> {
        let mut items = to_strings(BASE_RISKS);

        if tier == ComplexityTier::Enterprise {
            items.extend(to_strings(ENTERPRISE_RISKS));
        }

        match project_type {
            ProjectType::Ecommerce => items.push("PCI DSS compliance for payment processing".into()),
            ProjectType::Saas => items.push("Multi-tenant scalability challenges".into()),
            _ => {}
        }

        items
    }

    pub fn success_factors() -> Vec<String> {
        to_strings(SUCCESS_FACTORS)
    }

    /// One paragraph per component.
    pub fn architecture_description(components: &[ArchitectureComponent]) -> String {
        let mut text = String::from("Recommended system architecture:\n\n");
        for component in components {
            // Writing to a String cannot fail.
            let _ = write!(
                text,
                "• **{}** ({})\n  - {}\n  - Technologies: {}\n  - Scalability: {}\n\n",
                component.name,
                component.component_type,
                component.description,
                component.technologies.join(", "),
                component.scalability,
            );
        }
        text
    }

    pub fn data_flow_description() -> String {
        "Main data flow:\n\
         \n\
         1. **User** → Frontend interface\n\
         2. **Frontend** → API Backend (REST/GraphQL)\n\
         3. **API Backend** → Cache Layer (when present)\n\
         4. **API Backend** → Database\n\
         5. **External services** ↔ API Backend (authentication, payment, etc.)\n\
         \n\
         Data is encrypted in transit (HTTPS/TLS) and at rest (database encryption)."
            .to_string()
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::ComponentKind;

    #[test]
    fn base_recommendations_for_simple_api() {
        let items = Narrative::recommendations(ComplexityTier::Simple, &ProjectType::Api);
        assert_eq!(items.len(), 5);
    }

    #[test]
    fn demanding_tiers_extend_recommendations() {
        let complex = Narrative::recommendations(ComplexityTier::Complex, &ProjectType::Api);
        let enterprise = Narrative::recommendations(ComplexityTier::Enterprise, &ProjectType::Api);
        assert_eq!(complex.len(), 9);
        assert_eq!(enterprise.len(), 9);
    }

    #[test]
    fn ecommerce_adds_payment_recommendation() {
        let items = Narrative::recommendations(ComplexityTier::Moderate, &ProjectType::Ecommerce);
        assert_eq!(items.len(), 6);
        assert!(items.last().unwrap().contains("PCI DSS"));
    }

    #[test]
    fn enterprise_and_type_risks_stack() {
        let risks = Narrative::risks(ComplexityTier::Enterprise, &ProjectType::Saas);
        assert_eq!(risks.len(), 3 + 3 + 1);
        assert!(risks.iter().any(|r| r.contains("Multi-tenant")));
    }

    #[test]
    fn complex_tier_has_only_base_risks() {
        let risks = Narrative::risks(ComplexityTier::Complex, &ProjectType::Mobile);
        assert_eq!(risks.len(), 3);
    }

    #[test]
    fn success_factors_are_fixed() {
        assert_eq!(Narrative::success_factors().len(), 7);
    }

    #[test]
    fn architecture_description_mentions_each_component() {
        let components = vec![ArchitectureComponent {
            id: ComponentKind::Cache,
            name: "Cache Layer".into(),
            component_type: "cache".into(),
            description: "In-memory cache".into(),
            technologies: vec!["Redis".into()],
            connections: vec![],
            scalability: "Redis Cluster".into(),
            estimated_complexity: 4,
        }];
        let text = Narrative::architecture_description(&components);
        assert!(text.contains("**Cache Layer** (cache)"));
        assert!(text.contains("Technologies: Redis"));
        assert!(text.contains("Scalability: Redis Cluster"));
    }

    #[test]
    fn data_flow_is_static() {
        assert!(Narrative::data_flow_description().starts_with("Main data flow:"));
    }
}
