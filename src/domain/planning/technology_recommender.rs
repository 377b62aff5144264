//! Technology Recommender - One technology per category, honoring explicit
//! preferences and falling back to a complexity-driven policy.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::catalog::{
    LearningCurve, MaintenanceCost, TechCategory, TechnologyCatalog, TechnologyEntry,
    TECHNOLOGY_CATALOG,
};
use crate::domain::foundation::{ComplexityTier, ProjectInput, SchemaError};

const ENTERPRISE_BACKEND_TAGS: &[&str] = &["enterprise", "high_performance"];
const RAPID_API_BACKEND_TAGS: &[&str] = &["api_development"];
const RELATIONAL_DATABASE_TAGS: &[&str] = &["acid_compliance", "complex_queries"];

/// Why a technology was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionSource {
    UserPreference,
    Automatic,
}

/// A selected technology for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnologyRecommendation {
    pub category: TechCategory,
    pub key: String,
    pub name: String,
    pub version: String,
    pub reason: String,
    pub alternatives: Vec<String>,
    pub learning_curve: LearningCurve,
    pub popularity_score: u8,
    pub maintenance_cost: MaintenanceCost,
    pub source: SelectionSource,
}

impl TechnologyRecommendation {
    fn from_entry(
        catalog: &TechnologyCatalog,
        entry: &TechnologyEntry,
        reason: String,
        source: SelectionSource,
    ) -> Self {
        Self {
            category: entry.category,
            key: entry.key.to_string(),
            name: entry.name.to_string(),
            version: entry.version.to_string(),
            reason,
            alternatives: catalog.keys_except(entry.category, entry.key),
            learning_curve: entry.learning_curve,
            popularity_score: entry.popularity_score,
            maintenance_cost: entry.maintenance_cost,
            source,
        }
    }
}

/// Selects technologies from a catalog.
pub struct TechnologyRecommender<'a> {
    catalog: &'a TechnologyCatalog,
}

impl Default for TechnologyRecommender<'static> {
    fn default() -> Self {
        Self::new(&TECHNOLOGY_CATALOG)
    }
}

impl<'a> TechnologyRecommender<'a> {
    pub fn new(catalog: &'a TechnologyCatalog) -> Self {
        Self { catalog }
    }

    /// Recommends exactly one technology per category, in the order
    /// frontend, backend, database.
    ///
    /// An explicit preference wins when it names a catalog key of its
    /// category. A preference the catalog does not know is logged and
    /// ignored; the automatic policy applies instead.
    pub fn recommend(
        &self,
        input: &ProjectInput,
        tier: ComplexityTier,
    ) -> Result<Vec<TechnologyRecommendation>, SchemaError> {
        TechCategory::all()
            .iter()
            .map(|category| {
                let preference = match category {
                    TechCategory::Frontend => input.frontend_preference.as_deref(),
                    TechCategory::Backend => input.backend_preference.as_deref(),
                    TechCategory::Database => input.database_preference.as_deref(),
                };
                self.recommend_category(*category, preference, tier)
            })
            .collect()
    }

    fn recommend_category(
        &self,
        category: TechCategory,
        preference: Option<&str>,
        tier: ComplexityTier,
    ) -> Result<TechnologyRecommendation, SchemaError> {
        if let Some(preferred) = preference {
            match self.catalog.find(category, preferred) {
                Some(entry) => {
                    debug!(category = %category, key = entry.key, "Using preferred technology");
                    let reason = format!("User preference - {}", entry.best_for.join(", "));
                    return Ok(TechnologyRecommendation::from_entry(
                        self.catalog,
                        entry,
                        reason,
                        SelectionSource::UserPreference,
                    ));
                }
                None => {
                    warn!(
                        category = %category,
                        preference = preferred,
                        "Unknown technology preference, falling back to automatic selection"
                    );
                }
            }
        }

        let (entry, reason) = self.automatic(category, tier)?;
        debug!(category = %category, key = entry.key, tier = %tier, "Selected technology");
        Ok(TechnologyRecommendation::from_entry(
            self.catalog,
            entry,
            reason.to_string(),
            SelectionSource::Automatic,
        ))
    }

    /// Complexity-driven default policy.
    ///
    /// | Category | Simple / Moderate | Complex | Enterprise |
    /// |----------|-------------------|---------|------------|
    /// | frontend | easiest learning curve | most popular | most popular |
    /// | backend | rapid API development | rapid API development | enterprise / high performance |
    /// | database | relational, ACID | relational, ACID | relational, ACID |
    fn automatic(
        &self,
        category: TechCategory,
        tier: ComplexityTier,
    ) -> Result<(&'a TechnologyEntry, &'static str), SchemaError> {
        let catalog = self.catalog;
        match category {
            TechCategory::Frontend if tier.is_demanding() => Ok((
                catalog.most_popular(category)?,
                "Rich ecosystem and strong support for complex projects",
            )),
            TechCategory::Frontend => Ok((
                catalog.easiest(category)?,
                "Gentle learning curve and fast delivery",
            )),
            TechCategory::Backend if tier == ComplexityTier::Enterprise => Ok((
                catalog.first_tagged(category, ENTERPRISE_BACKEND_TAGS)?,
                "Performance and robustness for enterprise workloads",
            )),
            TechCategory::Backend => Ok((
                catalog.first_tagged(category, RAPID_API_BACKEND_TAGS)?,
                "Rapid API development with a broad ecosystem",
            )),
            TechCategory::Database => Ok((
                catalog.first_tagged(category, RELATIONAL_DATABASE_TAGS)?,
                "Robust relational database with ACID guarantees and rich queries",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ProjectType, Scale};

    fn base() -> ProjectInput {
        ProjectInput::new(ProjectType::Api, Scale::Small)
    }

    fn keys(recs: &[TechnologyRecommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.key.as_str()).collect()
    }

    #[test]
    fn covers_each_category_in_order() {
        for tier in ComplexityTier::all() {
            let recs = TechnologyRecommender::default().recommend(&base(), *tier).unwrap();
            let categories: Vec<_> = recs.iter().map(|r| r.category).collect();
            assert_eq!(categories, TechCategory::all().to_vec());
        }
    }

    #[test]
    fn simple_tier_defaults() {
        let recs = TechnologyRecommender::default()
            .recommend(&base(), ComplexityTier::Simple)
            .unwrap();
        assert_eq!(keys(&recs), vec!["vue", "nodejs", "postgresql"]);
        assert!(recs.iter().all(|r| r.source == SelectionSource::Automatic));
    }

    #[test]
    fn complex_tier_uses_most_popular_frontend() {
        let recs = TechnologyRecommender::default()
            .recommend(&base(), ComplexityTier::Complex)
            .unwrap();
        assert_eq!(keys(&recs), vec!["react", "nodejs", "postgresql"]);
    }

    #[test]
    fn enterprise_tier_uses_enterprise_backend() {
        let recs = TechnologyRecommender::default()
            .recommend(&base(), ComplexityTier::Enterprise)
            .unwrap();
        assert_eq!(keys(&recs), vec!["react", "java", "postgresql"]);
    }

    #[test]
    fn preference_overrides_policy() {
        let input = base().with_frontend("NextJS").with_backend("python").with_database("mongodb");
        let recs = TechnologyRecommender::default()
            .recommend(&input, ComplexityTier::Enterprise)
            .unwrap();
        assert_eq!(keys(&recs), vec!["nextjs", "python", "mongodb"]);
        assert!(recs.iter().all(|r| r.source == SelectionSource::UserPreference));
        assert!(recs[0].reason.starts_with("User preference"));
    }

    #[test]
    fn preference_alternatives_are_other_keys() {
        let input = base().with_database("redis");
        let recs = TechnologyRecommender::default()
            .recommend(&input, ComplexityTier::Simple)
            .unwrap();
        assert_eq!(recs[2].alternatives, vec!["postgresql", "mongodb"]);
    }

    #[test]
    fn unknown_preference_falls_back_to_policy() {
        let input = base().with_frontend("angular").with_backend("cobol");
        let recs = TechnologyRecommender::default()
            .recommend(&input, ComplexityTier::Simple)
            .unwrap();
        assert_eq!(keys(&recs), vec!["vue", "nodejs", "postgresql"]);
        assert_eq!(recs[0].source, SelectionSource::Automatic);
    }

    #[test]
    fn preference_in_wrong_category_is_ignored() {
        let input = base().with_backend("postgresql");
        let recs = TechnologyRecommender::default()
            .recommend(&input, ComplexityTier::Enterprise)
            .unwrap();
        assert_eq!(recs[1].key, "java");
    }

    #[test]
    fn catalog_without_policy_target_is_configuration_error() {
        let entries: Vec<TechnologyEntry> = TECHNOLOGY_CATALOG
            .in_category(TechCategory::Frontend)
            .cloned()
            .collect();
        let catalog = TechnologyCatalog::new(entries);
        let err = TechnologyRecommender::new(&catalog)
            .recommend(&base(), ComplexityTier::Simple)
            .unwrap_err();
        assert!(matches!(err, SchemaError::Configuration { .. }));
    }
}
