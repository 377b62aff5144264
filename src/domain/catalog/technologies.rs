//! Technology catalog - candidate technologies per category.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::SchemaError;

const TABLE: &str = "technology_catalog";

/// Technology category covered by a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TechCategory {
    Frontend,
    Backend,
    Database,
}

impl TechCategory {
    /// Returns all categories in recommendation order.
    pub fn all() -> &'static [TechCategory] {
        &[
            TechCategory::Frontend,
            TechCategory::Backend,
            TechCategory::Database,
        ]
    }

    /// Returns the lowercase token for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            TechCategory::Frontend => "frontend",
            TechCategory::Backend => "backend",
            TechCategory::Database => "database",
        }
    }
}

impl fmt::Display for TechCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How hard a technology is to pick up. Ordered easiest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningCurve {
    Easy,
    Moderate,
    Difficult,
}

/// Relative cost of keeping a technology running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceCost {
    Low,
    Medium,
    High,
}

/// One catalog record. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechnologyEntry {
    pub key: &'static str,
    pub category: TechCategory,
    pub name: &'static str,
    pub version: &'static str,
    pub learning_curve: LearningCurve,
    /// 1-10
    pub popularity_score: u8,
    pub maintenance_cost: MaintenanceCost,
    pub best_for: &'static [&'static str],
}

impl TechnologyEntry {
    /// True when the entry carries the given best-for tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.best_for.contains(&tag)
    }
}

/// The process-wide technology catalog.
pub static TECHNOLOGY_CATALOG: Lazy<TechnologyCatalog> = Lazy::new(TechnologyCatalog::builtin);

/// Read-only table of technologies, kept in declaration order.
///
/// Declaration order is the tie-breaker for every selection helper.
#[derive(Debug, Clone)]
pub struct TechnologyCatalog {
    entries: Vec<TechnologyEntry>,
}

impl TechnologyCatalog {
    /// Creates a catalog from explicit entries.
    pub fn new(entries: Vec<TechnologyEntry>) -> Self {
        Self { entries }
    }

    /// The built-in catalog shipped with the engine.
    pub fn builtin() -> Self {
        use LearningCurve::*;
        use MaintenanceCost::*;
        use TechCategory::*;

        Self::new(vec![
            TechnologyEntry {
                key: "react",
                category: Frontend,
                name: "React",
                version: "18.x",
                learning_curve: Moderate,
                popularity_score: 9,
                maintenance_cost: Medium,
                best_for: &["spa", "interactive_ui", "large_teams"],
            },
            TechnologyEntry {
                key: "vue",
                category: Frontend,
                name: "Vue.js",
                version: "3.x",
                learning_curve: Easy,
                popularity_score: 8,
                maintenance_cost: Low,
                best_for: &["rapid_prototyping", "small_teams", "progressive_enhancement"],
            },
            TechnologyEntry {
                key: "nextjs",
                category: Frontend,
                name: "Next.js",
                version: "14.x",
                learning_curve: Moderate,
                popularity_score: 9,
                maintenance_cost: Medium,
                best_for: &["seo_important", "ssr", "full_stack"],
            },
            TechnologyEntry {
                key: "nodejs",
                category: Backend,
                name: "Node.js",
                version: "20.x LTS",
                learning_curve: Easy,
                popularity_score: 9,
                maintenance_cost: Medium,
                best_for: &["api_development", "real_time", "microservices"],
            },
            TechnologyEntry {
                key: "python",
                category: Backend,
                name: "Python",
                version: "3.12",
                learning_curve: Easy,
                popularity_score: 10,
                maintenance_cost: Low,
                best_for: &["data_processing", "ai_ml", "rapid_development"],
            },
            TechnologyEntry {
                key: "java",
                category: Backend,
                name: "Java",
                version: "21 LTS",
                learning_curve: Moderate,
                popularity_score: 8,
                maintenance_cost: High,
                best_for: &["enterprise", "high_performance", "large_teams"],
            },
            TechnologyEntry {
                key: "postgresql",
                category: Database,
                name: "PostgreSQL",
                version: "16.x",
                learning_curve: Moderate,
                popularity_score: 9,
                maintenance_cost: Medium,
                best_for: &["relational_data", "complex_queries", "acid_compliance"],
            },
            TechnologyEntry {
                key: "mongodb",
                category: Database,
                name: "MongoDB",
                version: "7.x",
                learning_curve: Easy,
                popularity_score: 8,
                maintenance_cost: Medium,
                best_for: &["document_storage", "rapid_prototyping", "flexible_schema"],
            },
            TechnologyEntry {
                key: "redis",
                category: Database,
                name: "Redis",
                version: "7.x",
                learning_curve: Easy,
                popularity_score: 9,
                maintenance_cost: Low,
                best_for: &["caching", "session_storage", "real_time"],
            },
        ])
    }

    /// Entries of one category, in declaration order.
    pub fn in_category(&self, category: TechCategory) -> impl Iterator<Item = &TechnologyEntry> {
        self.entries.iter().filter(move |e| e.category == category)
    }

    /// Looks up an entry by key, case-insensitively.
    pub fn find(&self, category: TechCategory, key: &str) -> Option<&TechnologyEntry> {
        let key = key.trim();
        self.in_category(category)
            .find(|e| e.key.eq_ignore_ascii_case(key))
    }

    /// Keys of a category, excluding `except`.
    pub fn keys_except(&self, category: TechCategory, except: &str) -> Vec<String> {
        self.in_category(category)
            .filter(|e| e.key != except)
            .map(|e| e.key.to_string())
            .collect()
    }

    /// The entry with the easiest learning curve; first declared wins ties.
    pub fn easiest(&self, category: TechCategory) -> Result<&TechnologyEntry, SchemaError> {
        self.in_category(category)
            .min_by_key(|e| e.learning_curve)
            .ok_or_else(|| empty_category(category))
    }

    /// The entry with the highest popularity; first declared wins ties.
    pub fn most_popular(&self, category: TechCategory) -> Result<&TechnologyEntry, SchemaError> {
        self.in_category(category)
            .fold(None, |best: Option<&TechnologyEntry>, e| match best {
                Some(b) if b.popularity_score >= e.popularity_score => Some(b),
                _ => Some(e),
            })
            .ok_or_else(|| empty_category(category))
    }

    /// The first entry carrying any of `tags`.
    pub fn first_tagged(
        &self,
        category: TechCategory,
        tags: &[&str],
    ) -> Result<&TechnologyEntry, SchemaError> {
        self.in_category(category)
            .find(|e| tags.iter().any(|t| e.has_tag(t)))
            .ok_or_else(|| {
                SchemaError::configuration(
                    TABLE,
                    format!("no {} entry tagged with any of [{}]", category, tags.join(", ")),
                )
            })
    }

    /// Checks that every category is populated and scores are in range.
    pub fn validate(&self) -> Result<(), SchemaError> {
        for category in TechCategory::all() {
            if self.in_category(*category).next().is_none() {
                return Err(empty_category(*category));
            }
        }

        for entry in &self.entries {
            if !(1..=10).contains(&entry.popularity_score) {
                return Err(SchemaError::configuration(
                    TABLE,
                    format!(
                        "'{}' popularity score {} is outside 1-10",
                        entry.key, entry.popularity_score
                    ),
                ));
            }
            if entry.key.is_empty() || entry.name.is_empty() {
                return Err(SchemaError::configuration(TABLE, "entry with empty key or name"));
            }
        }

        for (i, a) in self.entries.iter().enumerate() {
            if self.entries[i + 1..]
                .iter()
                .any(|b| b.category == a.category && b.key.eq_ignore_ascii_case(a.key))
            {
                return Err(SchemaError::configuration(
                    TABLE,
                    format!("duplicate {} key '{}'", a.category, a.key),
                ));
            }
        }

        Ok(())
    }
}

fn empty_category(category: TechCategory) -> SchemaError {
    SchemaError::configuration(TABLE, format!("category '{}' has no entries", category))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        assert!(TECHNOLOGY_CATALOG.validate().is_ok());
    }

    #[test]
    fn find_is_case_insensitive() {
        let entry = TECHNOLOGY_CATALOG.find(TechCategory::Frontend, "VUE").unwrap();
        assert_eq!(entry.name, "Vue.js");
        assert!(TECHNOLOGY_CATALOG.find(TechCategory::Frontend, "angular").is_none());
    }

    #[test]
    fn find_respects_category() {
        assert!(TECHNOLOGY_CATALOG.find(TechCategory::Backend, "react").is_none());
    }

    #[test]
    fn easiest_frontend_is_vue() {
        let entry = TECHNOLOGY_CATALOG.easiest(TechCategory::Frontend).unwrap();
        assert_eq!(entry.key, "vue");
    }

    #[test]
    fn most_popular_frontend_prefers_first_declared_on_tie() {
        // react and nextjs both score 9; react is declared first
        let entry = TECHNOLOGY_CATALOG.most_popular(TechCategory::Frontend).unwrap();
        assert_eq!(entry.key, "react");
    }

    #[test]
    fn first_tagged_finds_enterprise_backend() {
        let entry = TECHNOLOGY_CATALOG
            .first_tagged(TechCategory::Backend, &["enterprise", "high_performance"])
            .unwrap();
        assert_eq!(entry.key, "java");
    }

    #[test]
    fn first_tagged_missing_is_configuration_error() {
        let err = TECHNOLOGY_CATALOG
            .first_tagged(TechCategory::Database, &["graph_traversal"])
            .unwrap_err();
        assert!(matches!(err, SchemaError::Configuration { .. }));
    }

    #[test]
    fn keys_except_excludes_selected() {
        let keys = TECHNOLOGY_CATALOG.keys_except(TechCategory::Database, "mongodb");
        assert_eq!(keys, vec!["postgresql".to_string(), "redis".to_string()]);
    }

    #[test]
    fn validate_rejects_empty_category() {
        let catalog = TechnologyCatalog::new(
            TECHNOLOGY_CATALOG
                .in_category(TechCategory::Frontend)
                .cloned()
                .collect(),
        );
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("backend"));
    }

    #[test]
    fn validate_rejects_out_of_range_popularity() {
        let mut entries: Vec<_> = TechnologyCatalog::builtin().entries;
        entries[0].popularity_score = 11;
        let err = TechnologyCatalog::new(entries).validate().unwrap_err();
        assert!(err.to_string().contains("popularity"));
    }

    #[test]
    fn validate_rejects_duplicate_keys() {
        let mut entries: Vec<_> = TechnologyCatalog::builtin().entries;
        let dup = entries[0].clone();
        entries.push(dup);
        let err = TechnologyCatalog::new(entries).validate().unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }
}
