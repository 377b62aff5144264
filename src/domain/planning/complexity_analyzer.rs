//! Complexity Analyzer - Multi-factor scoring of a project into a tier.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ComplexityTier, ProjectInput, ProjectType, Scale};

/// Requirement terms that add one point (payments, security, performance, scalability).
pub const SENSITIVE_TERMS: &[&str] = &["paiement", "sécurité", "performance", "scalabilité"];

/// Requirement terms that add two points (real-time, microservices, multi-tenancy).
pub const ARCHITECTURE_TERMS: &[&str] = &["temps réel", "microservices", "multi-tenant"];

/// Per-factor contribution to a complexity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub scale: u32,
    pub project_type: u32,
    pub sensitive_requirements: u32,
    pub architecture_requirements: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.scale + self.project_type + self.sensitive_requirements + self.architecture_requirements
    }
}

/// Complexity scoring functions.
pub struct ComplexityAnalyzer;

impl ComplexityAnalyzer {
    /// Scores each factor of the input.
    ///
    /// # Algorithm
    /// - scale: large 3, medium 2, small 1
    /// - project type: saas/enterprise 2, ecommerce/dashboard 1, else 0
    /// - requirements mention any sensitive term: 1
    /// - requirements mention any architecture term: 2 (independent of the above)
    ///
    /// Keyword matching is a case-insensitive substring scan.
    pub fn breakdown(input: &ProjectInput) -> ScoreBreakdown {
        let requirements = input.requirements.to_lowercase();

        ScoreBreakdown {
            scale: Self::scale_points(input.scale),
            project_type: Self::project_type_points(&input.project_type),
            sensitive_requirements: if mentions_any(&requirements, SENSITIVE_TERMS) { 1 } else { 0 },
            architecture_requirements: if mentions_any(&requirements, ARCHITECTURE_TERMS) {
                2
            } else {
                0
            },
        }
    }

    /// Total complexity score.
    pub fn score(input: &ProjectInput) -> u32 {
        Self::breakdown(input).total()
    }

    /// Classifies the input into a complexity tier.
    pub fn analyze(input: &ProjectInput) -> ComplexityTier {
        ComplexityTier::from_score(Self::score(input))
    }

    fn scale_points(scale: Scale) -> u32 {
        match scale {
            Scale::Large => 3,
            Scale::Medium => 2,
            Scale::Small => 1,
        }
    }

    fn project_type_points(project_type: &ProjectType) -> u32 {
        match project_type {
            ProjectType::Saas | ProjectType::Enterprise => 2,
            ProjectType::Ecommerce | ProjectType::Dashboard => 1,
            ProjectType::Mobile | ProjectType::Api | ProjectType::Other(_) => 0,
        }
    }
}

fn mentions_any(haystack: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| haystack.contains(term))
}
