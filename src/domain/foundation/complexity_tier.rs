//! ComplexityTier enum summarizing estimated project difficulty.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered complexity classification, ascending severity.
///
/// The derived `Ord` follows declaration order, so
/// `Simple < Moderate < Complex < Enterprise`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityTier {
    Simple,
    Moderate,
    Complex,
    Enterprise,
}

impl ComplexityTier {
    /// Returns all tiers in ascending order.
    pub fn all() -> &'static [ComplexityTier] {
        &[
            ComplexityTier::Simple,
            ComplexityTier::Moderate,
            ComplexityTier::Complex,
            ComplexityTier::Enterprise,
        ]
    }

    /// Maps a raw complexity score onto a tier.
    ///
    /// | Score | Tier |
    /// |-------|------|
    /// | ≤ 2 | Simple |
    /// | ≤ 4 | Moderate |
    /// | ≤ 6 | Complex |
    /// | > 6 | Enterprise |
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=2 => ComplexityTier::Simple,
            3..=4 => ComplexityTier::Moderate,
            5..=6 => ComplexityTier::Complex,
            _ => ComplexityTier::Enterprise,
        }
    }

    /// Returns the lowercase token used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplexityTier::Simple => "simple",
            ComplexityTier::Moderate => "moderate",
            ComplexityTier::Complex => "complex",
            ComplexityTier::Enterprise => "enterprise",
        }
    }

    /// True for the two upper tiers.
    pub fn is_demanding(&self) -> bool {
        matches!(self, ComplexityTier::Complex | ComplexityTier::Enterprise)
    }
}

impl fmt::Display for ComplexityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
