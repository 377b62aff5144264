//! Cost Estimator - Development, infrastructure, maintenance and aggregate costs.
//!
//! All amounts are whole currency units. Arithmetic is integer-only, so the
//! aggregate figures are exact sums of their parts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::timeline_estimator::HOURS_PER_WEEK;
use crate::domain::foundation::{ComplexityTier, ProjectInput, ProjectType};

pub const CURRENCY: &str = "EUR";

/// Blended hourly rate.
pub const HOURLY_RATE: u64 = 75;

/// Average team size (2.5 people), in tenths.
pub const TEAM_SIZE_TENTHS: u64 = 25;

/// Yearly maintenance as a percentage of development cost.
pub const MAINTENANCE_RATE_PERCENT: u64 = 20;

/// Cost figures for a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub currency: String,
    pub development_cost: u64,
    pub infrastructure_cost_monthly: u64,
    pub maintenance_cost_monthly: u64,
    /// Monthly subscription per third-party service.
    pub third_party_services: BTreeMap<String, u64>,
    pub total_monthly: u64,
    pub total_first_year: u64,
    pub ongoing_yearly: u64,
}

impl CostEstimate {
    /// Sum of third-party subscriptions per month.
    pub fn third_party_monthly(&self) -> u64 {
        self.third_party_services.values().sum()
    }
}

/// Cost estimation functions.
pub struct CostEstimator;

impl CostEstimator {
    /// Estimates costs from the delivery duration and complexity tier.
    ///
    /// # Algorithm
    /// - development = weeks × 40 h × 2.5 people × 75
    /// - maintenance / month = development × 20% / 12
    /// - total / month = infrastructure + Σ third party + maintenance
    /// - first year = development + 12 × total / month
    pub fn estimate(input: &ProjectInput, tier: ComplexityTier, total_weeks: u32) -> CostEstimate {
        let development_cost = Self::development_cost(total_weeks);
        let infrastructure_cost_monthly = Self::infrastructure_monthly(tier);
        let third_party_services = Self::third_party_services(&input.project_type);
        let maintenance_cost_monthly = development_cost * MAINTENANCE_RATE_PERCENT / 100 / 12;

        let total_monthly = infrastructure_cost_monthly
            + third_party_services.values().sum::<u64>()
            + maintenance_cost_monthly;

        CostEstimate {
            currency: CURRENCY.to_string(),
            development_cost,
            infrastructure_cost_monthly,
            maintenance_cost_monthly,
            third_party_services,
            total_monthly,
            total_first_year: development_cost + total_monthly * 12,
            ongoing_yearly: total_monthly * 12,
        }
    }

    pub fn development_cost(total_weeks: u32) -> u64 {
        u64::from(total_weeks) * u64::from(HOURS_PER_WEEK) * TEAM_SIZE_TENTHS * HOURLY_RATE / 10
    }

    /// Monthly infrastructure budget per tier.
    pub fn infrastructure_monthly(tier: ComplexityTier) -> u64 {
        match tier {
            ComplexityTier::Simple => 50,
            ComplexityTier::Moderate => 150,
            ComplexityTier::Complex => 300,
            ComplexityTier::Enterprise => 600,
        }
    }

    /// Monthly third-party subscriptions typical for the project type.
    pub fn third_party_services(project_type: &ProjectType) -> BTreeMap<String, u64> {
        let services: &[(&str, u64)] = match project_type {
            ProjectType::Ecommerce => &[("Payment Processing", 29), ("Email Service", 15), ("CDN", 20)],
            ProjectType::Saas => &[("Auth Service", 25), ("Analytics", 35), ("Monitoring", 25)],
            _ => &[],
        };

        services
            .iter()
            .map(|(name, cost)| (name.to_string(), *cost))
            .collect()
    }
}
