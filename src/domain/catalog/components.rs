//! Architecture component kinds and their fixed traits.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every node type the architecture graph can contain.
///
/// The snake_case token doubles as the component identifier that
/// connections point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    WebFrontend,
    MobileApp,
    ApiBackend,
    Database,
    Cache,
    Cdn,
    AuthService,
    Billing,
    Documentation,
    Monitoring,
    AnalyticsEngine,
    PaymentGateway,
    PushNotifications,
}

impl ComponentKind {
    /// Returns the identifier token (`api_backend`, `cache`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::WebFrontend => "web_frontend",
            ComponentKind::MobileApp => "mobile_app",
            ComponentKind::ApiBackend => "api_backend",
            ComponentKind::Database => "database",
            ComponentKind::Cache => "cache",
            ComponentKind::Cdn => "cdn",
            ComponentKind::AuthService => "auth_service",
            ComponentKind::Billing => "billing",
            ComponentKind::Documentation => "documentation",
            ComponentKind::Monitoring => "monitoring",
            ComponentKind::AnalyticsEngine => "analytics_engine",
            ComponentKind::PaymentGateway => "payment_gateway",
            ComponentKind::PushNotifications => "push_notifications",
        }
    }

    /// Human-facing component name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ComponentKind::WebFrontend => "Frontend Application",
            ComponentKind::MobileApp => "Mobile Application",
            ComponentKind::ApiBackend => "API Backend",
            ComponentKind::Database => "Primary Database",
            ComponentKind::Cache => "Cache Layer",
            ComponentKind::Cdn => "Content Delivery Network",
            ComponentKind::AuthService => "Authentication Service",
            ComponentKind::Billing => "Billing Service",
            ComponentKind::Documentation => "API Documentation",
            ComponentKind::Monitoring => "Monitoring & Alerting",
            ComponentKind::AnalyticsEngine => "Analytics Engine",
            ComponentKind::PaymentGateway => "Payment Gateway",
            ComponentKind::PushNotifications => "Push Notification Service",
        }
    }

    /// Architectural type tag.
    pub fn type_tag(&self) -> &'static str {
        match self {
            ComponentKind::WebFrontend => "web_application",
            ComponentKind::MobileApp => "mobile_application",
            ComponentKind::ApiBackend => "rest_api",
            ComponentKind::Database => "database",
            ComponentKind::Cache => "cache",
            ComponentKind::Cdn => "cdn",
            ComponentKind::AuthService => "service",
            ComponentKind::Billing => "service",
            ComponentKind::Documentation => "documentation",
            ComponentKind::Monitoring => "observability",
            ComponentKind::AnalyticsEngine => "data_processing",
            ComponentKind::PaymentGateway => "external_service",
            ComponentKind::PushNotifications => "notification_service",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ComponentKind::WebFrontend => "Interactive, responsive user interface",
            ComponentKind::MobileApp => "Native mobile client for iOS and Android",
            ComponentKind::ApiBackend => "REST API hosting business logic and data access",
            ComponentKind::Database => "Primary data store",
            ComponentKind::Cache => "In-memory cache to speed up hot reads",
            ComponentKind::Cdn => "Edge delivery of static assets and media",
            ComponentKind::AuthService => "User identity, sessions and access control",
            ComponentKind::Billing => "Subscription plans, invoicing and payment reconciliation",
            ComponentKind::Documentation => "Versioned, browsable API reference",
            ComponentKind::Monitoring => "Metrics, logs and alerting for the running system",
            ComponentKind::AnalyticsEngine => "Aggregation and querying of analytical data",
            ComponentKind::PaymentGateway => "Secure payment processing integration",
            ComponentKind::PushNotifications => "Push notification delivery to mobile devices",
        }
    }

    /// Scalability strategy.
    pub fn scalability(&self) -> &'static str {
        match self {
            ComponentKind::WebFrontend => "CDN + Edge Caching",
            ComponentKind::MobileApp => "App store distribution + over-the-air updates",
            ComponentKind::ApiBackend => "Horizontal scaling + Load Balancer",
            ComponentKind::Database => "Read replicas + Partitioning",
            ComponentKind::Cache => "Redis Cluster",
            ComponentKind::Cdn => "Globally distributed edge network",
            ComponentKind::AuthService => "Stateless tokens + horizontal scaling",
            ComponentKind::Billing => "Managed provider + idempotent webhooks",
            ComponentKind::Documentation => "Static hosting",
            ComponentKind::Monitoring => "Managed time-series storage",
            ComponentKind::AnalyticsEngine => "Columnar storage + batch pre-aggregation",
            ComponentKind::PaymentGateway => "Externally managed service",
            ComponentKind::PushNotifications => "Externally managed service",
        }
    }

    /// Fixed complexity weight (1-10).
    pub fn complexity_weight(&self) -> u8 {
        match self {
            ComponentKind::WebFrontend => 6,
            ComponentKind::MobileApp => 7,
            ComponentKind::ApiBackend => 8,
            ComponentKind::Database => 7,
            ComponentKind::Cache => 4,
            ComponentKind::Cdn => 2,
            ComponentKind::AuthService => 6,
            ComponentKind::Billing => 6,
            ComponentKind::Documentation => 2,
            ComponentKind::Monitoring => 4,
            ComponentKind::AnalyticsEngine => 7,
            ComponentKind::PaymentGateway => 6,
            ComponentKind::PushNotifications => 5,
        }
    }

    /// Technologies for kinds that do not depend on a recommendation.
    pub fn default_technologies(&self) -> &'static [&'static str] {
        match self {
            ComponentKind::WebFrontend => &["React"],
            ComponentKind::MobileApp => &["React Native", "Flutter"],
            ComponentKind::ApiBackend => &["Node.js"],
            ComponentKind::Database => &["PostgreSQL"],
            ComponentKind::Cache => &["Redis"],
            ComponentKind::Cdn => &["Cloudflare", "CloudFront"],
            ComponentKind::AuthService => &["OAuth 2.0", "OpenID Connect"],
            ComponentKind::Billing => &["Stripe Billing"],
            ComponentKind::Documentation => &["OpenAPI", "Swagger UI"],
            ComponentKind::Monitoring => &["Prometheus", "Grafana"],
            ComponentKind::AnalyticsEngine => &["ClickHouse"],
            ComponentKind::PaymentGateway => &["Stripe", "PayPal API"],
            ComponentKind::PushNotifications => &["FCM", "APNs"],
        }
    }

    /// Type-specific integrations emitted after the core graph.
    pub fn is_external(&self) -> bool {
        matches!(
            self,
            ComponentKind::PaymentGateway | ComponentKind::PushNotifications
        )
    }

    /// Logical outbound edges, before filtering to the kinds actually present.
    pub fn logical_connections(&self) -> &'static [ComponentKind] {
        match self {
            ComponentKind::WebFrontend | ComponentKind::MobileApp => &[ComponentKind::ApiBackend],
            ComponentKind::ApiBackend => &[
                ComponentKind::Database,
                ComponentKind::Cache,
                ComponentKind::AuthService,
                ComponentKind::Billing,
                ComponentKind::AnalyticsEngine,
            ],
            ComponentKind::Cdn => &[ComponentKind::WebFrontend],
            ComponentKind::Documentation => &[],
            ComponentKind::Database
            | ComponentKind::Cache
            | ComponentKind::AuthService
            | ComponentKind::Billing
            | ComponentKind::Monitoring
            | ComponentKind::AnalyticsEngine
            | ComponentKind::PaymentGateway
            | ComponentKind::PushNotifications => &[ComponentKind::ApiBackend],
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
