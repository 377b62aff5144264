//! Integration tests for schema generation through the public API.
//!
//! Covers three representative projects end to end:
//! 1. Large e-commerce with payment and real-time requirements (enterprise)
//! 2. Small API with no requirements (simple, phase minimums apply)
//! 3. Unknown project type (falls back to the api template)
//!
//! plus serialization and the command handler.

use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

use devplan_schema::domain::catalog::ComponentKind;
use devplan_schema::domain::planning::{deserialize, SelectionSource};
use devplan_schema::{
    analyze_complexity, generate, recommend_technologies, serialize, ComplexityTier,
    DetailedSchema, GenerateSchemaCommand, GenerateSchemaHandler, ProjectInput, ProjectType,
    RawProjectInput, Scale, SchemaError, SchemaGenerator, Timestamp,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn fixed_time() -> Timestamp {
    Timestamp::from_datetime(Utc.with_ymd_and_hms(2025, 3, 14, 15, 9, 26).unwrap())
}

fn generate_fixed(input: &ProjectInput) -> DetailedSchema {
    SchemaGenerator::default()
        .generate_at(input, fixed_time())
        .unwrap()
}

fn large_realtime_shop() -> ProjectInput {
    ProjectInput::new(ProjectType::Ecommerce, Scale::Large)
        .with_requirements("paiement sécurisé en temps réel")
}

fn small_api() -> ProjectInput {
    ProjectInput::new(ProjectType::Api, Scale::Small)
}

fn unknown_medium_project() -> ProjectInput {
    ProjectInput::new(ProjectType::parse("unknown_type"), Scale::Medium)
}

fn component_ids(schema: &DetailedSchema) -> Vec<ComponentKind> {
    schema.architecture_components.iter().map(|c| c.id).collect()
}

/// Asserts every leaf of the tree is a string, number or boolean.
fn assert_primitive(value: &Value, path: &str) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                assert_primitive(child, &format!("{path}.{key}"));
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                assert_primitive(child, &format!("{path}[{i}]"));
            }
        }
        Value::String(_) | Value::Number(_) | Value::Bool(_) => {}
        Value::Null => panic!("null leaf at {path}"),
    }
}

// =============================================================================
// Large e-commerce with real-time payments
// =============================================================================

#[test]
fn large_ecommerce_realtime_payments_is_enterprise() {
    let input = large_realtime_shop();
    assert_eq!(analyze_complexity(&input), ComplexityTier::Enterprise);

    let schema = generate_fixed(&input);
    assert_eq!(schema.complexity_score, 7);
    assert_eq!(schema.complexity, ComplexityTier::Enterprise);
}

#[test]
fn large_ecommerce_has_cache_before_payment_gateway() {
    let schema = generate_fixed(&large_realtime_shop());
    let ids = component_ids(&schema);

    assert_eq!(
        ids,
        vec![
            ComponentKind::WebFrontend,
            ComponentKind::ApiBackend,
            ComponentKind::Database,
            ComponentKind::Cdn,
            ComponentKind::Cache,
            ComponentKind::PaymentGateway,
        ]
    );
}

#[test]
fn ecommerce_third_party_subscriptions() {
    let schema = generate_fixed(&large_realtime_shop());
    let services = &schema.cost_estimation.third_party_services;

    assert_eq!(services.get("Payment Processing"), Some(&29));
    assert_eq!(services.get("Email Service"), Some(&15));
    assert_eq!(services.get("CDN"), Some(&20));
}

#[test]
fn enterprise_shop_stack_and_timeline() {
    let schema = generate_fixed(&large_realtime_shop());

    let keys: Vec<_> = schema
        .tech_recommendations
        .iter()
        .map(|r| r.key.as_str())
        .collect();
    assert_eq!(keys, vec!["react", "java", "postgresql"]);

    let backend = schema
        .architecture_components
        .iter()
        .find(|c| c.id == ComponentKind::ApiBackend)
        .unwrap();
    assert_eq!(backend.technologies, vec!["Java", "Spring Boot"]);

    assert_eq!(schema.baseline_weeks, 25);
    assert_eq!(schema.total_duration_weeks, 25);
    assert_eq!(schema.cost_estimation.development_cost, 187_500);
    assert_eq!(schema.risks.len(), 7);
    assert_eq!(schema.recommendations.len(), 10);
}

// =============================================================================
// Small API
// =============================================================================

#[test]
fn small_api_is_simple_with_minimum_phases() {
    let schema = generate_fixed(&small_api());

    assert_eq!(schema.complexity_score, 1);
    assert_eq!(schema.complexity, ComplexityTier::Simple);
    assert_eq!(schema.baseline_weeks, 5);

    let durations: Vec<_> = schema
        .project_phases
        .iter()
        .map(|p| p.duration_weeks)
        .collect();
    assert_eq!(durations, vec![1, 2, 2, 1, 1]);
    assert_eq!(schema.total_duration_weeks, 7);
}

#[test]
fn small_api_costs_use_floored_weeks() {
    let cost = generate_fixed(&small_api()).cost_estimation;

    // Costs follow the floored 5 weeks, not the 7-week phase sum
    assert_eq!(cost.development_cost, 37_500);
    assert_eq!(cost.infrastructure_cost_monthly, 50);
    assert_eq!(cost.maintenance_cost_monthly, 625);
    assert!(cost.third_party_services.is_empty());
    assert_eq!(cost.total_monthly, 675);
    assert_eq!(cost.total_first_year, 37_500 + 12 * 675);
    assert_eq!(cost.ongoing_yearly, 12 * 675);
}

// =============================================================================
// Unknown project type
// =============================================================================

#[test]
fn unknown_type_falls_back_to_api_template() {
    let unknown = generate_fixed(&unknown_medium_project());
    let api = generate_fixed(&ProjectInput::new(ProjectType::Api, Scale::Medium));

    assert_eq!(unknown.template.key, "api");
    assert_eq!(component_ids(&unknown), component_ids(&api));
    assert_eq!(unknown.project_phases, api.project_phases);
    assert_eq!(unknown.project_name, "Unknown_Type Project");
}

// =============================================================================
// Preferences
// =============================================================================

#[test]
fn preferences_override_policy() {
    let input = small_api()
        .with_frontend("React")
        .with_backend("python")
        .with_database("mongodb");
    let recs = recommend_technologies(&input, ComplexityTier::Simple).unwrap();

    let keys: Vec<_> = recs.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["react", "python", "mongodb"]);
    assert!(recs.iter().all(|r| r.source == SelectionSource::UserPreference));
    assert!(recs[1].reason.starts_with("User preference - "));
}

#[test]
fn unknown_preference_falls_back() {
    let input = small_api().with_frontend("svelte");
    let recs = recommend_technologies(&input, ComplexityTier::Simple).unwrap();

    assert_eq!(recs[0].key, "vue");
    assert_eq!(recs[0].source, SelectionSource::Automatic);
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn serialized_tree_has_only_primitive_leaves() {
    for input in [large_realtime_shop(), small_api(), unknown_medium_project()] {
        let value = serialize(&generate_fixed(&input)).unwrap();
        assert_primitive(&value, "$");
    }
}

#[test]
fn serialized_tokens_and_timestamp() {
    let value = serialize(&generate_fixed(&large_realtime_shop())).unwrap();

    assert_eq!(value["complexity"], "enterprise");
    assert_eq!(value["generated_at"], "2025-03-14T15:09:26Z");
    assert_eq!(value["confidence_score"], json!(0.85));
    assert_eq!(value["tech_stack_summary"]["backend"], "Java");
    assert_eq!(value["cost_estimation"]["currency"], "EUR");

    let categories: Vec<_> = value["tech_recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["category"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(categories, vec!["frontend", "backend", "database"]);
}

#[test]
fn serialized_tree_round_trips() {
    for input in [large_realtime_shop(), small_api(), unknown_medium_project()] {
        let schema = generate_fixed(&input);
        let value = serialize(&schema).unwrap();
        assert_eq!(deserialize(value).unwrap(), schema);
    }
}

#[test]
fn generate_stamps_current_time() {
    let before = Timestamp::now();
    let schema = generate(&small_api()).unwrap();
    assert!(schema.generated_at >= before);
}

// =============================================================================
// Command handler
// =============================================================================

#[test]
fn handler_generates_from_json_document() {
    let cmd = GenerateSchemaCommand::from_json(
        r#"{
            "project_type": " Ecommerce ",
            "description": "Online shop",
            "scale": "LARGE",
            "requirements": "paiement sécurisé en temps réel"
        }"#,
    )
    .unwrap()
    .at(fixed_time());

    let result = GenerateSchemaHandler::default().handle(cmd).unwrap();

    assert_eq!(result.schema, generate_fixed(&large_realtime_shop().with_description("Online shop")));
    assert_eq!(result.document["description"], "Online shop");
    assert_eq!(result.document["project_type"], "ecommerce");
}

#[test]
fn handler_reports_missing_project_type() {
    let cmd = GenerateSchemaCommand::new(RawProjectInput {
        scale: Some("small".to_string()),
        ..Default::default()
    });
    let err = GenerateSchemaHandler::default().handle(cmd).unwrap_err();

    assert!(matches!(err, SchemaError::InputShape { .. }));
    assert_eq!(err.field(), Some("project_type"));
    assert_eq!(err.code().to_string(), "INPUT_SHAPE_ERROR");
}
