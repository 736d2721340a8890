//! Integration tests for the billing and subscription HTTP endpoints.
//!
//! These tests drive the full `/api` router in process:
//! 1. Request DTOs deserialize from JSON bodies
//! 2. Handlers compute periods and drafts through the application layer
//! 3. Errors map to the documented status codes

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::Router;
use http::{Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use subtrack::adapters::{api_router, AppState, InMemoryFieldConfig};
use subtrack::domain::fields::{FieldDefinition, FieldEntity, FieldSchema, FieldType};
use subtrack::domain::subscription::Currency;
use subtrack::ports::{FieldConfigError, FieldConfigSource};

use async_trait::async_trait;

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Field source whose upstream is always down
struct UnreachableFieldConfig;

#[async_trait]
impl FieldConfigSource for UnreachableFieldConfig {
    async fn load_schema(&self, _entity: FieldEntity) -> Result<FieldSchema, FieldConfigError> {
        Err(FieldConfigError::Transport("connection refused".to_string()))
    }
}

fn subscription_schema() -> FieldSchema {
    FieldSchema::new(
        FieldEntity::Subscription,
        vec![
            FieldDefinition::new("cost_center", FieldType::Text)
                .required()
                .with_label("Cost center"),
            FieldDefinition::new("seats", FieldType::Number),
        ],
    )
}

fn app_with(field_config: Arc<dyn FieldConfigSource>) -> Router {
    let state = AppState::new(field_config, Currency::new("USD").unwrap(), 24);
    api_router(state)
}

fn app() -> Router {
    app_with(Arc::new(InMemoryFieldConfig::with_schemas(vec![
        subscription_schema(),
    ])))
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    send(app(), Method::POST, uri, Some(body)).await
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = send(app(), Method::GET, "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

// =============================================================================
// End Date
// =============================================================================

#[tokio::test]
async fn end_date_for_monthly_cycle() {
    let (status, body) = post(
        "/api/billing/end-date",
        json!({ "start_date": "2024-01-15", "billing_cycle": "monthly" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["end_date"], "2024-02-14");
    assert_eq!(body["billing_cycle"], "monthly");
}

#[tokio::test]
async fn end_date_clamps_month_overflow() {
    let (_, body) = post(
        "/api/billing/end-date",
        json!({ "start_date": "2023-01-31", "billing_cycle": "monthly" }),
    )
    .await;

    assert_eq!(body["end_date"], "2023-02-27");
}

#[tokio::test]
async fn end_date_accepts_rfc3339_start() {
    let (_, body) = post(
        "/api/billing/end-date",
        json!({ "start_date": "2024-01-01T10:00:00Z", "billing_cycle": "yearly" }),
    )
    .await;

    assert_eq!(body["start_date"], "2024-01-01");
    assert_eq!(body["end_date"], "2024-12-31");
}

#[tokio::test]
async fn end_date_is_null_for_pay_as_you_go() {
    let (status, body) = post(
        "/api/billing/end-date",
        json!({ "start_date": "2024-01-15", "billing_cycle": "pay-as-you-go" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["end_date"].is_null());
}

#[tokio::test]
async fn end_date_is_null_without_start_date() {
    let (status, body) = post("/api/billing/end-date", json!({ "billing_cycle": "weekly" })).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["end_date"].is_null());
}

#[tokio::test]
async fn unknown_cycle_is_bad_request() {
    let (status, body) = post(
        "/api/billing/end-date",
        json!({ "start_date": "2024-01-15", "billing_cycle": "biweekly" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], "UNKNOWN_BILLING_CYCLE");
}

// =============================================================================
// Next Period
// =============================================================================

#[tokio::test]
async fn next_period_follows_trial() {
    let (status, body) = post(
        "/api/billing/next-period",
        json!({ "current_end_date": "2024-01-31", "billing_cycle": "trial" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["period"]["start_date"], "2024-02-01");
    assert_eq!(body["period"]["end_date"], "2024-03-02");
}

#[tokio::test]
async fn next_period_is_null_without_cycle() {
    let (_, body) = post(
        "/api/billing/next-period",
        json!({ "current_end_date": "2024-01-31" }),
    )
    .await;

    assert!(body["period"].is_null());
}

// =============================================================================
// Renewal Schedule
// =============================================================================

#[tokio::test]
async fn renewal_schedule_for_quarterly() {
    let (status, body) = post(
        "/api/billing/renewals",
        json!({
            "start_date": "2024-01-01",
            "billing_cycle": "quarterly",
            "count": 4,
            "as_of": "2024-05-10"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let periods = body["periods"].as_array().unwrap();
    assert_eq!(periods.len(), 4);
    assert_eq!(periods[3]["end_date"], "2024-12-31");
    assert_eq!(body["current_period"]["start_date"], "2024-04-01");
    assert_eq!(body["next_renewal"], "2024-07-01");
}

#[tokio::test]
async fn renewal_schedule_rejects_count_above_limit() {
    let (status, body) = post(
        "/api/billing/renewals",
        json!({ "start_date": "2024-01-01", "billing_cycle": "monthly", "count": 25 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], "OUT_OF_RANGE");
}

#[tokio::test]
async fn renewal_schedule_requires_start_date() {
    let (status, _) = post("/api/billing/renewals", json!({ "billing_cycle": "monthly" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Subscription Draft
// =============================================================================

#[tokio::test]
async fn draft_recompute_derives_fields_and_reports_issues() {
    let (status, body) = post(
        "/api/subscriptions/draft",
        json!({
            "as_of": "2024-03-01",
            "changes": [
                { "field": "service_name", "value": "Linear" },
                { "field": "start_date", "value": "2024-01-10" },
                { "field": "billing_cycle", "value": "monthly" },
                { "field": "amount_cents", "value": 1000 },
                { "field": "quantity", "value": 3 },
                { "field": "owner_email", "value": "ops@" }
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["draft"]["end_date"], "2024-02-09");
    assert_eq!(body["draft"]["next_renewal"], "2024-03-10");
    assert_eq!(body["draft"]["total_amount_cents"], 3000);
    assert_eq!(body["draft"]["lcy_amount_cents"], 3000);

    let issue_fields: Vec<&str> = body["issues"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["field"].as_str().unwrap())
        .collect();
    assert!(issue_fields.contains(&"owner_email"));
    assert!(issue_fields.contains(&"custom_fields.cost_center"));
}

#[tokio::test]
async fn draft_recompute_with_unreachable_field_source_is_bad_gateway() {
    let app = app_with(Arc::new(UnreachableFieldConfig));
    let (status, body) = send(
        app,
        Method::POST,
        "/api/subscriptions/draft",
        Some(json!({ "changes": [] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error_code"], "UPSTREAM_UNAVAILABLE");
}

#[tokio::test]
async fn draft_recompute_rejects_malformed_as_of() {
    let (status, body) = post(
        "/api/subscriptions/draft",
        json!({ "as_of": "yesterday", "changes": [] }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], "INVALID_FORMAT");
}

#[tokio::test]
async fn draft_recompute_types_raw_custom_fields() {
    let (status, body) = post(
        "/api/subscriptions/draft",
        json!({
            "changes": [
                {
                    "field": "set_custom_field_raw",
                    "value": { "name": "cost_center", "raw": "ENG" }
                },
                {
                    "field": "set_custom_field_raw",
                    "value": { "name": "seats", "raw": "40" }
                }
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["draft"]["custom_fields"]["seats"], 40.0);
    assert_eq!(body["draft"]["custom_fields"]["cost_center"], "ENG");
}

#[tokio::test]
async fn draft_recompute_reports_unreadable_cycle_and_currency() {
    let (status, body) = post(
        "/api/subscriptions/draft",
        json!({
            "as_of": "2024-03-01",
            "changes": [
                { "field": "service_name", "value": "Zoom" },
                { "field": "start_date", "value": "2024-01-10" },
                { "field": "billing_cycle", "value": "fortnightly" },
                { "field": "amount_cents", "value": 5000 },
                { "field": "currency", "value": "EURO" },
                {
                    "field": "set_custom_field",
                    "value": { "name": "cost_center", "value": "OPS" }
                }
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["draft"]["lcy_amount_cents"].is_null());
    assert_eq!(body["draft"]["rejected_inputs"]["currency"], "EURO");

    let issues = body["issues"].as_array().unwrap();
    let cycle = issues.iter().find(|i| i["field"] == "billing_cycle").unwrap();
    assert!(cycle["message"].as_str().unwrap().contains("fortnightly"));
    assert!(issues.iter().any(|i| i["field"] == "currency"));
}

// =============================================================================
// Field Schemas
// =============================================================================

#[tokio::test]
async fn field_schema_lists_configured_fields() {
    let (status, body) = send(app(), Method::GET, "/api/fields/subscription", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["entity"], "subscription");
    assert_eq!(body["fields"][0]["label"], "Cost center");
    assert_eq!(body["fields"][1]["type"], "number");
}

#[tokio::test]
async fn unconfigured_entity_is_not_found() {
    let (status, body) = send(app(), Method::GET, "/api/fields/compliance", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error_code"], "FIELD_SCHEMA_NOT_FOUND");
}

#[tokio::test]
async fn unknown_entity_is_not_found() {
    let (status, _) = send(app(), Method::GET, "/api/fields/invoices", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
