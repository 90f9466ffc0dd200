use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use dsm_core::{
    App, BurndownPoint, Component, ComponentStatus, ComponentUsage, FixtureStore, Team,
    UsageVersion,
};
use dsm_server::router::app_router;
use dsm_server::state::AppState;

fn component(id: &str, name: &str, status: ComponentStatus, blockers: &[&str]) -> Component {
    let migrated = status == ComponentStatus::Migrated;
    Component {
        id: id.to_string(),
        name: name.to_string(),
        status,
        v1_package: "@acme/ui-v1".to_string(),
        v1_name: name.to_string(),
        v2_package: migrated.then(|| "@acme/design-system".to_string()),
        v2_name: migrated.then(|| name.to_string()),
        has_breaking_changes: false,
        breaking_changes: Vec::new(),
        migration_notes: None,
        blockers: blockers.iter().map(|b| b.to_string()).collect(),
        updated_at: Utc.with_ymd_and_hms(2026, 7, 1, 12, 0, 0).unwrap(),
    }
}

fn usage(component_id: &str, version: UsageVersion, count: u32) -> ComponentUsage {
    ComponentUsage {
        component_id: component_id.to_string(),
        version,
        usage_count: count,
    }
}

fn app(
    id: &str,
    name: &str,
    team: &str,
    progress: u8,
    blockers: &[&str],
    usages: Vec<ComponentUsage>,
) -> App {
    App {
        id: id.to_string(),
        name: name.to_string(),
        team: team.to_string(),
        ds_version: "2.0.0".to_string(),
        migration_progress: progress,
        blockers: blockers.iter().map(|b| b.to_string()).collect(),
        component_usage: usages,
    }
}

/// Synthetic fixture set: 3 components (1 migrated, 1 in progress with a
/// blocker, 1 not started) and 3 apps at 0%, 50% and 100%.
fn test_router() -> Router {
    let components = vec![
        component("button", "Button", ComponentStatus::Migrated, &[]),
        component(
            "modal",
            "Modal",
            ComponentStatus::InProgress,
            &["focus trap regression"],
        ),
        component("select", "Select", ComponentStatus::NotStarted, &[]),
    ];
    let apps = vec![
        app(
            "storefront",
            "Storefront",
            "Checkout",
            0,
            &[],
            vec![usage("button", UsageVersion::V2, 10)],
        ),
        app(
            "billing",
            "Billing",
            "Payments",
            100,
            &[],
            vec![
                usage("button", UsageVersion::V2, 4),
                usage("select", UsageVersion::V1, 2),
            ],
        ),
        app(
            "console",
            "Console",
            "checkout",
            50,
            &["waiting on modal fix"],
            vec![
                usage("modal", UsageVersion::V1, 3),
                usage("ghost-component", UsageVersion::V1, 1),
            ],
        ),
    ];
    let teams = vec![
        Team {
            id: "team-checkout".to_string(),
            name: "Checkout".to_string(),
        },
        Team {
            id: "team-payments".to_string(),
            name: "Payments".to_string(),
        },
    ];
    let burndown = vec![
        BurndownPoint {
            date: NaiveDate::from_ymd_opt(2026, 7, 6).unwrap(),
            remaining: 2,
        },
        BurndownPoint {
            date: NaiveDate::from_ymd_opt(2026, 7, 13).unwrap(),
            remaining: 2,
        },
    ];

    let store = FixtureStore::new(components, apps, teams, burndown);
    app_router(AppState::new(store, 0))
}

async fn get(router: Router, uri: &str) -> Response {
    router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_service_status() {
    let response = get(test_router(), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "dsm-server");
}

#[tokio::test]
async fn stats_counts_every_bucket() {
    let response = get(test_router(), "/api/stats").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({
            "components": {
                "total": 3,
                "notStarted": 1,
                "inProgress": 1,
                "migrated": 1,
                "deprecated": 0,
                "blocked": 1
            },
            "apps": {
                "total": 3,
                "notStarted": 1,
                "inProgress": 1,
                "fullyMigrated": 1,
                "blocked": 1
            }
        })
    );
}

#[tokio::test]
async fn blockers_lists_components_before_apps() {
    let response = get(test_router(), "/api/blockers").await;
    let body = body_json(response).await;

    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["id"], "modal");
    assert_eq!(entries[0]["type"], "component");
    assert_eq!(entries[0]["blockers"], json!(["focus trap regression"]));
    assert_eq!(entries[1]["id"], "console");
    assert_eq!(entries[1]["type"], "app");
}

#[tokio::test]
async fn blockers_limit_truncates_the_feed() {
    let response = get(test_router(), "/api/blockers?limit=1").await;
    let body = body_json(response).await;

    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["type"], "component");
}

#[tokio::test]
async fn components_list_paginates_with_metadata() {
    let response = get(test_router(), "/api/components?limit=2&page=2").await;
    let body = body_json(response).await;

    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(
        body["pagination"],
        json!({ "page": 2, "limit": 2, "total": 3, "totalPages": 2 })
    );
}

#[tokio::test]
async fn components_list_projects_summaries() {
    let response = get(test_router(), "/api/components?status=in_progress").await;
    let body = body_json(response).await;

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    let summary = &data[0];
    assert_eq!(summary["id"], "modal");
    assert_eq!(summary["blockersCount"], 1);
    // Projection, not the full entity
    assert!(summary.get("breakingChanges").is_none());
    assert!(summary.get("migrationNotes").is_none());
    assert!(summary.get("blockers").is_none());
}

#[tokio::test]
async fn unknown_status_filter_matches_nothing() {
    let response = get(test_router(), "/api/components?status=bogus").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["pagination"]["total"], 0);
    assert_eq!(body["pagination"]["totalPages"], 0);
}

#[tokio::test]
async fn malformed_pagination_params_fall_back_to_defaults() {
    let response = get(test_router(), "/api/components?page=abc&limit=zero").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["limit"], 20);
}

#[tokio::test]
async fn out_of_range_page_returns_empty_data() {
    let response = get(test_router(), "/api/components?page=50").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["pagination"]["total"], 3);
}

#[tokio::test]
async fn component_detail_includes_used_by() {
    let response = get(test_router(), "/api/components/button").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["id"], "button");
    // Detail carries the full entity
    assert!(body.get("breakingChanges").is_some());
    assert!(body.get("updatedAt").is_some());

    let used_by = body["usedBy"].as_array().unwrap();
    let ids: Vec<&str> = used_by.iter().map(|u| u["appId"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["storefront", "billing"]);
    assert_eq!(used_by[0]["appName"], "Storefront");
    assert_eq!(used_by[0]["version"], "v2");
    assert_eq!(used_by[0]["usageCount"], 10);
}

#[tokio::test]
async fn unknown_component_is_a_structured_404() {
    let response = get(test_router(), "/api/components/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body, json!({ "error": "Component not found" }));
}

#[tokio::test]
async fn apps_list_filters_by_team_case_insensitively() {
    let response = get(test_router(), "/api/apps?team=CHECKOUT").await;
    let body = body_json(response).await;

    let data = body["data"].as_array().unwrap();
    let ids: Vec<&str> = data.iter().map(|a| a["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["storefront", "console"]);
}

#[tokio::test]
async fn apps_list_combines_team_and_blocker_filters() {
    let response = get(test_router(), "/api/apps?team=Checkout&hasBlockers=true").await;
    let body = body_json(response).await;

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], "console");
    assert_eq!(data[0]["blockersCount"], 1);
}

#[tokio::test]
async fn blocker_filter_requires_the_literal_true() {
    let response = get(test_router(), "/api/apps?hasBlockers=yes").await;
    let body = body_json(response).await;

    assert_eq!(body["pagination"]["total"], 3);
}

#[tokio::test]
async fn app_detail_resolves_component_usage() {
    let response = get(test_router(), "/api/apps/console").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["id"], "console");
    assert_eq!(body["blockers"], json!(["waiting on modal fix"]));

    let usage = body["componentUsage"].as_array().unwrap();
    assert_eq!(usage.len(), 2);
    assert_eq!(usage[0]["componentId"], "modal");
    assert_eq!(usage[0]["componentName"], "Modal");
    assert_eq!(usage[0]["componentStatus"], "in_progress");
    // Dangling reference resolves to placeholders instead of failing
    assert_eq!(usage[1]["componentId"], "ghost-component");
    assert_eq!(usage[1]["componentName"], "Unknown");
    assert_eq!(usage[1]["componentStatus"], "not_started");
}

#[tokio::test]
async fn unknown_app_is_a_structured_404() {
    let response = get(test_router(), "/api/apps/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body, json!({ "error": "App not found" }));
}

#[tokio::test]
async fn teams_endpoint_passes_the_fixture_through() {
    let response = get(test_router(), "/api/teams").await;
    let body = body_json(response).await;

    assert_eq!(
        body,
        json!([
            { "id": "team-checkout", "name": "Checkout" },
            { "id": "team-payments", "name": "Payments" }
        ])
    );
}

#[tokio::test]
async fn burndown_endpoint_passes_the_fixture_through() {
    let response = get(test_router(), "/api/burndown").await;
    let body = body_json(response).await;

    assert_eq!(
        body,
        json!([
            { "date": "2026-07-06", "remaining": 2 },
            { "date": "2026-07-13", "remaining": 2 }
        ])
    );
}
