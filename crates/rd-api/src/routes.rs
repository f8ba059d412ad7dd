//! API routes

use axum::{
    routing::{get, post, put},
    Json, Router,
};
use serde::Serialize;

use crate::extractors::AppState;
use crate::handlers::{allocation, escalations, scenarios, stakeholders, tasks};

/// Create the complete API router
pub fn router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_router())
}

fn api_v1_router() -> Router<AppState> {
    Router::new()
        .route("/", get(api_root))
        .nest("/allocation", allocation_router())
        .nest("/stakeholders", stakeholders_router())
        .nest("/tasks", tasks_router())
        .nest("/escalations", escalations_router())
        .nest("/scenarios", scenarios_router())
}

fn allocation_router() -> Router<AppState> {
    Router::new()
        .route("/summary", get(allocation::get_summary))
        .route("/impact", post(allocation::calculate_impact))
}

fn stakeholders_router() -> Router<AppState> {
    Router::new()
        .route("/", get(stakeholders::list_stakeholders))
        .route("/:id", get(stakeholders::get_stakeholder))
}

fn tasks_router() -> Router<AppState> {
    Router::new()
        .route("/", get(tasks::list_tasks))
        .route("/bulk_assign", post(tasks::bulk_assign))
        .route("/:id", get(tasks::get_task))
        .route("/:id/assignee", put(tasks::assign_task))
}

fn escalations_router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(escalations::scan_escalations).post(escalations::process_escalations),
    )
}

fn scenarios_router() -> Router<AppState> {
    Router::new()
        .route("/", get(scenarios::list_scenarios))
        .route("/costs", get(scenarios::list_resource_costs))
        .route("/optimize", post(scenarios::run_optimization))
        .route("/:id", get(scenarios::get_scenario))
}

async fn api_root() -> Json<ApiRoot> {
    Json(ApiRoot {
        type_name: "Root",
        instance_name: "ResourceDesk",
        core_version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRoot {
    #[serde(rename = "_type")]
    type_name: &'static str,
    instance_name: &'static str,
    core_version: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use chrono::NaiveDate;
    use rd_core::config::AppConfig;
    use rd_core::traits::FixedClock;
    use rd_store::seed;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        let store = Arc::new(seed::demo_store().unwrap());
        let clock = Arc::new(FixedClock(NaiveDate::from_ymd_opt(2025, 5, 16).unwrap()));
        router().with_state(AppState::new(store, &AppConfig::default(), clock))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_summary() {
        let (status, body) = send(&app(), Method::GET, "/api/v1/allocation/summary", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalStakeholders"], 6);
        assert_eq!(body["overallocatedStakeholders"], 3);
        assert_eq!(body["unassignedTasks"], 3);
    }

    #[tokio::test]
    async fn test_unassigned_tasks_listing() {
        let (status, body) = send(&app(), Method::GET, "/api/v1/tasks?assignee=unassigned", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 3);
    }

    #[tokio::test]
    async fn test_filtered_sorted_listing() {
        let uri = "/api/v1/tasks?assignee=2&priority=medium&sort=estimated_hours_desc";
        let (status, body) = send(&app(), Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<i64> = body["elements"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![8, 14, 16, 11]);
    }

    #[tokio::test]
    async fn test_bad_sort_is_rejected() {
        let (status, body) = send(&app(), Method::GET, "/api/v1/tasks?sort=title_asc", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["_type"], "Error");
    }

    #[tokio::test]
    async fn test_assign_then_summary_updates() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/v1/tasks/18/assignee",
            Some(json!({ "assigneeId": 4 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["assigneeId"], 4);

        let (_, summary) = send(&app, Method::GET, "/api/v1/allocation/summary", None).await;
        assert_eq!(summary["unassignedTasks"], 2);
    }

    #[tokio::test]
    async fn test_assign_unknown_task_is_404() {
        let (status, body) = send(
            &app(),
            Method::PUT,
            "/api/v1/tasks/999/assignee",
            Some(json!({ "assigneeId": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["errorIdentifier"], "urn:resourcedesk:api:v1:errors:NotFound");
    }

    #[tokio::test]
    async fn test_bulk_assign_reports_skipped() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/v1/tasks/bulk_assign",
            Some(json!({ "taskIds": [19, 404], "assigneeId": null })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["applied"].as_array().unwrap().len(), 1);
        assert_eq!(body["skipped"], json!([404]));
    }

    #[tokio::test]
    async fn test_impact_unassign() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/v1/allocation/impact",
            Some(json!({ "taskIds": [13, 17] })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["newAssigneeImpact"].is_null());
        let lisa = &body["currentAssigneeImpact"][0];
        assert_eq!(lisa["stakeholderId"], 6);
        assert_eq!(lisa["projectedUtilizationRate"], 0);
    }

    #[tokio::test]
    async fn test_escalation_scan() {
        let (status, body) = send(&app(), Method::GET, "/api/v1/escalations", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["elements"][0]["level"], "critical");
        assert_eq!(body["elements"][0]["escalationPath"][3], "Executive Sponsor");
    }

    #[tokio::test]
    async fn test_escalation_bad_date_is_400() {
        let task = json!({
            "id": 1,
            "title": "Broken",
            "dueDate": "not-a-date",
            "completionPercentage": 10
        });
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/v1/escalations",
            Some(json!({ "tasks": [task] })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errorIdentifier"], "urn:resourcedesk:api:v1:errors:InvalidDate");
    }

    #[tokio::test]
    async fn test_escalation_keeps_fractional_completion() {
        let task = |pct: f64| {
            json!({
                "id": 1,
                "title": "Dashboard charts",
                "dueDate": "2025-05-21",
                "completionPercentage": pct
            })
        };
        let app = app();

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/escalations",
            Some(json!({ "tasks": [task(64.4)] })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 0);

        let (_, body) = send(
            &app,
            Method::POST,
            "/api/v1/escalations",
            Some(json!({ "tasks": [task(64.2)] })),
        )
        .await;
        assert_eq!(body["elements"][0]["level"], "low");
        assert_eq!(body["elements"][0]["task"]["completionPercentage"], 64.2);
    }

    #[tokio::test]
    async fn test_optimize() {
        let constraints = json!({
            "maxBudget": 120000,
            "maxDuration": 12,
            "prioritizeCostSaving": false,
            "prioritizeDeliverySpeed": false
        });
        let (status, body) = send(&app(), Method::POST, "/api/v1/scenarios/optimize", Some(constraints)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recommendedScenarioId"], 4);
        assert_eq!(body["potentialSavings"], 17940);
        assert_eq!(body["riskLevel"], "Low");
    }

    #[tokio::test]
    async fn test_scenario_routes() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/api/v1/scenarios/costs", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 6);

        let (status, _) = send(&app, Method::GET, "/api/v1/scenarios/2", None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(&app, Method::GET, "/api/v1/scenarios/9", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let app = app();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/tasks/bulk_assign")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
