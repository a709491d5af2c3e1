//! End-to-end tests for the HTTP API.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use discount_allocator_config::Settings;
use discount_allocator_server::{create_router, AppState};

fn router() -> axum::Router {
    create_router(AppState::new(Settings::default()))
}

fn allocate_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/allocate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn valid_body() -> serde_json::Value {
    serde_json::json!({
        "siteKitty": 10000,
        "salesAgents": [
            {"id": "A1", "performanceScore": 90, "seniorityMonths": 18,
             "targetAchievedPercent": 85, "activeClients": 12},
            {"id": "A2", "performanceScore": 70, "seniorityMonths": 6,
             "targetAchievedPercent": 60, "activeClients": 8}
        ]
    })
}

#[tokio::test]
async fn allocate_returns_conserved_output() {
    let response = router().oneshot(allocate_request(valid_body())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    let allocations = json["allocations"].as_array().unwrap();
    assert_eq!(allocations.len(), 2);
    let total: i64 = allocations
        .iter()
        .map(|a| a["assignedDiscount"].as_i64().unwrap())
        .sum();
    assert_eq!(total, 10_000);
    assert_eq!(json["summary"]["totalAllocated"], 10_000);
    assert_eq!(json["summary"]["remainingKitty"], 0);
    assert!(allocations[0]["justification"].is_string());
}

#[tokio::test]
async fn missing_fields_return_400_with_contract_message() {
    let response = router()
        .oneshot(allocate_request(serde_json::json!({"siteKitty": 10000})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert_eq!(
        json["error"],
        "Invalid input. Required fields: siteKitty, salesAgents (array)"
    );
}

#[tokio::test]
async fn non_positive_kitty_returns_400() {
    let mut body = valid_body();
    body["siteKitty"] = serde_json::json!(0);
    let response = router().oneshot(allocate_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert_eq!(json["error"], "siteKitty must be a positive number");
}

#[tokio::test]
async fn empty_roster_returns_400() {
    let mut body = valid_body();
    body["salesAgents"] = serde_json::json!([]);
    let response = router().oneshot(allocate_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert_eq!(json["error"], "salesAgents array cannot be empty");
}

#[tokio::test]
async fn malformed_json_returns_400() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/allocate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn zero_weight_override_returns_400() {
    let mut body = valid_body();
    body["config"] = serde_json::json!({
        "weights": {
            "performanceScore": 0.0,
            "seniorityMonths": 0.0,
            "targetAchievedPercent": 0.0,
            "activeClients": 0.0
        }
    });
    let response = router().oneshot(allocate_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert_eq!(
        json["error"],
        "total score across all agents is zero; proportional allocation is undefined"
    );
}

#[tokio::test]
async fn health_and_ready_respond() {
    let health = router()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(health.status(), StatusCode::OK);
    let json = response_json(health).await;
    assert_eq!(json["status"], "healthy");

    let ready = router()
        .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(ready.status(), StatusCode::OK);
}
