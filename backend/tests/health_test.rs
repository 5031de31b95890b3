//! Integration tests for health check endpoints

mod common;

use axum::http::StatusCode;

#[tokio::test]
#[ignore = "requires database"]
async fn test_health_endpoint() {
    let app = common::TestApp::new().await;

    let (status, body) = app.get("/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("healthy"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_liveness_endpoint() {
    let app = common::TestApp::new().await;

    let (status, body) = app.get("/health/live", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("alive"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_readiness_endpoint() {
    let app = common::TestApp::new().await;

    let (status, body) = app.get("/health/ready", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("ready"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_api_v1_root() {
    let app = common::TestApp::new().await;

    let (status, body) = app.get("/api/v1/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Property Manager API v1"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_units_listing() {
    let app = common::TestApp::new().await;
    app.cleanup().await;

    sqlx::query(
        "INSERT INTO units (unit_number, kind, rent) VALUES ('4B', 'apartment', 1200), ('G1', 'garage', 150)",
    )
    .execute(&app.pool)
    .await
    .unwrap();

    let (status, body) = app.get("/api/v1/units", None).await;
    assert_eq!(status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["results"], 2);

    // apartment-units only lists apartments
    let (status, body) = app.get("/api/v1/apartment-units", None).await;
    assert_eq!(status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["results"], 1);
    assert_eq!(body["data"]["units"][0]["unitNumber"], "4B");

    // rent filter is exact
    let (status, body) = app.get("/api/v1/units?rent=1200", None).await;
    assert_eq!(status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["results"], 1);
}
