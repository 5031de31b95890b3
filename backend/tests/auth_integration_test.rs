//! Integration tests for the building manager auth flow

mod common;

use axum::http::StatusCode;
use serde_json::json;

fn unique_username() -> String {
    format!("manager@it-{}", uuid::Uuid::new_v4().simple())
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_signup_success_sets_cookie_and_strips_hash() {
    let app = common::TestApp::new().await;

    let username = unique_username();
    let body = json!({
        "username": username,
        "password": "Abc12345!"
    });

    let (status, headers, response) = app
        .post_full("/api/v1/building-manager/signup", &body.to_string())
        .await;

    assert_eq!(status, StatusCode::OK);

    let cookie = common::session_cookie_from(&headers).expect("signup must set the jwt cookie");
    assert!(cookie.len() > "jwt=".len());

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["status"], "success");
    assert_eq!(response["data"]["account"]["username"], username);
    assert_eq!(response["data"]["account"]["role"], "buildingManager");
    // the hash never appears under any name
    assert!(!response.to_string().to_lowercase().contains("password"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_signup_synthesizes_placeholder_email_over_provided_one() {
    let app = common::TestApp::new().await;

    let username = unique_username();
    let body = json!({
        "username": username,
        "email": "provided@example.com",
        "password": "Abc12345!"
    });

    let (status, response) = app
        .post("/api/v1/building-manager/signup", &body.to_string())
        .await;

    assert_eq!(status, StatusCode::OK);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    let email = response["data"]["account"]["email"].as_str().unwrap();
    // placeholder from the username wins, built from its offset-8 suffix
    let suffix = &username[8..];
    assert_eq!(email, format!("dummyemail{}@example.com", suffix));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_duplicate_username_names_the_field() {
    let app = common::TestApp::new().await;

    let body = json!({
        "username": unique_username(),
        "password": "Abc12345!"
    })
    .to_string();

    let (status, _) = app.post("/api/v1/building-manager/signup", &body).await;
    assert_eq!(status, StatusCode::OK);

    let (status, response) = app.post("/api/v1/building-manager/signup", &body).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(response.contains("\"status\":\"fail\""));
    assert!(response.contains("Duplicate fields not allowed"));
    assert!(response.contains("username"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_failures_are_indistinguishable() {
    let app = common::TestApp::new().await;

    let username = unique_username();
    let signup = json!({ "username": username, "password": "Abc12345!" });
    let (status, _) = app
        .post("/api/v1/building-manager/signup", &signup.to_string())
        .await;
    assert_eq!(status, StatusCode::OK);

    // wrong password for a real account
    let wrong_password = json!({ "username": username, "password": "Wrong1!pw" });
    let (status_a, body_a) = app
        .post("/api/v1/building-manager/login", &wrong_password.to_string())
        .await;

    // account that does not exist at all
    let unknown_user = json!({ "username": unique_username(), "password": "Abc12345!" });
    let (status_b, body_b) = app
        .post("/api/v1/building-manager/login", &unknown_user.to_string())
        .await;

    assert_eq!(status_a, StatusCode::UNAUTHORIZED);
    assert_eq!(status_b, StatusCode::UNAUTHORIZED);
    assert_eq!(body_a, body_b);
    assert!(body_a.contains("Wrong username or password"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_then_current_roundtrip() {
    let app = common::TestApp::new().await;

    let username = unique_username();
    let signup = json!({ "username": username, "password": "Abc12345!" });
    app.post("/api/v1/building-manager/signup", &signup.to_string())
        .await;

    let login = json!({ "username": username, "password": "Abc12345!" });
    let (status, headers, _) = app
        .post_full("/api/v1/building-manager/login", &login.to_string())
        .await;
    assert_eq!(status, StatusCode::OK);

    let cookie = common::session_cookie_from(&headers).expect("login must set the jwt cookie");
    let (status, body) = app
        .get("/api/v1/building-manager/current", Some(&cookie))
        .await;

    assert_eq!(status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["data"]["account"]["username"], username);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_current_without_cookie_is_unauthorized() {
    let app = common::TestApp::new().await;

    let (status, body) = app.get("/api/v1/building-manager/current", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.contains("Token is missing"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_federated_signup_is_idempotent() {
    let app = common::TestApp::new().await;

    let email = format!("fed-{}@example.com", uuid::Uuid::new_v4().simple());
    let body = json!({ "email": email }).to_string();

    let (status, first) = app
        .post("/api/v1/building-manager/signup-google", &body)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, second) = app
        .post("/api/v1/building-manager/signup-google", &body)
        .await;
    assert_eq!(status, StatusCode::OK);

    let first: serde_json::Value = serde_json::from_str(&first).unwrap();
    let second: serde_json::Value = serde_json::from_str(&second).unwrap();
    assert_eq!(
        first["data"]["account"]["id"],
        second["data"]["account"]["id"]
    );

    // synthesized username is manager@<local part>, and no session starts
    let local = email.split('@').next().unwrap();
    assert_eq!(
        first["data"]["account"]["username"],
        format!("manager@{}", local)
    );
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_federated_account_cannot_password_login() {
    let app = common::TestApp::new().await;

    let email = format!("fed-{}@example.com", uuid::Uuid::new_v4().simple());
    let body = json!({ "email": email }).to_string();
    let (status, response) = app
        .post("/api/v1/building-manager/signup-google", &body)
        .await;
    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    let username = response["data"]["account"]["username"].as_str().unwrap();

    let login = json!({ "username": username, "password": "Abc12345!" });
    let (status, body) = app
        .post("/api/v1/building-manager/login", &login.to_string())
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.contains("Wrong username or password"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_lookup_by_email_never_creates() {
    let app = common::TestApp::new().await;

    let email = format!("missing-{}@example.com", uuid::Uuid::new_v4().simple());
    let body = json!({ "email": email }).to_string();

    let (status, _) = app
        .post("/api/v1/building-manager/current-by-email", &body)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // still absent afterwards
    let (status, _) = app
        .post("/api/v1/building-manager/current-by-email", &body)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
