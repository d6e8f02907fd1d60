// tests/admin_auth_tests.rs

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use common::app_helper::{login_admin, setup_app};
use common::request::response_json;
use tower::ServiceExt;

#[tokio::test]
async fn test_admin_login_returns_token() {
    let test_app = setup_app().await;

    let payload = serde_json::json!({
        "email": "admin@example.com",
        "password": "test-admin-password",
    });
    let request = Request::builder()
        .method("POST")
        .uri("/api/admin/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();

    let response = test_app.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["email"], "admin@example.com");
}

#[tokio::test]
async fn test_admin_login_rejects_wrong_password() {
    let test_app = setup_app().await;

    let payload = serde_json::json!({
        "email": "admin@example.com",
        "password": "wrong-password",
    });
    let request = Request::builder()
        .method("POST")
        .uri("/api/admin/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();

    let response = test_app.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response_json(response).await;
    assert_eq!(body["detail"], "Invalid credentials");
}

#[tokio::test]
async fn test_admin_login_rejects_unknown_email() {
    let test_app = setup_app().await;

    let payload = serde_json::json!({
        "email": "intruder@example.com",
        "password": "test-admin-password",
    });
    let request = Request::builder()
        .method("POST")
        .uri("/api/admin/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();

    let response = test_app.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response_json(response).await;
    // メールとパスワードのどちらが違っても同じメッセージを返す
    assert_eq!(body["detail"], "Invalid credentials");
}

#[tokio::test]
async fn test_verify_without_header_returns_not_authenticated() {
    let test_app = setup_app().await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/admin/verify")
        .body(Body::empty())
        .unwrap();

    let response = test_app.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response_json(response).await;
    assert_eq!(body["detail"], "Not authenticated");
}

#[tokio::test]
async fn test_verify_with_malformed_header_returns_not_authenticated() {
    let test_app = setup_app().await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/admin/verify")
        .header(header::AUTHORIZATION, "Token abc123")
        .body(Body::empty())
        .unwrap();

    let response = test_app.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response_json(response).await;
    assert_eq!(body["detail"], "Not authenticated");
}

#[tokio::test]
async fn test_verify_with_garbage_token_returns_invalid_token() {
    let test_app = setup_app().await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/admin/verify")
        .header(header::AUTHORIZATION, "Bearer not-a-real-token")
        .body(Body::empty())
        .unwrap();

    let response = test_app.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response_json(response).await;
    assert_eq!(body["detail"], "Invalid or expired token");
}

#[tokio::test]
async fn test_verify_with_valid_token() {
    let test_app = setup_app().await;
    let token = login_admin(&test_app).await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/admin/verify")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = test_app.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["valid"], true);
    assert_eq!(body["email"], "admin@example.com");
}
