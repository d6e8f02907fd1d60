// tests/admin_services_tests.rs

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::app_helper::{login_admin, setup_app};
use common::request::{create_empty_request, create_request, response_json};
use tower::ServiceExt;

#[tokio::test]
async fn test_list_services_requires_auth() {
    let test_app = setup_app().await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/admin/services")
        .body(Body::empty())
        .unwrap();

    let response = test_app.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_services_returns_seeded_content_in_display_order() {
    let test_app = setup_app().await;
    let token = login_admin(&test_app).await;

    let request = create_empty_request("GET", "/api/admin/services", &token);
    let response = test_app.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let services = body.as_array().unwrap();
    assert_eq!(services.len(), 4);

    // 表示順昇順、ワイヤ名は order
    let orders: Vec<i64> = services
        .iter()
        .map(|s| s["order"].as_i64().unwrap())
        .collect();
    assert_eq!(orders, vec![1, 2, 3, 4]);
    assert_eq!(services[0]["title"], "Débarras d'encombrants");
    assert!(services[0].get("display_order").is_none());
}

#[tokio::test]
async fn test_create_service() {
    let test_app = setup_app().await;
    let token = login_admin(&test_app).await;

    let payload = serde_json::json!({
        "title": "Nettoyage après sinistre",
        "description": "Remise en état complète après dégât des eaux ou incendie.",
        "image": "https://example.com/sinistre.jpg",
        "order": 5,
    });
    let request = create_request("POST", "/api/admin/services", &token, &payload);
    let response = test_app.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = response_json(response).await;
    assert_eq!(created["title"], "Nettoyage après sinistre");
    assert_eq!(created["order"], 5);
    assert!(created["id"].as_str().is_some());

    // 一覧が5件になり、新しいサービスが末尾に来る
    let request = create_empty_request("GET", "/api/admin/services", &token);
    let response = test_app.app.clone().oneshot(request).await.unwrap();
    let body = response_json(response).await;
    let services = body.as_array().unwrap();
    assert_eq!(services.len(), 5);
    assert_eq!(services[4]["title"], "Nettoyage après sinistre");
}

#[tokio::test]
async fn test_create_service_rejects_empty_title() {
    let test_app = setup_app().await;
    let token = login_admin(&test_app).await;

    let payload = serde_json::json!({
        "title": "",
        "description": "Une description valide.",
        "image": "https://example.com/image.jpg",
    });
    let request = create_request("POST", "/api/admin/services", &token, &payload);
    let response = test_app.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_update_service_partial() {
    let test_app = setup_app().await;
    let token = login_admin(&test_app).await;

    let request = create_empty_request("GET", "/api/admin/services", &token);
    let response = test_app.app.clone().oneshot(request).await.unwrap();
    let body = response_json(response).await;
    let first = &body.as_array().unwrap()[0];
    let id = first["id"].as_str().unwrap().to_string();
    let original_description = first["description"].as_str().unwrap().to_string();
    let original_updated_at = first["updated_at"].as_str().unwrap().to_string();

    // タイトルだけ更新、他フィールドは維持される
    let payload = serde_json::json!({ "title": "Débarras express" });
    let request = create_request(
        "PUT",
        &format!("/api/admin/services/{}", id),
        &token,
        &payload,
    );
    let response = test_app.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated = response_json(response).await;
    assert_eq!(updated["title"], "Débarras express");
    assert_eq!(updated["description"], original_description.as_str());
    assert_ne!(updated["updated_at"], original_updated_at.as_str());
}

#[tokio::test]
async fn test_update_missing_service_returns_404() {
    let test_app = setup_app().await;
    let token = login_admin(&test_app).await;

    let payload = serde_json::json!({ "title": "Quelconque" });
    let request = create_request(
        "PUT",
        &format!("/api/admin/services/{}", uuid::Uuid::new_v4()),
        &token,
        &payload,
    );
    let response = test_app.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response_json(response).await;
    assert_eq!(body["detail"], "Service not found");
}

#[tokio::test]
async fn test_delete_service() {
    let test_app = setup_app().await;
    let token = login_admin(&test_app).await;

    let request = create_empty_request("GET", "/api/admin/services", &token);
    let response = test_app.app.clone().oneshot(request).await.unwrap();
    let body = response_json(response).await;
    let id = body.as_array().unwrap()[0]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let request = create_empty_request("DELETE", &format!("/api/admin/services/{}", id), &token);
    let response = test_app.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["message"], "Service deleted successfully");

    // 2回目の削除は404
    let request = create_empty_request("DELETE", &format!("/api/admin/services/{}", id), &token);
    let response = test_app.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response_json(response).await;
    assert_eq!(body["detail"], "Service not found");
}
