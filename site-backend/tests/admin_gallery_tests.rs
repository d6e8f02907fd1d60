// tests/admin_gallery_tests.rs

mod common;

use axum::http::StatusCode;
use common::app_helper::{login_admin, setup_app};
use common::request::{create_empty_request, create_request, response_json};
use tower::ServiceExt;

#[tokio::test]
async fn test_list_gallery_returns_seeded_content_newest_first() {
    let test_app = setup_app().await;
    let token = login_admin(&test_app).await;

    let request = create_empty_request("GET", "/api/admin/gallery", &token);
    let response = test_app.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 5);

    // created_at 降順：初期データは定義順で返る
    assert_eq!(items[0]["title"], "Débarras hangar complet");
    assert_eq!(items[4]["title"], "Vide maison");

    let timestamps: Vec<&str> = items
        .iter()
        .map(|i| i["created_at"].as_str().unwrap())
        .collect();
    let mut sorted = timestamps.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(timestamps, sorted);
}

#[tokio::test]
async fn test_create_gallery_item_appears_first() {
    let test_app = setup_app().await;
    let token = login_admin(&test_app).await;

    let payload = serde_json::json!({
        "title": "Nettoyage de cave",
        "description": "Cave nettoyée de fond en comble",
        "category": "cleaning",
        "image": "https://example.com/cave.jpg",
    });
    let request = create_request("POST", "/api/admin/gallery", &token, &payload);
    let response = test_app.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = response_json(response).await;
    assert_eq!(created["category"], "cleaning");

    // 新しい順なので作成したアイテムが先頭
    let request = create_empty_request("GET", "/api/admin/gallery", &token);
    let response = test_app.app.clone().oneshot(request).await.unwrap();
    let body = response_json(response).await;
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 6);
    assert_eq!(items[0]["title"], "Nettoyage de cave");
}

#[tokio::test]
async fn test_create_gallery_item_rejects_unknown_category() {
    let test_app = setup_app().await;
    let token = login_admin(&test_app).await;

    let payload = serde_json::json!({
        "title": "Divers",
        "category": "random-category",
        "image": "https://example.com/divers.jpg",
    });
    let request = create_request("POST", "/api/admin/gallery", &token, &payload);
    let response = test_app.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_update_gallery_item_before_after_images() {
    let test_app = setup_app().await;
    let token = login_admin(&test_app).await;

    let request = create_empty_request("GET", "/api/admin/gallery", &token);
    let response = test_app.app.clone().oneshot(request).await.unwrap();
    let body = response_json(response).await;
    let first = &body.as_array().unwrap()[0];
    let id = first["id"].as_str().unwrap().to_string();
    let original_title = first["title"].as_str().unwrap().to_string();

    let payload = serde_json::json!({
        "image_before": "https://example.com/avant.jpg",
        "image_after": "https://example.com/apres.jpg",
    });
    let request = create_request(
        "PUT",
        &format!("/api/admin/gallery/{}", id),
        &token,
        &payload,
    );
    let response = test_app.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated = response_json(response).await;
    assert_eq!(updated["image_before"], "https://example.com/avant.jpg");
    assert_eq!(updated["image_after"], "https://example.com/apres.jpg");
    // 触っていないフィールドは維持される
    assert_eq!(updated["title"], original_title.as_str());
}

#[tokio::test]
async fn test_update_missing_gallery_item_returns_404() {
    let test_app = setup_app().await;
    let token = login_admin(&test_app).await;

    let payload = serde_json::json!({ "title": "Quelconque" });
    let request = create_request(
        "PUT",
        &format!("/api/admin/gallery/{}", uuid::Uuid::new_v4()),
        &token,
        &payload,
    );
    let response = test_app.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response_json(response).await;
    assert_eq!(body["detail"], "Gallery item not found");
}

#[tokio::test]
async fn test_delete_gallery_item() {
    let test_app = setup_app().await;
    let token = login_admin(&test_app).await;

    let request = create_empty_request("GET", "/api/admin/gallery", &token);
    let response = test_app.app.clone().oneshot(request).await.unwrap();
    let body = response_json(response).await;
    let id = body.as_array().unwrap()[0]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let request = create_empty_request("DELETE", &format!("/api/admin/gallery/{}", id), &token);
    let response = test_app.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["message"], "Gallery item deleted successfully");

    let request = create_empty_request("GET", "/api/admin/gallery", &token);
    let response = test_app.app.clone().oneshot(request).await.unwrap();
    let body = response_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 4);
}
