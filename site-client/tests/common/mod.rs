// tests/common/mod.rs

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// JWTの形をしたダミートークン（署名は検証されない前提）
pub fn fake_jwt() -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(r#"{"sub":"admin@example.com","role":"admin"}"#);
    format!("{header}.{payload}.stub-signature")
}

pub fn service_json(title: &str, order: i32) -> serde_json::Value {
    serde_json::json!({
        "id": uuid::Uuid::new_v4(),
        "title": title,
        "description": "Description de test",
        "image": "/api/uploads/test.png",
        "order": order,
        "created_at": "2026-08-01T10:00:00Z",
        "updated_at": "2026-08-01T10:00:00Z",
    })
}

pub fn gallery_json(title: &str, category: &str) -> serde_json::Value {
    serde_json::json!({
        "id": uuid::Uuid::new_v4(),
        "title": title,
        "description": null,
        "category": category,
        "image": "/api/uploads/gallery.png",
        "image_before": null,
        "image_after": null,
        "created_at": "2026-08-01T10:00:00Z",
        "updated_at": "2026-08-01T10:00:00Z",
    })
}

/// スタブサーバの挙動設定
pub struct StubOptions {
    pub verify_ok: bool,
    pub create_delay: Duration,
    pub public_services: serde_json::Value,
    pub public_gallery: serde_json::Value,
}

impl Default for StubOptions {
    fn default() -> Self {
        Self {
            verify_ok: true,
            create_delay: Duration::ZERO,
            public_services: serde_json::json!([]),
            public_gallery: serde_json::json!([]),
        }
    }
}

/// エンドポイントごとのヒット数を数えるスタブ状態
pub struct StubState {
    options: StubOptions,
    pub verify_gets: AtomicUsize,
    pub services_gets: AtomicUsize,
    pub gallery_gets: AtomicUsize,
    pub contacts_gets: AtomicUsize,
    pub service_posts: AtomicUsize,
    pub contact_posts: AtomicUsize,
    pub public_services_gets: AtomicUsize,
    pub public_gallery_gets: AtomicUsize,
}

impl StubState {
    pub fn total(&self) -> usize {
        self.verify_gets.load(Ordering::SeqCst)
            + self.services_gets.load(Ordering::SeqCst)
            + self.gallery_gets.load(Ordering::SeqCst)
            + self.contacts_gets.load(Ordering::SeqCst)
            + self.service_posts.load(Ordering::SeqCst)
            + self.contact_posts.load(Ordering::SeqCst)
            + self.public_services_gets.load(Ordering::SeqCst)
            + self.public_gallery_gets.load(Ordering::SeqCst)
    }
}

async fn login_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "token": fake_jwt(), "email": "admin@example.com" }))
}

async fn verify_handler(State(state): State<Arc<StubState>>) -> Response {
    state.verify_gets.fetch_add(1, Ordering::SeqCst);
    if state.options.verify_ok {
        Json(serde_json::json!({ "valid": true, "email": "admin@example.com" })).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "detail": "Invalid or expired token" })),
        )
            .into_response()
    }
}

async fn admin_services_handler(State(state): State<Arc<StubState>>) -> Json<serde_json::Value> {
    state.services_gets.fetch_add(1, Ordering::SeqCst);
    Json(serde_json::json!([service_json("Service géré", 1)]))
}

async fn create_service_handler(State(state): State<Arc<StubState>>) -> Response {
    tokio::time::sleep(state.options.create_delay).await;
    state.service_posts.fetch_add(1, Ordering::SeqCst);
    (StatusCode::CREATED, Json(service_json("Créé", 9))).into_response()
}

async fn admin_gallery_handler(State(state): State<Arc<StubState>>) -> Json<serde_json::Value> {
    state.gallery_gets.fetch_add(1, Ordering::SeqCst);
    Json(serde_json::json!([]))
}

async fn admin_contacts_handler(State(state): State<Arc<StubState>>) -> Json<serde_json::Value> {
    state.contacts_gets.fetch_add(1, Ordering::SeqCst);
    Json(serde_json::json!([]))
}

async fn public_services_handler(State(state): State<Arc<StubState>>) -> Json<serde_json::Value> {
    state.public_services_gets.fetch_add(1, Ordering::SeqCst);
    Json(state.options.public_services.clone())
}

async fn public_gallery_handler(State(state): State<Arc<StubState>>) -> Json<serde_json::Value> {
    state.public_gallery_gets.fetch_add(1, Ordering::SeqCst);
    Json(state.options.public_gallery.clone())
}

async fn submit_contact_handler(State(state): State<Arc<StubState>>) -> Json<serde_json::Value> {
    state.contact_posts.fetch_add(1, Ordering::SeqCst);
    Json(serde_json::json!({
        "message": "Contact form submitted successfully",
        "id": uuid::Uuid::new_v4(),
    }))
}

async fn upload_handler(State(_state): State<Arc<StubState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "url": format!("/api/uploads/{}.png", uuid::Uuid::new_v4()),
        "filename": "photo.png",
    }))
}

/// バックエンドを模したスタブサーバを127.0.0.1:0で起動する
pub async fn spawn_stub(options: StubOptions) -> (String, Arc<StubState>) {
    let state = Arc::new(StubState {
        options,
        verify_gets: AtomicUsize::new(0),
        services_gets: AtomicUsize::new(0),
        gallery_gets: AtomicUsize::new(0),
        contacts_gets: AtomicUsize::new(0),
        service_posts: AtomicUsize::new(0),
        contact_posts: AtomicUsize::new(0),
        public_services_gets: AtomicUsize::new(0),
        public_gallery_gets: AtomicUsize::new(0),
    });

    let app = Router::new()
        .route("/api/services", get(public_services_handler))
        .route("/api/gallery", get(public_gallery_handler))
        .route("/api/contact", post(submit_contact_handler))
        .route("/api/admin/login", post(login_handler))
        .route("/api/admin/verify", get(verify_handler))
        .route(
            "/api/admin/services",
            get(admin_services_handler).post(create_service_handler),
        )
        .route("/api/admin/gallery", get(admin_gallery_handler))
        .route("/api/admin/contacts", get(admin_contacts_handler))
        .route("/api/admin/upload-image", post(upload_handler))
        .with_state(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), state)
}
