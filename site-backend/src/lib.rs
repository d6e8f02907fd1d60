// src/lib.rs

pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod repository;
pub mod service;
pub mod utils;

use crate::api::handlers::auth_handler::auth_router;
use crate::api::handlers::contact_handler::contact_router;
use crate::api::handlers::gallery_handler::gallery_router;
use crate::api::handlers::public_handler::public_router;
use crate::api::handlers::service_handler::service_router;
use crate::api::handlers::upload_handler::upload_router;
use crate::api::AppState;
use crate::config::AppConfig;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::service::auth_service::AuthService;
use crate::service::catalog_service::CatalogService;
use crate::service::contact_service::ContactService;
use crate::service::gallery_service::GalleryService;
use crate::service::upload_service::UploadService;
use crate::utils::email::EmailService;
use crate::utils::jwt::JwtManager;
use crate::utils::password::PasswordManager;
use axum::http::HeaderValue;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// ルーター全体を構築する
///
/// 公開側（サービス・ギャラリー・問い合わせ）と管理側（要Bearerトークン）を
/// 1つのRouterにまとめ、アップロード画像の静的配信も行う。
pub fn create_app(config: &AppConfig, db_pool: DbPool) -> AppResult<Router> {
    let password_manager = Arc::new(PasswordManager::new());
    let jwt_manager = Arc::new(
        JwtManager::new(config.jwt.clone())
            .map_err(|e| AppError::InternalServerError(e.to_string()))?,
    );
    let email_service = Arc::new(
        EmailService::new(config.email.clone())
            .map_err(|e| AppError::InternalServerError(e.to_string()))?,
    );

    let state = AppState {
        auth_service: Arc::new(AuthService::from_config(
            &config.admin,
            password_manager,
            jwt_manager,
        )?),
        catalog_service: Arc::new(CatalogService::new(db_pool.clone())),
        gallery_service: Arc::new(GalleryService::new(db_pool.clone())),
        contact_service: Arc::new(ContactService::new(db_pool, email_service)),
        upload_service: Arc::new(UploadService::new(config.upload.dir.clone())),
    };

    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(public_router())
        .merge(auth_router())
        .merge(service_router())
        .merge(gallery_router())
        .merge(contact_router())
        .merge(upload_router(config.upload.max_size))
        // 旧フロントが参照する /uploads と現行の /api/uploads の両方で配信する
        .nest_service("/uploads", ServeDir::new(&config.upload.dir))
        .nest_service("/api/uploads", ServeDir::new(&config.upload.dir))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(cors)
        .with_state(state);

    Ok(app)
}
