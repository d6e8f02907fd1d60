// src/api/handlers/public_handler.rs

use crate::api::dto::contact_dto::{ContactSubmitResponse, CreateContactMessageDto};
use crate::api::dto::gallery_dto::GalleryItemDto;
use crate::api::dto::service_dto::ServiceDto;
use crate::api::AppState;
use crate::error::AppResult;
use axum::{
    extract::{Json, State},
    routing::{get, post},
    Router,
};
use validator::Validate;

/// 公開サービス一覧（認証不要）
pub async fn public_services_handler(
    State(app_state): State<AppState>,
) -> AppResult<Json<Vec<ServiceDto>>> {
    let services = app_state.catalog_service.list_services().await?;
    Ok(Json(services))
}

/// 公開ギャラリー一覧（認証不要）
pub async fn public_gallery_handler(
    State(app_state): State<AppState>,
) -> AppResult<Json<Vec<GalleryItemDto>>> {
    let items = app_state.gallery_service.list_items().await?;
    Ok(Json(items))
}

/// 問い合わせフォーム送信（認証不要）
pub async fn submit_contact_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateContactMessageDto>,
) -> AppResult<Json<ContactSubmitResponse>> {
    payload.validate()?;

    let response = app_state.contact_service.submit(payload).await?;
    Ok(Json(response))
}

/// 公開側ルーター
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/api/services", get(public_services_handler))
        .route("/api/gallery", get(public_gallery_handler))
        .route("/api/contact", post(submit_contact_handler))
}
