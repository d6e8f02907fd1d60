// src/api/handlers/gallery_handler.rs

use crate::api::dto::common::MessageResponse;
use crate::api::dto::gallery_dto::{CreateGalleryItemDto, GalleryItemDto, UpdateGalleryItemDto};
use crate::api::handlers::auth_handler::AdminUser;
use crate::api::AppState;
use crate::error::AppResult;
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

pub async fn list_gallery_handler(
    State(app_state): State<AppState>,
    _admin: AdminUser,
) -> AppResult<Json<Vec<GalleryItemDto>>> {
    let items = app_state.gallery_service.list_items().await?;
    Ok(Json(items))
}

pub async fn create_gallery_item_handler(
    State(app_state): State<AppState>,
    admin: AdminUser,
    Json(payload): Json<CreateGalleryItemDto>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    info!(email = %admin.email, "creating gallery item");

    let item = app_state.gallery_service.create_item(payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update_gallery_item_handler(
    State(app_state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateGalleryItemDto>,
) -> AppResult<Json<GalleryItemDto>> {
    payload.validate()?;

    info!(email = %admin.email, item_id = %id, "updating gallery item");

    let item = app_state.gallery_service.update_item(id, payload).await?;
    Ok(Json(item))
}

pub async fn delete_gallery_item_handler(
    State(app_state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    info!(email = %admin.email, item_id = %id, "deleting gallery item");

    app_state.gallery_service.delete_item(id).await?;
    Ok(Json(MessageResponse::new("Gallery item deleted successfully")))
}

/// 管理画面のギャラリーCRUDルーター
pub fn gallery_router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/admin/gallery",
            get(list_gallery_handler).post(create_gallery_item_handler),
        )
        .route(
            "/api/admin/gallery/{id}",
            axum::routing::put(update_gallery_item_handler).delete(delete_gallery_item_handler),
        )
}
