// src/api/handlers/service_handler.rs

use crate::api::dto::common::MessageResponse;
use crate::api::dto::service_dto::{CreateServiceDto, ServiceDto, UpdateServiceDto};
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

pub async fn list_services_handler(
    State(app_state): State<AppState>,
    _admin: AdminUser,
) -> AppResult<Json<Vec<ServiceDto>>> {
    let services = app_state.catalog_service.list_services().await?;
    Ok(Json(services))
}

pub async fn create_service_handler(
    State(app_state): State<AppState>,
    admin: AdminUser,
    Json(payload): Json<CreateServiceDto>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    info!(email = %admin.email, title = %payload.title, "creating service");

    let service = app_state.catalog_service.create_service(payload).await?;
    Ok((StatusCode::CREATED, Json(service)))
}

pub async fn update_service_handler(
    State(app_state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateServiceDto>,
) -> AppResult<Json<ServiceDto>> {
    payload.validate()?;

    info!(email = %admin.email, service_id = %id, "updating service");

    let service = app_state.catalog_service.update_service(id, payload).await?;
    Ok(Json(service))
}

pub async fn delete_service_handler(
    State(app_state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    info!(email = %admin.email, service_id = %id, "deleting service");

    app_state.catalog_service.delete_service(id).await?;
    Ok(Json(MessageResponse::new("Service deleted successfully")))
}

/// 管理画面のサービスCRUDルーター
pub fn service_router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/admin/services",
            get(list_services_handler).post(create_service_handler),
        )
        .route(
            "/api/admin/services/{id}",
            axum::routing::put(update_service_handler).delete(delete_service_handler),
        )
}
