// src/api/handlers/contact_handler.rs

use crate::api::dto::common::MessageResponse;
use crate::api::dto::contact_dto::ContactMessageDto;
use crate::api::handlers::auth_handler::AdminUser;
use crate::api::AppState;
use crate::error::AppResult;
use axum::{
    extract::{Json, Path, State},
    routing::{delete, get},
    Router,
};
use tracing::info;
use uuid::Uuid;

pub async fn list_contacts_handler(
    State(app_state): State<AppState>,
    _admin: AdminUser,
) -> AppResult<Json<Vec<ContactMessageDto>>> {
    let messages = app_state.contact_service.list_messages().await?;
    Ok(Json(messages))
}

pub async fn delete_contact_handler(
    State(app_state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    info!(email = %admin.email, contact_id = %id, "deleting contact message");

    app_state.contact_service.delete_message(id).await?;
    Ok(Json(MessageResponse::new("Contact deleted successfully")))
}

/// 管理画面の問い合わせ一覧・削除ルーター
pub fn contact_router() -> Router<AppState> {
    Router::new()
        .route("/api/admin/contacts", get(list_contacts_handler))
        .route("/api/admin/contacts/{id}", delete(delete_contact_handler))
}
