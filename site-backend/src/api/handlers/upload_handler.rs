// src/api/handlers/upload_handler.rs

use crate::api::dto::upload_dto::UploadImageResponse;
use crate::api::handlers::auth_handler::AdminUser;
use crate::api::AppState;
use crate::error::{AppError, AppResult};
use axum::extract::DefaultBodyLimit;
use axum::{
    extract::{Json, Multipart, State},
    routing::post,
    Router,
};
use tracing::info;

/// 画像アップロードハンドラー
///
/// multipartの `file` フィールドを受け取り、保存先URLを返す。
pub async fn upload_image_handler(
    State(app_state): State<AppState>,
    admin: AdminUser,
    mut multipart: Multipart,
) -> AppResult<Json<UploadImageResponse>> {
    // multipartデータを処理
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read multipart data: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        if name == "file" {
            // ファイル名を取得
            let file_name = field
                .file_name()
                .ok_or_else(|| AppError::BadRequest("File name is required".to_string()))?
                .to_string();

            let content_type = field
                .content_type()
                .map(|ct| ct.to_string())
                .unwrap_or_else(|| "application/octet-stream".to_string());

            // ファイルデータを読み込む
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("Failed to read file data: {}", e)))?;

            info!(
                email = %admin.email,
                filename = %file_name,
                size = data.len(),
                "uploading image"
            );

            let response = app_state
                .upload_service
                .store_image(&file_name, &content_type, data.to_vec())
                .await?;

            return Ok(Json(response));
        }
    }

    Err(AppError::BadRequest("No file provided".to_string()))
}

/// 画像アップロードルーター
pub fn upload_router(max_body_size: usize) -> Router<AppState> {
    Router::new().route(
        "/api/admin/upload-image",
        post(upload_image_handler).layer(DefaultBodyLimit::max(max_body_size)),
    )
}
