// src/api/handlers/auth_handler.rs

use crate::api::dto::auth_dto::{LoginRequest, LoginResponse, VerifyResponse};
use crate::api::AppState;
use crate::error::{AppError, AppResult};
use axum::{
    extract::{FromRequestParts, Json, State},
    http::request::Parts,
    routing::{get, post},
    Router,
};
use tracing::info;
use validator::Validate;

/// Authorizationヘッダーを検証する管理者抽出器
///
/// ヘッダーが無い・`Bearer ` で始まらない場合は "Not authenticated"、
/// トークンが検証に落ちた場合は "Invalid or expired token" を返す。
pub struct AdminUser {
    pub email: String,
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Not authenticated".to_string()))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Unauthorized("Not authenticated".to_string()))?;

        let email = state.auth_service.verify_token(token)?;

        Ok(AdminUser { email })
    }
}

/// ログインハンドラー
pub async fn login_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    payload.validate()?;

    let response = app_state.auth_service.login(&payload)?;
    Ok(Json(response))
}

/// トークン検証ハンドラー
pub async fn verify_handler(admin: AdminUser) -> AppResult<Json<VerifyResponse>> {
    info!(email = %admin.email, "admin token verified");

    Ok(Json(VerifyResponse {
        valid: true,
        email: admin.email,
    }))
}

/// 認証関連ルーター
pub fn auth_router() -> Router<AppState> {
    Router::new()
        .route("/api/admin/login", post(login_handler))
        .route("/api/admin/verify", get(verify_handler))
}
