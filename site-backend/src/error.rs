// src/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DbErr(#[from] DbErr),

    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Validation failed")]
    ValidationFailure(#[from] ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),
}

// axum でエラーをHTTPレスポンスに変換するための実装
// エラーボディは管理画面・公開ページが読む {"detail": "..."} 形式に統一する
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::DbErr(db_err) => {
                tracing::error!(error = ?db_err, "database error");
                match db_err {
                    DbErr::RecordNotFound(_) => (
                        StatusCode::NOT_FOUND,
                        "The requested resource was not found".to_string(),
                    ),
                    _ => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "A database error occurred".to_string(),
                    ),
                }
            }
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            AppError::ValidationError(message) => (StatusCode::UNPROCESSABLE_ENTITY, message),
            AppError::ValidationFailure(errors) => {
                // フィールドごとのメッセージを1本のdetail文字列にまとめる
                let mut messages: Vec<String> = errors
                    .field_errors()
                    .into_iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |e| {
                            let message = e
                                .message
                                .as_ref()
                                .map_or_else(|| "Invalid value".to_string(), |m| m.to_string());
                            format!("{}: {}", field, message)
                        })
                    })
                    .collect();
                messages.sort();
                (StatusCode::UNPROCESSABLE_ENTITY, messages.join("; "))
            }
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Unauthorized(message) => (StatusCode::UNAUTHORIZED, message),
            AppError::IoError(io_err) => {
                tracing::error!(error = ?io_err, "i/o error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
            AppError::InternalServerError(message) => {
                tracing::error!(message = %message, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
            AppError::ExternalServiceError(message) => {
                tracing::error!(message = %message, "external service error");
                (StatusCode::SERVICE_UNAVAILABLE, message)
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

// Result 型のエイリアス
pub type AppResult<T> = Result<T, AppError>;

/// 統一的なエラーレスポンス構造
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}
