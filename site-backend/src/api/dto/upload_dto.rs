// src/api/dto/upload_dto.rs

use serde::{Deserialize, Serialize};

/// 画像アップロードのレスポンス
///
/// `url` は現行の `/api/uploads/` プレフィックスのサーバ相対パス。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadImageResponse {
    pub url: String,
    pub filename: String,
}
