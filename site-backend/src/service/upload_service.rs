// src/service/upload_service.rs

use crate::api::dto::upload_dto::UploadImageResponse;
use crate::error::{AppError, AppResult};
use std::path::PathBuf;
use tracing::info;
use uuid::Uuid;

// アップロード画像を配信するサーバ相対プレフィックス（現行）
const UPLOADS_URL_PREFIX: &str = "/api/uploads";

/// 画像アップロードの保存
///
/// 加工は一切しない：受け取ったバイト列をそのままディスクに書く。
/// ファイル名はUUIDに差し替え、元ファイルの拡張子だけ引き継ぐ。
pub struct UploadService {
    upload_dir: PathBuf,
}

impl UploadService {
    pub fn new(upload_dir: PathBuf) -> Self {
        Self { upload_dir }
    }

    pub fn upload_dir(&self) -> &PathBuf {
        &self.upload_dir
    }

    /// ファイルを保存して配信用URLを返す
    pub async fn store_image(
        &self,
        original_filename: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> AppResult<UploadImageResponse> {
        // 管理画面のフォームは画像のみを選ばせる
        let parsed: mime::Mime = content_type.parse().map_err(|_| {
            AppError::BadRequest(format!("Invalid content type '{}'", content_type))
        })?;
        if parsed.type_() != mime::IMAGE {
            return Err(AppError::BadRequest(format!(
                "Only image uploads are allowed, got '{}'",
                content_type
            )));
        }

        if data.is_empty() {
            return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
        }

        // 元のファイル名から拡張子だけ引き継ぐ（英数字のみ、パス区切り等は不可）
        let extension = original_filename
            .rsplit('.')
            .next()
            .filter(|ext| {
                !ext.is_empty()
                    && ext.len() <= 10
                    && *ext != original_filename
                    && ext.chars().all(|c| c.is_ascii_alphanumeric())
            })
            .unwrap_or("bin");

        let unique_filename = format!("{}.{}", Uuid::new_v4(), extension.to_lowercase());
        let file_path = self.upload_dir.join(&unique_filename);

        tokio::fs::create_dir_all(&self.upload_dir).await?;
        tokio::fs::write(&file_path, data).await?;

        info!(
            filename = %unique_filename,
            original = %original_filename,
            "image stored"
        );

        Ok(UploadImageResponse {
            url: format!("{}/{}", UPLOADS_URL_PREFIX, unique_filename),
            filename: original_filename.to_string(),
        })
    }
}
