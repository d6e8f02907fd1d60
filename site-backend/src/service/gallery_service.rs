// src/service/gallery_service.rs

use crate::api::dto::gallery_dto::{CreateGalleryItemDto, GalleryItemDto, UpdateGalleryItemDto};
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::repository::gallery_repository::GalleryRepository;
use std::sync::Arc;
use uuid::Uuid;

/// 施工事例ギャラリーのCRUD
pub struct GalleryService {
    repo: Arc<GalleryRepository>,
}

impl GalleryService {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            repo: Arc::new(GalleryRepository::new(db_pool)),
        }
    }

    /// 新しい順で全ギャラリーアイテムを取得
    pub async fn list_items(&self) -> AppResult<Vec<GalleryItemDto>> {
        let items = self.repo.find_all().await?;
        Ok(items.into_iter().map(Into::into).collect())
    }

    pub async fn create_item(&self, payload: CreateGalleryItemDto) -> AppResult<GalleryItemDto> {
        let created = self.repo.create(payload).await?;
        Ok(created.into())
    }

    pub async fn update_item(
        &self,
        id: Uuid,
        payload: UpdateGalleryItemDto,
    ) -> AppResult<GalleryItemDto> {
        let updated = self
            .repo
            .update(id, payload)
            .await?
            .ok_or_else(|| AppError::NotFound("Gallery item not found".to_string()))?;
        Ok(updated.into())
    }

    pub async fn delete_item(&self, id: Uuid) -> AppResult<()> {
        let delete_result = self.repo.delete(id).await?;
        if delete_result.rows_affected == 0 {
            Err(AppError::NotFound("Gallery item not found".to_string()))
        } else {
            Ok(())
        }
    }
}
