// src/service/catalog_service.rs

use crate::api::dto::service_dto::{CreateServiceDto, ServiceDto, UpdateServiceDto};
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::repository::service_repository::ServiceRepository;
use std::sync::Arc;
use uuid::Uuid;

/// サービス（清掃・撤去メニュー）のCRUD
pub struct CatalogService {
    repo: Arc<ServiceRepository>,
}

impl CatalogService {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            repo: Arc::new(ServiceRepository::new(db_pool)),
        }
    }

    /// 表示順（昇順）で全サービスを取得
    pub async fn list_services(&self) -> AppResult<Vec<ServiceDto>> {
        let services = self.repo.find_all().await?;
        Ok(services.into_iter().map(Into::into).collect())
    }

    pub async fn create_service(&self, payload: CreateServiceDto) -> AppResult<ServiceDto> {
        let created = self.repo.create(payload).await?;
        Ok(created.into())
    }

    pub async fn update_service(
        &self,
        id: Uuid,
        payload: UpdateServiceDto,
    ) -> AppResult<ServiceDto> {
        let updated = self
            .repo
            .update(id, payload)
            .await?
            .ok_or_else(|| AppError::NotFound("Service not found".to_string()))?;
        Ok(updated.into())
    }

    pub async fn delete_service(&self, id: Uuid) -> AppResult<()> {
        let delete_result = self.repo.delete(id).await?;
        if delete_result.rows_affected == 0 {
            Err(AppError::NotFound("Service not found".to_string()))
        } else {
            Ok(())
        }
    }
}
