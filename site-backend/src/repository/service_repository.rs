// src/repository/service_repository.rs
use crate::api::dto::service_dto::{CreateServiceDto, UpdateServiceDto};
use crate::domain::service_model::{self, ActiveModel as ServiceActiveModel, Entity as ServiceEntity};
use sea_orm::{entity::*, query::*, DbConn, DbErr, DeleteResult, Set};
use uuid::Uuid;

// 一覧取得は100件で打ち切り（公開ページ・管理画面とも全件表示が前提の規模）
const LIST_LIMIT: u64 = 100;

pub struct ServiceRepository {
    db: DbConn,
}

impl ServiceRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<service_model::Model>, DbErr> {
        ServiceEntity::find_by_id(id).one(&self.db).await
    }

    /// 表示順（昇順）で全サービスを取得
    pub async fn find_all(&self) -> Result<Vec<service_model::Model>, DbErr> {
        ServiceEntity::find()
            .order_by_asc(service_model::Column::DisplayOrder)
            .limit(LIST_LIMIT)
            .all(&self.db)
            .await
    }

    pub async fn create(&self, payload: CreateServiceDto) -> Result<service_model::Model, DbErr> {
        let new_service = ServiceActiveModel {
            title: Set(payload.title),
            description: Set(payload.description),
            image: Set(payload.image),
            display_order: Set(payload.display_order),
            ..ServiceActiveModel::new()
        };
        new_service.insert(&self.db).await
    }

    /// 部分更新：リクエストに含まれるフィールドのみ書き込む
    pub async fn update(
        &self,
        id: Uuid,
        payload: UpdateServiceDto,
    ) -> Result<Option<service_model::Model>, DbErr> {
        let service = match ServiceEntity::find_by_id(id).one(&self.db).await? {
            Some(s) => s,
            None => return Ok(None), // サービスが見つからなければ None を返す
        };

        let mut active_model: ServiceActiveModel = service.clone().into();
        let mut changed = false;

        if let Some(title_val) = payload.title {
            active_model.title = Set(title_val);
            changed = true;
        }

        if let Some(description_val) = payload.description {
            active_model.description = Set(description_val);
            changed = true;
        }

        if let Some(image_val) = payload.image {
            active_model.image = Set(image_val);
            changed = true;
        }

        if let Some(order_val) = payload.display_order {
            active_model.display_order = Set(order_val);
            changed = true;
        }

        if changed {
            Ok(Some(active_model.update(&self.db).await?))
        } else {
            Ok(Some(service)) // 何も変更がなければ元の行を返す (updated_at は更新されない)
        }
    }

    pub async fn delete(&self, id: Uuid) -> Result<DeleteResult, DbErr> {
        ServiceEntity::delete_by_id(id).exec(&self.db).await
    }
}
