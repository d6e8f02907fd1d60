// src/repository/gallery_repository.rs
use crate::api::dto::gallery_dto::{CreateGalleryItemDto, UpdateGalleryItemDto};
use crate::domain::gallery_item_model::{
    self, ActiveModel as GalleryItemActiveModel, Entity as GalleryItemEntity,
};
use sea_orm::{entity::*, query::*, DbConn, DbErr, DeleteResult, Set};
use uuid::Uuid;

const LIST_LIMIT: u64 = 100;

pub struct GalleryRepository {
    db: DbConn,
}

impl GalleryRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<gallery_item_model::Model>, DbErr> {
        GalleryItemEntity::find_by_id(id).one(&self.db).await
    }

    /// 新しい順（created_at 降順）で全ギャラリーアイテムを取得
    pub async fn find_all(&self) -> Result<Vec<gallery_item_model::Model>, DbErr> {
        GalleryItemEntity::find()
            .order_by_desc(gallery_item_model::Column::CreatedAt)
            .limit(LIST_LIMIT)
            .all(&self.db)
            .await
    }

    pub async fn create(
        &self,
        payload: CreateGalleryItemDto,
    ) -> Result<gallery_item_model::Model, DbErr> {
        let new_item = GalleryItemActiveModel {
            title: Set(payload.title),
            description: Set(payload.description),
            category: Set(payload.category),
            image: Set(payload.image),
            image_before: Set(payload.image_before),
            image_after: Set(payload.image_after),
            ..GalleryItemActiveModel::new()
        };
        new_item.insert(&self.db).await
    }

    /// 部分更新：リクエストに含まれるフィールドのみ書き込む
    pub async fn update(
        &self,
        id: Uuid,
        payload: UpdateGalleryItemDto,
    ) -> Result<Option<gallery_item_model::Model>, DbErr> {
        let item = match GalleryItemEntity::find_by_id(id).one(&self.db).await? {
            Some(i) => i,
            None => return Ok(None),
        };

        let mut active_model: GalleryItemActiveModel = item.clone().into();
        let mut changed = false;

        if payload.title.is_some() {
            active_model.title = Set(payload.title);
            changed = true;
        }

        if payload.description.is_some() {
            active_model.description = Set(payload.description);
            changed = true;
        }

        if payload.category.is_some() {
            active_model.category = Set(payload.category);
            changed = true;
        }

        if payload.image.is_some() {
            active_model.image = Set(payload.image);
            changed = true;
        }

        if payload.image_before.is_some() {
            active_model.image_before = Set(payload.image_before);
            changed = true;
        }

        if payload.image_after.is_some() {
            active_model.image_after = Set(payload.image_after);
            changed = true;
        }

        if changed {
            Ok(Some(active_model.update(&self.db).await?))
        } else {
            Ok(Some(item))
        }
    }

    pub async fn delete(&self, id: Uuid) -> Result<DeleteResult, DbErr> {
        GalleryItemEntity::delete_by_id(id).exec(&self.db).await
    }
}
