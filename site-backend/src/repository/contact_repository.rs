// src/repository/contact_repository.rs
use crate::api::dto::contact_dto::CreateContactMessageDto;
use crate::domain::contact_message_model::{
    self, ActiveModel as ContactMessageActiveModel, Entity as ContactMessageEntity,
};
use sea_orm::{entity::*, query::*, DbConn, DbErr, DeleteResult, Set};
use uuid::Uuid;

const LIST_LIMIT: u64 = 100;

pub struct ContactRepository {
    db: DbConn,
}

impl ContactRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// 新しい順（created_at 降順）で全問い合わせを取得
    pub async fn find_all(&self) -> Result<Vec<contact_message_model::Model>, DbErr> {
        ContactMessageEntity::find()
            .order_by_desc(contact_message_model::Column::CreatedAt)
            .limit(LIST_LIMIT)
            .all(&self.db)
            .await
    }

    pub async fn create(
        &self,
        payload: CreateContactMessageDto,
    ) -> Result<contact_message_model::Model, DbErr> {
        let new_message = ContactMessageActiveModel {
            name: Set(payload.name),
            email: Set(payload.email),
            phone: Set(payload.phone),
            postal_code: Set(payload.postal_code),
            subject: Set(payload.subject),
            message: Set(payload.message),
            ..ContactMessageActiveModel::new()
        };
        new_message.insert(&self.db).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<DeleteResult, DbErr> {
        ContactMessageEntity::delete_by_id(id).exec(&self.db).await
    }
}
