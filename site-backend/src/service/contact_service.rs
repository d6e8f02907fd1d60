// src/service/contact_service.rs

use crate::api::dto::contact_dto::{
    ContactMessageDto, ContactSubmitResponse, CreateContactMessageDto,
};
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::repository::contact_repository::ContactRepository;
use crate::utils::email::EmailService;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

/// 問い合わせフォームの受付・一覧・削除
pub struct ContactService {
    repo: Arc<ContactRepository>,
    email_service: Arc<EmailService>,
}

impl ContactService {
    pub fn new(db_pool: DbPool, email_service: Arc<EmailService>) -> Self {
        Self {
            repo: Arc::new(ContactRepository::new(db_pool)),
            email_service,
        }
    }

    /// 問い合わせを保存し、通知メールを送る
    ///
    /// 通知メールはfire-and-forget：送信失敗しても問い合わせの受付は成功扱い。
    pub async fn submit(&self, payload: CreateContactMessageDto) -> AppResult<ContactSubmitResponse> {
        let created = self.repo.create(payload).await?;

        info!(contact_id = %created.id, email = %created.email, "contact message received");

        if let Err(e) = self.email_service.send_contact_notification(&created).await {
            error!(contact_id = %created.id, error = %e, "failed to send contact notification");
        }

        Ok(ContactSubmitResponse {
            message: "Contact form submitted successfully".to_string(),
            id: created.id,
        })
    }

    /// 新しい順で全問い合わせを取得
    pub async fn list_messages(&self) -> AppResult<Vec<ContactMessageDto>> {
        let messages = self.repo.find_all().await?;
        Ok(messages.into_iter().map(Into::into).collect())
    }

    pub async fn delete_message(&self, id: Uuid) -> AppResult<()> {
        let delete_result = self.repo.delete(id).await?;
        if delete_result.rows_affected == 0 {
            Err(AppError::NotFound("Contact not found".to_string()))
        } else {
            Ok(())
        }
    }
}
