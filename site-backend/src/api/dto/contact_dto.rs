// src/api/dto/contact_dto.rs

use crate::domain::contact_message_model;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// 問い合わせメッセージのレスポンスDTO
///
/// 郵便番号のワイヤ名は `postalCode`（カラム名は postal_code）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessageDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(rename = "postalCode")]
    pub postal_code: Option<String>,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<contact_message_model::Model> for ContactMessageDto {
    fn from(model: contact_message_model::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            postal_code: model.postal_code,
            subject: model.subject,
            message: model.message,
            created_at: model.created_at,
        }
    }
}

/// 問い合わせフォーム送信DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateContactMessageDto {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(max = 30, message = "Phone must be 30 characters or less"))]
    pub phone: Option<String>,

    #[serde(rename = "postalCode")]
    #[validate(length(max = 10, message = "Postal code must be 10 characters or less"))]
    pub postal_code: Option<String>,

    #[validate(length(min = 1, max = 200, message = "Subject must be 1-200 characters"))]
    pub subject: String,

    #[validate(length(min = 1, max = 5000, message = "Message must be 1-5000 characters"))]
    pub message: String,
}

/// 問い合わせ送信成功レスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmitResponse {
    pub message: String,
    pub id: Uuid,
}
