// src/api/dto/service_dto.rs

use crate::domain::service_model;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// サービスのレスポンスDTO
///
/// 表示順のワイヤ名は `order`（カラム名は display_order）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(rename = "order")]
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<service_model::Model> for ServiceDto {
    fn from(model: service_model::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            image: model.image,
            display_order: model.display_order,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// サービス作成DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateServiceDto {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 2000, message = "Description must be 1-2000 characters"))]
    pub description: String,

    #[validate(length(min = 1, message = "Image reference is required"))]
    pub image: String,

    #[serde(rename = "order", default)]
    pub display_order: i32,
}

/// サービス更新DTO（部分更新：指定されたフィールドのみ書き込む）
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateServiceDto {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 2000, message = "Description must be 1-2000 characters"))]
    pub description: Option<String>,

    #[validate(length(min = 1, message = "Image reference is required"))]
    pub image: Option<String>,

    #[serde(rename = "order")]
    pub display_order: Option<i32>,
}
