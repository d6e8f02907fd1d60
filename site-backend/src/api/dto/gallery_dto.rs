// src/api/dto/gallery_dto.rs

use crate::domain::gallery_category::GalleryCategory;
use crate::domain::gallery_item_model;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// ギャラリーカテゴリのバリデーション
///
/// 既知の4カテゴリのみ受け付ける（ストレージ上は文字列のまま保持）。
fn validate_gallery_category(category: &str) -> Result<(), ValidationError> {
    if GalleryCategory::from_str(category).is_some() {
        Ok(())
    } else {
        let mut error = ValidationError::new("unknown_category");
        error.message = Some("Unknown gallery category".into());
        Err(error)
    }
}

/// ギャラリーアイテムのレスポンスDTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryItemDto {
    pub id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub image_before: Option<String>,
    pub image_after: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<gallery_item_model::Model> for GalleryItemDto {
    fn from(model: gallery_item_model::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            category: model.category,
            image: model.image,
            image_before: model.image_before,
            image_after: model.image_after,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// ギャラリーアイテム作成DTO
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateGalleryItemDto {
    #[validate(length(max = 200, message = "Title must be 200 characters or less"))]
    pub title: Option<String>,

    #[validate(length(max = 2000, message = "Description must be 2000 characters or less"))]
    pub description: Option<String>,

    #[validate(custom(function = "validate_gallery_category"))]
    pub category: Option<String>,

    pub image: Option<String>,
    pub image_before: Option<String>,
    pub image_after: Option<String>,
}

/// ギャラリーアイテム更新DTO（部分更新）
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateGalleryItemDto {
    #[validate(length(max = 200, message = "Title must be 200 characters or less"))]
    pub title: Option<String>,

    #[validate(length(max = 2000, message = "Description must be 2000 characters or less"))]
    pub description: Option<String>,

    #[validate(custom(function = "validate_gallery_category"))]
    pub category: Option<String>,

    pub image: Option<String>,
    pub image_before: Option<String>,
    pub image_after: Option<String>,
}
