// src/types.rs

//! バックエンドのワイヤ型をそのまま写した型定義。
//!
//! 識別子は常にバックエンドが採番する。クライアントはサーバのレスポンスから
//! しか一覧を組み立てない（楽観的更新はしない）。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 公開ページに並ぶサービス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image: String,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// ギャラリーアイテム（単写真またはビフォー/アフター対）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
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

/// 問い合わせメッセージ（管理画面の閲覧専用）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
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

/// サービス作成ペイロード
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewService {
    pub title: String,
    pub description: String,
    pub image: String,
    pub order: i32,
}

/// サービス部分更新ペイロード（Noneのフィールドは送らない）
#[derive(Debug, Clone, Default, Serialize)]
pub struct ServicePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

/// ギャラリーアイテム作成ペイロード
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewGalleryItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_after: Option<String>,
}

/// ギャラリーアイテム部分更新ペイロード
pub type GalleryItemPatch = NewGalleryItem;

/// 問い合わせフォームの状態（エンティティと同じ形）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "postalCode", skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    pub subject: String,
    pub message: String,
}

/// ログインレスポンス
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub email: String,
}

/// トークン検証レスポンス
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyResponse {
    pub valid: bool,
    pub email: String,
}

/// 削除などの成功メッセージ
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// 問い合わせ送信成功レスポンス
#[derive(Debug, Clone, Deserialize)]
pub struct ContactSubmitted {
    pub message: String,
    pub id: Uuid,
}

/// 画像アップロード成功レスポンス
#[derive(Debug, Clone, Deserialize)]
pub struct UploadedImage {
    pub url: String,
    pub filename: String,
}
