// src/api/mod.rs

pub mod dto;
pub mod handlers;

use crate::service::auth_service::AuthService;
use crate::service::catalog_service::CatalogService;
use crate::service::contact_service::ContactService;
use crate::service::gallery_service::GalleryService;
use crate::service::upload_service::UploadService;
use std::sync::Arc;

/// ハンドラーが共有するアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub catalog_service: Arc<CatalogService>,
    pub gallery_service: Arc<GalleryService>,
    pub contact_service: Arc<ContactService>,
    pub upload_service: Arc<UploadService>,
}
