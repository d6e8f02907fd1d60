// src/admin.rs

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::error::{ClientResult, SiteClientError};
use crate::session::SessionStore;
use crate::types::{
    ContactMessage, GalleryItem, GalleryItemPatch, NewGalleryItem, NewService, Service,
    ServicePatch, UploadedImage,
};
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};
use tracing::{info, warn};
use uuid::Uuid;

/// `open()` の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// 検証済み、3コレクション取得済み
    Ready,
    /// セッションが無い・無効。ログイン画面へ
    RedirectToLogin,
}

/// 管理ダッシュボードのロジック
///
/// コレクションは外部（バックエンド）所有：変更はAPIを往復してのみ行い、
/// ミューテーション成功のたびに3コレクションすべてを取得し直す。
pub struct AdminDashboard {
    api: Arc<ApiClient>,
    session: SessionStore,
    token: RwLock<Option<String>>,
    services: RwLock<Vec<Service>>,
    gallery: RwLock<Vec<GalleryItem>>,
    contacts: RwLock<Vec<ContactMessage>>,
    // コレクションごとのin-flightガード。ロックが取れない=前のミューテーションが未決着
    service_guard: Arc<Mutex<()>>,
    gallery_guard: Arc<Mutex<()>>,
    contact_guard: Arc<Mutex<()>>,
}

impl AdminDashboard {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            api: Arc::new(ApiClient::new(config)?),
            session: SessionStore::new(config.session_path.clone()),
            token: RwLock::new(None),
            services: RwLock::new(Vec::new()),
            gallery: RwLock::new(Vec::new()),
            contacts: RwLock::new(Vec::new()),
            service_guard: Arc::new(Mutex::new(())),
            gallery_guard: Arc::new(Mutex::new(())),
            contact_guard: Arc::new(Mutex::new(())),
        })
    }

    /// メール+パスワードでログインし、セッションを保存する
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<()> {
        let response = self.api.login(email, password).await?;
        self.session.set_session(&response.token, &response.email)?;
        *self.token.write().await = Some(response.token);

        info!(email = %response.email, "admin logged in");
        Ok(())
    }

    /// ダッシュボードを開く
    ///
    /// 保存済みトークンが無ければHTTPを一切発行せずにリダイレクト。
    /// 検証に失敗したらセッションを消してリダイレクト（エラーではなく想定内の分岐）。
    pub async fn open(&self) -> ClientResult<OpenOutcome> {
        let Some(token) = self.session.current_token() else {
            return Ok(OpenOutcome::RedirectToLogin);
        };

        match self.api.verify(&token).await {
            Ok(verified) => {
                info!(email = %verified.email, "admin session verified");
            }
            Err(e) => {
                warn!(error = %e, "stored session failed verification, clearing it");
                self.session.clear_session()?;
                *self.token.write().await = None;
                return Ok(OpenOutcome::RedirectToLogin);
            }
        }

        *self.token.write().await = Some(token);
        self.refresh_all().await?;
        Ok(OpenOutcome::Ready)
    }

    /// セッションを破棄する
    pub async fn logout(&self) -> ClientResult<()> {
        self.session.clear_session()?;
        *self.token.write().await = None;
        Ok(())
    }

    pub async fn services(&self) -> Vec<Service> {
        self.services.read().await.clone()
    }

    pub async fn gallery_items(&self) -> Vec<GalleryItem> {
        self.gallery.read().await.clone()
    }

    pub async fn contact_messages(&self) -> Vec<ContactMessage> {
        self.contacts.read().await.clone()
    }

    async fn require_token(&self) -> ClientResult<String> {
        self.token
            .read()
            .await
            .clone()
            .ok_or(SiteClientError::NoSession)
    }

    fn acquire(
        guard: &Arc<Mutex<()>>,
        collection: &'static str,
    ) -> ClientResult<OwnedMutexGuard<()>> {
        guard
            .clone()
            .try_lock_owned()
            .map_err(|_| SiteClientError::MutationInFlight { collection })
    }

    /// 3コレクションすべてをサーバから取得し直す
    pub async fn refresh_all(&self) -> ClientResult<()> {
        let token = self.require_token().await?;

        let services = self.api.admin_list_services(&token).await?;
        let gallery = self.api.admin_list_gallery(&token).await?;
        let contacts = self.api.admin_list_contacts(&token).await?;

        *self.services.write().await = services;
        *self.gallery.write().await = gallery;
        *self.contacts.write().await = contacts;
        Ok(())
    }

    // ------------------------------------------------------------------
    // サービス
    // ------------------------------------------------------------------

    pub async fn create_service(&self, payload: NewService) -> ClientResult<Service> {
        let _guard = Self::acquire(&self.service_guard, "services")?;
        let token = self.require_token().await?;

        let created = self.api.create_service(&token, &payload).await?;
        self.refresh_all().await?;
        Ok(created)
    }

    pub async fn update_service(&self, id: Uuid, patch: ServicePatch) -> ClientResult<Service> {
        let _guard = Self::acquire(&self.service_guard, "services")?;
        let token = self.require_token().await?;

        let updated = self.api.update_service(&token, id, &patch).await?;
        self.refresh_all().await?;
        Ok(updated)
    }

    pub async fn delete_service(&self, id: Uuid) -> ClientResult<()> {
        let _guard = Self::acquire(&self.service_guard, "services")?;
        let token = self.require_token().await?;

        self.api.delete_service(&token, id).await?;
        self.refresh_all().await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // ギャラリー
    // ------------------------------------------------------------------

    pub async fn create_gallery_item(&self, payload: NewGalleryItem) -> ClientResult<GalleryItem> {
        let _guard = Self::acquire(&self.gallery_guard, "gallery")?;
        let token = self.require_token().await?;

        let created = self.api.create_gallery_item(&token, &payload).await?;
        self.refresh_all().await?;
        Ok(created)
    }

    pub async fn update_gallery_item(
        &self,
        id: Uuid,
        patch: GalleryItemPatch,
    ) -> ClientResult<GalleryItem> {
        let _guard = Self::acquire(&self.gallery_guard, "gallery")?;
        let token = self.require_token().await?;

        let updated = self.api.update_gallery_item(&token, id, &patch).await?;
        self.refresh_all().await?;
        Ok(updated)
    }

    pub async fn delete_gallery_item(&self, id: Uuid) -> ClientResult<()> {
        let _guard = Self::acquire(&self.gallery_guard, "gallery")?;
        let token = self.require_token().await?;

        self.api.delete_gallery_item(&token, id).await?;
        self.refresh_all().await?;
        Ok(())
    }

    /// 画像アップロードのサブフロー
    ///
    /// コレクションを変更しないので再取得もガードも無し。返ったURLを
    /// 作成・更新ペイロードに載せるのは呼び出し側。
    pub async fn upload_image(
        &self,
        filename: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> ClientResult<UploadedImage> {
        let token = self.require_token().await?;
        self.api
            .upload_image(&token, filename, content_type, data)
            .await
    }

    // ------------------------------------------------------------------
    // 問い合わせ
    // ------------------------------------------------------------------

    pub async fn delete_contact(&self, id: Uuid) -> ClientResult<()> {
        let _guard = Self::acquire(&self.contact_guard, "contacts")?;
        let token = self.require_token().await?;

        self.api.delete_contact(&token, id).await?;
        self.refresh_all().await?;
        Ok(())
    }
}
