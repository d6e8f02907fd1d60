// src/public.rs

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::images::resolve_image_url;
use crate::types::{ContactForm, ContactSubmitted, GalleryItem, Service};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use uuid::Uuid;

/// 公開ページの状態
#[derive(Debug, Clone)]
struct PublicState {
    services: Vec<Service>,
    gallery: Vec<GalleryItem>,
    contact_form: ContactForm,
}

/// 公開ページのロジック
///
/// 構築時に組み込みのデフォルトコンテンツを持ち、`refresh()` がバックエンドの
/// 一覧で置き換える。一覧が空・取得失敗のときはデフォルトを残す。
pub struct PublicContent {
    api: Arc<ApiClient>,
    state: Arc<RwLock<PublicState>>,
    poll_interval: Duration,
}

impl PublicContent {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            api: Arc::new(ApiClient::new(config)?),
            state: Arc::new(RwLock::new(PublicState {
                services: default_services(),
                gallery: default_gallery(),
                contact_form: ContactForm::default(),
            })),
            poll_interval: config.poll_interval,
        })
    }

    pub async fn services(&self) -> Vec<Service> {
        self.state.read().await.services.clone()
    }

    pub async fn gallery(&self) -> Vec<GalleryItem> {
        self.state.read().await.gallery.clone()
    }

    /// カテゴリフィルタ："all" は全件、それ以外はカテゴリ一致のみ
    pub async fn filtered_gallery(&self, filter: &str) -> Vec<GalleryItem> {
        let items = self.state.read().await.gallery.clone();
        if filter == "all" {
            return items;
        }
        items
            .into_iter()
            .filter(|item| item.category.as_deref() == Some(filter))
            .collect()
    }

    pub async fn contact_form(&self) -> ContactForm {
        self.state.read().await.contact_form.clone()
    }

    pub async fn set_contact_form(&self, form: ContactForm) {
        self.state.write().await.contact_form = form;
    }

    /// 画像参照をこのバックエンド向けの表示用URLへ正規化
    pub fn resolve_image(&self, path: &str) -> String {
        resolve_image_url(path, self.api.base_url())
    }

    /// サービスとギャラリーの両一覧を取得し直す
    ///
    /// 空のリストや失敗は現在の内容（初期状態ならデフォルト）を残す。
    pub async fn refresh(&self) {
        Self::refresh_into(&self.api, &self.state).await;
    }

    async fn refresh_into(api: &ApiClient, state: &RwLock<PublicState>) {
        match api.list_services().await {
            Ok(services) if !services.is_empty() => {
                state.write().await.services = services;
            }
            Ok(_) => debug!("services list came back empty, keeping current content"),
            Err(e) => warn!(error = %e, "failed to refresh services"),
        }

        match api.list_gallery().await {
            Ok(gallery) if !gallery.is_empty() => {
                state.write().await.gallery = gallery;
            }
            Ok(_) => debug!("gallery list came back empty, keeping current content"),
            Err(e) => warn!(error = %e, "failed to refresh gallery"),
        }
    }

    /// 問い合わせフォームを1回だけPOSTし、成功したらフォームを空に戻す
    pub async fn submit_contact(&self) -> ClientResult<ContactSubmitted> {
        let form = self.state.read().await.contact_form.clone();
        let submitted = self.api.submit_contact(&form).await?;

        self.state.write().await.contact_form = ContactForm::default();
        Ok(submitted)
    }

    /// ポーリングを開始する
    ///
    /// 返ったハンドルがDropされた時点でポーリングは止まる。
    pub fn start_polling(&self) -> PollingHandle {
        let api = self.api.clone();
        let state = self.state.clone();
        let interval = self.poll_interval;

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // 最初のtickは即時に返るので読み捨てる
            ticker.tick().await;
            loop {
                ticker.tick().await;
                Self::refresh_into(&api, &state).await;
            }
        });

        PollingHandle { handle }
    }
}

/// ポーリングタスクのハンドル（Dropで停止）
pub struct PollingHandle {
    handle: JoinHandle<()>,
}

impl Drop for PollingHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn placeholder_service(title: &str, description: &str, image: &str, order: i32) -> Service {
    let now = Utc::now();
    Service {
        // ローカル表示専用のプレースホルダ。バックエンドへは送らない。
        id: Uuid::nil(),
        title: title.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        order,
        created_at: now,
        updated_at: now,
    }
}

fn placeholder_gallery_item(title: &str, description: &str, image: &str) -> GalleryItem {
    let now = Utc::now();
    GalleryItem {
        id: Uuid::nil(),
        title: Some(title.to_string()),
        description: Some(description.to_string()),
        category: Some("before-after".to_string()),
        image: Some(image.to_string()),
        image_before: None,
        image_after: None,
        created_at: now,
        updated_at: now,
    }
}

/// バックエンドに繋がるまで表示する組み込みのサービス一覧
fn default_services() -> Vec<Service> {
    vec![
        placeholder_service(
            "Débarras d'encombrants",
            "Nous enlevons rapidement tous vos objets encombrants : meubles, électroménagers, matelas, cartons.",
            "https://images.pexels.com/photos/4246196/pexels-photo-4246196.jpeg?auto=compress&cs=tinysrgb&w=800",
            1,
        ),
        placeholder_service(
            "Vide maison complet",
            "Succession, déménagement ou rénovation ? Nous vidons entièrement votre maison ou appartement.",
            "https://images.pexels.com/photos/4246120/pexels-photo-4246120.jpeg?auto=compress&cs=tinysrgb&w=800",
            2,
        ),
        placeholder_service(
            "Vide cave et grenier",
            "Libérez vos caves, greniers et garages encombrés en toute sécurité.",
            "https://images.pexels.com/photos/5025636/pexels-photo-5025636.jpeg?auto=compress&cs=tinysrgb&w=800",
            3,
        ),
        placeholder_service(
            "Débarras de bureau",
            "Débarras professionnel de vos locaux commerciaux et administratifs.",
            "https://images.pexels.com/photos/3760072/pexels-photo-3760072.jpeg?auto=compress&cs=tinysrgb&w=800",
            4,
        ),
    ]
}

/// バックエンドに繋がるまで表示する組み込みのギャラリー
fn default_gallery() -> Vec<GalleryItem> {
    vec![
        placeholder_gallery_item(
            "Débarras hangar complet",
            "Avant/Après - Hangar vidé entièrement",
            "https://images.pexels.com/photos/4107278/pexels-photo-4107278.jpeg?auto=compress&cs=tinysrgb&w=800",
        ),
        placeholder_gallery_item(
            "Débarras garage",
            "Avant/Après - Garage débarrassé",
            "https://images.pexels.com/photos/6196238/pexels-photo-6196238.jpeg?auto=compress&cs=tinysrgb&w=800",
        ),
        placeholder_gallery_item(
            "Débarras atelier",
            "Avant/Après - Atelier entièrement vidé",
            "https://images.pexels.com/photos/4108715/pexels-photo-4108715.jpeg?auto=compress&cs=tinysrgb&w=800",
        ),
        placeholder_gallery_item(
            "Vide appartement",
            "Avant/Après - Appartement vidé et nettoyé",
            "https://images.pexels.com/photos/7464230/pexels-photo-7464230.jpeg?auto=compress&cs=tinysrgb&w=800",
        ),
        placeholder_gallery_item(
            "Vide maison",
            "Avant/Après - Maison complètement vidée",
            "https://images.pexels.com/photos/5691641/pexels-photo-5691641.jpeg?auto=compress&cs=tinysrgb&w=800",
        ),
    ]
}
