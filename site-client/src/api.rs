// src/api.rs

use crate::config::ClientConfig;
use crate::error::{ClientResult, SiteClientError};
use crate::types::{
    ContactForm, ContactMessage, ContactSubmitted, GalleryItem, GalleryItemPatch, LoginResponse,
    MessageResponse, NewGalleryItem, NewService, Service, ServicePatch, UploadedImage,
    VerifyResponse,
};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

/// バックエンドのRESTサーフェスを1対1で写したHTTPクライアント
///
/// リトライも冪等キーも持たない。1呼び出し=1リクエストで、失敗はその操作
/// 限りで終わり。
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.backend_origin.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 成功ならJSONを型に落とし、失敗ならサーバの `detail` を拾う
    async fn parse_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let detail = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| body["detail"].as_str().map(str::to_string));

        match detail {
            Some(detail) => Err(SiteClientError::Api(detail)),
            None => Err(SiteClientError::Api(format!("HTTP {status}"))),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        self.parse_response(response).await
    }

    async fn get_json_auth<T: DeserializeOwned>(&self, path: &str, token: &str) -> ClientResult<T> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .bearer_auth(token)
            .send()
            .await?;
        self.parse_response(response).await
    }

    async fn post_json_auth<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;
        self.parse_response(response).await
    }

    async fn put_json_auth<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .client
            .put(format!("{}{}", self.base_url, path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;
        self.parse_response(response).await
    }

    async fn delete_auth<T: DeserializeOwned>(&self, path: &str, token: &str) -> ClientResult<T> {
        let response = self
            .client
            .delete(format!("{}{}", self.base_url, path))
            .bearer_auth(token)
            .send()
            .await?;
        self.parse_response(response).await
    }

    // ------------------------------------------------------------------
    // 公開エンドポイント
    // ------------------------------------------------------------------

    pub async fn list_services(&self) -> ClientResult<Vec<Service>> {
        self.get_json("/api/services").await
    }

    pub async fn list_gallery(&self) -> ClientResult<Vec<GalleryItem>> {
        self.get_json("/api/gallery").await
    }

    pub async fn submit_contact(&self, form: &ContactForm) -> ClientResult<ContactSubmitted> {
        let response = self
            .client
            .post(format!("{}/api/contact", self.base_url))
            .json(form)
            .send()
            .await?;
        self.parse_response(response).await
    }

    // ------------------------------------------------------------------
    // 管理エンドポイント（Bearerトークン必須）
    // ------------------------------------------------------------------

    pub async fn login(&self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        let response = self
            .client
            .post(format!("{}/api/admin/login", self.base_url))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;
        self.parse_response(response).await
    }

    pub async fn verify(&self, token: &str) -> ClientResult<VerifyResponse> {
        self.get_json_auth("/api/admin/verify", token).await
    }

    pub async fn admin_list_services(&self, token: &str) -> ClientResult<Vec<Service>> {
        self.get_json_auth("/api/admin/services", token).await
    }

    pub async fn create_service(&self, token: &str, payload: &NewService) -> ClientResult<Service> {
        self.post_json_auth("/api/admin/services", token, payload)
            .await
    }

    pub async fn update_service(
        &self,
        token: &str,
        id: Uuid,
        patch: &ServicePatch,
    ) -> ClientResult<Service> {
        self.put_json_auth(&format!("/api/admin/services/{id}"), token, patch)
            .await
    }

    pub async fn delete_service(&self, token: &str, id: Uuid) -> ClientResult<MessageResponse> {
        self.delete_auth(&format!("/api/admin/services/{id}"), token)
            .await
    }

    pub async fn admin_list_gallery(&self, token: &str) -> ClientResult<Vec<GalleryItem>> {
        self.get_json_auth("/api/admin/gallery", token).await
    }

    pub async fn create_gallery_item(
        &self,
        token: &str,
        payload: &NewGalleryItem,
    ) -> ClientResult<GalleryItem> {
        self.post_json_auth("/api/admin/gallery", token, payload)
            .await
    }

    pub async fn update_gallery_item(
        &self,
        token: &str,
        id: Uuid,
        patch: &GalleryItemPatch,
    ) -> ClientResult<GalleryItem> {
        self.put_json_auth(&format!("/api/admin/gallery/{id}"), token, patch)
            .await
    }

    pub async fn delete_gallery_item(
        &self,
        token: &str,
        id: Uuid,
    ) -> ClientResult<MessageResponse> {
        self.delete_auth(&format!("/api/admin/gallery/{id}"), token)
            .await
    }

    pub async fn admin_list_contacts(&self, token: &str) -> ClientResult<Vec<ContactMessage>> {
        self.get_json_auth("/api/admin/contacts", token).await
    }

    pub async fn delete_contact(&self, token: &str, id: Uuid) -> ClientResult<MessageResponse> {
        self.delete_auth(&format!("/api/admin/contacts/{id}"), token)
            .await
    }

    /// 画像アップロード（multipartの `file` フィールド）
    pub async fn upload_image(
        &self,
        token: &str,
        filename: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> ClientResult<UploadedImage> {
        let part = Part::bytes(data)
            .file_name(filename.to_string())
            .mime_str(content_type)?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(format!("{}/api/admin/upload-image", self.base_url))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;
        self.parse_response(response).await
    }
}
