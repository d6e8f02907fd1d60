// src/service/auth_service.rs

use crate::api::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::config::AdminConfig;
use crate::error::{AppError, AppResult};
use crate::utils::jwt::{JwtError, JwtManager};
use crate::utils::password::PasswordManager;
use std::sync::Arc;
use tracing::{info, warn};

/// 管理者認証サービス
///
/// アカウントは設定由来の1件のみ。ユーザーテーブルは持たない。
pub struct AuthService {
    admin_email: String,
    admin_password_hash: String,
    password_manager: Arc<PasswordManager>,
    jwt_manager: Arc<JwtManager>,
}

impl AuthService {
    /// 設定から管理者アカウントを構築
    ///
    /// ADMIN_PASSWORD_HASH（PHC文字列）を優先し、無ければ ADMIN_PASSWORD を
    /// 起動時にハッシュ化する（開発用）。
    pub fn from_config(
        admin: &AdminConfig,
        password_manager: Arc<PasswordManager>,
        jwt_manager: Arc<JwtManager>,
    ) -> AppResult<Self> {
        let admin_password_hash = match (&admin.password_hash, &admin.password) {
            (Some(hash), _) => hash.clone(),
            (None, Some(password)) => password_manager
                .hash_password(password)
                .map_err(|e| AppError::InternalServerError(e.to_string()))?,
            (None, None) => {
                return Err(AppError::InternalServerError(
                    "No admin password configured".to_string(),
                ))
            }
        };

        Ok(Self {
            admin_email: admin.email.clone(),
            admin_password_hash,
            password_manager,
            jwt_manager,
        })
    }

    pub fn admin_email(&self) -> &str {
        &self.admin_email
    }

    /// メールアドレスとパスワードを照合してトークンを発行
    pub fn login(&self, payload: &LoginRequest) -> AppResult<LoginResponse> {
        // どちらが間違っていても同じメッセージを返す
        if payload.email != self.admin_email {
            warn!(email = %payload.email, "login attempt with unknown email");
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        let verified = self
            .password_manager
            .verify_password(&payload.password, &self.admin_password_hash)
            .map_err(|e| AppError::InternalServerError(e.to_string()))?;

        if !verified {
            warn!(email = %payload.email, "login attempt with wrong password");
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        let token = self
            .jwt_manager
            .generate_admin_token(&self.admin_email)
            .map_err(|e| AppError::InternalServerError(e.to_string()))?;

        info!(email = %self.admin_email, "admin logged in");

        Ok(LoginResponse {
            token,
            email: self.admin_email.clone(),
        })
    }

    /// Bearerトークンを検証し、管理者のメールアドレスを返す
    ///
    /// 署名・有効期限・発行者に加えて、subが設定上の管理者と一致することを
    /// 確認する。
    pub fn verify_token(&self, token: &str) -> AppResult<String> {
        let claims = self
            .jwt_manager
            .verify_admin_token(token)
            .map_err(|e: JwtError| {
                warn!(error = %e, "token verification failed");
                AppError::Unauthorized("Invalid or expired token".to_string())
            })?;

        if claims.sub != self.admin_email {
            return Err(AppError::Unauthorized(
                "Invalid or expired token".to_string(),
            ));
        }

        Ok(claims.sub)
    }
}
