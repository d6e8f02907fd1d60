// src/utils/jwt.rs

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;
use uuid::Uuid;

/// JWT関連のエラー
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Failed to encode JWT: {0}")]
    EncodingError(#[from] jsonwebtoken::errors::Error),

    #[error("Failed to decode JWT: {0}")]
    DecodingError(String),

    #[error("JWT token has expired")]
    TokenExpired,

    #[error("Invalid JWT token")]
    InvalidToken,

    #[error("Missing JWT secret key")]
    MissingSecretKey,

    #[error("Invalid JWT configuration: {0}")]
    ConfigurationError(String),
}

/// 管理者トークンのClaims
///
/// 管理者アカウントは1つだけなので sub はメールアドレス。
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AdminTokenClaims {
    /// Subject (admin email)
    pub sub: String,
    /// Role（常に "admin"）
    pub role: String,
    /// Issued at
    pub iat: i64,
    /// Expiration time
    pub exp: i64,
    /// Not before
    pub nbf: i64,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
    /// JWT ID
    pub jti: String,
}

/// JWT設定
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// JWT秘密鍵
    pub secret_key: String,
    /// トークンの有効期限（分）
    pub token_expiry_minutes: i64,
    /// 発行者
    pub issuer: String,
    /// 対象者
    pub audience: String,
}

impl JwtConfig {
    /// 環境変数から設定を読み込み
    pub fn from_env() -> Result<Self, JwtError> {
        let secret_key = env::var("JWT_SECRET_KEY").map_err(|_| JwtError::MissingSecretKey)?;

        let token_expiry_minutes = env::var("JWT_TOKEN_EXPIRY_MINUTES")
            .unwrap_or_else(|_| (60 * 24).to_string())
            .parse()
            .map_err(|_| JwtError::ConfigurationError("Invalid token expiry".to_string()))?;

        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "site-backend".to_string());

        let audience = env::var("JWT_AUDIENCE").unwrap_or_else(|_| "site-admin".to_string());

        Ok(Self {
            secret_key,
            token_expiry_minutes,
            issuer,
            audience,
        })
    }

    /// 秘密鍵の検証
    pub fn validate(&self) -> Result<(), JwtError> {
        if self.secret_key.len() < 32 {
            return Err(JwtError::ConfigurationError(
                "JWT secret key must be at least 32 characters".to_string(),
            ));
        }

        if self.token_expiry_minutes <= 0 {
            return Err(JwtError::ConfigurationError(
                "Token expiry must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

/// JWTトークン管理
pub struct JwtManager {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtManager {
    /// 新しいJwtManagerを作成
    pub fn new(config: JwtConfig) -> Result<Self, JwtError> {
        config.validate()?;

        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// 管理者トークンを生成
    pub fn generate_admin_token(&self, email: &str) -> Result<String, JwtError> {
        let now = Utc::now();
        let exp = now + Duration::minutes(self.config.token_expiry_minutes);

        let claims = AdminTokenClaims {
            sub: email.to_string(),
            role: "admin".to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            nbf: now.timestamp(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(JwtError::EncodingError)
    }

    /// 管理者トークンを検証・デコード
    pub fn verify_admin_token(&self, token: &str) -> Result<AdminTokenClaims, JwtError> {
        let token_data = decode::<AdminTokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                _ => JwtError::DecodingError(e.to_string()),
            })?;

        // ロールの検証
        if token_data.claims.role != "admin" {
            return Err(JwtError::InvalidToken);
        }

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret_key: "test-secret-key-that-is-at-least-32-characters-long".to_string(),
            token_expiry_minutes: 60,
            issuer: "site-backend".to_string(),
            audience: "site-admin".to_string(),
        }
    }

    #[test]
    fn test_generate_and_verify_admin_token() {
        let manager = JwtManager::new(test_config()).unwrap();

        let token = manager.generate_admin_token("admin@example.com").unwrap();
        let claims = manager.verify_admin_token(&token).unwrap();

        assert_eq!(claims.sub, "admin@example.com");
        assert_eq!(claims.role, "admin");
    }

    #[test]
    fn test_verify_rejects_garbage_token() {
        let manager = JwtManager::new(test_config()).unwrap();

        assert!(manager.verify_admin_token("not-a-jwt").is_err());
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let manager = JwtManager::new(test_config()).unwrap();
        let other = JwtManager::new(JwtConfig {
            secret_key: "another-secret-key-that-is-also-32-chars!".to_string(),
            ..test_config()
        })
        .unwrap();

        let token = other.generate_admin_token("admin@example.com").unwrap();
        assert!(manager.verify_admin_token(&token).is_err());
    }

    #[test]
    fn test_short_secret_is_rejected() {
        let config = JwtConfig {
            secret_key: "too-short".to_string(),
            ..test_config()
        };
        assert!(JwtManager::new(config).is_err());
    }
}
