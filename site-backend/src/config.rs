// src/config.rs

use crate::utils::email::EmailConfig;
use crate::utils::jwt::JwtConfig;
use std::env;
use std::path::PathBuf;

/// 画像アップロードの設定
#[derive(Clone, Debug)]
pub struct UploadConfig {
    /// アップロードファイルの保存先ディレクトリ
    pub dir: PathBuf,
    /// リクエストボディの上限（バイト）
    pub max_size: usize,
}

impl UploadConfig {
    pub fn from_env() -> Self {
        let dir = env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string());
        let max_size = env::var("UPLOAD_MAX_SIZE_BYTES")
            .unwrap_or_else(|_| (10 * 1024 * 1024).to_string())
            .parse()
            .unwrap_or(10 * 1024 * 1024);

        Self {
            dir: PathBuf::from(dir),
            max_size,
        }
    }
}

/// 管理者アカウントの設定
///
/// 単一の管理者のみ。パスワードは argon2 のPHC文字列（ADMIN_PASSWORD_HASH）か、
/// 開発用の平文（ADMIN_PASSWORD、起動時にハッシュ化）のどちらかで与える。
#[derive(Clone, Debug)]
pub struct AdminConfig {
    pub email: String,
    pub password_hash: Option<String>,
    pub password: Option<String>,
}

impl AdminConfig {
    pub fn from_env() -> Result<Self, String> {
        let email = env::var("ADMIN_EMAIL").map_err(|_| "ADMIN_EMAIL must be set")?;
        let password_hash = env::var("ADMIN_PASSWORD_HASH").ok();
        let password = env::var("ADMIN_PASSWORD").ok();

        if password_hash.is_none() && password.is_none() {
            return Err("ADMIN_PASSWORD_HASH or ADMIN_PASSWORD must be set".to_string());
        }

        Ok(Self {
            email,
            password_hash,
            password,
        })
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub database_url: String,
    pub admin: AdminConfig,
    pub upload: UploadConfig,
    pub jwt: JwtConfig,
    pub email: EmailConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        Ok(Self {
            environment,
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .map_err(|_| "Invalid PORT value")?,
            cors_allowed_origins: env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:3000".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            database_url: env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?,
            admin: AdminConfig::from_env()?,
            upload: UploadConfig::from_env(),
            jwt: JwtConfig::from_env().map_err(|e| e.to_string())?,
            email: EmailConfig::from_env().map_err(|e| e.to_string())?,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// テスト用の設定を作成
    pub fn for_testing() -> Self {
        Self {
            environment: "test".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_allowed_origins: vec!["http://localhost:3000".to_string()],
            database_url: "sqlite::memory:".to_string(),
            admin: AdminConfig {
                email: "admin@example.com".to_string(),
                password_hash: None,
                password: Some("test-admin-password".to_string()),
            },
            upload: UploadConfig {
                dir: std::env::temp_dir().join("site-backend-test-uploads"),
                max_size: 10 * 1024 * 1024,
            },
            jwt: JwtConfig {
                secret_key: "test-secret-key-that-is-at-least-32-characters-long".to_string(),
                token_expiry_minutes: 60 * 24,
                issuer: "site-backend".to_string(),
                audience: "site-admin".to_string(),
            },
            email: EmailConfig {
                development_mode: true,
                ..Default::default()
            },
        }
    }
}

// Backward compatibility
pub type Config = AppConfig;
