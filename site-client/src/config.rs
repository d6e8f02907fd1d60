// src/config.rs

use crate::error::{ClientResult, SiteClientError};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// クライアント設定
///
/// テーマや文言はスコープ外。ここにあるのは接続先とチューニング値だけ。
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// バックエンドのオリジン（例: `http://localhost:8000`）
    pub backend_origin: String,
    /// 1リクエストあたりのタイムアウト
    pub request_timeout: Duration,
    /// 公開ページのポーリング間隔（鮮度の目安であって保証ではない）
    pub poll_interval: Duration,
    /// セッションJSONファイルの置き場所
    pub session_path: PathBuf,
}

impl ClientConfig {
    pub fn new(backend_origin: impl Into<String>) -> Self {
        Self {
            backend_origin: backend_origin.into().trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(30),
            poll_interval: Duration::from_secs(10),
            session_path: PathBuf::from("session.json"),
        }
    }

    pub fn from_env() -> ClientResult<Self> {
        let backend_origin =
            env::var("BACKEND_ORIGIN").unwrap_or_else(|_| "http://localhost:8000".to_string());

        let mut config = Self::new(backend_origin);

        if let Ok(timeout) = env::var("CLIENT_REQUEST_TIMEOUT_SECS") {
            let secs: u64 = timeout.parse().map_err(|_| {
                SiteClientError::Config("Invalid CLIENT_REQUEST_TIMEOUT_SECS value".to_string())
            })?;
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Ok(interval) = env::var("CLIENT_POLL_INTERVAL_SECS") {
            let secs: u64 = interval.parse().map_err(|_| {
                SiteClientError::Config("Invalid CLIENT_POLL_INTERVAL_SECS value".to_string())
            })?;
            config.poll_interval = Duration::from_secs(secs);
        }
        if let Ok(path) = env::var("SESSION_PATH") {
            config.session_path = PathBuf::from(path);
        }

        Ok(config)
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_session_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_path = path.into();
        self
    }
}
