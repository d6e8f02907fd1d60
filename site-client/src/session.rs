// src/session.rs

use crate::error::ClientResult;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// ディスク上のセッションJSONの形
#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionData {
    token: Option<String>,
    email: Option<String>,
}

/// セッショントークンの保管場所
///
/// トークンはJSONファイルに永続化する。ここ以外の場所からストレージを
/// 直接読むコードは存在しない。
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 保存済みトークンを返す
    ///
    /// ファイルが無い・壊れている・トークンがJWTの形をしていない場合はNone。
    pub fn current_token(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let data: SessionData = serde_json::from_str(&raw).ok()?;
        let token = data.token?;

        if looks_like_jwt(&token) {
            Some(token)
        } else {
            debug!("stored token does not look like a JWT, ignoring");
            None
        }
    }

    /// 保存済みの管理者メールアドレスを返す
    pub fn current_email(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let data: SessionData = serde_json::from_str(&raw).ok()?;
        data.email
    }

    pub fn set_session(&self, token: &str, email: &str) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let data = SessionData {
            token: Some(token.to_string()),
            email: Some(email.to_string()),
        };
        std::fs::write(&self.path, serde_json::to_string_pretty(&data)?)?;
        Ok(())
    }

    pub fn clear_session(&self) -> ClientResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// トークンがJWTの形（3セグメント、ペイロードがbase64urlのJSONオブジェクト）か
///
/// 署名の検証はしない。それはバックエンドの仕事。
fn looks_like_jwt(token: &str) -> bool {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return false;
    }

    let Ok(payload) = URL_SAFE_NO_PAD.decode(segments[1]) else {
        return false;
    };
    serde_json::from_slice::<serde_json::Map<String, serde_json::Value>>(&payload).is_ok()
}
