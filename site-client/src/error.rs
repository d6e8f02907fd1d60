// src/error.rs

use thiserror::Error;

/// クライアント側のエラー
///
/// 表示文字列はサーバの `detail` を優先する。それ以上の分類はしない。
#[derive(Debug, Error)]
pub enum SiteClientError {
    /// サーバが返した detail メッセージ
    #[error("{0}")]
    Api(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Session storage error: {0}")]
    Session(#[from] std::io::Error),

    /// 対象コレクションのミューテーションが未決着のまま
    #[error("A {collection} request is already in flight")]
    MutationInFlight { collection: &'static str },

    /// セッショントークンが無い状態で管理操作を呼んだ
    #[error("No active session")]
    NoSession,

    #[error("Config error: {0}")]
    Config(String),
}

pub type ClientResult<T> = Result<T, SiteClientError>;
