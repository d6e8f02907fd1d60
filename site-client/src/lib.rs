// src/lib.rs

//! 会社サイトの公開ページ・管理ダッシュボードの型付きクライアント。
//!
//! `site-backend` のRESTサーフェスをそのまま写し取り、ページ側の観測可能な
//! 振る舞い（デフォルトコンテンツ、ポーリング、セッション、ミューテーション後の
//! 再取得）をUI非依存のロジックとして提供する。

pub mod admin;
pub mod api;
pub mod config;
pub mod error;
pub mod images;
pub mod public;
pub mod session;
pub mod types;

pub use admin::{AdminDashboard, OpenOutcome};
pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::{ClientResult, SiteClientError};
pub use images::resolve_image_url;
pub use public::{PollingHandle, PublicContent};
pub use session::SessionStore;
