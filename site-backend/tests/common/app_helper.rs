// tests/common/app_helper.rs

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use site_backend::config::AppConfig;
use site_backend::create_app;
use tempfile::TempDir;
use tower::ServiceExt;

/// テスト用に組み立てたアプリ一式
///
/// `_upload_dir` はDropでディレクトリごと消えるため保持しておく。
pub struct TestApp {
    pub app: Router,
    pub config: AppConfig,
    pub db: DatabaseConnection,
    pub _upload_dir: TempDir,
}

/// インメモリSQLite + マイグレーション適用済みのアプリをセットアップ
pub async fn setup_app() -> TestApp {
    crate::common::init_test_env();

    let upload_dir = tempfile::tempdir().expect("failed to create temp upload dir");

    let mut config = AppConfig::for_testing();
    config.upload.dir = upload_dir.path().to_path_buf();

    // インメモリSQLiteは接続ごとに別のDBになるので接続数を1に固定する
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(1);
    let db = Database::connect(opt)
        .await
        .expect("failed to connect to test database");

    Migrator::up(&db, None)
        .await
        .expect("failed to run migrations");

    let app = create_app(&config, db.clone()).expect("failed to create app");

    TestApp {
        app,
        config,
        db,
        _upload_dir: upload_dir,
    }
}

/// 管理者としてログインしてトークンを取得
pub async fn login_admin(test_app: &TestApp) -> String {
    let payload = serde_json::json!({
        "email": test_app.config.admin.email,
        "password": test_app.config.admin.password.as_deref().unwrap(),
    });

    let request = Request::builder()
        .method("POST")
        .uri("/api/admin/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();

    let response = test_app.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK, "admin login failed");

    let body = crate::common::request::response_json(response).await;
    body["token"]
        .as_str()
        .expect("login response missing token")
        .to_string()
}
