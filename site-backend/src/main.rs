// src/main.rs

use migration::{Migrator, MigratorTrait};
use site_backend::config::AppConfig;
use site_backend::create_app;
use site_backend::db::create_db_pool;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .envがあれば読み込む（本番では環境変数を直接使う）
    dotenvy::dotenv().ok();

    // トレーシングの設定
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "site_backend=info,tower_http=info".into()),
        )
        .with(fmt::layer())
        .init();

    tracing::info!("Starting site backend server...");

    // 設定を読み込む
    let app_config = AppConfig::from_env()?;
    tracing::info!(
        environment = %app_config.environment,
        addr = %app_config.server_addr(),
        "Configuration loaded"
    );

    // データベース接続を作成
    let db_pool = create_db_pool(&app_config).await?;
    tracing::info!("Database pool created successfully.");

    // マイグレーションを適用（初期データ投入を含む）
    Migrator::up(&db_pool, None).await?;
    tracing::info!("Migrations applied.");

    // アップロードディレクトリを用意
    tokio::fs::create_dir_all(&app_config.upload.dir).await?;

    let app = create_app(&app_config, db_pool)?;

    let listener = TcpListener::bind(app_config.server_addr()).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
