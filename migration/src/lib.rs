// migration/src/lib.rs
pub use sea_orm_migration::prelude::*;

// コンテンツテーブルのマイグレーション
mod m20250805_000001_create_services_table;
mod m20250805_000002_create_gallery_items_table;
mod m20250805_000003_create_contact_messages_table;
mod m20250805_000004_add_content_indexes;

// 初期コンテンツ投入マイグレーション
mod m20250806_000001_seed_default_content;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            // 1. 基本テーブル作成（依存関係なし）
            Box::new(m20250805_000001_create_services_table::Migration),
            Box::new(m20250805_000002_create_gallery_items_table::Migration),
            Box::new(m20250805_000003_create_contact_messages_table::Migration),
            // 2. 一覧取得用インデックス追加
            Box::new(m20250805_000004_add_content_indexes::Migration),
            // 3. 初期コンテンツ投入
            Box::new(m20250806_000001_seed_default_content::Migration),
        ]
    }
}
