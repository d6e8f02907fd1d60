use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists() // テーブルが存在しない場合のみ作成
                    .col(
                        ColumnDef::new(Services::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Services::Title).text().not_null())
                    .col(ColumnDef::new(Services::Description).text().not_null())
                    .col(
                        // 画像参照は絶対URLまたはサーバ相対パス
                        ColumnDef::new(Services::Image).text().not_null(),
                    )
                    .col(
                        // 公開ページの表示順（昇順）
                        ColumnDef::new(Services::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Services::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Services::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Services::Table).to_owned())
            .await
    }
}

/// Iden Enum for the 'services' table and its columns
#[derive(DeriveIden)]
enum Services {
    Table,
    Id,
    Title,
    Description,
    Image,
    DisplayOrder,
    CreatedAt,
    UpdatedAt,
}
